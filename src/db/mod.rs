pub mod appointments;
pub mod audit;
pub mod companies;
pub mod customers;
pub mod users;
