pub mod appointment;
pub mod audit_record;
pub mod company;
pub mod customer;
pub mod user;

pub use appointment::Appointment;
pub use audit_record::AuditRecord;
pub use company::Company;
pub use customer::Customer;
pub use user::User;
