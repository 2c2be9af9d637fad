pub mod error;
pub mod repository;
pub mod service;

pub use error::EmployeeError;
pub use repository::EmployeeRoster;
