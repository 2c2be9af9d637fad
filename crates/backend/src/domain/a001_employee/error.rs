use contracts::domain::a001_employee::EmployeeId;
use thiserror::Error;

/// Ошибки добавления и изменения сотрудников
#[derive(Debug, Error, PartialEq)]
pub enum EmployeeError {
    #[error("employee name is empty")]
    EmptyName,

    #[error("{0} is empty")]
    EmptyField(&'static str),

    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} must not be negative: {value}")]
    NegativeValue { field: &'static str, value: f64 },

    #[error("employee not found: {0}")]
    NotFound(EmployeeId),
}
