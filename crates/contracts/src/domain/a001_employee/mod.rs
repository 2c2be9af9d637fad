pub mod aggregate;

pub use aggregate::{
    AdditionalMetric, CreateEmployeeRequest, Employee, EmployeeId, ProductCategory, ProductItem,
    ProductTable,
};
