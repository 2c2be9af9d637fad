pub mod dto;

pub use dto::{ChartRow, EmployeeDetails, RatingBucket, SalesPerformanceResponse, SalesStats};
