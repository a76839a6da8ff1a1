pub mod aggregate;
pub mod query;

pub use crate::domain::model::{Employee, EmployeeCreateRequest};
pub use crate::domain::ports::{ConfigProvider, EmployeeUpstream};
pub use crate::utils::error::Result;
