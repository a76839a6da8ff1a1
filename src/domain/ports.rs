use crate::domain::model::{Employee, EmployeeCreateRequest};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::net::SocketAddr;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn upstream_endpoint(&self) -> &str;
    fn listen_addr(&self) -> Result<SocketAddr>;
    fn request_timeout(&self) -> Option<Duration>;
}

/// Capabilities the query service needs from the employee-records service.
///
/// Implementations report failures as `Err`; deciding what a failure means
/// for the caller is left to the service.
#[async_trait]
pub trait EmployeeUpstream: Send + Sync {
    /// Every employee upstream knows about, in upstream order. A missing or
    /// null `data` field is an empty list, not an error.
    async fn fetch_all(&self) -> Result<Vec<Employee>>;

    async fn create(&self, request: &EmployeeCreateRequest) -> Result<Employee>;

    /// Upstream deletes by name. `Ok(true)` only when it answered `data: true`.
    async fn delete_by_name(&self, name: &str) -> Result<bool>;
}
