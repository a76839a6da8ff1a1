use crate::core::aggregate::{self, TOP_EARNER_LIMIT};
use crate::core::{Employee, EmployeeCreateRequest, EmployeeUpstream};

/// Caller-facing employee operations.
///
/// Every query fetches the full set from upstream and works on it in memory.
/// Upstream failures never escape: they are logged and turned into an empty
/// list or `None`.
pub struct EmployeeQueryService<U: EmployeeUpstream> {
    upstream: U,
}

impl<U: EmployeeUpstream> EmployeeQueryService<U> {
    pub fn new(upstream: U) -> Self {
        Self { upstream }
    }

    pub async fn list_all(&self) -> Vec<Employee> {
        match self.upstream.fetch_all().await {
            Ok(employees) => employees,
            Err(e) => {
                tracing::warn!("Failed to fetch employees from upstream: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn search_by_name(&self, fragment: &str) -> Vec<Employee> {
        tracing::info!("Searching employees by name fragment: {}", fragment);
        let result = aggregate::filter_by_name(self.list_all().await, fragment);
        tracing::info!("Found {} employees matching '{}'", result.len(), fragment);
        result
    }

    pub async fn get_by_id(&self, id: &str) -> Option<Employee> {
        tracing::info!("Searching for employee with ID: {}", id);
        let found = aggregate::find_by_id(self.list_all().await, id);
        match &found {
            Some(employee) => {
                tracing::info!("Employee found: {}", employee.name.as_deref().unwrap_or("<unnamed>"))
            }
            None => tracing::warn!("No employee found with ID: {}", id),
        }
        found
    }

    pub async fn highest_salary(&self) -> u64 {
        tracing::info!("Calculating highest salary among all employees");
        aggregate::max_salary(&self.list_all().await)
    }

    pub async fn top_ten_by_earning(&self) -> Vec<Option<String>> {
        tracing::info!("Fetching top {} highest earning employee names", TOP_EARNER_LIMIT);
        aggregate::top_earner_names(self.list_all().await, TOP_EARNER_LIMIT)
    }

    pub async fn create(&self, request: EmployeeCreateRequest) -> Option<Employee> {
        tracing::info!("Creating employee: {}", request.name);
        match self.upstream.create(&request).await {
            Ok(created) => {
                tracing::info!(
                    "Employee created successfully: {}",
                    created.name.as_deref().unwrap_or("<unnamed>")
                );
                Some(created)
            }
            Err(e) => {
                tracing::warn!("Failed to create employee {}: {}", request.name, e);
                None
            }
        }
    }

    /// Resolves `id` to a name, then asks upstream to delete by that name.
    ///
    /// The lookup and the delete are two separate upstream calls; a record
    /// removed in between makes the delete fail.
    pub async fn delete_by_id(&self, id: &str) -> Option<String> {
        tracing::info!("Deleting employee with ID: {}", id);

        let Some(name) = self.get_by_id(id).await.and_then(|e| e.name) else {
            tracing::warn!("No deletable employee found with ID: {}", id);
            return None;
        };

        match self.upstream.delete_by_name(&name).await {
            Ok(true) => {
                tracing::info!("Deleted employee: {}", name);
                Some(name)
            }
            Ok(false) => {
                tracing::warn!("Upstream refused to delete employee with ID {}", id);
                None
            }
            Err(e) => {
                tracing::warn!("Failed to delete employee with ID {}: {}", id, e);
                None
            }
        }
    }
}
