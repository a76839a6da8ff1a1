use crate::domain::model::{DeleteEmployeeRequest, Employee, EmployeeCreateRequest, UpstreamEnvelope};
use crate::domain::ports::{ConfigProvider, EmployeeUpstream};
use crate::utils::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};

/// reqwest-backed client for the upstream `/employee` collection.
#[derive(Debug, Clone)]
pub struct HttpEmployeeClient {
    client: Client,
    endpoint: String,
}

impl HttpEmployeeClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.upstream_endpoint().to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn ensure_success(response: &Response, operation: &'static str) -> Result<()> {
        let status = response.status();
        tracing::debug!("Upstream {} responded with {}", operation, status);
        if status.is_success() {
            Ok(())
        } else {
            Err(GatewayError::UpstreamStatus {
                operation,
                status: status.as_u16(),
            })
        }
    }

    async fn read_envelope<T>(response: Response) -> Result<UpstreamEnvelope<T>>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = response.bytes().await?;
        if body.is_empty() {
            return Ok(UpstreamEnvelope {
                data: None,
                status: None,
            });
        }
        Ok(serde_json::from_slice(&body)?)
    }
}

#[async_trait]
impl EmployeeUpstream for HttpEmployeeClient {
    async fn fetch_all(&self) -> Result<Vec<Employee>> {
        tracing::info!("Calling upstream employee API: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;
        Self::ensure_success(&response, "list")?;

        let envelope: UpstreamEnvelope<Vec<Employee>> = Self::read_envelope(response).await?;
        match envelope.data {
            Some(employees) => {
                tracing::info!("Received {} employees", employees.len());
                Ok(employees)
            }
            None => {
                tracing::warn!("Upstream returned no employee data");
                Ok(Vec::new())
            }
        }
    }

    async fn create(&self, request: &EmployeeCreateRequest) -> Result<Employee> {
        tracing::debug!("POST {} for {}", self.endpoint, request.name);
        let response = self.client.post(&self.endpoint).json(request).send().await?;
        Self::ensure_success(&response, "create")?;

        let envelope: UpstreamEnvelope<Employee> = Self::read_envelope(response).await?;
        envelope.data.ok_or_else(|| GatewayError::UpstreamPayload {
            message: format!(
                "create returned no data (status: {})",
                envelope.status.as_deref().unwrap_or("unknown")
            ),
        })
    }

    async fn delete_by_name(&self, name: &str) -> Result<bool> {
        tracing::debug!("DELETE {} for {}", self.endpoint, name);
        let response = self
            .client
            .delete(&self.endpoint)
            .json(&DeleteEmployeeRequest { name })
            .send()
            .await?;
        Self::ensure_success(&response, "delete")?;

        let envelope: UpstreamEnvelope<serde_json::Value> = Self::read_envelope(response).await?;
        Ok(matches!(envelope.data, Some(serde_json::Value::Bool(true))))
    }
}
