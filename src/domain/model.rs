use serde::{Deserialize, Deserializer, Serialize};

/// An employee record as returned by the upstream service.
///
/// Upstream names its fields `employee_*`; the plain names are accepted too.
/// `id` and `name` are optional so a malformed record can still be decoded
/// and skipped by the lookups that need them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(rename = "employee_name", alias = "name", default)]
    pub name: Option<String>,

    #[serde(
        rename = "employee_salary",
        alias = "salary",
        default,
        deserialize_with = "null_as_default"
    )]
    pub salary: u64,

    #[serde(
        rename = "employee_age",
        alias = "age",
        default,
        deserialize_with = "null_as_default"
    )]
    pub age: u32,

    #[serde(rename = "employee_title", alias = "title", default)]
    pub title: Option<String>,

    #[serde(rename = "employee_email", alias = "email", default)]
    pub email: Option<String>,
}

/// Upstream sends `null` for unknown numbers; read it as 0 like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeCreateRequest {
    pub name: String,
    pub salary: u64,
    pub age: u32,
    pub title: String,
}

/// Wrapper every upstream response body uses.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamEnvelope<T> {
    pub data: Option<T>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteEmployeeRequest<'a> {
    pub name: &'a str,
}
