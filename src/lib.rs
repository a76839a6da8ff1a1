pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use adapters::HttpEmployeeClient;
pub use core::query::EmployeeQueryService;
pub use domain::model::{Employee, EmployeeCreateRequest};
pub use domain::ports::{ConfigProvider, EmployeeUpstream};
pub use server::{build_router, AppState};
pub use utils::error::{GatewayError, Result};
