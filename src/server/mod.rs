mod handlers;

use std::{net::SocketAddr, sync::Arc};

use axum::{
    http::HeaderName,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::info;

use crate::core::query::EmployeeQueryService;
use crate::core::EmployeeUpstream;
use crate::utils::error::{GatewayError, Result};

const REQUEST_ID_HEADER: &str = "x-request-id";

pub struct AppState<U: EmployeeUpstream> {
    pub service: Arc<EmployeeQueryService<U>>,
}

// Manual impl: cloning the state must not require `U: Clone`.
impl<U: EmployeeUpstream> Clone for AppState<U> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
        }
    }
}

impl<U: EmployeeUpstream> AppState<U> {
    pub fn new(service: EmployeeQueryService<U>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

pub fn build_router<U: EmployeeUpstream + 'static>(state: AppState<U>) -> Router {
    let header_name = HeaderName::from_static(REQUEST_ID_HEADER);
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/employees",
            get(handlers::list_employees::<U>).post(handlers::create_employee::<U>),
        )
        .route("/employees/search", get(handlers::search_employees::<U>))
        .route("/employees/highestSalary", get(handlers::highest_salary::<U>))
        .route(
            "/employees/topTenHighestEarningEmployeeNames",
            get(handlers::top_ten_names::<U>),
        )
        .route(
            "/employees/{id}",
            get(handlers::get_employee::<U>).delete(handlers::delete_employee::<U>),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(header_name.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(header_name))
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}

pub async fn serve<U: EmployeeUpstream + 'static>(addr: SocketAddr, state: AppState<U>) -> Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| GatewayError::Server {
            message: format!("failed to bind {}: {}", addr, e),
        })?;

    info!(%addr, "employee gateway listening");
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| GatewayError::Server {
            message: format!("HTTP server error: {}", e),
        })?;

    info!("employee gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install CTRL+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    ctrl_c.await;

    #[cfg(unix)]
    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };

    info!("shutdown signal received");
}
