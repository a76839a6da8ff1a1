use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use super::AppState;
use crate::core::{Employee, EmployeeCreateRequest, EmployeeUpstream};

type HttpResult<T> = std::result::Result<T, StatusCode>;

#[derive(Debug, Deserialize)]
pub(super) struct SearchQuery {
    name: String,
}

pub(super) async fn health() -> &'static str {
    "ok"
}

pub(super) async fn list_employees<U: EmployeeUpstream + 'static>(
    State(state): State<AppState<U>>,
) -> Json<Vec<Employee>> {
    Json(state.service.list_all().await)
}

pub(super) async fn search_employees<U: EmployeeUpstream + 'static>(
    State(state): State<AppState<U>>,
    Query(query): Query<SearchQuery>,
) -> Json<Vec<Employee>> {
    Json(state.service.search_by_name(&query.name).await)
}

pub(super) async fn get_employee<U: EmployeeUpstream + 'static>(
    State(state): State<AppState<U>>,
    Path(id): Path<String>,
) -> HttpResult<Json<Employee>> {
    state
        .service
        .get_by_id(&id)
        .await
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

pub(super) async fn highest_salary<U: EmployeeUpstream + 'static>(
    State(state): State<AppState<U>>,
) -> Json<u64> {
    Json(state.service.highest_salary().await)
}

pub(super) async fn top_ten_names<U: EmployeeUpstream + 'static>(
    State(state): State<AppState<U>>,
) -> Json<Vec<Option<String>>> {
    Json(state.service.top_ten_by_earning().await)
}

pub(super) async fn create_employee<U: EmployeeUpstream + 'static>(
    State(state): State<AppState<U>>,
    Json(request): Json<EmployeeCreateRequest>,
) -> HttpResult<Json<Employee>> {
    state
        .service
        .create(request)
        .await
        .map(Json)
        .ok_or(StatusCode::BAD_REQUEST)
}

pub(super) async fn delete_employee<U: EmployeeUpstream + 'static>(
    State(state): State<AppState<U>>,
    Path(id): Path<String>,
) -> HttpResult<String> {
    state
        .service
        .delete_by_id(&id)
        .await
        .ok_or(StatusCode::NOT_FOUND)
}
