use axum::{ Json, http::StatusCode };
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthData {
    service: &'static str,
    status: u16,
}

pub async fn health() -> Json<HealthData> {
    Json(HealthData {
        service: "todo-api",
        status: StatusCode::OK.as_u16(),
    })
}
