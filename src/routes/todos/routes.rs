use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::{CreateTodoRequest, DeleteTodoRequest, UpdateTodoRequest};
use crate::state::AppState;
use crate::store::TodoChanges;
use crate::validation;

// HANDLERS
//
// Every handler follows the same shape: validate, call the store, map the
// outcome to an enveloped JSON response. Store failures are logged with
// their full detail and surface to the client as a generic message only.

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateTodoRequest>,
) -> impl IntoResponse {
    let input = match validation::create_todo(&body) {
        Ok(input) => input,
        Err(issues) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Invalid input", "errors": issues })),
            )
                .into_response();
        }
    };

    match state.store.create(input.title, input.description).await {
        Ok(todo) => (
            StatusCode::CREATED,
            Json(json!({ "msg": "Todo created", "data": todo })),
        )
            .into_response(),
        Err(e) => {
            eprintln!("Error creating todo: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "msg": "Database error" })),
            )
                .into_response()
        }
    }
}

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    match state.store.find().await {
        Ok(todos) => (StatusCode::OK, Json(json!({ "todos": todos }))).into_response(),
        Err(e) => {
            eprintln!("Error listing todos: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "msg": "Database error" })),
            )
                .into_response()
        }
    }
}

pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    let id = match validation::parse_id(&id) {
        Some(id) => id,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "msg": "Invalid Id format" })),
            )
                .into_response();
        }
    };

    match state.store.find_by_id(id).await {
        Ok(Some(todo)) => (
            StatusCode::OK,
            Json(json!({ "success": true, "msg": "Todo Found", "todo1": todo })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "msg": "Todo not found" })),
        )
            .into_response(),
        Err(e) => {
            eprintln!("Error fetching todo: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "msg": "Server Error" })),
            )
                .into_response()
        }
    }
}

pub async fn mark_completed(
    State(state): State<AppState>,
    Json(body): Json<UpdateTodoRequest>,
) -> impl IntoResponse {
    let input = match validation::update_todo(&body) {
        Ok(input) => input,
        Err(issues) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "msg": "Invalid input", "errors": issues })),
            )
                .into_response();
        }
    };

    let changes = TodoChanges {
        title: input.title,
        description: input.description,
        completed: true,
    };

    match state.store.find_by_id_and_update(input.id, changes).await {
        Ok(Some(todo)) => (
            StatusCode::OK,
            Json(json!({ "msg": "Todo marked successfully", "data": todo })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "msg": "Todo not found" })),
        )
            .into_response(),
        Err(e) => {
            eprintln!("Error updating todo: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "msg": "Database error" })),
            )
                .into_response()
        }
    }
}

pub async fn delete(
    State(state): State<AppState>,
    Json(body): Json<DeleteTodoRequest>,
) -> impl IntoResponse {
    let id = match validation::delete_todo(&body) {
        Ok(id) => id,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "msg": "Invalid Id format" })),
            )
                .into_response();
        }
    };

    match state.store.find_by_id_and_delete(id).await {
        Ok(Some(_)) => (
            StatusCode::OK,
            Json(json!({ "success": true, "msg": "Todo deleted" })),
        )
            .into_response(),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "success": false, "msg": "Todo not found" })),
        )
            .into_response(),
        Err(e) => {
            eprintln!("Error deleting todo: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "msg": "Database error" })),
            )
                .into_response()
        }
    }
}
