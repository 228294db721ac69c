use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};
use serde_json::{json, Value};
use users::{NewUser, UserPatch};

fn user_id(path: Result<Path<u64>, PathRejection>) -> Result<u64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|_| AppError::NotFound("The requested resource was not found".to_string()))
}

fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(value)| value)
        .map_err(|rejection| {
            tracing::debug!("Rejected user payload: {}", rejection.body_text());
            AppError::BadRequest("The request was invalid".to_string())
        })
}

pub async fn list_users(State(state): State<SharedState>) -> Json<Value> {
    let users = state.users.list().await;
    Json(json!({
        "status": "success",
        "count": users.len(),
        "data": users,
    }))
}

pub async fn get_user(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let user = state.users.get(user_id(path)?).await?;
    Ok(Json(json!({ "status": "success", "data": user })))
}

pub async fn create_user(
    State(state): State<SharedState>,
    payload: Result<Json<NewUser>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let user = state.users.create(body(payload)?).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({
            "status": "success",
            "message": "User created successfully",
            "data": user,
        })),
    ))
}

pub async fn update_user(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
    payload: Result<Json<UserPatch>, JsonRejection>,
) -> Result<Json<Value>, AppError> {
    let id = user_id(path)?;
    let user = state.users.update(id, body(payload)?).await?;
    Ok(Json(json!({
        "status": "success",
        "message": "User updated successfully",
        "data": user,
    })))
}

pub async fn delete_user(
    State(state): State<SharedState>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<Value>, AppError> {
    let id = user_id(path)?;
    state.users.delete(id).await?;
    Ok(Json(json!({
        "status": "success",
        "message": format!("User {} deleted successfully", id),
    })))
}
