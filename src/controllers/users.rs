use axum::{extract::State, Json};
use serde::Serialize;

use super::{with_connection, AppState};
use crate::{db::repos::user::User, error::AppError};

#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: i32,
    pub username: String,
}

pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserSummary>>, AppError> {
    let users = with_connection(&state.pool, |conn| Ok(User::all(conn)?)).await?;

    Ok(Json(
        users
            .into_iter()
            .map(|user| UserSummary {
                id: user.id,
                username: user.username,
            })
            .collect(),
    ))
}
