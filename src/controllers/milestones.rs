use axum::{extract::State, Json};
use serde::Serialize;

use super::{with_connection, AppState};
use crate::{db::repos::milestone::Milestone, error::AppError};

#[derive(Debug, Serialize)]
pub struct MilestoneSummary {
    pub id: i32,
    pub title: String,
}

pub async fn list_milestones(
    State(state): State<AppState>,
) -> Result<Json<Vec<MilestoneSummary>>, AppError> {
    let milestones = with_connection(&state.pool, |conn| Ok(Milestone::all(conn)?)).await?;

    Ok(Json(
        milestones
            .into_iter()
            .map(|milestone| MilestoneSummary {
                id: milestone.id,
                title: milestone.title,
            })
            .collect(),
    ))
}
