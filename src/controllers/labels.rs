use axum::{extract::State, Json};
use serde::Serialize;

use super::{with_connection, AppState};
use crate::{
    db::repos::label::{AssignedLabel, Label},
    error::AppError,
};

#[derive(Debug, Serialize)]
pub struct LabelSummary {
    pub id: i32,
    pub title: String,
}

pub async fn list_labels(State(state): State<AppState>) -> Result<Json<Vec<LabelSummary>>, AppError> {
    let labels = with_connection(&state.pool, |conn| Ok(Label::all(conn)?)).await?;

    Ok(Json(
        labels
            .into_iter()
            .map(|label| LabelSummary {
                id: label.id,
                title: label.title,
            })
            .collect(),
    ))
}

/// Plain-text dump of every assignment's label id.
pub async fn list_assigned_label_ids(State(state): State<AppState>) -> Result<String, AppError> {
    let assigned = with_connection(&state.pool, |conn| Ok(AssignedLabel::all(conn)?)).await?;
    let label_ids: Vec<i32> = assigned.iter().map(|assignment| assignment.label_id).collect();

    Ok(spaced_id_listing(&label_ids))
}

/// Renders the ids as `[1, 3]` and puts a space between every character
/// of that rendering, which is the format existing clients parse.
pub fn spaced_id_listing(label_ids: &[i32]) -> String {
    let rendered = format!(
        "[{}]",
        label_ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    rendered
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ")
}
