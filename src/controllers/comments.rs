use axum::extract::State;

use super::{with_connection, AppState};
use crate::{assembler::excerpt, db::repos::comment::Comment, error::AppError};

pub const COMMENT_EXCERPT_LEN: usize = 30;

/// Plain text: the opening of every comment, separated by single spaces.
pub async fn list_comment_excerpts(State(state): State<AppState>) -> Result<String, AppError> {
    let comments = with_connection(&state.pool, |conn| Ok(Comment::all(conn)?)).await?;

    Ok(comments
        .iter()
        .map(|comment| excerpt(&comment.content, COMMENT_EXCERPT_LEN))
        .collect::<Vec<_>>()
        .join(" "))
}
