pub mod comments;
pub mod issues;
pub mod labels;
pub mod milestones;
pub mod users;

use axum::{
    routing::{get, post},
    Router,
};
use diesel::SqliteConnection;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::{db::connection::SqlitePool, error::AppError};

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/issues", get(issues::list_issues))
        .route("/issues/", get(issues::list_issues))
        .route("/issues/:issue_id", get(issues::get_issue))
        .route("/issues/new/", post(issues::create_issue))
        .route("/issues/delete/:issue_id", post(issues::delete_issue))
        .route("/users/", get(users::list_users))
        .route("/comments/", get(comments::list_comment_excerpts))
        .route("/labels/", get(labels::list_labels))
        .route("/assignedlabels/", get(labels::list_assigned_label_ids))
        .route("/milestones/", get(milestones::list_milestones))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
}

/// Runs blocking diesel work on a pooled connection off the async runtime.
pub(crate) async fn with_connection<T, F>(pool: &SqlitePool, work: F) -> Result<T, AppError>
where
    F: FnOnce(&mut SqliteConnection) -> Result<T, AppError> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut db_connection = pool.get()?;
        work(&mut db_connection)
    })
    .await?
}
