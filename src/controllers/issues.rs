use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Form,
    Json,
};
use chrono::Local;
use diesel::SqliteConnection;
use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{with_connection, AppState};
use crate::{
    assembler::{assemble_issue, assemble_issues, IssueView},
    db::repos::{
        comment::{Comment, CreateComment, NewComment},
        issue::{CreateIssue, DeleteIssue, Issue, IssueFilter, NewIssue, DEFAULT_STATUS},
        label::{AssignLabel, AssignedLabel, NewAssignedLabel},
    },
    error::{AppError, MessageResponse},
};

const CREATED_DATE_FORMAT: &str = "%m/%d/%Y";

#[derive(Debug, Default, Deserialize)]
pub struct IssueQuery {
    pub label: Option<String>,
    pub status: Option<String>,
}

/// Form posted by the "new issue" page. Selections arrive as strings and
/// may be empty.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIssueForm {
    pub user_selection: i32,
    pub title: String,
    #[serde(default)]
    pub milestone_selection: Option<String>,
    pub description: String,
    #[serde(default)]
    pub labels_selection: Option<String>,
}

/// Outcome of the creation steps, reported as one joined message.
#[derive(Debug, PartialEq, Eq)]
pub struct CreationReport {
    pub status: StatusCode,
    pub messages: Vec<&'static str>,
}

impl CreationReport {
    fn new() -> Self {
        Self {
            status: StatusCode::OK,
            messages: Vec::new(),
        }
    }

    fn succeeded(&mut self, message: &'static str) {
        self.messages.push(message);
    }

    fn failed(&mut self, message: &'static str) {
        self.messages.push(message);
        self.status = StatusCode::INTERNAL_SERVER_ERROR;
    }

    pub fn message(&self) -> String {
        self.messages.join(", ")
    }
}

pub async fn list_issues(
    State(state): State<AppState>,
    Query(query): Query<IssueQuery>,
) -> Result<Json<Vec<IssueView>>, AppError> {
    let filter = IssueFilter::from_params(query.label.as_deref(), query.status.as_deref());
    debug!(?filter, "listing issues");

    let views = with_connection(&state.pool, move |conn| {
        let issues = Issue::search(&filter, conn)?;
        assemble_issues(&issues, conn)
    })
    .await?;

    Ok(Json(views))
}

/// Always answers with an array: one element when found, empty otherwise.
pub async fn get_issue(
    State(state): State<AppState>,
    Path(issue_id): Path<String>,
) -> Result<Json<Vec<IssueView>>, AppError> {
    let Ok(issue_id) = issue_id.trim().parse::<i32>() else {
        return Ok(Json(Vec::new()));
    };

    let views = with_connection(&state.pool, move |conn| {
        match Issue::find(issue_id, conn)? {
            Some(issue) => Ok(vec![assemble_issue(&issue, conn)?]),
            None => Ok(Vec::new()),
        }
    })
    .await?;

    Ok(Json(views))
}

pub async fn create_issue(
    State(state): State<AppState>,
    Form(form): Form<NewIssueForm>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let report = with_connection(&state.pool, move |conn| Ok(open_issue(&form, conn))).await?;
    info!(status = %report.status, message = %report.message(), "issue creation finished");

    Ok((
        report.status,
        Json(MessageResponse {
            message: report.message(),
        }),
    ))
}

/// Inserts the issue, its description comment and the optional label
/// assignment one after another. A failed step does not undo earlier ones.
pub fn open_issue(form: &NewIssueForm, db_connection: &mut SqliteConnection) -> CreationReport {
    let mut report = CreationReport::new();
    let created_date = Local::now().format(CREATED_DATE_FORMAT).to_string();

    let new_issue = NewIssue {
        create_date: &created_date,
        title: &form.title,
        status: DEFAULT_STATUS,
        author_id: form.user_selection,
        milestone_id: parse_selection(form.milestone_selection.as_deref()),
    };

    let issue = match Issue::create(new_issue, db_connection) {
        Ok(issue) => issue,
        Err(err) => {
            warn!(error = %err, "issue insert failed");
            report.failed("Issue was not created");
            return report;
        }
    };
    report.succeeded("Issue was created");

    let new_comment = NewComment {
        create_date: &created_date,
        content: &form.description,
        author_id: form.user_selection,
        issue_id: issue.id,
    };

    match Comment::create(new_comment, db_connection) {
        Ok(_) => report.succeeded("Comment was created"),
        Err(err) => {
            warn!(issue_id = issue.id, error = %err, "description comment insert failed");
            report.failed("Comment was not created");
        }
    }

    let labels_selection = form
        .labels_selection
        .as_deref()
        .filter(|selection| !selection.is_empty());

    if let Some(selection) = labels_selection {
        let assigned = match parse_selection(Some(selection)) {
            Some(label_id) => AssignedLabel::create(
                NewAssignedLabel {
                    label_id,
                    issue_id: issue.id,
                },
                db_connection,
            )
            .map_err(|err| err.to_string()),
            None => Err(format!("label selection {selection:?} is not an id")),
        };

        match assigned {
            Ok(_) => report.succeeded("Label assignment was created"),
            Err(err) => {
                warn!(issue_id = issue.id, error = %err, "label assignment failed");
                report.failed("Label assignment was not created");
            }
        }
    }

    report
}

pub async fn delete_issue(
    State(state): State<AppState>,
    Path(issue_id): Path<i32>,
) -> (StatusCode, Json<MessageResponse>) {
    let outcome = with_connection(&state.pool, move |conn| Ok(Issue::delete(issue_id, conn)?)).await;
    let (status, message) = deletion_response(issue_id, outcome);

    (status, Json(MessageResponse { message }))
}

/// Any failure, including a pool checkout, is reported with the same prose.
fn deletion_response(issue_id: i32, outcome: Result<usize, AppError>) -> (StatusCode, String) {
    match outcome {
        Ok(removed) => {
            info!(issue_id, removed, "issue deleted");
            (
                StatusCode::OK,
                format!("successfully deleted Issue{issue_id}"),
            )
        }
        Err(err) => {
            warn!(issue_id, error = %err, "issue delete rolled back");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Issue {issue_id} was not deleted"),
            )
        }
    }
}

fn parse_selection(selection: Option<&str>) -> Option<i32> {
    selection.and_then(|value| value.trim().parse().ok())
}
