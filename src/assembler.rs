//! Turns stored issues into the nested payloads the API returns.
//!
//! Every issue costs a handful of extra lookups (description, comment
//! count, milestone, author, labels). Struct field order is the JSON key
//! order clients see.

use diesel::SqliteConnection;
use serde::Serialize;

use crate::{
    db::repos::{
        comment::Comment,
        issue::Issue,
        label::{AssignedLabel, Label},
        milestone::Milestone,
        user::User,
    },
    error::AppError,
};

pub const DESCRIPTION_EXCERPT_LEN: usize = 50;
pub const BIO_EXCERPT_LEN: usize = 100;

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IssueView {
    pub issue_id: i32,
    pub created_date: String,
    pub closed_date: Option<String>,
    pub status: String,
    pub title: String,
    pub description: Option<String>,
    pub comment_count: i64,
    pub milestone: Option<String>,
    pub author: AuthorView,
    pub labels: Vec<IssueLabelView>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AuthorView {
    #[serde(rename = "authorId")]
    pub author_id: i32,
    #[serde(rename = "avatarURL")]
    pub avatar_url: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub org: Option<String>,
    #[serde(rename = "orgURL")]
    pub org_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct IssueLabelView {
    #[serde(rename = "labelId")]
    pub label_id: i32,
    pub title: String,
}

/// First `limit` characters of `text`.
pub fn excerpt(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}

pub fn assemble_issues(
    issues: &[Issue],
    db_connection: &mut SqliteConnection,
) -> Result<Vec<IssueView>, AppError> {
    issues
        .iter()
        .map(|issue| assemble_issue(issue, db_connection))
        .collect()
}

/// Fails when the author, the milestone or an assigned label no longer
/// exists.
pub fn assemble_issue(issue: &Issue, db_connection: &mut SqliteConnection) -> Result<IssueView, AppError> {
    let description = Comment::description_of(issue.id, issue.author_id, db_connection)?
        .map(|comment| excerpt(&comment.content, DESCRIPTION_EXCERPT_LEN));

    // the description itself is stored as a comment
    let comment_count = Comment::count_for_issue(issue.id, db_connection)? - 1;

    let milestone = match issue.milestone_id {
        Some(milestone_id) => Some(Milestone::find(milestone_id, db_connection)?.title),
        None => None,
    };

    let author = author_view(User::find(issue.author_id, db_connection)?);

    let labels = AssignedLabel::for_issue(issue.id, db_connection)?
        .into_iter()
        .map(|assigned| {
            Label::find(assigned.label_id, db_connection).map(|label| IssueLabelView {
                label_id: assigned.label_id,
                title: label.title,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(IssueView {
        issue_id: issue.id,
        created_date: issue.create_date.clone(),
        closed_date: issue.close_date.clone(),
        status: issue.status.clone(),
        title: issue.title.clone(),
        description,
        comment_count,
        milestone,
        author,
        labels,
    })
}

fn author_view(user: User) -> AuthorView {
    AuthorView {
        author_id: user.id,
        avatar_url: user.avatar_url,
        first_name: user.firstname,
        last_name: user.lastname,
        user_name: user.username,
        bio: user.bio.map(|bio| excerpt(&bio, BIO_EXCERPT_LEN)),
        location: user.location,
        org: user.org,
        org_url: user.org_url,
    }
}
