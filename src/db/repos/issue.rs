use crate::db;
use db::schema::{assigned_labels, comments, issues};

use diesel::{
    delete,
    insert_into,
    Insertable,
    Queryable,
    Connection,
    ExpressionMethods,
    OptionalExtension,
    QueryDsl,
    QueryResult,
    RunQueryDsl,
    SqliteConnection,
};

pub const DEFAULT_STATUS: &str = "Open";

#[derive(Debug, Clone, Queryable, PartialEq)]
pub struct Issue {
    pub id: i32,
    pub create_date: String,
    pub close_date: Option<String>,
    pub title: String,
    pub status: String,
    pub author_id: i32,
    pub milestone_id: Option<i32>,
}

#[derive(Insertable)]
#[diesel(table_name = issues)]
pub struct NewIssue<'a> {
    pub create_date: &'a str,
    pub title: &'a str,
    pub status: &'a str,
    pub author_id: i32,
    pub milestone_id: Option<i32>,
}

/// Which issues a listing request selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssueFilter {
    /// Issues carrying the given label id. `None` when the caller sent an
    /// id that can never match (not an integer).
    Label(Option<i32>),
    /// Issues whose status equals the value with its first letter upper-cased.
    Status(String),
    All,
}

impl IssueFilter {
    /// A non-empty `label` wins over `status`; empty values count as absent.
    pub fn from_params(label: Option<&str>, status: Option<&str>) -> Self {
        if let Some(label) = label.filter(|value| !value.is_empty()) {
            return Self::Label(label.trim().parse().ok());
        }

        match status.filter(|value| !value.is_empty()) {
            Some(status) => Self::Status(capitalize_first(status)),
            None => Self::All,
        }
    }
}

/// Upper-cases the first character only: "open" -> "Open", "OPEN" stays "OPEN".
pub fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl Issue {
    pub fn find(issue_id: i32, db_connection: &mut SqliteConnection) -> QueryResult<Option<Issue>> {
        issues::table
            .find(issue_id)
            .first::<Issue>(db_connection)
            .optional()
    }

    pub fn search(filter: &IssueFilter, db_connection: &mut SqliteConnection) -> QueryResult<Vec<Issue>> {
        match filter {
            IssueFilter::Label(None) => Ok(Vec::new()),
            IssueFilter::Label(Some(label_id)) => issues::table
                .inner_join(assigned_labels::table)
                .filter(assigned_labels::label_id.eq(*label_id))
                .select(issues::all_columns)
                .load::<Issue>(db_connection),
            IssueFilter::Status(status) => issues::table
                .filter(issues::status.eq(status.as_str()))
                .load::<Issue>(db_connection),
            IssueFilter::All => issues::table.load::<Issue>(db_connection),
        }
    }
}

pub trait CreateIssue {
    fn create(
        new_issue: NewIssue<'_>,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<Issue>;
}

impl CreateIssue for Issue {
    fn create(
        new_issue: NewIssue<'_>,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<Issue> {
        insert_into(issues::table)
            .values(&new_issue)
            .get_result::<Issue>(db_connection)
    }
}

pub trait DeleteIssue {
    /// Removes the issue together with its comments and label assignments.
    /// Returns how many issue rows went away; zero is not an error.
    fn delete(
        issue_id: i32,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<usize>;
}

impl DeleteIssue for Issue {
    fn delete(
        issue_id: i32,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<usize> {
        db_connection.transaction(|conn| {
            // dependents first, so the order holds even with foreign keys enforced
            delete(comments::table.filter(comments::issue_id.eq(issue_id))).execute(conn)?;
            delete(assigned_labels::table.filter(assigned_labels::issue_id.eq(issue_id))).execute(conn)?;
            delete(issues::table.filter(issues::id.eq(issue_id))).execute(conn)
        })
    }
}
