use diesel::{connection::SimpleConnection, QueryResult, SqliteConnection};

/// DDL applied to every fresh connection. Column lengths are advisory,
/// SQLite does not enforce them.
pub const SCHEMA_SQL: &str = r"
    CREATE TABLE IF NOT EXISTS users (
        id INTEGER PRIMARY KEY,
        firstname VARCHAR(30) NOT NULL,
        lastname VARCHAR(30) NOT NULL,
        username VARCHAR(30) NOT NULL UNIQUE,
        avatar_url VARCHAR(100) NOT NULL
            DEFAULT 'https://avatars0.githubusercontent.com/u/30222736?s=400&v=4',
        location VARCHAR(50),
        bio VARCHAR(150),
        org VARCHAR(50),
        org_url VARCHAR(100)
    );

    CREATE TABLE IF NOT EXISTS milestones (
        id INTEGER PRIMARY KEY,
        title VARCHAR(50) NOT NULL
    );

    CREATE TABLE IF NOT EXISTS labels (
        id INTEGER PRIMARY KEY,
        title VARCHAR(50) NOT NULL
    );

    CREATE TABLE IF NOT EXISTS issues (
        id INTEGER PRIMARY KEY,
        create_date VARCHAR NOT NULL,
        close_date VARCHAR,
        title VARCHAR(250) NOT NULL,
        status VARCHAR NOT NULL,
        author_id INTEGER NOT NULL REFERENCES users(id),
        milestone_id INTEGER REFERENCES milestones(id)
    );
    CREATE INDEX IF NOT EXISTS idx_issues_status ON issues(status);

    CREATE TABLE IF NOT EXISTS comments (
        id INTEGER PRIMARY KEY,
        create_date VARCHAR NOT NULL,
        content TEXT NOT NULL,
        author_id INTEGER NOT NULL REFERENCES users(id),
        issue_id INTEGER NOT NULL REFERENCES issues(id)
    );
    CREATE INDEX IF NOT EXISTS idx_comments_issue_id ON comments(issue_id);

    CREATE TABLE IF NOT EXISTS assigned_labels (
        id INTEGER PRIMARY KEY,
        label_id INTEGER NOT NULL REFERENCES labels(id),
        issue_id INTEGER NOT NULL REFERENCES issues(id)
    );
    CREATE INDEX IF NOT EXISTS idx_assigned_labels_issue_id ON assigned_labels(issue_id);
    CREATE INDEX IF NOT EXISTS idx_assigned_labels_label_id ON assigned_labels(label_id);
";

/// diesel switches foreign key enforcement on for every new sqlite
/// connection. References here are stored as given and only checked when
/// an issue is assembled, so enforcement is turned back off.
pub fn apply_pragmas(conn: &mut SqliteConnection, busy_timeout_ms: u64) -> QueryResult<()> {
    conn.batch_execute(&format!(
        "PRAGMA foreign_keys = OFF; PRAGMA busy_timeout = {busy_timeout_ms};"
    ))
}

pub fn apply_schema(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.batch_execute(SCHEMA_SQL)
}
