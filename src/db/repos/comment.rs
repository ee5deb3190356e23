use crate::db;
use db::schema::comments;

use diesel::{
    insert_into,
    Insertable,
    Queryable,
    ExpressionMethods,
    OptionalExtension,
    QueryDsl,
    QueryResult,
    RunQueryDsl,
    SqliteConnection,
};

#[derive(Debug, Clone, Queryable, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub create_date: String,
    pub content: String,
    pub author_id: i32,
    pub issue_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = comments)]
pub struct NewComment<'a> {
    pub create_date: &'a str,
    pub content: &'a str,
    pub author_id: i32,
    pub issue_id: i32,
}

impl Comment {
    pub fn all(db_connection: &mut SqliteConnection) -> QueryResult<Vec<Comment>> {
        comments::table
            .order(comments::id.asc())
            .load::<Comment>(db_connection)
    }

    /// The issue's description: its lowest-id comment written by the issue author.
    pub fn description_of(
        issue_id: i32,
        author_id: i32,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<Option<Comment>> {
        comments::table
            .filter(comments::issue_id.eq(issue_id))
            .filter(comments::author_id.eq(author_id))
            .order(comments::id.asc())
            .first::<Comment>(db_connection)
            .optional()
    }

    pub fn count_for_issue(issue_id: i32, db_connection: &mut SqliteConnection) -> QueryResult<i64> {
        comments::table
            .filter(comments::issue_id.eq(issue_id))
            .count()
            .get_result(db_connection)
    }
}

pub trait CreateComment {
    fn create(
        new_comment: NewComment<'_>,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<Comment>;
}

impl CreateComment for Comment {
    fn create(
        new_comment: NewComment<'_>,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<Comment> {
        insert_into(comments::table)
            .values(&new_comment)
            .get_result::<Comment>(db_connection)
    }
}
