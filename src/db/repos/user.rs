use crate::db;
use db::schema::users;

use diesel::{
    ExpressionMethods,
    Insertable,
    Queryable,
    QueryDsl,
    QueryResult,
    RunQueryDsl,
    SqliteConnection,
};

#[derive(Debug, Clone, Queryable, PartialEq)]
pub struct User {
    pub id: i32,
    pub firstname: String,
    pub lastname: String,
    pub username: String,
    pub avatar_url: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub org: Option<String>,
    pub org_url: Option<String>,
}

/// Users are provisioned out of band; this exists for seeding.
/// `avatar_url: None` keeps the column default.
#[derive(Insertable, Default)]
#[diesel(table_name = users)]
pub struct NewUser<'a> {
    pub firstname: &'a str,
    pub lastname: &'a str,
    pub username: &'a str,
    pub avatar_url: Option<&'a str>,
    pub location: Option<&'a str>,
    pub bio: Option<&'a str>,
    pub org: Option<&'a str>,
    pub org_url: Option<&'a str>,
}

impl User {
    /// Errors with `NotFound` when the id is dangling.
    pub fn find(user_id: i32, db_connection: &mut SqliteConnection) -> QueryResult<User> {
        users::table.find(user_id).first::<User>(db_connection)
    }

    pub fn all(db_connection: &mut SqliteConnection) -> QueryResult<Vec<User>> {
        users::table.order(users::id.asc()).load::<User>(db_connection)
    }
}
