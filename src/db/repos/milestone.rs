use crate::db;
use db::schema::milestones;

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
pub struct Milestone {
    pub id: i32,
    pub title: String,
}

#[derive(Insertable)]
#[diesel(table_name = milestones)]
pub struct NewMilestone<'a> {
    pub title: &'a str,
}

impl Milestone {
    pub fn find(milestone_id: i32, db_connection: &mut SqliteConnection) -> QueryResult<Milestone> {
        milestones::table.find(milestone_id).first::<Milestone>(db_connection)
    }

    pub fn all(db_connection: &mut SqliteConnection) -> QueryResult<Vec<Milestone>> {
        milestones::table
            .order(milestones::id.asc())
            .load::<Milestone>(db_connection)
    }
}
