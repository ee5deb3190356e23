use crate::db;
use db::schema::{assigned_labels, labels};

use diesel::{
    insert_into,
    Insertable,
    Queryable,
    ExpressionMethods,
    QueryDsl,
    QueryResult,
    RunQueryDsl,
    SqliteConnection,
};

#[derive(Debug, Clone, Queryable, PartialEq)]
pub struct Label {
    pub id: i32,
    pub title: String,
}

#[derive(Insertable)]
#[diesel(table_name = labels)]
pub struct NewLabel<'a> {
    pub title: &'a str,
}

#[derive(Debug, Clone, Queryable, PartialEq)]
pub struct AssignedLabel {
    pub id: i32,
    pub label_id: i32,
    pub issue_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = assigned_labels)]
pub struct NewAssignedLabel {
    pub label_id: i32,
    pub issue_id: i32,
}

impl Label {
    pub fn find(label_id: i32, db_connection: &mut SqliteConnection) -> QueryResult<Label> {
        labels::table.find(label_id).first::<Label>(db_connection)
    }

    pub fn all(db_connection: &mut SqliteConnection) -> QueryResult<Vec<Label>> {
        labels::table.order(labels::id.asc()).load::<Label>(db_connection)
    }
}

impl AssignedLabel {
    pub fn all(db_connection: &mut SqliteConnection) -> QueryResult<Vec<AssignedLabel>> {
        assigned_labels::table
            .order(assigned_labels::id.asc())
            .load::<AssignedLabel>(db_connection)
    }

    pub fn for_issue(issue_id: i32, db_connection: &mut SqliteConnection) -> QueryResult<Vec<AssignedLabel>> {
        assigned_labels::table
            .filter(assigned_labels::issue_id.eq(issue_id))
            .order(assigned_labels::id.asc())
            .load::<AssignedLabel>(db_connection)
    }
}

pub trait AssignLabel {
    fn create(
        assignment: NewAssignedLabel,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<AssignedLabel>;
}

impl AssignLabel for AssignedLabel {
    fn create(
        assignment: NewAssignedLabel,
        db_connection: &mut SqliteConnection
    ) -> QueryResult<AssignedLabel> {
        insert_into(assigned_labels::table)
            .values(&assignment)
            .get_result::<AssignedLabel>(db_connection)
    }
}
