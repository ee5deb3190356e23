#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use diesel::{insert_into, RunQueryDsl, SqliteConnection};
use issue_tracker::{
    controllers::{create_router, AppState},
    db::{
        connection::{in_memory_pool, SqlitePool},
        repos::{
            comment::{Comment, CreateComment, NewComment},
            issue::{CreateIssue, Issue, NewIssue},
            label::{AssignLabel, AssignedLabel, Label, NewAssignedLabel, NewLabel},
            milestone::{Milestone, NewMilestone},
            user::{NewUser, User},
        },
        schema::{labels, milestones, users},
    },
};
use tower::ServiceExt;

pub fn test_pool() -> SqlitePool {
    in_memory_pool().expect("in-memory pool")
}

pub fn app(pool: &SqlitePool) -> Router {
    create_router(AppState { pool: pool.clone() })
}

/// Runs `work` on the pool's connection and releases it before returning,
/// so the single in-memory connection is free for the router.
pub fn seed<T>(pool: &SqlitePool, work: impl FnOnce(&mut SqliteConnection) -> T) -> T {
    let mut conn = pool.get().expect("connection");
    work(&mut conn)
}

pub mod fixtures {
    use super::*;

    pub fn user(conn: &mut SqliteConnection, username: &str) -> User {
        insert_into(users::table)
            .values(&NewUser {
                firstname: "Grace",
                lastname: "Hopper",
                username,
                bio: Some("Compiler pioneer"),
                location: Some("Arlington"),
                ..NewUser::default()
            })
            .get_result(conn)
            .expect("insert user")
    }

    pub fn label(conn: &mut SqliteConnection, title: &str) -> Label {
        insert_into(labels::table)
            .values(&NewLabel { title })
            .get_result(conn)
            .expect("insert label")
    }

    pub fn milestone(conn: &mut SqliteConnection, title: &str) -> Milestone {
        insert_into(milestones::table)
            .values(&NewMilestone { title })
            .get_result(conn)
            .expect("insert milestone")
    }

    /// Issue plus its description comment, the way the creation endpoint stores it.
    pub fn issue(
        conn: &mut SqliteConnection,
        author: &User,
        title: &str,
        status: &str,
        milestone_id: Option<i32>,
        description: &str,
    ) -> Issue {
        let issue = Issue::create(
            NewIssue {
                create_date: "01/02/2024",
                title,
                status,
                author_id: author.id,
                milestone_id,
            },
            conn,
        )
        .expect("insert issue");
        comment(conn, &issue, author, description);
        issue
    }

    pub fn comment(conn: &mut SqliteConnection, issue: &Issue, author: &User, content: &str) -> Comment {
        Comment::create(
            NewComment {
                create_date: "01/03/2024",
                content,
                author_id: author.id,
                issue_id: issue.id,
            },
            conn,
        )
        .expect("insert comment")
    }

    pub fn assign(conn: &mut SqliteConnection, issue: &Issue, label: &Label) -> AssignedLabel {
        AssignedLabel::create(
            NewAssignedLabel {
                label_id: label.id,
                issue_id: issue.id,
            },
            conn,
        )
        .expect("assign label")
    }
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, String) {
    let response = router.oneshot(request).await.expect("router response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("response body");
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

pub async fn get(router: Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .expect("request");
    send(router, request).await
}

pub async fn get_json(router: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let (status, body) = get(router, uri).await;
    (status, serde_json::from_str(&body).expect("json body"))
}

pub async fn post_form(router: Router, uri: &str, form: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .expect("request");
    let (status, body) = send(router, request).await;
    (status, serde_json::from_str(&body).expect("json body"))
}
