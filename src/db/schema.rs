table! {
    issues (id) {
        id -> Integer,
        create_date -> Text,
        close_date -> Nullable<Text>,
        title -> Text,
        status -> Text,
        author_id -> Integer,
        milestone_id -> Nullable<Integer>,
    }
}

table! {
    users (id) {
        id -> Integer,
        firstname -> Text,
        lastname -> Text,
        username -> Text,
        avatar_url -> Text,
        location -> Nullable<Text>,
        bio -> Nullable<Text>,
        org -> Nullable<Text>,
        org_url -> Nullable<Text>,
    }
}

table! {
    comments (id) {
        id -> Integer,
        create_date -> Text,
        content -> Text,
        author_id -> Integer,
        issue_id -> Integer,
    }
}

table! {
    labels (id) {
        id -> Integer,
        title -> Text,
    }
}

table! {
    assigned_labels (id) {
        id -> Integer,
        label_id -> Integer,
        issue_id -> Integer,
    }
}

table! {
    milestones (id) {
        id -> Integer,
        title -> Text,
    }
}

joinable!(assigned_labels -> issues (issue_id));
joinable!(assigned_labels -> labels (label_id));
joinable!(comments -> issues (issue_id));
joinable!(comments -> users (author_id));
joinable!(issues -> users (author_id));
joinable!(issues -> milestones (milestone_id));

allow_tables_to_appear_in_same_query!(
    issues,
    users,
    comments,
    labels,
    assigned_labels,
    milestones,
);
