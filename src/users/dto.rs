use serde::{Deserialize, Serialize};

/// Item of the username listing.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct UsernameItem {
    pub id: i64,
    pub username: String,
}

/// Item returned by the lookup-by-username route.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct EmailItem {
    pub id: i64,
    pub email: String,
}

/// Request body for adding a user. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
}
