use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One entry of the users file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub username: String,
    pub email: String,
    /// Any other fields found in the file, written back unchanged on save.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
