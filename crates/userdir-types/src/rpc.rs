use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::User;

// ============================================================================
// GraphQL envelope
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQLRequest {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<String>,
}

impl GraphQLRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            variables: None,
            operation_name: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub path: Vec<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphQLResponse<D> {
    pub data: Option<D>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQLError>,
}

impl<D> GraphQLResponse<D> {
    /// Any reported error wins over partial data.
    pub fn into_result(self) -> Result<Option<D>, Vec<String>> {
        if !self.errors.is_empty() {
            return Err(self.errors.into_iter().map(|e| e.message).collect());
        }
        Ok(self.data)
    }
}

// ============================================================================
// Operation payloads (the `data` object of each operation)
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUsersData {
    pub get_users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetUserByIdData {
    pub get_user_by_id: Option<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchUsersData {
    pub search_users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUsersData {
    pub filter_users: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserData {
    pub create_user: User,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteUserByIdData {
    pub delete_user_by_id: Vec<User>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditUserByIdData {
    pub edit_user_by_id: Vec<User>,
}
