use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub age: i32,
    pub is_married: bool,
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: i32, is_married: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
            is_married,
        }
    }

    /// Overwrites the fields supplied in `update`, leaving the rest untouched.
    pub fn apply(&mut self, update: &UpdateUserInput) {
        if let Some(name) = &update.new_name {
            self.name = name.clone();
        }
        if let Some(age) = update.new_age {
            self.age = age;
        }
        if let Some(is_married) = update.is_married_status_changed {
            self.is_married = is_married;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserInput {
    pub name: String,
    pub age: i32,
    pub is_married: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserInput {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_married_status_changed: Option<bool>,
}

impl UpdateUserInput {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.new_name.is_none() && self.new_age.is_none() && self.is_married_status_changed.is_none()
    }
}

/// How the store picks the id of a newly created user.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdStrategy {
    /// Counter seeded with `len + 1`; ids are never handed out twice.
    #[default]
    Monotonic,
    /// `(len + 1).to_string()` at insert time. Can repeat ids after a delete.
    Length,
}

impl IdStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdStrategy::Monotonic => "monotonic",
            IdStrategy::Length => "length",
        }
    }
}

impl std::fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub fn seed_users() -> Vec<User> {
    vec![
        User::new("1", "John Doe", 30, true),
        User::new("2", "Jane Smith", 25, false),
        User::new("3", "Alice Johnson", 28, false),
    ]
}
