use serde::{Deserialize, Serialize};

use crate::User;

/// Conjunctive filter: every supplied condition must hold, absent ones always do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUsersInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_from: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_to: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_married: Option<bool>,
}

impl FilterUsersInput {
    pub fn is_empty(&self) -> bool {
        self.name_search.is_none()
            && self.age_from.is_none()
            && self.age_to.is_none()
            && self.is_married.is_none()
    }

    pub fn matches(&self, user: &User) -> bool {
        if let Some(search) = &self.name_search {
            if !name_includes(&user.name, search) {
                return false;
            }
        }
        if let Some(from) = self.age_from {
            if user.age < from {
                return false;
            }
        }
        if let Some(to) = self.age_to {
            if user.age > to {
                return false;
            }
        }
        if let Some(is_married) = self.is_married {
            if user.is_married != is_married {
                return false;
            }
        }
        true
    }
}

/// Case-insensitive substring match, taken as given. An empty needle matches every name.
pub fn name_includes(name: &str, needle: &str) -> bool {
    name.to_lowercase().contains(&needle.to_lowercase())
}

/// Like [`name_includes`], but the needle is trimmed first, so a blank one matches every name.
pub fn name_contains(name: &str, needle: &str) -> bool {
    let needle = needle.trim();
    if needle.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&needle.to_lowercase())
}

pub fn filter_users(users: &[User], input: &FilterUsersInput) -> Vec<User> {
    users.iter().filter(|u| input.matches(u)).cloned().collect()
}

pub fn search_users(users: &[User], term: &str) -> Vec<User> {
    users
        .iter()
        .filter(|u| name_contains(&u.name, term))
        .cloned()
        .collect()
}

// ============================================================================
// Client-side filter options
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeFilter {
    #[default]
    All,
    Young,
    Adult,
    Senior,
}

impl AgeFilter {
    /// Inclusive `(from, to)` bounds of the band; `None` means unbounded.
    pub fn bounds(&self) -> (Option<i32>, Option<i32>) {
        match self {
            AgeFilter::All => (None, None),
            AgeFilter::Young => (Some(18), Some(30)),
            AgeFilter::Adult => (Some(31), Some(50)),
            AgeFilter::Senior => (Some(51), None),
        }
    }

    pub fn contains(&self, age: i32) -> bool {
        let (from, to) = self.bounds();
        from.map_or(true, |f| age >= f) && to.map_or(true, |t| age <= t)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeFilter::All => "all",
            AgeFilter::Young => "young",
            AgeFilter::Adult => "adult",
            AgeFilter::Senior => "senior",
        }
    }
}

impl std::str::FromStr for AgeFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(AgeFilter::All),
            "young" => Ok(AgeFilter::Young),
            "adult" => Ok(AgeFilter::Adult),
            "senior" => Ok(AgeFilter::Senior),
            other => Err(format!(
                "unknown age band '{}' (expected all, young, adult or senior)",
                other
            )),
        }
    }
}

impl std::fmt::Display for AgeFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarriageFilter {
    #[default]
    All,
    Married,
    Single,
}

impl MarriageFilter {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MarriageFilter::All => None,
            MarriageFilter::Married => Some(true),
            MarriageFilter::Single => Some(false),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterOptions {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub age_filter: AgeFilter,
    #[serde(default)]
    pub marriage_filter: MarriageFilter,
}

impl FilterOptions {
    /// Lowers the options to the server's filter input so both sides share one predicate.
    pub fn to_filter_input(&self) -> FilterUsersInput {
        let (age_from, age_to) = self.age_filter.bounds();
        FilterUsersInput {
            name_search: (!self.search.is_empty()).then(|| self.search.clone()),
            age_from,
            age_to,
            is_married: self.marriage_filter.as_bool(),
        }
    }

    pub fn matches(&self, user: &User) -> bool {
        self.to_filter_input().matches(user)
    }

    pub fn apply(&self, users: &[User]) -> Vec<User> {
        filter_users(users, &self.to_filter_input())
    }
}
