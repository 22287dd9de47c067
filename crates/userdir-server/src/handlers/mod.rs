use std::sync::Arc;

use userdir_config::StoreConfig;
use userdir_store::{MemoryStore, UserRepository};

mod mutations;
mod queries;

pub use mutations::{handle_create_user, handle_delete_user_by_id, handle_edit_user_by_id};
pub use queries::{handle_filter_users, handle_get_user_by_id, handle_get_users, handle_search_users};

/// Shared state handed to every resolver.
#[derive(Clone)]
pub struct HandlerContext {
    pub repo: Arc<dyn UserRepository>,
}

impl HandlerContext {
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }

    pub fn from_config(config: &StoreConfig) -> Self {
        let store = if config.seed {
            MemoryStore::seeded(config.id_strategy)
        } else {
            MemoryStore::new(config.id_strategy)
        };
        Self::new(Arc::new(store))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use userdir_types::{CreateUserInput, FilterUsersInput, IdStrategy, UpdateUserInput, User};
    use userdir_store::StoreError;

    fn seeded() -> HandlerContext {
        HandlerContext::from_config(&StoreConfig::default())
    }

    fn two_users() -> HandlerContext {
        HandlerContext::new(Arc::new(MemoryStore::with_users(
            vec![
                User::new("1", "John Doe", 30, true),
                User::new("2", "Jane Smith", 25, false),
            ],
            IdStrategy::Monotonic,
        )))
    }

    #[test]
    fn test_from_config_without_seed() {
        let ctx = HandlerContext::from_config(&StoreConfig {
            seed: false,
            id_strategy: IdStrategy::Length,
        });
        assert!(handle_get_users(&ctx).unwrap().is_empty());
    }

    #[test]
    fn test_get_user_by_id() {
        let ctx = seeded();
        for user in handle_get_users(&ctx).unwrap() {
            assert_eq!(handle_get_user_by_id(&ctx, &user.id).unwrap(), Some(user.clone()));
        }
        assert_eq!(handle_get_user_by_id(&ctx, "999").unwrap(), None);
    }

    #[test]
    fn test_filter_users_age_from() {
        let ctx = two_users();
        let result = handle_filter_users(
            &ctx,
            &FilterUsersInput {
                age_from: Some(30),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(result, vec![User::new("1", "John Doe", 30, true)]);
    }

    #[test]
    fn test_empty_filter_and_blank_search_return_store() {
        let ctx = seeded();
        let all = handle_get_users(&ctx).unwrap();
        assert_eq!(handle_filter_users(&ctx, &FilterUsersInput::default()).unwrap(), all);
        assert_eq!(handle_search_users(&ctx, "").unwrap(), all);
        assert_eq!(handle_search_users(&ctx, "   ").unwrap(), all);
    }

    #[test]
    fn test_create_appends_one_record() {
        let ctx = seeded();
        let prior = handle_get_users(&ctx).unwrap().len();
        let user = handle_create_user(
            &ctx,
            CreateUserInput {
                name: "Test User".to_string(),
                age: 25,
                is_married: false,
            },
        )
        .unwrap();
        assert_eq!(user.id, (prior + 1).to_string());
        let users = handle_get_users(&ctx).unwrap();
        assert_eq!(users.len(), prior + 1);
        assert_eq!(users.last(), Some(&user));
    }

    #[test]
    fn test_delete_returns_remaining_users() {
        let ctx = seeded();
        let remaining = handle_delete_user_by_id(&ctx, "1").unwrap();
        assert_eq!(remaining.len(), 2);
        assert!(remaining.iter().all(|u| u.id != "1"));

        let unchanged = handle_delete_user_by_id(&ctx, "1").unwrap();
        assert_eq!(unchanged, remaining);
    }

    #[test]
    fn test_edit_returns_full_list() {
        let ctx = seeded();
        let users = handle_edit_user_by_id(
            &ctx,
            &UpdateUserInput {
                new_age: Some(26),
                ..UpdateUserInput::new("2")
            },
        )
        .unwrap();
        assert_eq!(users.len(), 3);
        assert_eq!(users[1], User::new("2", "Jane Smith", 26, false));
    }

    #[test]
    fn test_edit_missing_user_fails() {
        let ctx = seeded();
        let err = handle_edit_user_by_id(&ctx, &UpdateUserInput::new("77")).unwrap_err();
        assert_eq!(err, StoreError::NotFound { id: "77".to_string() });
        assert_eq!(handle_get_users(&ctx).unwrap().len(), 3);
    }
}
