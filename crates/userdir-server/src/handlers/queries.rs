use tracing::debug;
use userdir_store::StoreError;
use userdir_types::{filter_users, search_users, FilterUsersInput, User};

use super::HandlerContext;

pub fn handle_get_users(ctx: &HandlerContext) -> Result<Vec<User>, StoreError> {
    let users = ctx.repo.list()?;
    debug!("getUsers -> {} users", users.len());
    Ok(users)
}

pub fn handle_get_user_by_id(ctx: &HandlerContext, id: &str) -> Result<Option<User>, StoreError> {
    let user = ctx.repo.get(id)?;
    debug!("getUserById({}) -> found={}", id, user.is_some());
    Ok(user)
}

pub fn handle_search_users(ctx: &HandlerContext, search_term: &str) -> Result<Vec<User>, StoreError> {
    let users = ctx.repo.list()?;
    let matched = search_users(&users, search_term);
    debug!(
        "searchUsers({:?}) -> {} of {}",
        search_term,
        matched.len(),
        users.len()
    );
    Ok(matched)
}

pub fn handle_filter_users(
    ctx: &HandlerContext,
    input: &FilterUsersInput,
) -> Result<Vec<User>, StoreError> {
    let users = ctx.repo.list()?;
    let matched = filter_users(&users, input);
    debug!("filterUsers({:?}) -> {} of {}", input, matched.len(), users.len());
    Ok(matched)
}
