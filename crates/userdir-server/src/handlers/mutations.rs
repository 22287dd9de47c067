use tracing::{debug, info, warn};
use userdir_store::StoreError;
use userdir_types::{CreateUserInput, UpdateUserInput, User};

use super::HandlerContext;

pub fn handle_create_user(ctx: &HandlerContext, input: CreateUserInput) -> Result<User, StoreError> {
    let user = ctx.repo.insert(input)?;
    info!("Created user {} ({})", user.id, user.name);
    Ok(user)
}

/// Missing ids are not an error here; the current list comes back unchanged.
pub fn handle_delete_user_by_id(ctx: &HandlerContext, id: &str) -> Result<Vec<User>, StoreError> {
    match ctx.repo.delete(id)? {
        Some(user) => info!("Deleted user {} ({})", user.id, user.name),
        None => debug!("deleteUserById({}) matched nothing", id),
    }
    ctx.repo.list()
}

pub fn handle_edit_user_by_id(
    ctx: &HandlerContext,
    input: &UpdateUserInput,
) -> Result<Vec<User>, StoreError> {
    let user = ctx.repo.update(input).map_err(|e| {
        warn!("editUserById failed: {}", e);
        e
    })?;
    info!("Edited user {}", user.id);
    ctx.repo.list()
}
