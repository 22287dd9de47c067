use async_graphql::{Context, EmptySubscription, InputObject, Object, Result, Schema, ID};
use userdir_types::{CreateUserInput, FilterUsersInput, UpdateUserInput, User};

use crate::handlers::{
    handle_create_user, handle_delete_user_by_id, handle_edit_user_by_id, handle_filter_users,
    handle_get_user_by_id, handle_get_users, handle_search_users, HandlerContext,
};

pub type UserSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(ctx: HandlerContext) -> UserSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(ctx)
        .finish()
}

fn handler_ctx<'a>(ctx: &Context<'a>) -> Result<&'a HandlerContext> {
    ctx.data::<HandlerContext>()
}

fn nodes(users: Vec<User>) -> Vec<UserNode> {
    users.into_iter().map(UserNode).collect()
}

// ============================================================================
// Types
// ============================================================================

pub struct UserNode(pub User);

#[Object(name = "User")]
impl UserNode {
    async fn id(&self) -> ID {
        ID(self.0.id.clone())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> i32 {
        self.0.age
    }

    async fn is_married(&self) -> bool {
        self.0.is_married
    }
}

#[derive(InputObject)]
#[graphql(name = "UpdateUserInput")]
pub struct UpdateUserArgs {
    pub id: ID,
    pub new_name: Option<String>,
    pub new_age: Option<i32>,
    pub is_married_status_changed: Option<bool>,
}

impl From<UpdateUserArgs> for UpdateUserInput {
    fn from(args: UpdateUserArgs) -> Self {
        Self {
            id: args.id.0,
            new_name: args.new_name,
            new_age: args.new_age,
            is_married_status_changed: args.is_married_status_changed,
        }
    }
}

#[derive(InputObject)]
#[graphql(name = "FilterUsersInput")]
pub struct FilterUsersArgs {
    pub name_search: Option<String>,
    pub age_from: Option<i32>,
    pub age_to: Option<i32>,
    pub is_married: Option<bool>,
}

impl From<FilterUsersArgs> for FilterUsersInput {
    fn from(args: FilterUsersArgs) -> Self {
        Self {
            name_search: args.name_search,
            age_from: args.age_from,
            age_to: args.age_to,
            is_married: args.is_married,
        }
    }
}

// ============================================================================
// Query
// ============================================================================

pub struct QueryRoot;

#[Object(name = "Query")]
impl QueryRoot {
    async fn get_users(&self, ctx: &Context<'_>) -> Result<Vec<UserNode>> {
        Ok(nodes(handle_get_users(handler_ctx(ctx)?)?))
    }

    async fn get_user_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Option<UserNode>> {
        Ok(handle_get_user_by_id(handler_ctx(ctx)?, &id)?.map(UserNode))
    }

    async fn search_users(&self, ctx: &Context<'_>, search_term: String) -> Result<Vec<UserNode>> {
        Ok(nodes(handle_search_users(handler_ctx(ctx)?, &search_term)?))
    }

    async fn filter_users(
        &self,
        ctx: &Context<'_>,
        input: FilterUsersArgs,
    ) -> Result<Vec<UserNode>> {
        let input = FilterUsersInput::from(input);
        Ok(nodes(handle_filter_users(handler_ctx(ctx)?, &input)?))
    }
}

// ============================================================================
// Mutation
// ============================================================================

pub struct MutationRoot;

#[Object(name = "Mutation")]
impl MutationRoot {
    async fn create_user(
        &self,
        ctx: &Context<'_>,
        name: String,
        age: i32,
        is_married: bool,
    ) -> Result<UserNode> {
        let input = CreateUserInput {
            name,
            age,
            is_married,
        };
        Ok(UserNode(handle_create_user(handler_ctx(ctx)?, input)?))
    }

    async fn delete_user_by_id(&self, ctx: &Context<'_>, id: ID) -> Result<Vec<UserNode>> {
        Ok(nodes(handle_delete_user_by_id(handler_ctx(ctx)?, &id)?))
    }

    async fn edit_user_by_id(
        &self,
        ctx: &Context<'_>,
        input: UpdateUserArgs,
    ) -> Result<Vec<UserNode>> {
        let input = UpdateUserInput::from(input);
        Ok(nodes(handle_edit_user_by_id(handler_ctx(ctx)?, &input)?))
    }
}
