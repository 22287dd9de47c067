use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;
use userdir_types::*;

use crate::cache::{CacheStats, QueryCache};
use crate::documents::*;
use crate::validation::validate_create_input;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("{}", .0.join("; "))]
    GraphQL(Vec<String>),
    #[error("Response for {0} carried no data")]
    MissingData(&'static str),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid input: {0}")]
    Validation(String),
}

/// Client data layer: issues the GraphQL operations and keeps a tag-keyed cache.
pub struct UserClient {
    http: reqwest::Client,
    endpoint: String,
    cache: QueryCache,
}

impl UserClient {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
            cache: QueryCache::default(),
        }
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = QueryCache::new(enabled);
        self
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    async fn execute<D>(
        &self,
        operation: &'static str,
        query: &str,
        variables: Option<Value>,
    ) -> Result<D, ClientError>
    where
        D: DeserializeOwned,
    {
        let mut request = GraphQLRequest::new(query);
        request.variables = variables;

        debug!("POST {} ({})", self.endpoint, operation);
        let response = self.http.post(&self.endpoint).json(&request).send().await?;

        let status = response.status();
        let body = response.text().await?;
        let envelope: GraphQLResponse<D> = match serde_json::from_str(&body) {
            Ok(envelope) => envelope,
            Err(_) if !status.is_success() => {
                return Err(ClientError::Status {
                    status: status.as_u16(),
                    body,
                });
            }
            Err(e) => return Err(e.into()),
        };

        envelope
            .into_result()
            .map_err(ClientError::GraphQL)?
            .ok_or(ClientError::MissingData(operation))
    }

    async fn cached_query<D, T>(
        &mut self,
        key: String,
        operation: &'static str,
        query: &str,
        variables: Option<Value>,
        extract: fn(D) -> T,
    ) -> Result<T, ClientError>
    where
        D: DeserializeOwned,
        T: serde::Serialize + DeserializeOwned,
    {
        if let Some(hit) = self.cache.get::<T>(&key) {
            debug!("cache hit: {}", key);
            return Ok(hit);
        }
        let data: D = self.execute(operation, query, variables).await?;
        let value = extract(data);
        self.cache.insert(key, &[USER_TAG], &value);
        Ok(value)
    }

    fn invalidate(&mut self) {
        let dropped = self.cache.invalidate_tag(USER_TAG);
        if dropped > 0 {
            debug!("invalidated {} cached queries", dropped);
        }
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub async fn get_users(&mut self) -> Result<Vec<User>, ClientError> {
        self.cached_query(
            "getUsers".to_string(),
            "getUsers",
            GET_USERS,
            None,
            |d: GetUsersData| d.get_users,
        )
        .await
    }

    pub async fn get_user_by_id(&mut self, id: &str) -> Result<Option<User>, ClientError> {
        self.cached_query(
            format!("getUserById:{}", id),
            "getUserById",
            GET_USER_BY_ID,
            Some(json!({ "id": id })),
            |d: GetUserByIdData| d.get_user_by_id,
        )
        .await
    }

    pub async fn search_users(&mut self, search_term: &str) -> Result<Vec<User>, ClientError> {
        self.cached_query(
            format!("searchUsers:{}", search_term),
            "searchUsers",
            SEARCH_USERS,
            Some(json!({ "searchTerm": search_term })),
            |d: SearchUsersData| d.search_users,
        )
        .await
    }

    pub async fn filter_users(&mut self, input: &FilterUsersInput) -> Result<Vec<User>, ClientError> {
        let input_json = serde_json::to_value(input)?;
        self.cached_query(
            format!("filterUsers:{}", input_json),
            "filterUsers",
            FILTER_USERS,
            Some(json!({ "input": input_json })),
            |d: FilterUsersData| d.filter_users,
        )
        .await
    }

    /// Filters the (possibly cached) full list locally instead of asking the server.
    pub async fn filter_local(&mut self, options: &FilterOptions) -> Result<Vec<User>, ClientError> {
        let users = self.get_users().await?;
        Ok(options.apply(&users))
    }

    pub async fn stats(&mut self, options: &FilterOptions) -> Result<UserStats, ClientError> {
        let users = self.get_users().await?;
        let shown = users.iter().filter(|u| options.matches(u)).count();
        Ok(UserStats::with_shown(&users, shown))
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    pub async fn create_user(&mut self, input: &CreateUserInput) -> Result<User, ClientError> {
        validate_create_input(input)?;
        let data: CreateUserData = self
            .execute("createUser", CREATE_USER, Some(serde_json::to_value(input)?))
            .await?;
        self.invalidate();
        Ok(data.create_user)
    }

    pub async fn delete_user_by_id(&mut self, id: &str) -> Result<Vec<User>, ClientError> {
        let data: DeleteUserByIdData = self
            .execute("deleteUserById", DELETE_USER_BY_ID, Some(json!({ "id": id })))
            .await?;
        self.invalidate();
        Ok(data.delete_user_by_id)
    }

    pub async fn edit_user_by_id(&mut self, input: &UpdateUserInput) -> Result<Vec<User>, ClientError> {
        let data: EditUserByIdData = self
            .execute(
                "editUserById",
                EDIT_USER_BY_ID,
                Some(json!({ "input": serde_json::to_value(input)? })),
            )
            .await?;
        self.invalidate();
        Ok(data.edit_user_by_id)
    }
}
