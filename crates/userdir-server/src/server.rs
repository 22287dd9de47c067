use std::net::SocketAddr;

use async_graphql::http::GraphiQLSource;
use async_graphql_axum::GraphQL;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use userdir_config::{Config, ServerConfig};

use crate::handlers::HandlerContext;
use crate::schema::{build_schema, UserSchema};

pub struct ApiServer {
    config: ServerConfig,
    schema: UserSchema,
    shutdown_tx: broadcast::Sender<()>,
}

impl ApiServer {
    pub fn new(config: &Config) -> Self {
        Self::with_context(config.server.clone(), HandlerContext::from_config(&config.store))
    }

    pub fn with_context(config: ServerConfig, ctx: HandlerContext) -> Self {
        let (shutdown_tx, _) = broadcast::channel(1);
        Self {
            config,
            schema: build_schema(ctx),
            shutdown_tx,
        }
    }

    /// Sending on the returned channel stops a running server gracefully.
    pub fn shutdown_handle(&self) -> broadcast::Sender<()> {
        self.shutdown_tx.clone()
    }

    pub async fn bind(&self) -> anyhow::Result<TcpListener> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await?;
        Ok(listener)
    }

    pub async fn run(self) -> anyhow::Result<()> {
        let listener = self.bind().await?;
        self.serve(listener).await
    }

    pub async fn serve(self, listener: TcpListener) -> anyhow::Result<()> {
        let local_addr: SocketAddr = listener.local_addr()?;
        info!("Server ready at http://{}/", local_addr);

        let mut shutdown_rx = self.shutdown_tx.subscribe();
        let app = router(self.schema);

        let shutdown = async move {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutdown signal received");
                }
                result = tokio::signal::ctrl_c() => {
                    if let Err(e) = result {
                        error!("Failed to listen for Ctrl-C: {}", e);
                    }
                    info!("Ctrl-C received, shutting down");
                }
            }
        };

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!("Server stopped");
        Ok(())
    }
}

/// Single endpoint: `POST /` executes GraphQL, `GET /` serves GraphiQL.
pub fn router(schema: UserSchema) -> Router {
    Router::new()
        .route("/", get(graphiql).post_service(GraphQL::new(schema)))
        .layer(CorsLayer::permissive())
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/").finish())
}
