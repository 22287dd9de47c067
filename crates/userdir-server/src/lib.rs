pub mod handlers;
pub mod schema;
pub mod server;

pub use handlers::HandlerContext;
pub use schema::{build_schema, UserSchema};
pub use server::{router, ApiServer};
