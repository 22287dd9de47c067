mod filter;
mod rpc;
mod stats;
mod user;

pub use filter::*;
pub use rpc::*;
pub use stats::*;
pub use user::*;

pub const DEFAULT_PORT: u16 = 4000;
pub const USER_TAG: &str = "User";
