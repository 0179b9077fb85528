pub mod error;
pub mod handlers;
pub mod server;
pub mod wire;

pub use server::{build_router, start, ServerConfig, ServerHandle};
