pub mod config;
pub mod error;
pub mod routes;

pub use config::ServerConfig;
pub use routes::build_router;
