pub mod config;
pub mod handlers;
pub mod router;
pub mod state;

pub use config::ServerConfig;
pub use router::build_router;
pub use state::AppState;
