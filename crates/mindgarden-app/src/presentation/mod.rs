pub mod bootstrap;
pub mod context;
pub mod error;
pub mod extract;
pub mod routes;
pub mod state;

pub use bootstrap::{build_state, sqlite_repositories};
pub use error::{ApiError, ApiResult};
pub use routes::build_router;
pub use state::{AppState, SharedState};
