pub mod commands;
pub mod context;
pub mod dtos;
pub mod queries;
pub mod services;
pub mod utils;

pub use context::UserContext;
pub use utils::ResultExt;
