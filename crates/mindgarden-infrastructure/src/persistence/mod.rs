pub mod repositories;

mod database;
mod repository_base;
mod result_ext;
mod rows;

pub use database::Database;
pub use repository_base::SqliteRepositoryBase;
pub use result_ext::ResultExt;
