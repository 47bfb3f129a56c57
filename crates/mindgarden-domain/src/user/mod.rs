mod aggregate;
mod repository;
mod timezone;

pub use aggregate::User;
pub use repository::UserRepository;
pub use timezone::UserTimezone;
