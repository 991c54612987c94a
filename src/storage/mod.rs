mod preferences;
mod schema;
mod types;

pub use preferences::HAS_VISITED_KEY;
pub use schema::Database;
pub use types::DatabaseError;
