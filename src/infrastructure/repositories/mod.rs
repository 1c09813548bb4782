mod error;
mod postgres_record;

pub use error::map_sqlx;
pub use postgres_record::PostgresRecordStore;
