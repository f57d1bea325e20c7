pub mod lazy;
pub mod mongo;

#[cfg(test)]
pub(crate) mod fake;

pub use lazy::{BoxError, ConnectOptions, ConnectionState, Connector, DbError, LazyConnection};
pub use mongo::{MongoConnector, MongoHandle};

/// The process-wide database connection used by the server
pub type Db = LazyConnection<MongoConnector>;
