use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, error, info};

/// Boxed error produced by a `Connector`
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Resolves the connection target on every call that needs one
pub type TargetSource = Box<dyn Fn() -> Option<String> + Send + Sync>;

/// Environment variable holding the database URL
pub const TARGET_ENV_VAR: &str = "MONGODB_URL";

/// Fixed options handed to the connector on every attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Database (namespace) the handle is bound to
    pub db_name: String,
    /// When false, the connector must verify the connection before returning
    /// so that failures surface on connect instead of on the first command.
    pub buffer_commands: bool,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            db_name: "imaginify".to_string(),
            buffer_commands: false,
        }
    }
}

/// Opens connections to an external data store.
///
/// `connect` must be lazy: no I/O may happen before the returned future is
/// polled, since it is called while the cache state is locked.
pub trait Connector: Send + Sync + 'static {
    type Handle: Clone + Send + Sync + 'static;

    fn connect(
        &self,
        target: &str,
        options: &ConnectOptions,
    ) -> BoxFuture<'static, Result<Self::Handle, BoxError>>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DbError {
    #[error("{0} is missing")]
    MissingConfiguration(&'static str),

    #[error("failed to connect to database: {0}")]
    Connection(Arc<BoxError>),
}

/// Snapshot of the cache lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    Empty,
    Connecting,
    Connected,
}

type Attempt<H> = Shared<BoxFuture<'static, Result<H, Arc<BoxError>>>>;

enum Slot<H> {
    Empty,
    Connecting { id: u64, attempt: Attempt<H> },
    Connected(H),
}

struct Inner<H> {
    slot: Slot<H>,
    next_attempt: u64,
}

/// Lazily established, memoized connection shared by every caller.
///
/// Concurrent callers that arrive while a connection attempt is in flight all
/// await that same attempt and observe the same result. Once a handle is
/// established it is returned for the lifetime of the cache. A failed attempt
/// is dropped from the cache, so the next call starts a fresh one.
pub struct LazyConnection<C: Connector> {
    connector: C,
    target: TargetSource,
    options: ConnectOptions,
    inner: Mutex<Inner<C::Handle>>,
}

impl<C: Connector> LazyConnection<C> {
    pub fn new(connector: C, target: TargetSource, options: ConnectOptions) -> Self {
        Self {
            connector,
            target,
            options,
            inner: Mutex::new(Inner {
                slot: Slot::Empty,
                next_attempt: 1,
            }),
        }
    }

    /// Cache whose target is read from `MONGODB_URL` on each connect
    pub fn from_env(connector: C, options: ConnectOptions) -> Self {
        Self::new(
            connector,
            Box::new(|| std::env::var(TARGET_ENV_VAR).ok()),
            options,
        )
    }

    pub fn options(&self) -> &ConnectOptions {
        &self.options
    }

    pub fn state(&self) -> ConnectionState {
        match self.lock().slot {
            Slot::Empty => ConnectionState::Empty,
            Slot::Connecting { .. } => ConnectionState::Connecting,
            Slot::Connected(_) => ConnectionState::Connected,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.state() == ConnectionState::Connected
    }

    /// Get the shared connection, connecting first if needed
    pub async fn get_connection(&self) -> Result<C::Handle, DbError> {
        let (id, attempt) = {
            let mut inner = self.lock();

            if let Slot::Connected(handle) = &inner.slot {
                return Ok(handle.clone());
            }

            let target = self.resolve_target()?;

            if let Slot::Connecting { id, attempt } = &inner.slot {
                debug!("Joining in-flight connection attempt #{}", id);
                (*id, attempt.clone())
            } else {
                let id = inner.next_attempt;
                inner.next_attempt += 1;
                info!(
                    "Connecting to database '{}' (attempt #{})",
                    self.options.db_name, id
                );
                let attempt = self
                    .connector
                    .connect(&target, &self.options)
                    .map(|result| result.map_err(Arc::new))
                    .boxed()
                    .shared();
                inner.slot = Slot::Connecting {
                    id,
                    attempt: attempt.clone(),
                };
                (id, attempt)
            }
        };

        let outcome = attempt.await;

        let mut inner = self.lock();
        let current = matches!(&inner.slot, Slot::Connecting { id: slot_id, .. } if *slot_id == id);
        match outcome {
            Ok(handle) => {
                if current {
                    info!("Database connection established (attempt #{})", id);
                    inner.slot = Slot::Connected(handle.clone());
                }
                Ok(handle)
            }
            Err(e) => {
                if current {
                    error!("Error connecting to database (attempt #{}): {}", id, e);
                    inner.slot = Slot::Empty;
                }
                Err(DbError::Connection(e))
            }
        }
    }

    fn resolve_target(&self) -> Result<String, DbError> {
        match (self.target)().filter(|target| !target.trim().is_empty()) {
            Some(target) => Ok(target),
            None => {
                error!("{} is missing", TARGET_ENV_VAR);
                Err(DbError::MissingConfiguration(TARGET_ENV_VAR))
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner<C::Handle>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
