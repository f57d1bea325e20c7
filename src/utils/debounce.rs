use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

/// Delays a callback until `delay` has passed without another call.
///
/// Must be used from within a tokio runtime.
pub struct Debouncer<T> {
    delay: Duration,
    func: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F>(delay: Duration, func: F) -> Self
    where
        F: Fn(T) + Send + Sync + 'static,
    {
        Self {
            delay,
            func: Arc::new(func),
            pending: Mutex::new(None),
        }
    }

    /// Schedule `func(arg)`, cancelling any call still waiting
    pub fn call(&self, arg: T) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let func = self.func.clone();
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            func(arg);
        }));
    }
}
