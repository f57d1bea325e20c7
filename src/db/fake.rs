use super::lazy::{BoxError, ConnectOptions, Connector};
use futures_util::future::{BoxFuture, FutureExt};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Semaphore;

/// In-memory connector whose attempts block until the test opens the gate.
/// Handles are `Arc<String>` named `H1`, `H2`, ... after the attempt number.
#[derive(Clone)]
pub struct FakeConnector {
    calls: Arc<AtomicUsize>,
    gate: Arc<Semaphore>,
    failing: usize,
    seen: Arc<Mutex<Vec<(String, ConnectOptions)>>>,
}

impl FakeConnector {
    pub fn gated() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
            gate: Arc::new(Semaphore::new(0)),
            failing: 0,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn open_gate() -> Self {
        let connector = Self::gated();
        connector.gate.add_permits(Semaphore::MAX_PERMITS);
        connector
    }

    /// Make the first `n` attempts fail
    pub fn failing_first(mut self, n: usize) -> Self {
        self.failing = n;
        self
    }

    /// Let `n` more attempts complete
    pub fn open(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn targets(&self) -> Vec<String> {
        self.seen.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }

    pub fn last_options(&self) -> Option<ConnectOptions> {
        self.seen.lock().unwrap().last().map(|(_, o)| o.clone())
    }
}

impl Connector for FakeConnector {
    type Handle = Arc<String>;

    fn connect(
        &self,
        target: &str,
        options: &ConnectOptions,
    ) -> BoxFuture<'static, Result<Self::Handle, BoxError>> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        self.seen
            .lock()
            .unwrap()
            .push((target.to_string(), options.clone()));
        let gate = self.gate.clone();
        let fail = n <= self.failing;
        let target = target.to_string();
        async move {
            gate.acquire().await?.forget();
            if fail {
                return Err(format!("connection refused: {}", target).into());
            }
            Ok(Arc::new(format!("H{}", n)))
        }
        .boxed()
    }
}
