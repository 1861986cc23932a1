//! Transport that holds every request until the test releases it
//!
//! Used to complete responses out of issue order.

use async_trait::async_trait;
use futures::channel::oneshot;
use parking_lot::Mutex;

use postboard_app::queries::GraphqlRequest;
use postboard_app::{AppResult, GraphqlTransport};

/// Wraps a transport; request `n` is forwarded only after `release(n)`.
#[derive(Debug)]
pub struct GatedTransport<T> {
    inner: T,
    gates: Mutex<Vec<Option<oneshot::Sender<()>>>>,
}

impl<T> GatedTransport<T> {
    /// Gate `inner`.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            gates: Mutex::new(Vec::new()),
        }
    }

    /// Wrapped transport.
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Number of requests issued so far.
    pub fn issued(&self) -> usize {
        self.gates.lock().len()
    }

    /// Let request `index` (0-based, issue order) through.
    ///
    /// Returns false if there is no such request or it was already released.
    pub fn release(&self, index: usize) -> bool {
        let sender = self
            .gates
            .lock()
            .get_mut(index)
            .and_then(Option::take);
        match sender {
            Some(sender) => sender.send(()).is_ok(),
            None => false,
        }
    }
}

#[async_trait(?Send)]
impl<T: GraphqlTransport> GraphqlTransport for GatedTransport<T> {
    async fn execute(&self, request: &GraphqlRequest) -> AppResult<serde_json::Value> {
        let (sender, receiver) = oneshot::channel();
        self.gates.lock().push(Some(sender));
        // A dropped sender also opens the gate.
        let _ = receiver.await;
        self.inner.execute(request).await
    }
}
