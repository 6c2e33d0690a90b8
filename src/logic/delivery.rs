//! Exactly-once delivery of the session result.

use crate::state::PickResult;

/// Callback receiving the terminal result of a session.
pub type PickCallback = Box<dyn FnOnce(PickResult) + Send>;

/// Collaborator that shows the session and hides itself when it ends.
pub trait Presenter {
    /// Draw the latest accepted state.
    fn render(&mut self, view: &crate::state::SessionView);

    /// Remove the picker from view.
    ///
    /// Must be a no-op when already detached.
    fn detach(&mut self);
}

/// Wraps the caller's callback so it fires at most once.
#[derive(Default)]
pub struct DeliveryGuard {
    /// Armed callback; `None` once delivered or when never armed.
    callback: Option<PickCallback>,
    /// Whether this session already produced its result.
    delivered: bool,
}

impl std::fmt::Debug for DeliveryGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeliveryGuard")
            .field("armed", &self.callback.is_some())
            .field("delivered", &self.delivered)
            .finish()
    }
}

impl DeliveryGuard {
    /// Guard armed with a caller callback.
    #[must_use]
    pub fn new(callback: PickCallback) -> Self {
        Self {
            callback: Some(callback),
            delivered: false,
        }
    }

    /// Whether a result has already been delivered.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        self.delivered
    }

    /// What: Deliver the result and detach the presenter.
    ///
    /// Inputs:
    /// - `result`: Pick or cancellation.
    /// - `presenter`: Collaborator to detach after delivery.
    ///
    /// Output:
    /// - `true` when this call delivered, `false` when a result was already delivered.
    ///
    /// Details:
    /// - A guard without a callback still counts as delivered so the session can close.
    /// - The presenter is detached whichever result was produced.
    pub fn deliver<P: Presenter + ?Sized>(&mut self, result: PickResult, presenter: &mut P) -> bool {
        if self.delivered {
            tracing::debug!("result already delivered; ignoring second delivery");
            return false;
        }
        self.delivered = true;
        let picked = result.is_picked();
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
        tracing::debug!(picked, "session result delivered");
        presenter.detach();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct CountingPresenter {
        detached: usize,
    }

    impl Presenter for CountingPresenter {
        fn render(&mut self, _view: &crate::state::SessionView) {}
        fn detach(&mut self) {
            self.detached += 1;
        }
    }

    #[test]
    /// What: The callback fires once; later deliveries are ignored.
    ///
    /// Inputs:
    /// - A cancel delivery followed by another cancel.
    ///
    /// Output:
    /// - One callback invocation, one detach.
    fn second_delivery_is_noop() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let mut guard = DeliveryGuard::new(Box::new(move |r| {
            sink.lock().expect("lock").push(r);
        }));
        let mut presenter = CountingPresenter::default();

        assert!(guard.deliver(PickResult::Cancelled, &mut presenter));
        assert!(!guard.deliver(PickResult::Cancelled, &mut presenter));

        assert_eq!(seen.lock().expect("lock").len(), 1);
        assert_eq!(presenter.detached, 1);
        assert!(guard.is_delivered());
    }

    #[test]
    /// What: An unarmed guard still closes out and detaches.
    fn unarmed_guard_detaches() {
        let mut guard = DeliveryGuard::default();
        let mut presenter = CountingPresenter::default();
        assert!(guard.deliver(PickResult::Cancelled, &mut presenter));
        assert_eq!(presenter.detached, 1);
    }
}
