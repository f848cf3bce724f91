//! Graceful shutdown coordination.
//!
//! One [`ShutdownCoordinator`] owns the shutdown state for the process.
//! The server task waits on OS signals through it, and cleanup tasks
//! subscribe to learn when to start closing connections.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::signal;
use tokio::sync::broadcast;
use tracing::info;

/// Fans a one-shot shutdown event out to every interested task.
///
/// Cloning is cheap and all clones share the same state. The event
/// fires at most once no matter how many times [`shutdown`] runs.
///
/// [`shutdown`]: Self::shutdown
#[derive(Clone)]
pub struct ShutdownCoordinator {
    tx: broadcast::Sender<()>,
    initiated: Arc<AtomicBool>,
}

impl ShutdownCoordinator {
    /// Creates a coordinator together with the first subscription to
    /// its event. Receivers obtained before the event fires are the
    /// only ones guaranteed to observe it.
    pub fn new() -> (Self, broadcast::Receiver<()>) {
        let (tx, rx) = broadcast::channel(1);
        let coordinator = Self {
            tx,
            initiated: Arc::new(AtomicBool::new(false)),
        };
        (coordinator, rx)
    }

    /// Returns a fresh receiver for the shutdown event.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Whether shutdown has been triggered.
    pub fn is_shutting_down(&self) -> bool {
        self.initiated.load(Ordering::Relaxed)
    }

    /// Triggers shutdown. Only the first call broadcasts the event.
    pub fn shutdown(&self) {
        let first = self
            .initiated
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_ok();

        if first {
            info!("Shutdown initiated");
            let _ = self.tx.send(());
        }
    }

    /// Waits for SIGINT or SIGTERM, then triggers shutdown.
    pub async fn wait_for_signal(&self) {
        let interrupt = async {
            signal::ctrl_c()
                .await
                .expect("failed to install Ctrl+C handler");
            "SIGINT"
        };

        #[cfg(unix)]
        let terminate = async {
            signal::unix::signal(signal::unix::SignalKind::terminate())
                .expect("failed to install SIGTERM handler")
                .recv()
                .await;
            "SIGTERM"
        };

        #[cfg(not(unix))]
        let terminate = std::future::pending::<&str>();

        let received = tokio::select! {
            sig = interrupt => sig,
            sig = terminate => sig,
        };

        info!("Received {}, shutting down", received);
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shutdown_flips_state_once() {
        let (coordinator, mut rx) = ShutdownCoordinator::new();
        assert!(!coordinator.is_shutting_down());

        coordinator.shutdown();
        assert!(coordinator.is_shutting_down());
        assert!(rx.recv().await.is_ok());

        // Second call is a no-op, no second broadcast
        coordinator.shutdown();
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_all_subscribers_see_the_event() {
        let (coordinator, mut first) = ShutdownCoordinator::new();
        let mut second = coordinator.subscribe();

        coordinator.shutdown();
        assert!(first.recv().await.is_ok());
        assert!(second.recv().await.is_ok());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let (coordinator, _rx) = ShutdownCoordinator::new();
        let clone = coordinator.clone();

        clone.shutdown();
        assert!(coordinator.is_shutting_down());
    }
}
