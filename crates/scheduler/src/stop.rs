use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crossbeam_channel::{Receiver, RecvTimeoutError, Sender, bounded};

/// Receiving side of a stop request.
///
/// Once stopped, a signal stays stopped.
#[derive(Debug)]
pub struct StopSignal {
    receiver: Receiver<()>,
    handle: StopHandle,
}

/// Cloneable trigger for a [`StopSignal`].
#[derive(Clone, Debug)]
pub struct StopHandle {
    sender: Sender<()>,
    stopped: Arc<AtomicBool>,
}

impl StopSignal {
    /// Creates a signal that has not been stopped.
    #[must_use]
    pub fn new() -> Self {
        let (sender, receiver) = bounded(1);
        Self {
            receiver,
            handle: StopHandle {
                sender,
                stopped: Arc::new(AtomicBool::new(false)),
            },
        }
    }

    /// Returns a handle that can stop this signal from any thread.
    #[must_use]
    pub fn handle(&self) -> StopHandle {
        self.handle.clone()
    }

    /// Reports whether a stop has been requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.handle.is_stopped()
    }

    /// Blocks for up to `timeout`, returning early when a stop is requested.
    ///
    /// Returns `true` when the signal is stopped.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        if self.is_stopped() {
            return true;
        }
        match self.receiver.recv_timeout(timeout) {
            Ok(()) | Err(RecvTimeoutError::Disconnected) => true,
            Err(RecvTimeoutError::Timeout) => self.is_stopped(),
        }
    }
}

impl Default for StopSignal {
    fn default() -> Self {
        Self::new()
    }
}

impl StopHandle {
    /// Requests a stop. Repeated requests are ignored.
    pub fn stop(&self) {
        if !self.stopped.swap(true, Ordering::SeqCst) {
            // A full buffer already holds a pending wake-up.
            let _ = self.sender.try_send(());
        }
    }

    /// Reports whether a stop has been requested.
    #[must_use]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}
