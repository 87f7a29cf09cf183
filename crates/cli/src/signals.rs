//! Forwarding of termination signals to the scheduler's stop handle.

use std::io;

use scheduler::StopHandle;

/// Keeps signal forwarding alive; dropping it unregisters the handlers.
#[derive(Debug)]
pub(crate) struct SignalForwarder {
    #[cfg(unix)]
    inner: Option<unix::Forwarder>,
}

/// Routes SIGINT and SIGTERM to `handle`.
///
/// Delivery only requests a stop; an in-progress cycle always completes.
pub(crate) fn forward_stop_signals(handle: StopHandle) -> io::Result<SignalForwarder> {
    #[cfg(unix)]
    {
        Ok(SignalForwarder {
            inner: Some(unix::Forwarder::spawn(handle)?),
        })
    }
    #[cfg(not(unix))]
    {
        let _ = handle;
        Ok(SignalForwarder {})
    }
}

impl Drop for SignalForwarder {
    fn drop(&mut self) {
        #[cfg(unix)]
        if let Some(forwarder) = self.inner.take() {
            forwarder.shutdown();
        }
    }
}

#[cfg(unix)]
mod unix {
    use std::io;
    use std::thread::{self, JoinHandle};

    use scheduler::StopHandle;
    use signal_hook::consts::{SIGINT, SIGTERM};
    use signal_hook::iterator::{Handle, Signals};
    use tracing::debug;

    #[derive(Debug)]
    pub(super) struct Forwarder {
        signals: Handle,
        thread: JoinHandle<()>,
    }

    impl Forwarder {
        pub(super) fn spawn(stop: StopHandle) -> io::Result<Self> {
            let mut signals = Signals::new([SIGINT, SIGTERM])?;
            let handle = signals.handle();
            let thread = thread::Builder::new()
                .name("dirmirror-signals".to_string())
                .spawn(move || {
                    for signal in signals.forever() {
                        debug!(target: "dirmirror::cli", signal, "stop requested");
                        stop.stop();
                    }
                })?;
            Ok(Self {
                signals: handle,
                thread,
            })
        }

        pub(super) fn shutdown(self) {
            self.signals.close();
            let _ = self.thread.join();
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use scheduler::StopSignal;
    use std::time::Duration;

    #[test]
    fn sigterm_requests_stop() {
        let stop = StopSignal::new();
        let forwarder = forward_stop_signals(stop.handle()).expect("register");

        signal_hook::low_level::raise(signal_hook::consts::SIGTERM).expect("raise");

        assert!(stop.wait_timeout(Duration::from_secs(10)));
        drop(forwarder);
    }
}
