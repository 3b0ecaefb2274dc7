//! Signal Actor: Dedicated thread for receiving OS signals.
//!
//! This actor runs in its own thread, blocks on `signal-hook`'s signal
//! iterator and forwards each signal as a [`Notification`]. It never
//! touches render state; the clock loop decides what to do.

use super::messages::Notification;
use crate::error::{ClockError, Result};
use crossbeam_channel::{Sender, TrySendError};
use signal_hook::consts::signal::{SIGHUP, SIGINT, SIGQUIT, SIGTERM, SIGWINCH};
use signal_hook::iterator::{Handle, Signals};
use std::os::raw::c_int;
use std::thread::{self, JoinHandle};

/// Signals the clock listens for.
pub const HANDLED_SIGNALS: [c_int; 5] = [SIGWINCH, SIGINT, SIGTERM, SIGHUP, SIGQUIT];

/// Signal actor that forwards OS signals to the clock loop.
pub struct SignalActor {
    /// Handle to the signal thread.
    handle: Option<JoinHandle<()>>,
    /// Closes the signal iterator, ending the thread.
    signals: Handle,
}

impl SignalActor {
    /// Install the handlers and spawn the signal thread.
    ///
    /// # Arguments
    ///
    /// * `sender` - Channel to send notifications to the clock loop.
    pub fn spawn(sender: Sender<Notification>) -> Result<Self> {
        let mut signals =
            Signals::new(HANDLED_SIGNALS).map_err(|e| ClockError::Signals(e.to_string()))?;
        let close = signals.handle();

        let handle = thread::Builder::new()
            .name("segclock-signals".to_string())
            .spawn(move || {
                Self::run_loop(&mut signals, &sender);
            })?;

        Ok(Self {
            handle: Some(handle),
            signals: close,
        })
    }

    /// Signal the thread to shutdown.
    pub fn shutdown(&self) {
        self.signals.close();
    }

    /// Wait for the signal thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main signal loop.
    fn run_loop(signals: &mut Signals, sender: &Sender<Notification>) {
        for signal in signals.forever() {
            let notification = Notification::from_signal(signal);
            tracing::debug!(signal, ?notification, "signal received");

            let delivered = match notification {
                // A pending resize already covers this one.
                Notification::Resize => match sender.try_send(notification) {
                    Ok(()) | Err(TrySendError::Full(_)) => true,
                    Err(TrySendError::Disconnected(_)) => false,
                },
                Notification::Terminate(_) => sender.send(notification).is_ok(),
            };

            if !delivered {
                // Receiver dropped, exit
                break;
            }
        }
    }
}

impl Drop for SignalActor {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::{bounded, TryRecvError};
    use signal_hook::low_level::raise;
    use std::time::Duration;

    #[test]
    fn test_signal_actor_forwards_resize() {
        let (tx, rx) = bounded(4);
        let actor = SignalActor::spawn(tx).unwrap();

        raise(SIGWINCH).unwrap();
        let notification = rx.recv_timeout(Duration::from_secs(2));
        assert_eq!(notification, Ok(Notification::Resize));

        actor.join();
    }

    #[test]
    fn test_signal_actor_shutdown() {
        let (tx, rx) = bounded(4);
        let actor = SignalActor::spawn(tx).unwrap();
        actor.join();

        // A SIGWINCH raised by another test may still be queued; anything
        // else means the thread forwarded something it should not have.
        assert!(rx.iter().all(|n| n == Notification::Resize));
        assert_eq!(rx.try_recv(), Err(TryRecvError::Disconnected));
    }
}
