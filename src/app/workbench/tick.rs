use super::Workbench;
use std::sync::mpsc::{RecvTimeoutError, TryRecvError};
use std::time::{Duration, Instant};

impl Workbench {
    /// Dispatch completions that have already arrived (bounded per call).
    pub fn tick(&mut self) -> bool {
        let mut changed = false;
        for _ in 0..super::MAX_MESSAGE_DRAIN_PER_TICK {
            match self.rx.try_recv() {
                Ok(msg) => changed |= self.handle_message(msg),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::error!("runtime channel disconnected");
                    break;
                }
            }
        }
        changed
    }

    /// Block for at most `timeout` waiting for one completion.
    pub fn wait_message(&mut self, timeout: Duration) -> bool {
        match self.rx.recv_timeout(timeout) {
            Ok(msg) => self.handle_message(msg),
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => {
                tracing::error!("runtime channel disconnected");
                false
            }
        }
    }

    /// Handle completions until nothing is in flight or `timeout` elapses.
    /// Returns true when everything settled.
    pub fn settle(&mut self, timeout: Duration) -> bool {
        let deadline = Instant::now() + timeout;
        while self.in_flight > 0 {
            let now = Instant::now();
            if now >= deadline {
                tracing::warn!(in_flight = self.in_flight, "remote calls still pending");
                return false;
            }
            self.wait_message(deadline - now);
        }
        true
    }
}
