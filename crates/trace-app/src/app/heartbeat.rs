use crossbeam_channel::{RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};
use trace_core::tracer::{Log, TraceError};

/// Background thread that traces a tick line on a fixed interval.
pub struct Heartbeat {
    stop_tx: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Heartbeat {
    pub fn spawn(mut log: Log, interval: Duration) -> Self {
        let (stop_tx, stop_rx) = crossbeam_channel::bounded::<()>(1);

        let handle = thread::spawn(move || {
            let started = Instant::now();
            let mut tick: u64 = 0;
            // Wakes early on a stop message or when the sender is dropped
            while let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(interval) {
                tick += 1;
                let elapsed = format!("{:.1}s", started.elapsed().as_secs_f32());
                match trace_core::trace!(log, format!("heartbeat {tick}"), elapsed) {
                    Ok(()) => {}
                    Err(TraceError::SinkClosed) => {
                        log::debug!("heartbeat stopping, overlay receiver closed");
                        break;
                    }
                    Err(e) => log::warn!("heartbeat trace failed: {e}"),
                }
            }
        });

        Self {
            stop_tx: Some(stop_tx),
            handle: Some(handle),
        }
    }

    pub fn stop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take()
            && stop_tx.send(()).is_err()
        {
            log::debug!("heartbeat thread already finished");
        }
        if let Some(handle) = self.handle.take()
            && handle.join().is_err()
        {
            log::warn!("heartbeat thread panicked");
        }
    }
}

impl Drop for Heartbeat {
    fn drop(&mut self) {
        self.stop();
    }
}
