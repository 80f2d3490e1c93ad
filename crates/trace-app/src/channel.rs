use crossbeam_channel::{Receiver, Sender};
use trace_core::overlay::{DebugOverlay, DebugText, OverlaySink};
use trace_core::tracer::TraceError;

/// Overlay sink for producers on other threads.
///
/// Entries travel over the channel and are moved into the UI-owned overlay
/// with [`drain_into`] once per frame.
#[derive(Clone)]
pub struct ChannelSink {
    tx: Sender<DebugText>,
}

impl ChannelSink {
    pub fn new(tx: Sender<DebugText>) -> Self {
        Self { tx }
    }

    pub fn unbounded() -> (Self, Receiver<DebugText>) {
        let (tx, rx) = crossbeam_channel::unbounded();
        (Self::new(tx), rx)
    }
}

impl OverlaySink for ChannelSink {
    fn append(&mut self, text: DebugText) -> Result<(), TraceError> {
        self.tx.send(text).map_err(|_| TraceError::SinkClosed)
    }
}

/// Moves every pending entry into `overlay`, returning how many were moved.
pub fn drain_into(rx: &Receiver<DebugText>, overlay: &mut DebugOverlay) -> usize {
    let mut moved = 0;
    for text in rx.try_iter() {
        overlay.push(text);
        moved += 1;
    }
    moved
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use trace_core::tracer::Log;

    #[test]
    fn drain_moves_entries_in_order() {
        let (mut sink, rx) = ChannelSink::unbounded();
        sink.append(DebugText::new(1.0, 0.0, "a")).unwrap();
        sink.append(DebugText::new(1.0, 0.0, "b")).unwrap();

        let mut overlay = DebugOverlay::new();
        assert_eq!(drain_into(&rx, &mut overlay), 2);
        assert_eq!(overlay.texts().collect::<Vec<_>>(), ["a", "b"]);

        // Nothing left over
        assert_eq!(drain_into(&rx, &mut overlay), 0);
        assert_eq!(overlay.len(), 2);
    }

    #[test]
    fn dropped_receiver_closes_sink() {
        let (mut sink, rx) = ChannelSink::unbounded();
        drop(rx);
        assert!(matches!(
            sink.append(DebugText::new(0.0, 0.0, "lost")),
            Err(TraceError::SinkClosed)
        ));
    }

    #[test]
    fn traces_from_worker_threads_reach_overlay() {
        let (sink, rx) = ChannelSink::unbounded();

        let workers: Vec<_> = (0..3)
            .map(|n| {
                let sink = sink.clone();
                thread::spawn(move || {
                    let mut log = Log::to_overlay(sink);
                    for i in 0..10 {
                        log.trace(format!("worker {n} step {i}"), None).unwrap();
                    }
                })
            })
            .collect();
        for worker in workers {
            worker.join().unwrap();
        }

        let mut overlay = DebugOverlay::new();
        assert_eq!(drain_into(&rx, &mut overlay), 30);
        assert!(overlay.iter().all(|t| t.scale_x == 0.4 && t.scale_y == 0.4));
    }
}
