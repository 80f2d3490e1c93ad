use crate::tracer::TraceError;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// A positioned, scaled line of text waiting to be drawn by the renderer.
#[derive(Clone, Debug, PartialEq)]
pub struct DebugText {
    pub x: f64,
    pub y: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub text: String,
}

impl DebugText {
    /// New entry at `(x, y)` with unit scale.
    pub fn new(x: f64, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            scale_x: 1.0,
            scale_y: 1.0,
            text: text.into(),
        }
    }

    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
    }
}

/// Collection of debug texts currently shown by the renderer.
///
/// Owned by the host and handed to whatever needs to append or draw. Entries
/// are never removed unless the host calls [`clear`](Self::clear) or opts into
/// a capacity limit, in which case the oldest entry is dropped first.
#[derive(Debug, Default)]
pub struct DebugOverlay {
    texts: VecDeque<DebugText>,
    capacity: Option<usize>,
}

impl DebugOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bounded overlay; a limit of zero is treated as one. Storage grows with
    /// use, not with the limit.
    pub fn with_capacity_limit(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            texts: VecDeque::new(),
            capacity: Some(capacity),
        }
    }

    pub fn capacity_limit(&self) -> Option<usize> {
        self.capacity
    }

    pub fn push(&mut self, text: DebugText) {
        if let Some(capacity) = self.capacity
            && self.texts.len() >= capacity
        {
            if let Some(evicted) = self.texts.pop_front() {
                log::debug!("overlay full ({capacity}), dropping {:?}", evicted.text);
            }
        }
        self.texts.push_back(text);
    }

    pub fn len(&self) -> usize {
        self.texts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DebugText> {
        self.texts.iter()
    }

    /// Just the strings, oldest first.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.texts.iter().map(|t| t.text.as_str())
    }

    pub fn latest(&self) -> Option<&DebugText> {
        self.texts.back()
    }

    pub fn clear(&mut self) {
        self.texts.clear();
    }
}

/// Overlay guarded for hosts that trace from more than one thread.
pub type SharedOverlay = Arc<Mutex<DebugOverlay>>;

/// Destination for finished debug texts.
pub trait OverlaySink {
    fn append(&mut self, text: DebugText) -> Result<(), TraceError>;
}

impl OverlaySink for DebugOverlay {
    fn append(&mut self, text: DebugText) -> Result<(), TraceError> {
        self.push(text);
        Ok(())
    }
}

impl OverlaySink for SharedOverlay {
    fn append(&mut self, text: DebugText) -> Result<(), TraceError> {
        let mut overlay = self.lock().map_err(|_| {
            log::warn!("debug overlay lock poisoned, dropping {:?}", text.text);
            TraceError::OverlayPoisoned
        })?;
        overlay.push(text);
        Ok(())
    }
}

impl<S: OverlaySink + ?Sized> OverlaySink for &mut S {
    fn append(&mut self, text: DebugText) -> Result<(), TraceError> {
        (**self).append(text)
    }
}

impl<S: OverlaySink + ?Sized> OverlaySink for Box<S> {
    fn append(&mut self, text: DebugText) -> Result<(), TraceError> {
        (**self).append(text)
    }
}
