use thiserror::Error;

pub const DEFAULT_ORIGIN_X: f64 = 1.0;
pub const DEFAULT_ORIGIN_Y: f64 = 0.0;
pub const DEFAULT_SCALE: f64 = 0.4;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Origin must be finite, got ({0}, {1})")]
    InvalidOrigin(f64, f64),

    #[error("Scale must be finite and positive, got ({0}, {1})")]
    InvalidScale(f64, f64),

    #[error("Overlay capacity must be at least 1")]
    ZeroCapacity,
}

/// Where and how large new debug texts are placed.
#[derive(Clone, Debug, PartialEq)]
pub struct TraceConfig {
    pub origin_x: f64,
    pub origin_y: f64,
    pub scale_x: f64,
    pub scale_y: f64,

    /// `None` keeps every entry until the host clears the overlay.
    pub max_entries: Option<usize>,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            origin_x: DEFAULT_ORIGIN_X,
            origin_y: DEFAULT_ORIGIN_Y,
            scale_x: DEFAULT_SCALE,
            scale_y: DEFAULT_SCALE,
            max_entries: None,
        }
    }
}

impl TraceConfig {
    pub fn with_origin(mut self, x: f64, y: f64) -> Self {
        self.origin_x = x;
        self.origin_y = y;
        self
    }

    pub fn with_scale(mut self, scale_x: f64, scale_y: f64) -> Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn with_max_entries(mut self, max_entries: Option<usize>) -> Self {
        self.max_entries = max_entries;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.origin_x.is_finite() || !self.origin_y.is_finite() {
            return Err(ConfigError::InvalidOrigin(self.origin_x, self.origin_y));
        }

        let scale_ok = |s: f64| s.is_finite() && s > 0.0;
        if !scale_ok(self.scale_x) || !scale_ok(self.scale_y) {
            return Err(ConfigError::InvalidScale(self.scale_x, self.scale_y));
        }

        if self.max_entries == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }

    /// Fresh overlay honouring `max_entries`.
    pub fn new_overlay(&self) -> crate::overlay::DebugOverlay {
        match self.max_entries {
            Some(limit) => crate::overlay::DebugOverlay::with_capacity_limit(limit),
            None => crate::overlay::DebugOverlay::new(),
        }
    }
}
