//! Everything a host needs to wire tracing into its overlay.
//!
//! ```rust
//! use std::sync::{Arc, Mutex};
//! use trace_core::prelude::*;
//!
//! let overlay: SharedOverlay = Arc::new(Mutex::new(DebugOverlay::new()));
//! let mut log = Log::to_overlay(Arc::clone(&overlay));
//! log.trace("ready", None).unwrap();
//! assert_eq!(overlay.lock().unwrap().len(), 1);
//! ```

pub use crate::config::{ConfigError, TraceConfig};
pub use crate::format::format_output;
pub use crate::overlay::{DebugOverlay, DebugText, OverlaySink, SharedOverlay};
pub use crate::pos_infos::PosInfos;
pub use crate::tracer::{ConsoleTracer, Log, OverlayTracer, TraceError, TraceHandler, Traceable};
pub use crate::{pos_infos, trace, trace_obj};
