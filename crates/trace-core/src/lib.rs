// Trace core modules
pub mod config;
pub mod format;
pub mod overlay;
pub mod pos_infos;
pub mod prelude;
pub mod tracer;

// Re-exports
pub use config::{ConfigError, TraceConfig};
pub use format::format_output;
pub use overlay::{DebugOverlay, DebugText, OverlaySink, SharedOverlay};
pub use pos_infos::PosInfos;
pub use tracer::{Log, OverlayTracer, TraceError, TraceHandler, Traceable};
