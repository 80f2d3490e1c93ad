/// Traces a value through a [`Log`](crate::tracer::Log) with call-site
/// position info. Extra arguments become custom params.
///
/// ```rust
/// use std::sync::{Arc, Mutex};
/// use trace_core::prelude::*;
///
/// let overlay: SharedOverlay = Arc::new(Mutex::new(DebugOverlay::new()));
/// let mut log = Log::to_overlay(Arc::clone(&overlay));
/// trace!(log, "x", "y", "z").unwrap();
///
/// let overlay = overlay.lock().unwrap();
/// assert!(overlay.latest().unwrap().text.ends_with(": x, y, z"));
/// ```
#[macro_export]
macro_rules! trace {
    ($log:expr, $value:expr $(, $param:expr)* $(,)?) => {
        $log.trace(&$value, Some(&$crate::pos_infos!($($param),*)))
    };
}

/// Traces a [`Traceable`](crate::tracer::Traceable) with call-site position info.
#[macro_export]
macro_rules! trace_obj {
    ($log:expr, $obj:expr) => {
        $log.trace_obj(&$obj, Some(&$crate::pos_infos!()))
    };
}
