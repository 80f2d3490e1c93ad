use crate::config::{ConfigError, TraceConfig};
use crate::format::format_output;
use crate::overlay::{DebugText, OverlaySink};
use crate::pos_infos::PosInfos;
use std::fmt::Display;
use thiserror::Error;

mod macros;
pub mod traceable;
pub use traceable::Traceable;


#[derive(Debug, Error)]
pub enum TraceError {
    #[error("Debug overlay lock was poisoned")]
    OverlayPoisoned,

    #[error("Debug overlay receiver has been dropped")]
    SinkClosed,

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Receives every trace call made through a [`Log`].
///
/// Hosts override trace behaviour by installing their own handler with
/// [`Log::set_handler`].
pub trait TraceHandler {
    fn trace(&mut self, value: &dyn Display, infos: Option<&PosInfos>) -> Result<(), TraceError>;
}

/// Default handler: turns each call into one [`DebugText`] on an overlay sink.
pub struct OverlayTracer<S> {
    sink: S,
    config: TraceConfig,
}

impl<S: OverlaySink> OverlayTracer<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            config: TraceConfig::default(),
        }
    }

    pub fn with_config(sink: S, config: TraceConfig) -> Result<Self, TraceError> {
        config.validate()?;
        Ok(Self { sink, config })
    }

    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Formats the call and places it at the configured origin and scale.
    pub fn make_text(&self, value: &dyn Display, infos: Option<&PosInfos>) -> DebugText {
        let mut text = DebugText::new(
            self.config.origin_x,
            self.config.origin_y,
            format_output(value, infos),
        );
        text.set_scale(self.config.scale_x, self.config.scale_y);
        text
    }
}

impl<S: OverlaySink> TraceHandler for OverlayTracer<S> {
    fn trace(&mut self, value: &dyn Display, infos: Option<&PosInfos>) -> Result<(), TraceError> {
        let text = self.make_text(value, infos);
        self.sink.append(text)
    }
}

/// Handler that writes formatted traces to the `log` facade instead of the overlay.
#[derive(Default)]
pub struct ConsoleTracer;

impl TraceHandler for ConsoleTracer {
    fn trace(&mut self, value: &dyn Display, infos: Option<&PosInfos>) -> Result<(), TraceError> {
        log::info!(target: "trace", "{}", format_output(value, infos));
        Ok(())
    }
}

/// Entry point for trace calls, owned by the host.
pub struct Log {
    handler: Box<dyn TraceHandler + Send>,
}

impl Default for Log {
    fn default() -> Self {
        Self::new(ConsoleTracer)
    }
}

impl Log {
    pub fn new(handler: impl TraceHandler + Send + 'static) -> Self {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Log backed by an [`OverlayTracer`] with default placement.
    pub fn to_overlay<S: OverlaySink + Send + 'static>(sink: S) -> Self {
        Self::new(OverlayTracer::new(sink))
    }

    /// Swaps in a new handler and hands back the previous one.
    pub fn set_handler(
        &mut self,
        handler: impl TraceHandler + Send + 'static,
    ) -> Box<dyn TraceHandler + Send> {
        std::mem::replace(&mut self.handler, Box::new(handler))
    }

    pub fn trace(&mut self, value: impl Display, infos: Option<&PosInfos>) -> Result<(), TraceError> {
        self.handler.trace(&value, infos)
    }

    /// Traces a component's state; components with nothing to report are skipped.
    pub fn trace_obj<T: Traceable + ?Sized>(
        &mut self,
        thing: &T,
        infos: Option<&PosInfos>,
    ) -> Result<(), TraceError> {
        match thing.trace() {
            Some(line) => self.trace(line, infos),
            None => Ok(()),
        }
    }
}
