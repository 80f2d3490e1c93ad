/// Game objects that can summarise themselves for the debug overlay.
///
/// [`Log::trace_obj`](crate::tracer::Log::trace_obj) renders the summary as
/// `"<name> <state>"` and skips objects reporting no state.
pub trait Traceable {
    fn trace_name(&self) -> &str;

    /// `None` means "nothing changed", and no overlay line is produced.
    fn trace_state(&self) -> Option<String>;

    fn trace(&self) -> Option<String> {
        let state = self.trace_state()?;
        Some(format!("{} {}", self.trace_name(), state))
    }
}
