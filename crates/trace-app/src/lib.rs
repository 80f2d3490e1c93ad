pub mod app;
pub mod channel;
pub mod overlay_view;

pub use app::App;
pub use channel::{ChannelSink, drain_into};
pub use overlay_view::{OverlayStyle, paint_overlay};
