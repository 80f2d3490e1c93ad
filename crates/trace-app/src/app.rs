mod heartbeat;

use crate::channel::{ChannelSink, drain_into};
use crate::overlay_view::{OverlayStyle, paint_overlay};
use crossbeam_channel::Receiver;
use heartbeat::Heartbeat;
use std::time::Duration;
use trace_core::prelude::*;

/// Demo host: owns the overlay, feeds it from a channel, and draws it every frame.
pub struct App {
    overlay: DebugOverlay,
    overlay_rx: Receiver<DebugText>,
    log: Log,
    style: OverlayStyle,

    message: String,
    heartbeat: Option<Heartbeat>,
    repaint_every: Option<Duration>,
}

impl App {
    pub fn new(config: TraceConfig, heartbeat_interval: Option<Duration>) -> Result<Self, TraceError> {
        config.validate()?;

        let (sink, overlay_rx) = ChannelSink::unbounded();
        let log = Log::new(OverlayTracer::with_config(sink.clone(), config.clone())?);

        let heartbeat = match heartbeat_interval {
            Some(interval) => {
                let worker_log = Log::new(OverlayTracer::with_config(sink, config.clone())?);
                Some(Heartbeat::spawn(worker_log, interval))
            }
            None => None,
        };

        Ok(Self {
            overlay: config.new_overlay(),
            overlay_rx,
            log,
            style: OverlayStyle::default(),
            message: String::new(),
            heartbeat,
            repaint_every: heartbeat_interval,
        })
    }

    pub fn with_style(mut self, style: OverlayStyle) -> Self {
        self.style = style;
        self
    }

    pub fn overlay(&self) -> &DebugOverlay {
        &self.overlay
    }

    /// Traces through the app's own log; the entry shows up on the next drain.
    pub fn trace_message(&mut self, message: &str) {
        if let Err(e) = trace!(self.log, message) {
            log::warn!("trace failed: {e}");
        }
    }

    /// Pulls pending entries into the overlay.
    pub fn sync_overlay(&mut self) -> usize {
        drain_into(&self.overlay_rx, &mut self.overlay)
    }

    /// Stops the background heartbeat, if one is running.
    pub fn stop_heartbeat(&mut self) {
        if let Some(mut heartbeat) = self.heartbeat.take() {
            heartbeat.stop();
        }
    }

    pub fn clear_overlay(&mut self) {
        self.sync_overlay();
        self.overlay.clear();
    }

    fn draw_controls(&mut self, ctx: &egui::Context) {
        let mut trace_clicked = false;
        let mut clear_clicked = false;

        egui::TopBottomPanel::bottom("trace_controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(&mut self.message);
                let submitted =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                trace_clicked = ui.button("Trace").clicked() || submitted;
                clear_clicked = ui.button("Clear").clicked();

                ui.separator();
                ui.label(format!("{} entries", self.overlay.len()));
                if let Some(limit) = self.overlay.capacity_limit() {
                    ui.label(format!("(max {limit})"));
                }
                if self.heartbeat.is_some() {
                    ui.label("heartbeat on");
                }
            });
        });

        if trace_clicked && !self.message.is_empty() {
            let message = std::mem::take(&mut self.message);
            self.trace_message(&message);
        }
        if clear_clicked {
            self.clear_overlay();
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_overlay();
        self.draw_controls(ctx);

        egui::CentralPanel::default().show(ctx, |_ui| {});
        paint_overlay(ctx, &self.overlay, &self.style);

        if let Some(interval) = self.repaint_every {
            ctx.request_repaint_after(interval);
        }
    }
}
