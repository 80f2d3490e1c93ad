use egui::{Align2, Color32, FontId, Id, LayerId, Order, Pos2, Rect, Vec2};
use trace_core::overlay::DebugOverlay;

/// How overlay entries are drawn on screen.
#[derive(Clone, Debug)]
pub struct OverlayStyle {
    /// Font size for an entry with a vertical scale of 1.0
    pub base_font_size: f32,
    pub color: Color32,
    pub line_spacing: f32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            base_font_size: 30.0,
            color: Color32::WHITE,
            line_spacing: 1.2,
        }
    }
}

pub struct OverlayLine<'a> {
    pub pos: Pos2,
    pub font_size: f32,
    pub text: &'a str,
}

/// Lays out the newest entries that fit inside `area`, one line per entry,
/// oldest of those on top. Older entries scroll off the top.
///
/// egui glyphs keep their aspect ratio, so the font size comes from
/// `scale_y` alone; `scale_x` is not rendered.
pub fn layout_overlay<'a>(
    overlay: &'a DebugOverlay,
    style: &OverlayStyle,
    area: Rect,
) -> Vec<OverlayLine<'a>> {
    let line_height = |scale_y: f64| style.base_font_size * scale_y as f32 * style.line_spacing;

    // Walk back from the newest entry until the next one would not fit
    let entries: Vec<_> = overlay.iter().collect();
    let mut used = 0.0;
    let mut first_visible = entries.len();
    for (i, entry) in entries.iter().enumerate().rev() {
        let needed = entry.y as f32 + used + line_height(entry.scale_y);
        if needed > area.height() && first_visible < entries.len() {
            break;
        }
        used += line_height(entry.scale_y);
        first_visible = i;
    }

    let mut cursor_y = 0.0;
    entries[first_visible..]
        .iter()
        .map(|entry| {
            let font_size = style.base_font_size * entry.scale_y as f32;
            let pos = area.min + Vec2::new(entry.x as f32, entry.y as f32 + cursor_y);
            cursor_y += font_size * style.line_spacing;
            OverlayLine {
                pos,
                font_size,
                text: entry.text.as_str(),
            }
        })
        .collect()
}

pub fn paint_overlay(ctx: &egui::Context, overlay: &DebugOverlay, style: &OverlayStyle) {
    if overlay.is_empty() {
        return;
    }

    let painter = ctx.layer_painter(LayerId::new(Order::Foreground, Id::new("debug_overlay")));

    for line in layout_overlay(overlay, style, ctx.content_rect()) {
        painter.text(
            line.pos,
            Align2::LEFT_TOP,
            line.text,
            FontId::monospace(line.font_size),
            style.color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;
    use trace_core::overlay::DebugText;

    fn scaled(text: &str, scale: f64) -> DebugText {
        let mut t = DebugText::new(1.0, 0.0, text);
        t.set_scale(scale, scale);
        t
    }

    fn screen(width: f32, height: f32) -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), Vec2::new(width, height))
    }

    #[test]
    fn entries_stack_downward() {
        let mut overlay = DebugOverlay::new();
        overlay.push(scaled("first", 0.4));
        overlay.push(scaled("second", 0.4));

        let style = OverlayStyle::default();
        let lines = layout_overlay(&overlay, &style, screen(640.0, 480.0));

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "first");
        assert_eq!(lines[0].pos, pos2(1.0, 0.0));
        assert!((lines[0].font_size - 12.0).abs() < 1e-4);

        let expected_y = 12.0 * style.line_spacing;
        assert_eq!(lines[1].text, "second");
        assert!((lines[1].pos.y - expected_y).abs() < 1e-4);
        assert_eq!(lines[1].pos.x, 1.0);
    }

    #[test]
    fn area_offsets_every_line() {
        let mut overlay = DebugOverlay::new();
        overlay.push(scaled("only", 1.0));

        let area = Rect::from_min_size(pos2(10.0, 20.0), Vec2::new(200.0, 200.0));
        let lines = layout_overlay(&overlay, &OverlayStyle::default(), area);
        assert_eq!(lines[0].pos, pos2(11.0, 20.0));
        assert_eq!(lines[0].font_size, 30.0);
    }

    #[test]
    fn newest_entry_stays_on_screen() {
        let mut overlay = DebugOverlay::new();
        for i in 0..100 {
            overlay.push(scaled(&i.to_string(), 0.4));
        }

        let area = screen(640.0, 480.0);
        let lines = layout_overlay(&overlay, &OverlayStyle::default(), area);

        // 14.4pt per line at scale 0.4 fits 33 lines in 480pt
        assert_eq!(lines.len(), 33);
        assert_eq!(lines.last().map(|l| l.text), Some("99"));
        assert_eq!(lines[0].text, "67");
        assert_eq!(lines[0].pos.y, 0.0);
        for line in &lines {
            assert!(line.pos.y + line.font_size <= area.max.y, "{} is off-screen", line.text);
        }
    }

    #[test]
    fn oversized_newest_entry_is_still_drawn() {
        let mut overlay = DebugOverlay::new();
        overlay.push(scaled("old", 1.0));
        overlay.push(scaled("huge", 10.0));

        let lines = layout_overlay(&overlay, &OverlayStyle::default(), screen(100.0, 100.0));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].text, "huge");
    }

    #[test]
    fn horizontal_scale_does_not_change_font_size() {
        let mut overlay = DebugOverlay::new();
        let mut text = DebugText::new(0.0, 0.0, "wide");
        text.set_scale(3.0, 0.5);
        overlay.push(text);

        let lines = layout_overlay(&overlay, &OverlayStyle::default(), screen(640.0, 480.0));
        assert_eq!(lines[0].font_size, 15.0);
    }

    #[test]
    fn empty_overlay_has_no_lines() {
        let overlay = DebugOverlay::new();
        assert!(layout_overlay(&overlay, &OverlayStyle::default(), screen(640.0, 480.0)).is_empty());
    }
}
