//! Dimmed layer between the host screen and the alert card

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier},
};

use crate::tui::render::colors;

/// Blend every cell in `area` toward the backdrop color by `opacity`.
///
/// Cells keep their symbols so the host screen stays visible underneath.
/// Named and reset colors have no known RGB value; they are replaced by the
/// blended backdrop itself.
pub fn dim(buf: &mut Buffer, area: Rect, opacity: f32) {
    let area = area.intersection(buf.area);
    let opacity = opacity.clamp(0.0, 1.0);
    let fallback = blend(Color::Rgb(255, 255, 255), opacity);

    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell_mut((x, y)) {
                let fg = match cell.fg {
                    Color::Rgb(..) => blend(cell.fg, opacity),
                    _ => fallback,
                };
                let bg = match cell.bg {
                    Color::Rgb(..) => blend(cell.bg, opacity),
                    _ => colors::BACKDROP,
                };
                cell.fg = fg;
                cell.bg = bg;
                cell.modifier.insert(Modifier::DIM);
            }
        }
    }
}

/// Mix `color` with the backdrop, `opacity` of the way toward it.
#[must_use]
pub fn blend(color: Color, opacity: f32) -> Color {
    let Color::Rgb(r, g, b) = color else {
        return color;
    };
    let Color::Rgb(br, bg, bb) = colors::BACKDROP else {
        return color;
    };
    Color::Rgb(
        mix(r, br, opacity),
        mix(g, bg, opacity),
        mix(b, bb, opacity),
    )
}

#[expect(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "result is clamped to the u8 range before the cast"
)]
fn mix(channel: u8, backdrop: u8, opacity: f32) -> u8 {
    let keep = 1.0 - opacity;
    let value = f32::from(channel).mul_add(keep, f32::from(backdrop) * opacity);
    value.round().clamp(0.0, 255.0) as u8
}
