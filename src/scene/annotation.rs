//! Label placement and cell-level text drawing.
//!
//! Placement is pure geometry on the dot grid so the quadrant table and the
//! edge handling can be tested without a terminal.

use ratatui::prelude::*;

use super::braille::DotCanvas;
use super::{RenderState, SceneInput};
use crate::config::LabelConfig;
use crate::theme::Theme;

const EPS: f64 = 1e-9;

/// Width of a string on the dot grid (each cell is two dots wide).
pub fn text_width(text: &str) -> f64 {
    (text.chars().count() * 2) as f64
}

/// Offset in dots from the arrowhead tip to the component label, chosen to
/// bias the text away from the vector body. Cases, in order: vector on the
/// Y axis, vector on the X axis, then the quadrant table.
pub fn component_label_offset(ax: f64, ay: f64, text_w: f64, offset: f64) -> (f64, f64) {
    let half = offset / 2.0;
    let below = offset * 2.0;

    if ax.abs() < EPS && ay.abs() >= EPS {
        (half, if ay > 0.0 { -offset } else { below })
    } else if ay.abs() < EPS && ax.abs() >= EPS {
        (if ax > 0.0 { half } else { -half - text_w }, -offset)
    } else {
        let dx = if ax < 0.0 { -offset - text_w } else { offset };
        let dy = if (ay < 0.0 && ax >= 0.0) || (ay > 0.0 && ax < 0.0) {
            below
        } else {
            -offset
        };
        (dx, dy)
    }
}

/// Anchor for the magnitude/angle lines: below-right of the origin, flipped
/// above when too close to the bottom edge, shifted and clamped so the
/// widest line keeps the margin on both sides.
pub fn info_label_position(
    origin: (f64, f64),
    widest: f64,
    canvas_w: f64,
    canvas_h: f64,
    offset: f64,
    margin: f64,
) -> (f64, f64, f64) {
    let (ox, oy) = origin;
    let mut x = ox + offset;
    let mut y_mag = oy + offset * 2.0;
    let mut y_angle = oy + offset * 3.5;

    if y_angle > canvas_h - margin {
        y_mag = oy - offset * 3.5;
        y_angle = oy - offset * 2.0;
    }
    if x + widest > canvas_w - margin {
        x = canvas_w - margin - widest;
    }
    if x < margin {
        x = margin;
    }
    (x, y_mag, y_angle)
}

/// Decorative arc from the +X direction to the vector's angle. Drawing-space
/// angles are negated (Y grows downward), and stepping from zero toward the
/// target keeps the sweep direction matched to the sign of the angle.
pub fn draw_angle_arc(canvas: &mut DotCanvas, state: &RenderState, angle_deg: f64, cap: f64) {
    let (ox, oy) = state.origin;
    let radius = cap.min(state.unit_scale * 0.8);
    canvas.arc(ox, oy, radius, 0.0, -angle_deg.to_radians());
}

/// The two text annotations: component pair near the arrowhead, magnitude
/// and angle near the origin.
pub fn draw_labels(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState,
    input: &SceneInput,
    labels: &LabelConfig,
    theme: &Theme,
) {
    let (ox, oy) = state.origin;
    let color = theme.text();

    if input.magnitude == 0.0 {
        draw_text(frame, area, ox + 5.0, oy - 5.0, "(0, 0) at Origin", color);
    } else {
        let text = format!("(Ax: {:.1}, Ay: {:.1})", input.ax, input.ay);
        let (dx, dy) = component_label_offset(input.ax, input.ay, text_width(&text), labels.offset);
        let tip_x = ox + input.ax * state.unit_scale;
        let tip_y = oy - input.ay * state.unit_scale;
        draw_text(frame, area, tip_x + dx, tip_y + dy, &text, color);
    }

    let mag_text = format!("Mag: {:.2}", input.magnitude);
    let angle_text = format!("θ: {:.1}°", input.angle_deg);
    let widest = text_width(&mag_text).max(text_width(&angle_text));
    let canvas_w = (area.width as usize * 2) as f64;
    let canvas_h = (area.height as usize * 4) as f64;
    let (x, y_mag, y_angle) = info_label_position(
        (ox, oy),
        widest,
        canvas_w,
        canvas_h,
        labels.offset,
        labels.margin,
    );
    draw_text(frame, area, x, y_mag, &mag_text, color);
    draw_text(frame, area, x, y_angle, &angle_text, color);
}

/// Write a string into the frame buffer at a dot-grid position, converted to
/// the nearest character cell and clipped to the area.
pub fn draw_text(
    frame: &mut Frame,
    area: Rect,
    dot_x: f64,
    dot_y: f64,
    text: &str,
    color: (u8, u8, u8),
) {
    let cy = (dot_y / 4.0).round() as isize;
    if cy < 0 || cy >= area.height as isize {
        return;
    }
    let start_cx = (dot_x / 2.0).round() as isize;
    let (r, g, b) = color;

    for (i, ch) in text.chars().enumerate() {
        let cx = start_cx + i as isize;
        if cx < 0 || cx >= area.width as isize {
            continue;
        }
        let cell = frame
            .buffer_mut()
            .cell_mut((area.x + cx as u16, area.y + cy as u16));
        if let Some(cell) = cell {
            cell.set_char(ch);
            cell.set_fg(Color::Rgb(r, g, b));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OFFSET: f64 = 10.0;
    const MARGIN: f64 = 10.0;

    #[test]
    fn quadrant_table() {
        let w = 20.0;
        // Q1: up-right of the tip.
        assert_eq!(component_label_offset(3.0, 4.0, w, OFFSET), (10.0, -10.0));
        // Q2: left of the tip, dropped below.
        assert_eq!(component_label_offset(-3.0, 4.0, w, OFFSET), (-30.0, 20.0));
        // Q3: left of the tip, kept above.
        assert_eq!(component_label_offset(-3.0, -4.0, w, OFFSET), (-30.0, -10.0));
        // Q4: right of the tip, dropped below.
        assert_eq!(component_label_offset(3.0, -4.0, w, OFFSET), (10.0, 20.0));
    }

    #[test]
    fn axis_aligned_cases() {
        let w = 20.0;
        assert_eq!(component_label_offset(0.0, 5.0, w, OFFSET), (5.0, -10.0));
        assert_eq!(component_label_offset(0.0, -5.0, w, OFFSET), (5.0, 20.0));
        assert_eq!(component_label_offset(5.0, 0.0, w, OFFSET), (5.0, -10.0));
        assert_eq!(component_label_offset(-5.0, 0.0, w, OFFSET), (-25.0, -10.0));
    }

    #[test]
    fn info_label_default_sits_below_right() {
        let (x, y_mag, y_angle) =
            info_label_position((100.0, 100.0), 20.0, 200.0, 200.0, OFFSET, MARGIN);
        assert_eq!((x, y_mag, y_angle), (110.0, 120.0, 135.0));
    }

    #[test]
    fn info_label_flips_above_near_the_bottom() {
        let (_, y_mag, y_angle) =
            info_label_position((100.0, 190.0), 20.0, 200.0, 200.0, OFFSET, MARGIN);
        assert!(y_mag < 190.0 && y_angle < 190.0);
        assert_eq!((y_mag, y_angle), (155.0, 170.0));
    }

    #[test]
    fn info_label_shifts_left_of_the_right_edge() {
        let (x, _, _) = info_label_position((180.0, 100.0), 40.0, 200.0, 200.0, OFFSET, MARGIN);
        assert_eq!(x, 150.0);
    }

    #[test]
    fn info_label_clamps_to_the_left_margin() {
        // A canvas narrower than the text: the left clamp wins.
        let (x, _, _) = info_label_position((10.0, 100.0), 90.0, 100.0, 200.0, OFFSET, MARGIN);
        assert_eq!(x, MARGIN);
    }
}
