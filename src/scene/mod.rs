pub mod annotation;
mod arrow;
mod braille;
mod grid;

pub use braille::DotCanvas;

use ratatui::prelude::*;

use crate::config::{CanvasConfig, Config};
use crate::theme::Theme;

/// Vector quantities for one frame, as produced by the last action.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SceneInput {
    pub ax: f64,
    pub ay: f64,
    pub magnitude: f64,
    pub angle_deg: f64,
}

/// Derived per-draw state, threaded explicitly through the layers.
#[derive(Debug, Clone, Copy)]
pub struct RenderState {
    /// Canvas point for vector-space (0, 0), fixed at the center, in dots.
    pub origin: (f64, f64),
    /// Dots per unit of vector length.
    pub unit_scale: f64,
}

/// Dots per unit for a vector of the given magnitude, so that vectors of
/// wildly different lengths stay visually comparable and inside the canvas.
/// The clamp keeps the grid readable at both extremes.
pub fn adjust_scale(magnitude: f64, half_extent: f64, canvas: &CanvasConfig) -> f64 {
    if magnitude == 0.0 {
        return canvas.default_scale;
    }
    let target = half_extent * canvas.fill_ratio;
    (target / magnitude).clamp(canvas.min_scale, canvas.max_scale)
}

/// Redraw the whole scene, back to front: grid, axes, vector with arrowhead,
/// angle arc, annotations. When a component is non-finite only the grid and
/// axes render.
pub fn render(frame: &mut Frame, area: Rect, input: &SceneInput, config: &Config, theme: &Theme) {
    if area.width == 0 || area.height == 0 {
        return;
    }
    let char_w = area.width as usize;
    let char_h = area.height as usize;
    let grid_w = char_w * 2;
    let grid_h = char_h * 4;
    let half_extent = grid_w.min(grid_h) as f64 / 2.0;

    let state = RenderState {
        origin: (grid_w as f64 / 2.0, grid_h as f64 / 2.0),
        unit_scale: adjust_scale(input.magnitude, half_extent, &config.canvas),
    };

    let mut grid_layer = DotCanvas::new(char_w, char_h);
    grid::draw_grid(&mut grid_layer, &state);
    grid_layer.render(frame, area, theme.grid());

    let mut axes_layer = DotCanvas::new(char_w, char_h);
    grid::draw_axes(&mut axes_layer, &state);
    axes_layer.render(frame, area, theme.axis());

    // Single-letter axis labels near the far ends.
    annotation::draw_text(
        frame,
        area,
        grid_w as f64 - 15.0,
        state.origin.1 - 5.0,
        "X",
        theme.axis(),
    );
    annotation::draw_text(frame, area, state.origin.0 + 5.0, 15.0, "Y", theme.axis());

    if !input.ax.is_finite() || !input.ay.is_finite() {
        return;
    }

    let mut vector_layer = DotCanvas::new(char_w, char_h);
    arrow::draw_vector(
        &mut vector_layer,
        &state,
        input.ax,
        input.ay,
        config.canvas.arrow_head,
    );
    vector_layer.render(frame, area, theme.accent());

    if input.magnitude > 0.0 {
        let mut arc_layer = DotCanvas::new(char_w, char_h);
        annotation::draw_angle_arc(&mut arc_layer, &state, input.angle_deg, config.labels.arc_radius);
        arc_layer.render(frame, area, theme.text());
    }

    annotation::draw_labels(frame, area, &state, input, &config.labels, theme);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_magnitude_uses_the_default_scale() {
        let canvas = CanvasConfig::default();
        assert_eq!(adjust_scale(0.0, 120.0, &canvas), 20.0);
    }

    #[test]
    fn scale_is_clamped_and_non_increasing() {
        let canvas = CanvasConfig::default();
        let mut previous = f64::INFINITY;
        for m in [0.1, 0.5, 1.0, 3.0, 10.0, 100.0, 1e6] {
            let scale = adjust_scale(m, 120.0, &canvas);
            assert!((canvas.min_scale..=canvas.max_scale).contains(&scale));
            assert!(scale <= previous);
            previous = scale;
        }
    }

    #[test]
    fn mid_range_magnitude_fills_the_target_fraction() {
        let canvas = CanvasConfig::default();
        let scale = adjust_scale(3.0, 120.0, &canvas);
        assert!((scale - 120.0 * 0.65 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn negative_magnitude_pins_to_the_minimum() {
        // The polar panel accepts negative magnitude; the clamp keeps the
        // grid readable instead of inverting it.
        let canvas = CanvasConfig::default();
        assert_eq!(adjust_scale(-5.0, 120.0, &canvas), canvas.min_scale);
    }
}
