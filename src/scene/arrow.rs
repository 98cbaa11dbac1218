use std::f64::consts::FRAC_PI_6;

use super::braille::DotCanvas;
use super::RenderState;

/// The vector as a line from the origin with a filled triangular arrowhead.
/// Drawing-space Y grows downward, so `ay` is flipped.
pub fn draw_vector(canvas: &mut DotCanvas, state: &RenderState, ax: f64, ay: f64, head_len: f64) {
    let (ox, oy) = state.origin;
    let end_x = ox + ax * state.unit_scale;
    let end_y = oy - ay * state.unit_scale;

    canvas.line(ox, oy, end_x, end_y);

    if ax == 0.0 && ay == 0.0 {
        return;
    }

    // Arrowhead edges sit ±30° off the vector's drawing-space direction.
    let angle = (end_y - oy).atan2(end_x - ox);
    let left = (
        end_x - head_len * (angle - FRAC_PI_6).cos(),
        end_y - head_len * (angle - FRAC_PI_6).sin(),
    );
    let right = (
        end_x - head_len * (angle + FRAC_PI_6).cos(),
        end_y - head_len * (angle + FRAC_PI_6).sin(),
    );
    canvas.fill_triangle((end_x, end_y), left, right);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vector_reaches_its_endpoint() {
        let mut canvas = DotCanvas::new(16, 8);
        let state = RenderState {
            origin: (16.0, 16.0),
            unit_scale: 4.0,
        };
        draw_vector(&mut canvas, &state, 3.0, 0.0, 4.0);
        // Endpoint at (16 + 12, 16).
        assert!(canvas.is_set(28, 16));
        assert!(canvas.is_set(20, 16));
    }

    #[test]
    fn upward_component_is_flipped() {
        let mut canvas = DotCanvas::new(16, 8);
        let state = RenderState {
            origin: (16.0, 16.0),
            unit_scale: 4.0,
        };
        draw_vector(&mut canvas, &state, 0.0, 2.0, 4.0);
        // +ay draws above the origin.
        assert!(canvas.is_set(16, 8));
        assert!(!canvas.is_set(16, 24));
    }

    #[test]
    fn zero_vector_has_no_arrowhead() {
        let mut canvas = DotCanvas::new(16, 8);
        let state = RenderState {
            origin: (16.0, 16.0),
            unit_scale: 20.0,
        };
        draw_vector(&mut canvas, &state, 0.0, 0.0, 4.0);
        // Only the origin dot from the degenerate line.
        let lit: usize = (0..canvas.grid_h)
            .flat_map(|y| (0..canvas.grid_w).map(move |x| (x, y)))
            .filter(|&(x, y)| canvas.is_set(x, y))
            .count();
        assert_eq!(lit, 1);
    }
}
