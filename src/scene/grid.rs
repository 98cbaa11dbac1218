use super::braille::DotCanvas;
use super::RenderState;

/// Grid lines at every integer multiple of the unit scale from the origin,
/// mirrored on both sides, spanning the full canvas.
pub fn draw_grid(canvas: &mut DotCanvas, state: &RenderState) {
    let (ox, oy) = state.origin;
    let w = canvas.grid_w as f64 - 1.0;
    let h = canvas.grid_h as f64 - 1.0;
    let step = state.unit_scale;
    if step < 1.0 {
        return;
    }

    let mut x = step;
    while x <= w - ox {
        canvas.line(ox + x, 0.0, ox + x, h);
        canvas.line(ox - x, 0.0, ox - x, h);
        x += step;
    }
    let mut y = step;
    while y <= h - oy {
        canvas.line(0.0, oy + y, w, oy + y);
        canvas.line(0.0, oy - y, w, oy - y);
        y += step;
    }
}

/// The two axes through the canvas center.
pub fn draw_axes(canvas: &mut DotCanvas, state: &RenderState) {
    let (ox, oy) = state.origin;
    let w = canvas.grid_w as f64 - 1.0;
    let h = canvas.grid_h as f64 - 1.0;

    canvas.line(0.0, oy, w, oy);
    canvas.line(ox, 0.0, ox, h);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(canvas: &DotCanvas, unit_scale: f64) -> RenderState {
        RenderState {
            origin: (canvas.grid_w as f64 / 2.0, canvas.grid_h as f64 / 2.0),
            unit_scale,
        }
    }

    #[test]
    fn grid_lines_land_on_scale_multiples() {
        let mut canvas = DotCanvas::new(10, 5);
        let state = state(&canvas, 4.0);
        draw_grid(&mut canvas, &state);
        // Origin is at (10, 10); vertical lines at x = 6 and 14, none at 9.
        assert!(canvas.is_set(14, 0));
        assert!(canvas.is_set(6, 0));
        assert!(!canvas.is_set(9, 0));
    }

    #[test]
    fn axes_cross_at_the_origin() {
        let mut canvas = DotCanvas::new(10, 5);
        let state = state(&canvas, 4.0);
        draw_axes(&mut canvas, &state);
        assert!(canvas.is_set(0, 10));
        assert!(canvas.is_set(19, 10));
        assert!(canvas.is_set(10, 0));
        assert!(canvas.is_set(10, 19));
    }
}
