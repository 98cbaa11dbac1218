use ratatui::prelude::*;

/// Braille dot positions within a 2x4 cell:
/// (0,0)=0x01 (1,0)=0x08
/// (0,1)=0x02 (1,1)=0x10
/// (0,2)=0x04 (1,2)=0x20
/// (0,3)=0x40 (1,3)=0x80
pub const DOT_MAP: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40],
    [0x08, 0x10, 0x20, 0x80],
];

/// One drawing layer of sub-character braille dots.
/// Each terminal character cell maps to a 2x4 grid of dots; the dots are
/// close to square in common terminal fonts, so dot space works as the
/// scene's pixel space. Layers render back to front: a layer only touches
/// cells where it has dots, leaving the layers below visible elsewhere.
pub struct DotCanvas {
    grid: Vec<bool>,
    pub grid_w: usize,
    pub grid_h: usize,
    char_w: usize,
    char_h: usize,
}

impl DotCanvas {
    /// Create a dot canvas for the given character-cell dimensions.
    pub fn new(char_w: usize, char_h: usize) -> Self {
        let grid_w = char_w * 2;
        let grid_h = char_h * 4;
        Self {
            grid: vec![false; grid_w * grid_h],
            grid_w,
            grid_h,
            char_w,
            char_h,
        }
    }

    /// Set the dot nearest to a point (bounds-checked).
    pub fn set(&mut self, x: f64, y: f64) {
        let gx = x.round();
        let gy = y.round();
        if gx >= 0.0 && gy >= 0.0 && (gx as usize) < self.grid_w && (gy as usize) < self.grid_h {
            self.grid[gy as usize * self.grid_w + gx as usize] = true;
        }
    }

    /// Draw a line segment, clipped to the canvas before rasterization so
    /// far-away endpoints stay cheap.
    pub fn line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64) {
        let w = self.grid_w as f64;
        let h = self.grid_h as f64;
        if let Some((cx0, cy0, cx1, cy1)) = clip_segment(x0, y0, x1, y1, w - 1.0, h - 1.0) {
            self.bresenham(
                cx0.round() as isize,
                cy0.round() as isize,
                cx1.round() as isize,
                cy1.round() as isize,
            );
        }
    }

    /// Circular arc around (cx, cy) from `start` to `end` radians in drawing
    /// space (Y down). Stepping from `start` toward `end` makes the sweep
    /// direction follow the sign of the angle.
    pub fn arc(&mut self, cx: f64, cy: f64, radius: f64, start: f64, end: f64) {
        if radius < 1.0 || start == end {
            return;
        }
        let steps = ((radius * (end - start).abs()).ceil() as usize).max(8);
        for i in 0..=steps {
            let t = start + (end - start) * (i as f64 / steps as f64);
            self.set(cx + radius * t.cos(), cy + radius * t.sin());
        }
    }

    /// Filled triangle, used for the arrowhead. Small enough that sweeping
    /// lines from the tip across the opposite edge fills it solid.
    pub fn fill_triangle(&mut self, tip: (f64, f64), a: (f64, f64), b: (f64, f64)) {
        let base_len = ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt();
        let steps = (base_len.ceil() as usize).max(1) * 2;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let px = a.0 + (b.0 - a.0) * t;
            let py = a.1 + (b.1 - a.1) * t;
            self.line(tip.0, tip.1, px, py);
        }
    }

    #[cfg(test)]
    pub fn is_set(&self, gx: usize, gy: usize) -> bool {
        gx < self.grid_w && gy < self.grid_h && self.grid[gy * self.grid_w + gx]
    }

    fn bresenham(&mut self, mut x0: isize, mut y0: isize, x1: isize, y1: isize) {
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx: isize = if x0 < x1 { 1 } else { -1 };
        let sy: isize = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            if x0 >= 0 && x0 < self.grid_w as isize && y0 >= 0 && y0 < self.grid_h as isize {
                self.grid[y0 as usize * self.grid_w + x0 as usize] = true;
            }

            if x0 == x1 && y0 == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Encode the dot grid to braille characters and write them to the frame
    /// buffer in a single color.
    pub fn render(&self, frame: &mut Frame, area: Rect, color: (u8, u8, u8)) {
        let (r, g, b) = color;
        for cy in 0..self.char_h {
            for cx in 0..self.char_w {
                let mut braille: u8 = 0;
                let mut has_dots = false;

                for (dx, col) in DOT_MAP.iter().enumerate() {
                    for (dy, &bit) in col.iter().enumerate() {
                        let gx = cx * 2 + dx;
                        let gy = cy * 4 + dy;
                        if gx < self.grid_w && gy < self.grid_h && self.grid[gy * self.grid_w + gx]
                        {
                            braille |= bit;
                            has_dots = true;
                        }
                    }
                }

                if has_dots {
                    let ch = char::from_u32(0x2800 + braille as u32).unwrap_or(' ');
                    let cell = frame
                        .buffer_mut()
                        .cell_mut((area.x + cx as u16, area.y + cy as u16));
                    if let Some(cell) = cell {
                        cell.set_char(ch);
                        cell.set_fg(Color::Rgb(r, g, b));
                    }
                }
            }
        }
    }
}

/// Liang-Barsky clip of a segment against [0, max_x] x [0, max_y].
fn clip_segment(
    x0: f64,
    y0: f64,
    x1: f64,
    y1: f64,
    max_x: f64,
    max_y: f64,
) -> Option<(f64, f64, f64, f64)> {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    let checks = [
        (-dx, x0),
        (dx, max_x - x0),
        (-dy, y0),
        (dy, max_y - y0),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
        } else {
            let t = q / p;
            if p < 0.0 {
                if t > t1 {
                    return None;
                }
                t0 = t0.max(t);
            } else {
                if t < t0 {
                    return None;
                }
                t1 = t1.min(t);
            }
        }
    }

    Some((x0 + t0 * dx, y0 + t0 * dy, x0 + t1 * dx, y0 + t1 * dy))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_sets_every_dot_on_a_row() {
        let mut canvas = DotCanvas::new(4, 2);
        canvas.line(0.0, 3.0, 7.0, 3.0);
        for x in 0..8 {
            assert!(canvas.is_set(x, 3), "dot {} missing", x);
        }
        assert!(!canvas.is_set(0, 2));
    }

    #[test]
    fn line_far_outside_is_clipped_not_hung() {
        let mut canvas = DotCanvas::new(4, 4);
        canvas.line(-1e9, 5.0, 1e9, 5.0);
        for x in 0..8 {
            assert!(canvas.is_set(x, 5));
        }
    }

    #[test]
    fn fully_offscreen_segment_draws_nothing() {
        let mut canvas = DotCanvas::new(4, 4);
        canvas.line(-10.0, -10.0, -2.0, -5.0);
        for y in 0..canvas.grid_h {
            for x in 0..canvas.grid_w {
                assert!(!canvas.is_set(x, y));
            }
        }
    }

    #[test]
    fn triangle_fill_covers_interior() {
        let mut canvas = DotCanvas::new(8, 4);
        canvas.fill_triangle((2.0, 2.0), (12.0, 2.0), (7.0, 12.0));
        // Centroid of the triangle.
        assert!(canvas.is_set(7, 5));
    }

    #[test]
    fn arc_stays_on_the_circle() {
        let mut canvas = DotCanvas::new(16, 8);
        canvas.arc(16.0, 16.0, 10.0, 0.0, -std::f64::consts::FRAC_PI_2);
        // Endpoint of a quarter sweep upward in drawing space.
        assert!(canvas.is_set(26, 16));
        assert!(canvas.is_set(16, 6));
    }
}
