use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// A required numeric field did not parse to a finite number.
    #[error("invalid input: not a finite number")]
    InvalidInput,
}

/// Cartesian components of a 2D vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub ax: f64,
    pub ay: f64,
}

/// Polar form of the same vector: length and direction from the +X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    pub magnitude: f64,
    pub angle_deg: f64,
}

/// Parse a user-editable text field into a finite number.
pub fn parse_field(text: &str) -> Result<f64, ConvertError> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or(ConvertError::InvalidInput)
}

/// Convert Cartesian components to polar form.
///
/// The angle is `atan2(ay, ax)` in degrees, range (-180, 180], with the
/// zero vector conventionally at 0°.
pub fn components_to_polar(v: Vector2) -> Result<Polar, ConvertError> {
    if !v.ax.is_finite() || !v.ay.is_finite() {
        return Err(ConvertError::InvalidInput);
    }
    let magnitude = (v.ax * v.ax + v.ay * v.ay).sqrt();
    let angle_deg = v.ay.atan2(v.ax) * (180.0 / PI);
    Ok(Polar { magnitude, angle_deg })
}

/// Convert polar form to Cartesian components.
///
/// Negative magnitude and out-of-range angles are accepted and produce
/// mathematically consistent components.
pub fn polar_to_components(p: Polar) -> Result<Vector2, ConvertError> {
    if !p.magnitude.is_finite() || !p.angle_deg.is_finite() {
        return Err(ConvertError::InvalidInput);
    }
    let angle_rad = p.angle_deg * (PI / 180.0);
    Ok(Vector2 {
        ax: p.magnitude * angle_rad.cos(),
        ay: p.magnitude * angle_rad.sin(),
    })
}
