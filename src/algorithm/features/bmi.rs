//! Body-mass index

/// Body-mass index in kg/m².
///
/// Undefined when either input is missing; a missing value is never
/// imputed as zero. A zero height yields an infinite result, passed through.
#[must_use]
pub fn bmi(weight_kg: Option<f64>, height_m: Option<f64>) -> Option<f64> {
    match (weight_kg, height_m) {
        (Some(weight), Some(height)) => Some(weight / height.powi(2)),
        _ => None,
    }
}
