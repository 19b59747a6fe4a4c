//! Sinusoidal height and cloud samplers.
//!
//! Terrain height blends two sine components of x and z at distinct spatial
//! wavelengths, attenuated toward zero near the world origin so the spawn
//! area is flat. The cloud sampler sums three sinusoids and gates a cloud
//! band on a fixed threshold. All tuning constants are visual choices carried
//! over unchanged; they are named here rather than inlined.

/// Radial distance below which terrain height is attenuated toward zero.
pub const ATTENUATION_RADIUS: f64 = 100.0;

/// Amplitude of the x-axis height component.
pub const HEIGHT_X_AMPLITUDE: f64 = 1.7;

/// Amplitude of the z-axis height component.
pub const HEIGHT_Z_AMPLITUDE: f64 = 2.2;

/// Cloud bands exist where the three-sinusoid sum exceeds this value.
pub const CLOUD_SUM_THRESHOLD: f64 = 20.0;

/// Nominal altitude of the cloud layer.
pub const CLOUD_ALTITUDE: f64 = 35.0;

/// Wavelength of the x-driven jitter on the band's lower bound.
pub const CLOUD_JITTER_X_WAVE: f64 = 17.0;

/// Wavelength of the z-driven jitter on the band's upper bound.
pub const CLOUD_JITTER_Z_WAVE: f64 = 22.0;

/// Divisor of the x-shear term inside the cloud z-component.
const CLOUD_SHEAR_DIVISOR: f64 = 35.0;

/// Wavelength of the diagonal blend term in the cloud sum.
const CLOUD_BLEND_WAVE: f64 = 17.0;

/// Samples the base terrain height for a column at `(x, z)`.
///
/// Combines independent sine components of x and z at the given wavelengths,
/// then scales by `min(1, distance / ATTENUATION_RADIUS)` so terrain
/// flattens smoothly within [`ATTENUATION_RADIUS`] of the origin.
pub fn height_sample(x: f64, z: f64, x_wave: f64, z_wave: f64) -> f64 {
    let xs = HEIGHT_X_AMPLITUDE * (x / x_wave).sin();
    let zs = HEIGHT_Z_AMPLITUDE * (z / z_wave).sin();
    let d = (x * x + z * z).sqrt();
    (xs + zs) * (d / ATTENUATION_RADIUS).min(1.0)
}

/// Returns the nominal cloud altitude for the column at `(x, z)`, or `None`
/// if the column has no cloud band.
///
/// Three phase-offset sinusoids are summed; a band exists only where the sum
/// exceeds [`CLOUD_SUM_THRESHOLD`].
pub fn cloud_ceiling(x: f64, z: f64, x_wave: f64, z_wave: f64) -> Option<f64> {
    let xs = 5.0 + 5.0 * (5.0 + x / x_wave).sin();
    let zs = 6.0 + 4.0 * (8.0 + z / z_wave - x / CLOUD_SHEAR_DIVISOR).sin();
    let ss = 3.0 + 7.0 * ((x + z) / CLOUD_BLEND_WAVE).sin();
    (xs + zs + ss > CLOUD_SUM_THRESHOLD).then_some(CLOUD_ALTITUDE)
}

/// Jittered bounds of a cloud band centered on `altitude`.
///
/// The lower bound dips by a sine of x, the upper bound rises by a sine of z,
/// so band thickness varies per column without repeating the terrain shape.
pub fn cloud_band(altitude: f64, x: f64, z: f64) -> (f64, f64) {
    let lo = altitude - 2.0 * (x / CLOUD_JITTER_X_WAVE).sin();
    let hi = altitude + 3.0 * (z / CLOUD_JITTER_Z_WAVE).sin();
    (lo, hi)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
