use libm::{acosf, atan2f, sqrtf};

use super::{ChannelReadings, NoiseFloor, CHANNEL_COUNT};

/// Radius of the sensor shell. Estimates are projected onto this sphere
/// regardless of signal magnitude.
pub(crate) const SHELL_RADIUS: f32 = 15.0;

/// Below this centroid norm the weighted average carries no usable
/// direction and the estimate degrades to the sentinel instead of NaN.
const MIN_CENTROID_NORM: f32 = 1e-6;

const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Fused pointing result of one acquisition cycle, in spherical degrees.
/// `radius == 0` means no stylus was detected this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PolarEstimate {
    pub(crate) radius: f32,
    pub(crate) theta_deg: f32,
    pub(crate) phi_deg: f32,
}

impl PolarEstimate {
    pub(crate) const NO_DETECTION: Self = Self {
        radius: 0.0,
        theta_deg: 0.0,
        phi_deg: 0.0,
    };

    pub(crate) fn is_detection(self) -> bool {
        self.radius > 0.0
    }
}

/// Weighted-centroid fusion of one reading set against the calibrated noise
/// floor. A channel contributes its raw reading as weight when it exceeds
/// its floor, otherwise nothing; the field has to strengthen a signal to
/// register. The raw value (not the excess over the floor) is the weight;
/// the acceptance boxes in the question data are tuned against exactly this
/// weighting.
pub(crate) fn estimate_direction(
    readings: &ChannelReadings,
    floor: &NoiseFloor,
    geometry: &[[f32; 3]; CHANNEL_COUNT],
) -> PolarEstimate {
    let mut weight_sum = 0.0f32;
    let mut x = 0.0f32;
    let mut y = 0.0f32;
    let mut z = 0.0f32;
    for channel in 0..CHANNEL_COUNT {
        let reading = f32::from(readings[channel]);
        if reading <= floor[channel] {
            continue;
        }
        weight_sum += reading;
        x += reading * geometry[channel][0];
        y += reading * geometry[channel][1];
        z += reading * geometry[channel][2];
    }

    if weight_sum <= 0.0 {
        return PolarEstimate::NO_DETECTION;
    }

    let cx = x / weight_sum;
    let cy = y / weight_sum;
    let cz = z / weight_sum;
    let norm = sqrtf(cx * cx + cy * cy + cz * cz);
    if norm <= MIN_CENTROID_NORM {
        // Opposing pads cancelled out; there is no direction to report.
        return PolarEstimate::NO_DETECTION;
    }

    let rx = cx / norm * SHELL_RADIUS;
    let ry = cy / norm * SHELL_RADIUS;
    let rz = cz / norm * SHELL_RADIUS;
    let radius = sqrtf(rx * rx + ry * ry + rz * rz);
    let theta = acosf((rz / radius).clamp(-1.0, 1.0));
    let phi = atan2f(ry, rx);

    PolarEstimate {
        radius,
        theta_deg: theta * RAD_TO_DEG,
        phi_deg: phi * RAD_TO_DEG,
    }
}
