use super::CHANNEL_COUNT;

/// Cartesian position of each sensor pad on the 15-unit shell, indexed by
/// mux channel. The pads follow a spiral from near the top of the dome to
/// near the bottom; the table comes straight from the shell layout and must
/// not be reordered independently of the harness wiring.
pub(crate) const SENSOR_POSITIONS: [[f32; 3]; CHANNEL_COUNT] = [
    [5.219_779, 0.0, 14.062_5],
    [-6.447_862, -5.906_769, 12.187_5],
    [0.952_308, 10.851_058, 10.312_5],
    [7.545_834, -9.842_204, 8.437_5],
    [-13.282_087, 2.349_414, 6.562_5],
    [12.022_472, 7.647_713, 4.687_5],
    [-3.825_002, -14.228_816, 2.812_5],
    [-6.900_089, 13.285_702, 0.937_5],
    [14.062_273, -5.135_52, -0.937_5],
    [-13.619_279, -5.621_84, -2.812_5],
    [6.039_283, 12.905_596, -4.687_5],
    [4.036_823, -12.870_029, -6.562_5],
    [-10.730_314, 6.218_436, -8.437_5],
    [10.638_7, 2.338_888, -10.312_5],
    [-5.029_172, -7.153_48, -12.187_5],
    [-0.670_797, 5.176_497, -14.062_5],
];
