use embassy_time::Timer;

use super::super::config::SETTLE_US;
use super::{ChannelReadings, NoiseFloor, SensorBus, CHANNEL_COUNT};

/// Owns the sensor bus and runs whole-shell acquisition passes. Each pass
/// pays the per-channel settle delay as an awaited timer, so other tasks
/// keep running while the analog path settles.
pub(crate) struct SensorArray<B> {
    bus: B,
}

impl<B: SensorBus> SensorArray<B> {
    pub(crate) fn new(bus: B) -> Self {
        Self { bus }
    }

    /// One full sweep of all 16 channels: select, settle, sample.
    pub(crate) async fn read_all(&mut self) -> ChannelReadings {
        let mut readings = [0u16; CHANNEL_COUNT];
        for (channel, slot) in readings.iter_mut().enumerate() {
            self.bus.select_channel(channel as u8);
            Timer::after_micros(SETTLE_US).await;
            *slot = self.bus.sample();
        }
        readings
    }

    /// One-shot noise-floor pass. Assumes no stylus is near the shell.
    /// The floor is built in a local array and returned whole, so a
    /// consumer never observes a half-updated calibration.
    pub(crate) async fn calibrate(&mut self, samples_per_channel: u16) -> NoiseFloor {
        let mut floor = [0.0f32; CHANNEL_COUNT];
        for (channel, slot) in floor.iter_mut().enumerate() {
            self.bus.select_channel(channel as u8);
            let mut sum = 0u32;
            for _ in 0..samples_per_channel {
                Timer::after_micros(SETTLE_US).await;
                sum += u32::from(self.bus.sample());
            }
            *slot = sum as f32 / f32::from(samples_per_channel);
        }
        floor
    }

    /// Folds one acquisition sweep into a shuffle seed. Channel noise on an
    /// idle shell is the only entropy source this board has.
    pub(crate) async fn harvest_seed(&mut self) -> u32 {
        let readings = self.read_all().await;
        readings
            .iter()
            .fold(0x811C_9DC5u32, |acc, &reading| {
                (acc ^ u32::from(reading)).wrapping_mul(16_777_619)
            })
    }
}
