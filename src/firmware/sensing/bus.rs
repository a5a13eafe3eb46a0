use esp_hal::analog::adc::{Adc, AdcPin};
use esp_hal::gpio::{Level, Output};
use esp_hal::peripherals::{ADC1, GPIO35};
use esp_hal::Blocking;

/// Hardware seam for the multiplexed sensor front-end. Both calls are
/// treated as infallible; out-of-range analog conditions are not detected
/// at this layer.
pub(crate) trait SensorBus {
    /// Drives the 4-bit mux selector. The analog path needs the settle
    /// delay before the next `sample` is meaningful.
    fn select_channel(&mut self, channel: u8);
    fn sample(&mut self) -> u16;
}

/// 16:1 analog mux on four selector lines plus one ADC input.
pub(crate) struct MuxAdcBus {
    select: [Output<'static>; 4],
    // Active-low enable, held low for the lifetime of the device.
    _enable: Output<'static>,
    adc: Adc<'static, ADC1<'static>, Blocking>,
    input: AdcPin<GPIO35<'static>, ADC1<'static>>,
}

impl MuxAdcBus {
    pub(crate) fn new(
        select: [Output<'static>; 4],
        enable: Output<'static>,
        adc: Adc<'static, ADC1<'static>, Blocking>,
        input: AdcPin<GPIO35<'static>, ADC1<'static>>,
    ) -> Self {
        Self {
            select,
            _enable: enable,
            adc,
            input,
        }
    }
}

impl SensorBus for MuxAdcBus {
    fn select_channel(&mut self, channel: u8) {
        for (bit, line) in self.select.iter_mut().enumerate() {
            line.set_level(Level::from(channel & (1 << bit) != 0));
        }
    }

    fn sample(&mut self) -> u16 {
        nb::block!(self.adc.read_oneshot(&mut self.input)).unwrap_or(0)
    }
}
