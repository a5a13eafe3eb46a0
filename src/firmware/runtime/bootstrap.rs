use esp_hal::analog::adc::{Adc, AdcConfig, Attenuation};
use esp_hal::gpio::{Level, Output, OutputConfig};
use esp_hal::timer::timg::TimerGroup;
use esp_hal::uart::{Config as UartConfig, Uart};
use esp_rtos::embassy::Executor;
use static_cell::StaticCell;

use super::super::quiz::{demo::DEMO_QUESTIONS, QuestionBank};
use super::super::sensing::{MuxAdcBus, SensorArray};
use super::super::ui::ui_task;
use super::console_task::console_task;
use super::game_task::game_task;

static EXECUTOR: StaticCell<Executor> = StaticCell::new();
static BANK: QuestionBank = QuestionBank::new(&DEMO_QUESTIONS);

pub fn run() -> ! {
    let peripherals = esp_hal::init(esp_hal::Config::default());
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // 16:1 mux selector lines, and the active-low enable held asserted.
    let select = [
        Output::new(peripherals.GPIO14, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO27, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO26, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO25, Level::Low, OutputConfig::default()),
    ];
    let enable = Output::new(peripherals.GPIO33, Level::Low, OutputConfig::default());

    let mut adc_config = AdcConfig::new();
    let input = adc_config.enable_pin(peripherals.GPIO35, Attenuation::_11dB);
    let adc = Adc::new(peripherals.ADC1, adc_config);
    let sensors = SensorArray::new(MuxAdcBus::new(select, enable, adc, input));

    let uart = Uart::new(peripherals.UART0, UartConfig::default())
        .expect("uart0 init")
        .with_tx(peripherals.GPIO1)
        .with_rx(peripherals.GPIO3)
        .into_async();

    esp_println::println!("boot: quizdome bank_len={}", BANK.len());

    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.must_spawn(game_task(sensors, &BANK));
        spawner.must_spawn(console_task(uart));
        spawner.must_spawn(ui_task(&BANK));
    })
}
