//! ironpad - keypad command decoder for the 200W iron controller.
//!
//! Wiring of the firmware: an Embassy scan task sweeps the 4x4 keypad
//! every 20 ms and feeds the shared repeat-filtered queue; the main
//! loop drains the queue in 100 ms steps, drives the operations
//! engine, and refreshes the live readouts once per second.
//!
//! The analog PSU watchdog runs independently of this core and is not
//! part of this firmware image.

#![no_std]
#![no_main]

mod config;
mod error;
mod keypad;
mod ops;
mod ui;

use defmt::{info, unwrap, warn};
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_rp::adc::{Adc, Channel, Config as AdcConfig, InterruptHandler as AdcInterruptHandler};
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Delay, Duration, Timer};
use embedded_hal_bus::spi::ExclusiveDevice;
use panic_probe as _;

use config::{
    DISPLAY_SPI_HZ, IRON_MAX_TEMP, IRON_MAX_WATT, OPS_POLL_SLEEP_MS, OPS_POLL_WINDOW_MS,
};
use keypad::task::{buffered_keys, next_key, scan_task};
use ops::{OpsEngine, StepResult};
use ui::screen::OledPanel;
use ui::StatusPanel;

bind_interrupts!(struct Irqs {
    ADC_IRQ_FIFO => AdcInterruptHandler;
});

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("ironpad starting");

    // SSD1309 over SPI0 (see config.rs for the pin map)
    let mut spi_cfg = SpiConfig::default();
    spi_cfg.frequency = DISPLAY_SPI_HZ;
    let spi = Spi::new_blocking_txonly(p.SPI0, p.PIN_18, p.PIN_19, spi_cfg);
    let cs = Output::new(p.PIN_17, Level::High);
    let dc = Output::new(p.PIN_20, Level::Low);
    let mut rst = Output::new(p.PIN_28, Level::Low);

    // release the display controller from reset
    Timer::after_millis(10).await;
    rst.set_high();
    Timer::after_millis(10).await;

    let spi_dev = match ExclusiveDevice::new(spi, cs, Delay) {
        Ok(dev) => dev,
        Err(_) => {
            defmt::panic!("display CS pin unusable");
        }
    };
    let mut panel = match OledPanel::new(spi_dev, dc) {
        Ok(panel) => panel,
        Err(e) => {
            defmt::panic!("display init failed: {}", e);
        }
    };

    panel.draw_start_screen();
    Timer::after_secs(1).await;

    let mut engine = OpsEngine::new(panel);
    engine.initialize();

    // keypad matrix: rows driven, columns read with pulldowns
    let rows = [
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
    ];
    let cols = [
        Input::new(p.PIN_6, Pull::Down),
        Input::new(p.PIN_7, Pull::Down),
        Input::new(p.PIN_8, Pull::Down),
        Input::new(p.PIN_9, Pull::Down),
    ];
    unwrap!(spawner.spawn(scan_task(rows, cols)));

    // tip thermocouple on ADC0 (GP26), heater current sense on ADC1 (GP27)
    let mut adc = Adc::new(p.ADC, Irqs, AdcConfig::default());
    let mut tip_ch = Channel::new_pin(p.PIN_26, Pull::None);
    let mut pwr_ch = Channel::new_pin(p.PIN_27, Pull::None);

    loop {
        poll_operations(&mut engine).await;

        // once per window: refresh the measured readouts
        let raw = adc.read(&mut tip_ch).await.unwrap_or(0);
        let tip_temp = u32::from(raw) * IRON_MAX_TEMP / 4095;
        let raw = adc.read(&mut pwr_ch).await.unwrap_or(0);
        let watts = u32::from(raw) * IRON_MAX_WATT / 4095;
        engine.panel_mut().show_tip_temp(tip_temp);
        engine.panel_mut().show_power(watts);
        engine.panel_mut().refresh();
    }
}

/// Drain keys for one poll window, feeding the operations engine.
///
/// Never blocks on the queue: an empty queue simply yields nothing
/// this cycle and the loop sleeps until the next drain attempt.
async fn poll_operations<P: StatusPanel>(engine: &mut OpsEngine<P>) {
    let mut elapsed_ms = 0;
    while elapsed_ms < OPS_POLL_WINDOW_MS {
        let backlog = buffered_keys();
        if backlog > 1 {
            defmt::debug!("{} keys buffered", backlog);
        }
        while let Some(key) = next_key() {
            if engine.advance(key) == StepResult::NeedsReset {
                warn!("ops engine stalled, resetting");
                engine.reset_to_idle();
            }
        }
        Timer::after(Duration::from_millis(OPS_POLL_SLEEP_MS)).await;
        elapsed_ms += OPS_POLL_SLEEP_MS;
    }
}
