//! ESP32-C3 SuperMini Torn travel display.
//!
//! This is the main entry point for the physical device. After bring-up it
//! runs a deadline-driven loop that:
//! - Ticks the local countdown once per second
//! - Re-fetches travel status on arrival and every 60 ticks
//! - Advances the direction marker every 500 ms
//! - Polls the sleep button once per tick
//!
//! # Build
//!
//! ```bash
//! WIFI_SSID=... WIFI_PASSWORD=... TORN_API_KEY=... \
//!     cargo build --release --features esp32-full --bin esp32_main
//! ```

use esp_idf_hal::i2c::{I2cConfig, I2cDriver};
use esp_idf_hal::peripherals::Peripherals;
use esp_idf_hal::prelude::*;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use log::{info, warn};
use std::thread;
use std::time::Duration;
use torn_travel::hal::esp32::{
    Esp32Clock, Esp32Display, Esp32HttpClient, Esp32Power, Esp32SleepButton, Esp32Wifi,
};
use torn_travel::traits::{Clock, TravelDisplay};
use torn_travel::{
    ApiConfig, Config, RefreshConfig, StatusFetcher, Step, TickSchedule, TravelMonitor, WifiConfig,
};

fn main() -> anyhow::Result<()> {
    // Initialize ESP-IDF
    esp_idf_hal::sys::link_patches();
    esp_idf_svc::log::EspLogger::initialize_default();

    // =========================================================================
    // Configuration
    // =========================================================================
    let config = Config::default()
        .with_wifi(
            WifiConfig::default()
                .with_ssid(option_env!("WIFI_SSID").unwrap_or(""))
                .with_password(option_env!("WIFI_PASSWORD").unwrap_or("")),
        )
        .with_api(
            ApiConfig::default()
                .with_key(option_env!("TORN_API_KEY").unwrap_or(""))
                .with_tls_fingerprint(option_env!("TORN_TLS_FINGERPRINT").unwrap_or("")),
        )
        .with_refresh(RefreshConfig::default());

    info!("[Boot] {}", config.device.name);
    if !config.api.has_key() {
        warn!("[Boot] TORN_API_KEY not set, every fetch will fail");
    }
    if !config.api.tls_fingerprint.is_empty() {
        info!(
            "[Boot] Expected API certificate fingerprint: {}",
            config.api.tls_fingerprint
        );
    }

    let peripherals = Peripherals::take()?;

    // =========================================================================
    // Initialize Display (SSD1306 on GPIO8/9)
    // =========================================================================
    let i2c = I2cDriver::new(
        peripherals.i2c0,
        peripherals.pins.gpio8, // SDA
        peripherals.pins.gpio9, // SCL
        &I2cConfig::new().baudrate(400.kHz().into()),
    )?;
    let mut display = Esp32Display::new(i2c);
    display
        .init()
        .map_err(|e| anyhow::anyhow!("Display init failed: {:?}", e))?;
    info!("[OK] Display initialized (GPIO8/9 I2C)");

    // =========================================================================
    // Initialize Sleep Button (GPIO10)
    // =========================================================================
    let mut button = Esp32SleepButton::new(peripherals.pins.gpio10)?;
    let mut power = Esp32Power::new();
    info!("[OK] Sleep button initialized (GPIO10)");

    // =========================================================================
    // Connect WiFi
    // =========================================================================
    let _ = display.show_message("Connecting to:", Some(config.wifi.ssid.as_str()));

    let sysloop = EspSystemEventLoop::take()?;
    let nvs = EspDefaultNvsPartition::take()?;
    let wifi = Esp32Wifi::new(peripherals.modem, sysloop, Some(nvs), &config.wifi)?;

    let ip = wifi
        .ip_addr()
        .map(|ip| format!("IP: {}", ip))
        .unwrap_or_else(|| "IP: ?".into());
    let _ = display.show_message("Connected.", Some(&ip));
    thread::sleep(Duration::from_millis(u64::from(config.refresh.splash_ms)));

    // =========================================================================
    // Initialize Fetcher, Clock and Monitor
    // =========================================================================
    let client = Esp32HttpClient::new()?;
    let fetcher = StatusFetcher::new(client, &config.api);
    let clock = Esp32Clock::new();

    let mut monitor = TravelMonitor::new(fetcher, display, config.refresh.clone());
    monitor.boot(clock.now_ms());

    let mut schedule = TickSchedule::from_config(&config.refresh, clock.now_ms());
    info!("[Boot] Starting travel loop");

    // =========================================================================
    // Main Loop
    // =========================================================================
    loop {
        match monitor.step(&mut schedule, &mut button, &mut power, clock.now_ms()) {
            Step::Sleep(ms) => thread::sleep(Duration::from_millis(ms)),
            Step::Halted => {
                // Deep sleep does not return; stay parked if it ever does
                thread::sleep(Duration::from_secs(1));
            }
            Step::Ticked(_) | Step::Animated => {}
        }
    }
}
