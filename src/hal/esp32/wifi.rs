//! WiFi connection management for ESP32-C3.
//!
//! Provides synchronous WiFi station mode connection using esp-idf-svc.
//! The firmware has no reconnect logic: if the link drops later, fetches
//! fail with a transport error until the device is reset.
//!
//! # Example
//!
//! ```ignore
//! use torn_travel::hal::esp32::Esp32Wifi;
//! use torn_travel::config::WifiConfig;
//!
//! let config = WifiConfig::default()
//!     .with_ssid("MyNetwork")
//!     .with_password("secret123");
//!
//! let wifi = Esp32Wifi::new(modem, sysloop, nvs, &config)?;
//! log::info!("IP: {:?}", wifi.ip_addr());
//! ```

use crate::config::WifiConfig;
use esp_idf_hal::modem::Modem;
use esp_idf_svc::eventloop::EspSystemEventLoop;
use esp_idf_svc::nvs::EspDefaultNvsPartition;
use esp_idf_svc::wifi::{BlockingWifi, ClientConfiguration, Configuration, EspWifi};
use log::info;
use std::net::Ipv4Addr;

/// WiFi connection manager for ESP32.
///
/// Manages a station-mode WiFi connection. The connection is established
/// during construction and kept for the lifetime of this struct.
pub struct Esp32Wifi<'a> {
    wifi: BlockingWifi<EspWifi<'a>>,
}

impl<'a> Esp32Wifi<'a> {
    /// Joins the configured network and blocks until DHCP assigns an address.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to start, the access point
    /// rejects the credentials, or the interface never comes up.
    pub fn new(
        modem: Modem,
        sysloop: EspSystemEventLoop,
        nvs: Option<EspDefaultNvsPartition>,
        config: &WifiConfig,
    ) -> anyhow::Result<Self> {
        let esp_wifi = EspWifi::new(modem, sysloop.clone(), nvs)?;
        let mut wifi = BlockingWifi::wrap(esp_wifi, sysloop)?;

        let ssid = config.ssid.as_str();

        let mut ssid_buf: heapless::String<32> = heapless::String::new();
        if ssid_buf.push_str(ssid).is_err() {
            anyhow::bail!("SSID longer than 32 bytes");
        }

        let mut pass_buf: heapless::String<64> = heapless::String::new();
        if pass_buf.push_str(config.password.as_str()).is_err() {
            anyhow::bail!("WiFi password longer than 64 bytes");
        }

        wifi.set_configuration(&Configuration::Client(ClientConfiguration {
            ssid: ssid_buf,
            password: pass_buf,
            ..Default::default()
        }))?;

        info!("[WiFi] Starting...");
        wifi.start()?;

        info!("[WiFi] Connecting to '{}'...", ssid);
        wifi.connect()?;

        info!("[WiFi] Waiting for DHCP...");
        wifi.wait_netif_up()?;

        let this = Self { wifi };
        if let Some(ip) = this.ip_addr() {
            info!("[WiFi] Connected, IP: {}", ip);
        }
        Ok(this)
    }

    /// Get the current IP address, if connected.
    pub fn ip_addr(&self) -> Option<Ipv4Addr> {
        self.wifi
            .wifi()
            .sta_netif()
            .get_ip_info()
            .ok()
            .map(|info| info.ip)
    }

    /// Check if WiFi is connected.
    pub fn is_connected(&self) -> bool {
        self.wifi.is_connected().unwrap_or(false)
    }
}
