use anyhow::{Context, Result};
use shared::BookingConfig;
use crate::services::logging::Logger;

/// Deployment data: blocked dates, slot labels, selection policy
const EMBEDDED_CONFIG: &str = include_str!("../../booking.json");

pub fn load_config() -> Result<BookingConfig> {
    BookingConfig::from_json(EMBEDDED_CONFIG).context("Failed to load embedded booking.json")
}

/// Load the embedded configuration, falling back to the built-in defaults
pub fn load_config_or_default() -> BookingConfig {
    match load_config() {
        Ok(config) => {
            Logger::info_with_component(
                "config",
                &format!(
                    "Loaded booking config: {} blocked date(s), {} time slot(s)",
                    config.blocked_dates.len(),
                    config.time_slots.len()
                ),
            );
            config
        }
        Err(e) => {
            gloo::console::error!(&format!("{:#}", e));
            Logger::error_with_component("config", &format!("Using default booking config: {:#}", e));
            BookingConfig::default()
        }
    }
}
