use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub inventory: InventoryConfig,
    pub booking: BookingConfig,
    pub search: SearchConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InventoryConfig {
    /// Openings generated at startup.
    pub initial_openings: usize,
    pub seed: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BookingConfig {
    pub competitive_seed: u64,
    /// Chance that a competitive booking is turned away before touching inventory.
    pub reject_probability: f64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SearchConfig {
    pub default_limit: usize,
    pub default_days_count: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 9009 },
            inventory: InventoryConfig {
                initial_openings: 3000,
                seed: 42,
            },
            booking: BookingConfig {
                competitive_seed: 1337,
                reject_probability: 0.3,
            },
            search: SearchConfig {
                default_limit: 10,
                default_days_count: 2,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        let defaults = Config::default();

        let s = config::Config::builder()
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("inventory.initial_openings", defaults.inventory.initial_openings as i64)?
            .set_default("inventory.seed", defaults.inventory.seed as i64)?
            .set_default("booking.competitive_seed", defaults.booking.competitive_seed as i64)?
            .set_default("booking.reject_probability", defaults.booking.reject_probability)?
            .set_default("search.default_limit", defaults.search.default_limit as i64)?
            .set_default("search.default_days_count", i64::from(defaults.search.default_days_count))?
            // Optional files, later ones win
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `TRIPDESK_BOOKING__REJECT_PROBABILITY=0.5`
            .add_source(config::Environment::with_prefix("TRIPDESK").prefix_separator("_").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), config::ConfigError> {
        if !(0.0..=1.0).contains(&self.booking.reject_probability) {
            return Err(config::ConfigError::Message(format!(
                "booking.reject_probability must be within [0, 1], got {}",
                self.booking.reject_probability
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = Config::load().expect("defaults should deserialize");
        assert_eq!(config.search.default_limit, 10);
        assert_eq!(config.search.default_days_count, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range_probability() {
        let mut config = Config::default();
        config.booking.reject_probability = 1.5;
        assert!(config.validate().is_err());
    }
}
