use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct TerminalConfig {
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub promo: PromoConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PromoConfig {
    #[serde(default = "default_discount")]
    pub discount: f64,
    #[serde(default = "default_message")]
    pub message: String,
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_discount() -> f64 {
    0.5
}

fn default_message() -> String {
    "50% off the whole receipt!".to_string()
}

impl Default for PromoConfig {
    fn default() -> Self {
        Self {
            discount: default_discount(),
            message: default_message(),
        }
    }
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            currency: default_currency(),
            promo: PromoConfig::default(),
        }
    }
}

impl TerminalConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `PIATTO__PROMO__DISCOUNT=0.25` overrides the promo discount
            .add_source(config::Environment::with_prefix("PIATTO").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
