use std::env;

/// Localized message returned with every calculation failure.
pub const DEFAULT_ERROR_MESSAGE: &str = "Error al calcular el score";

/// HEARTS percentage above which a patient counts as high risk.
pub const DEFAULT_HIGH_RISK_THRESHOLD: i32 = 20;

/// Service configuration, read once at start-up and carried in [`AppState`].
///
/// [`AppState`]: crate::state::AppState
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub error_message: String,
    pub high_risk_threshold: i32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            error_message: DEFAULT_ERROR_MESSAGE.to_string(),
            high_risk_threshold: DEFAULT_HIGH_RISK_THRESHOLD,
        }
    }
}

impl AppConfig {
    /// Read `CARDIORISK_*` variables, falling back to defaults for unset ones.
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let defaults = Self::default();

        let error_message = lookup("CARDIORISK_ERROR_MESSAGE")
            .filter(|m| !m.trim().is_empty())
            .unwrap_or(defaults.error_message);

        let high_risk_threshold = match lookup("CARDIORISK_HIGH_RISK_THRESHOLD") {
            Some(raw) => raw.trim().parse::<i32>().map_err(|e| {
                eyre::eyre!("invalid CARDIORISK_HIGH_RISK_THRESHOLD \"{raw}\": {e}")
            })?,
            None => defaults.high_risk_threshold,
        };

        Ok(Self {
            error_message,
            high_risk_threshold,
        })
    }
}
