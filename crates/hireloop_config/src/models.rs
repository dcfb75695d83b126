// --- File: crates/hireloop_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

// --- Logging Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// Minimum level for the `hireloop` targets ("trace" .. "error").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

// --- Calendar Config ---
/// Relative weights of the simulated availability draw for open days.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AvailabilityWeights {
    pub available: u32,
    pub partial: u32,
    pub occupied: u32,
}

impl Default for AvailabilityWeights {
    fn default() -> Self {
        Self {
            available: 40,
            partial: 30,
            occupied: 30,
        }
    }
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CalendarConfig {
    /// IANA zone used to decide what "today" is, e.g. "Europe/Zurich". UTC when absent.
    #[serde(default)]
    pub time_zone: Option<String>,
    /// Non-operating weekday ("Sun", "Monday", ...). Sunday when absent.
    #[serde(default)]
    pub closed_weekday: Option<String>,
    /// Holidays in YYYY-MM-DD format.
    #[serde(default)]
    pub holidays: Vec<String>,
    /// Slots offered when a listing does not configure any.
    #[serde(default)]
    pub default_slots: Vec<String>,
    /// Number of months covered by a generated availability map, current month included.
    #[serde(default = "default_horizon_months")]
    pub horizon_months: u32,
    /// Fixed seed for the simulated availability. Random per process when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub weights: AvailabilityWeights,
}

fn default_horizon_months() -> u32 {
    3
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            time_zone: None,
            closed_weekday: None,
            holidays: Vec::new(),
            default_slots: Vec::new(),
            horizon_months: default_horizon_months(),
            seed: None,
            weights: AvailabilityWeights::default(),
        }
    }
}

// --- Catalog Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CatalogConfig {
    /// Artificial delay applied to every listings lookup.
    #[serde(default)]
    pub simulated_latency_ms: u64,
}

// --- Auth Config ---
// Tokens are usually set to "secret_from_env" and injected from AUTH_USERS_<n>_TOKEN.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AuthUser {
    pub token: String,
    pub user_ref: String,
}

#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AuthConfig {
    #[serde(default)]
    pub users: Vec<AuthUser>,
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub calendar: CalendarConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}
