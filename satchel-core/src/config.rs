//! Session store configuration.

use std::time::Duration;

/// Cookie used to carry the session identifier when none is configured.
pub const DEFAULT_COOKIE_NAME: &str = "satchel_id";

/// How long a session stays valid after its last save, by default.
pub const DEFAULT_VALIDITY_WINDOW: Duration = Duration::from_secs(1440);

/// How often the sweeper scans for expired sessions, by default.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(600);

/// Configuration shared by the store, the sweeper, and the HTTP layer.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Name of the cookie carrying the session identifier.
    pub cookie_name: String,

    /// How long a session stays valid after its last save.
    pub validity_window: Duration,

    /// Interval between sweep passes.
    pub sweep_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            validity_window: DEFAULT_VALIDITY_WINDOW,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl SessionConfig {
    /// Create a config with a custom cookie name.
    #[must_use]
    pub fn with_cookie_name(mut self, name: impl Into<String>) -> Self {
        self.cookie_name = name.into();
        self
    }

    /// Create a config with a custom validity window.
    #[must_use]
    pub fn with_validity_window(mut self, window: Duration) -> Self {
        self.validity_window = window;
        self
    }

    /// Create a config with a custom sweep interval.
    #[must_use]
    pub fn with_sweep_interval(mut self, interval: Duration) -> Self {
        self.sweep_interval = interval;
        self
    }
}
