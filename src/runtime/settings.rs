use crate::config;

/// Load settings, falling back to defaults.
///
/// Config is optional; failures should not prevent the app from starting.
/// Logging is not up yet when this runs, so the reason for a fallback is
/// handed back to be logged by the caller.
pub fn load_settings() -> (config::Settings, Option<String>) {
    match config::Settings::load() {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                config::Settings::default(),
                Some(format!("invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            config::Settings::default(),
            Some(format!("failed to load config, using defaults: {e}")),
        ),
    }
}
