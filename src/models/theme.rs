//! Theme preference modeled as explicit configuration, not ambient state.
//!
//! Initialized from the persisted preference at startup, updated only via
//! an explicit setter, read-only for consumers.

/// User-selected theme mode; `System` defers to the platform scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
            ThemeMode::System => "system",
        }
    }

    /// Parse a persisted value; unknown strings fall back to `System`, the
    /// same default used when no preference was ever saved.
    pub fn from_str_lossy(value: &str) -> Self {
        match value {
            "light" => ThemeMode::Light,
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::System,
        }
    }
}

/// Resolved theme configuration injected into rendering functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeConfig {
    pub mode: ThemeMode,
    pub is_dark: bool,
}

impl ThemeConfig {
    /// Resolve a mode against the platform's current scheme.
    pub fn resolve(mode: ThemeMode, system_is_dark: bool) -> Self {
        let is_dark = match mode {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => system_is_dark,
        };
        Self { mode, is_dark }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System] {
            assert_eq!(ThemeMode::from_str_lossy(mode.as_str()), mode);
        }
    }

    #[test]
    fn test_unknown_mode_falls_back_to_system() {
        assert_eq!(ThemeMode::from_str_lossy("sepia"), ThemeMode::System);
        assert_eq!(ThemeMode::from_str_lossy(""), ThemeMode::System);
    }

    #[test]
    fn test_resolution() {
        assert!(!ThemeConfig::resolve(ThemeMode::Light, true).is_dark);
        assert!(ThemeConfig::resolve(ThemeMode::Dark, false).is_dark);
        assert!(ThemeConfig::resolve(ThemeMode::System, true).is_dark);
        assert!(!ThemeConfig::resolve(ThemeMode::System, false).is_dark);
    }
}
