//! User preferences
//!
//! Persisted in LocalStorage. Only preferences live here; balance and
//! buildings always start fresh.

use serde::{Deserialize, Serialize};

use crate::theme::Theme;

/// User preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Cosmetic variant
    pub theme: Theme,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute all sound
    pub muted: bool,
    /// Mute when window loses focus
    pub mute_on_blur: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Quantum,

            // Audio
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            mute_on_blur: true,
        }
    }
}

impl Settings {
    /// LocalStorage key
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "satoverse_settings";

    /// Parse settings JSON, falling back to defaults for a corrupt blob
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Settings>(json) {
            Ok(mut settings) => {
                settings.clamp_volumes();
                settings
            }
            Err(e) => {
                log::warn!("Ignoring unreadable settings: {}", e);
                Self::default()
            }
        }
    }

    /// Theme for this page load: a `?theme=` override if it names a
    /// theme, otherwise the saved one. The saved preference is untouched.
    pub fn effective_theme(&self, override_name: Option<&str>) -> Theme {
        let Some(name) = override_name else {
            return self.theme;
        };
        name.parse().unwrap_or_else(|_| {
            log::warn!("Unknown theme '{}', keeping {}", name, self.theme.as_str());
            self.theme
        })
    }

    /// Flip the mute flag, returning the new state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    /// Effective sound effects gain
    pub fn sfx_gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    fn clamp_volumes(&mut self) {
        self.master_volume = self.master_volume.clamp(0.0, 1.0);
        self.sfx_volume = self.sfx_volume.clamp(0.0, 1.0);
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                log::info!("Loaded settings from LocalStorage");
                return Self::from_json(&json);
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = serde_json::to_string(self) {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

/// Pull the `theme` value out of a URL query string (`?theme=ocean&x=1`)
pub fn theme_from_query(search: &str) -> Option<&str> {
    search
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| pair.strip_prefix("theme="))
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_query() {
        assert_eq!(theme_from_query("?theme=ocean"), Some("ocean"));
        assert_eq!(theme_from_query("?debug=1&theme=quantum"), Some("quantum"));
        assert_eq!(theme_from_query("?theme="), None);
        assert_eq!(theme_from_query(""), None);
        assert_eq!(theme_from_query("?themes=ocean"), None);
    }

    #[test]
    fn test_toggle_mute_silences_sfx() {
        let mut settings = Settings::default();
        assert!(settings.toggle_mute());
        assert_eq!(settings.sfx_gain(), 0.0);
        assert!(!settings.toggle_mute());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings = Settings::from_json(r#"{"theme":"Ocean","sfx_volume":3.0}"#);
        assert_eq!(settings.theme, Theme::Ocean);
        assert_eq!(settings.sfx_volume, 1.0);
        assert_eq!(settings.master_volume, 0.8);
    }

    #[test]
    fn test_corrupt_json_uses_defaults() {
        let settings = Settings::from_json("{not json");
        assert_eq!(settings.theme, Theme::Quantum);
        assert!(!settings.muted);
    }

    #[test]
    fn test_theme_override_is_not_persisted() {
        let mut settings = Settings::default();
        assert_eq!(settings.effective_theme(Some("ocean")), Theme::Ocean);
        assert_eq!(settings.effective_theme(Some("volcano")), Theme::Quantum);
        assert_eq!(settings.effective_theme(None), Theme::Quantum);

        // Saving after an unrelated change keeps the stored theme
        settings.toggle_mute();
        let saved = Settings::from_json(&serde_json::to_string(&settings).unwrap());
        assert_eq!(saved.theme, Theme::Quantum);
        assert!(saved.muted);
    }

    #[test]
    fn test_sfx_gain_respects_mute() {
        let mut settings = Settings::default();
        assert!((settings.sfx_gain() - 0.8).abs() < 1e-6);
        settings.muted = true;
        assert_eq!(settings.sfx_gain(), 0.0);
    }
}
