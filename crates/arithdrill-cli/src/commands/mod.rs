pub mod generate;
pub mod history;
pub mod init;
pub mod practice;
pub mod settings;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

use arithdrill_core::config::{self, LoadedSettings, LOCAL_SETTINGS_FILE};
use arithdrill_core::history::history_path_for;
use arithdrill_core::model::{Category, GenerationSettings, QuestionOrder};

use crate::GenerationOverrides;

impl GenerationOverrides {
    /// Layer command-line flags over saved settings.
    pub fn apply(&self, settings: &mut GenerationSettings) -> Result<()> {
        let counts = [
            (Category::Add, self.add),
            (Category::Subtract, self.subtract),
            (Category::Multiply, self.multiply),
            (Category::Divide, self.divide),
            (Category::Mixed, self.mixed),
            (Category::Bracketed, self.bracketed),
            (Category::FillBlank, self.fill_blank),
            (Category::Vertical, self.vertical),
        ];
        for (category, count) in counts {
            if let Some(count) = count {
                settings.counts.set(category, count);
            }
        }

        if let Some(min) = self.min {
            settings.min_num = min;
        }
        if let Some(max) = self.max {
            settings.max_num = max;
        }
        if self.allow_negative {
            settings.no_negative = false;
        }
        if self.allow_remainder {
            settings.no_remainder = false;
        }
        if let Some(places) = self.decimal {
            settings.enable_decimal = true;
            settings.decimal_places = places;
        }
        if let Some(order) = &self.order {
            settings.order = order.parse::<QuestionOrder>().map_err(|e| anyhow!(e))?;
        }
        Ok(())
    }

    /// A seeded generator when `--seed` was given, otherwise one from entropy.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Load settings, warning on stderr when a file had to be ignored.
pub fn load(settings: Option<&Path>) -> LoadedSettings {
    let loaded = config::load_settings_from(settings);
    if loaded.origin.is_fallback() {
        eprintln!("Warning: using {}", loaded.origin);
    }
    loaded
}

/// Where settings are written back to.
pub fn settings_target(settings: Option<&Path>) -> PathBuf {
    config::locate_settings(settings).unwrap_or_else(|| PathBuf::from(LOCAL_SETTINGS_FILE))
}

/// The history file in use: `--history`, else next to the settings file.
pub fn history_target(history: Option<PathBuf>, settings: Option<&Path>) -> PathBuf {
    history.unwrap_or_else(|| history_path_for(config::locate_settings(settings).as_deref()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let overrides = GenerationOverrides {
            add: Some(0),
            vertical: Some(4),
            max: Some(50),
            allow_negative: true,
            decimal: Some(2),
            order: Some("seq".to_string()),
            ..Default::default()
        };
        let mut settings = GenerationSettings::default();
        overrides.apply(&mut settings).unwrap();

        assert_eq!(settings.counts.add, 0);
        assert_eq!(settings.counts.subtract, 3);
        assert_eq!(settings.counts.vertical, 4);
        assert_eq!(settings.min_num, 1);
        assert_eq!(settings.max_num, 50);
        assert!(!settings.no_negative);
        assert!(settings.no_remainder);
        assert_eq!(settings.precision(), Some(2));
        assert_eq!(settings.order, QuestionOrder::Sequential);
    }

    #[test]
    fn unknown_order_is_an_error() {
        let overrides = GenerationOverrides {
            order: Some("backwards".to_string()),
            ..Default::default()
        };
        let err = overrides
            .apply(&mut GenerationSettings::default())
            .unwrap_err();
        assert!(err.to_string().contains("unknown question order"));
    }

    #[test]
    fn history_defaults_next_to_explicit_settings() {
        let path = history_target(None, Some(Path::new("/tmp/drill/settings.toml")));
        assert_eq!(path, PathBuf::from("/tmp/drill/arithdrill-history.json"));
        let explicit = history_target(Some(PathBuf::from("h.json")), None);
        assert_eq!(explicit, PathBuf::from("h.json"));
    }
}
