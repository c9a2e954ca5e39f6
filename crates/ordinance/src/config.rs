//! Operator-editable settings for the gambling ordinance.
//!
//! Loaded from a JSON file once at startup and applied to the record every
//! time a city binds. Validation never clamps: a value outside its declared
//! range fails the whole load, and the plugin then deactivates the feature
//! for the session.

use std::fmt;
use std::fs;
use std::path::Path;

use bevy::prelude::Resource;
use serde::Deserialize;

use crate::effects::OrdinanceEffects;
use crate::gambling::CRIME_EFFECT_PROPERTY;
use crate::income::IncomePolicy;
use crate::record::OrdinanceRecord;

/// Declared range for the crime effect multiplier.
pub const CRIME_EFFECT_MULTIPLIER_MIN: f32 = 0.01;
pub const CRIME_EFFECT_MULTIPLIER_MAX: f32 = 2.0;

/// Income tuning and ordinance effects supplied by the operator.
///
/// Absent fields fall back to the compiled defaults, unknown fields are
/// rejected so typos surface instead of silently reverting to a default.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OrdinanceSettings {
    pub base_monthly_income: i64,
    pub low_wealth_income_factor: f32,
    pub medium_wealth_income_factor: f32,
    pub high_wealth_income_factor: f32,
    pub crime_effect_multiplier: f32,
}

impl Default for OrdinanceSettings {
    fn default() -> Self {
        Self {
            base_monthly_income: 100,
            low_wealth_income_factor: 0.05,
            medium_wealth_income_factor: 0.03,
            high_wealth_income_factor: 0.01,
            crime_effect_multiplier: 1.2,
        }
    }
}

impl OrdinanceSettings {
    /// Read and validate a settings file.
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate settings from a JSON document.
    pub fn from_json(text: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), SettingsError> {
        let floats = [
            ("low_wealth_income_factor", self.low_wealth_income_factor),
            ("medium_wealth_income_factor", self.medium_wealth_income_factor),
            ("high_wealth_income_factor", self.high_wealth_income_factor),
            ("crime_effect_multiplier", self.crime_effect_multiplier),
        ];
        for (name, value) in floats {
            if !value.is_finite() {
                return Err(SettingsError::NotFinite { name });
            }
        }

        if !(CRIME_EFFECT_MULTIPLIER_MIN..=CRIME_EFFECT_MULTIPLIER_MAX)
            .contains(&self.crime_effect_multiplier)
        {
            return Err(SettingsError::OutOfRange {
                name: "crime_effect_multiplier",
                value: self.crime_effect_multiplier,
                min: CRIME_EFFECT_MULTIPLIER_MIN,
                max: CRIME_EFFECT_MULTIPLIER_MAX,
            });
        }

        Ok(())
    }

    /// Effects bag for these settings. A multiplier of exactly 1.0 means no
    /// crime effect entry at all.
    pub fn effects(&self) -> OrdinanceEffects {
        let mut effects = OrdinanceEffects::default();
        if self.crime_effect_multiplier != 1.0 {
            effects.add_property(CRIME_EFFECT_PROPERTY, self.crime_effect_multiplier);
        }
        effects
    }

    pub fn income_policy(&self) -> IncomePolicy {
        IncomePolicy::WealthTiered {
            base_monthly_income: self.base_monthly_income,
            tier_factors: [
                self.low_wealth_income_factor,
                self.medium_wealth_income_factor,
                self.high_wealth_income_factor,
            ],
        }
    }

    /// Install the income policy and effects on a record.
    pub fn apply_to(&self, record: &mut OrdinanceRecord) {
        record.set_income_policy(self.income_policy());
        record.set_effects(self.effects());
    }
}

/// Why a settings load failed. Any variant is fatal to the feature.
#[derive(Debug)]
pub enum SettingsError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    NotFinite { name: &'static str },
    OutOfRange {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "failed to read settings file: {e}"),
            SettingsError::Parse(e) => write!(f, "failed to parse settings file: {e}"),
            SettingsError::NotFinite { name } => {
                write!(f, "{name} must be a finite number")
            }
            SettingsError::OutOfRange {
                name,
                value,
                min,
                max,
            } => write!(f, "{name} is {value}, outside the allowed range [{min}, {max}]"),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SettingsError::Io(e) => Some(e),
            SettingsError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SettingsError {
    fn from(e: std::io::Error) -> Self {
        SettingsError::Io(e)
    }
}

impl From<serde_json::Error> for SettingsError {
    fn from(e: serde_json::Error) -> Self {
        SettingsError::Parse(e)
    }
}
