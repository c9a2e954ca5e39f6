//! The "Legalize Gambling" city ordinance.
//!
//! A host-driven policy entity: the city simulator initializes it when a
//! city loads, toggles it as the player adopts or repeals the policy, calls
//! into it once per simulated month, and persists it inside the city save.
//! Its monthly income follows the residential population of the three
//! wealth tiers instead of the legacy flat formula, and repealing it
//! demolishes the casino reward building and disables its menu entry.
//!
//! The `save` crate owns the binary layout of the persisted state; this
//! crate exposes it through [`record::SavedOrdinanceState`].

use std::path::PathBuf;

use bevy::prelude::*;

pub mod config;
pub mod effects;
pub mod gambling;
pub mod income;
pub mod localization;
pub mod record;
pub mod repeal;
pub mod services;
pub mod sim_rng;
pub mod systems;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;


use config::OrdinanceSettings;
use record::OrdinanceRecord;
use services::CityHandles;
use sim_rng::SimRng;

// ---------------------------------------------------------------------------
// Host events
// ---------------------------------------------------------------------------

/// Sent by the host after a city finishes loading, carrying the service
/// handles the ordinance binds to.
#[derive(Event, Clone)]
pub struct CityEstablished {
    pub handles: CityHandles,
}

/// Sent by the host before the active city shuts down.
#[derive(Event, Clone, Copy, Default)]
pub struct CityTeardown;

/// Sent by the host once per simulated month.
#[derive(Event, Clone, Copy, Default)]
pub struct MonthElapsed;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// The gambling ordinance record, owned by the app.
#[derive(Resource)]
pub struct GamblingOrdinance(pub OrdinanceRecord);

impl Default for GamblingOrdinance {
    fn default() -> Self {
        Self(gambling::legalize_gambling())
    }
}

/// Where to load the settings file from; `None` keeps compiled defaults.
#[derive(Resource, Debug, Clone)]
pub struct SettingsSource(pub Option<PathBuf>);

/// Session-wide feature switch. Flipped off when the settings file is
/// present but invalid.
#[derive(Resource, Debug, Clone)]
pub struct OrdinanceFeature {
    pub active: bool,
}

impl Default for OrdinanceFeature {
    fn default() -> Self {
        Self { active: true }
    }
}

// ---------------------------------------------------------------------------
// Plugin
// ---------------------------------------------------------------------------

/// Wires the gambling ordinance into a host app.
#[derive(Default)]
pub struct GamblingOrdinancePlugin {
    /// Optional path to the operator settings file.
    pub settings_path: Option<PathBuf>,
}

impl Plugin for GamblingOrdinancePlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<CityEstablished>()
            .add_event::<CityTeardown>()
            .add_event::<MonthElapsed>()
            .insert_resource(SettingsSource(self.settings_path.clone()))
            .init_resource::<OrdinanceSettings>()
            .init_resource::<OrdinanceFeature>()
            .init_resource::<GamblingOrdinance>()
            .init_resource::<SimRng>()
            .add_systems(Startup, systems::load_settings)
            .add_systems(
                Update,
                (
                    systems::handle_city_established,
                    systems::roll_monthly_availability,
                    systems::refresh_monthly_income,
                    systems::handle_city_teardown,
                )
                    .chain(),
            );
    }
}
