//! Systems reacting to the host-driven city lifecycle.
//!
//! The host signals city startup/shutdown and the monthly tick through
//! events; these systems forward them to the ordinance record. A failed
//! settings load deactivates the whole feature for the session, after which
//! every event handler is inert.

use bevy::prelude::*;
use rand::Rng;

use crate::config::OrdinanceSettings;
use crate::sim_rng::SimRng;
use crate::{
    CityEstablished, CityTeardown, GamblingOrdinance, MonthElapsed, OrdinanceFeature,
    SettingsSource,
};

/// Load the settings file once at startup. No configured path means the
/// compiled defaults stay in place; a configured path that fails to load or
/// validate shuts the feature off.
pub fn load_settings(
    source: Res<SettingsSource>,
    mut settings: ResMut<OrdinanceSettings>,
    mut feature: ResMut<OrdinanceFeature>,
) {
    let Some(path) = &source.0 else {
        info!("gambling ordinance: no settings file configured, using defaults");
        return;
    };

    match OrdinanceSettings::load_from_path(path) {
        Ok(loaded) => {
            info!("gambling ordinance: loaded settings from {}", path.display());
            *settings = loaded;
        }
        Err(e) => {
            error!("gambling ordinance: disabled for this session: {e}");
            feature.active = false;
        }
    }
}

/// A city became active: initialize the record, bind its services, and
/// apply the session settings.
pub fn handle_city_established(
    mut events: EventReader<CityEstablished>,
    feature: Res<OrdinanceFeature>,
    settings: Res<OrdinanceSettings>,
    mut ordinance: ResMut<GamblingOrdinance>,
) {
    for event in events.read() {
        if !feature.active {
            continue;
        }
        ordinance.0.init(Some(&event.handles));
        settings.apply_to(&mut ordinance.0);
        info!("gambling ordinance: bound to active city");
    }
}

/// Each simulated month, an ordinance that is not yet available gets one
/// chance roll against its monthly availability percentage.
pub fn roll_monthly_availability(
    mut events: EventReader<MonthElapsed>,
    feature: Res<OrdinanceFeature>,
    mut ordinance: ResMut<GamblingOrdinance>,
    mut rng: ResMut<SimRng>,
) {
    for _ in events.read() {
        if !feature.active {
            continue;
        }

        let record = &mut ordinance.0;
        if record.is_available() || !record.check_conditions() {
            continue;
        }

        if rng.0.gen::<f32>() < record.monthly_chance() {
            record.set_available(true);
            info!("gambling ordinance: now available");
        }
    }
}

/// Each simulated month, refresh the cached adjusted income.
pub fn refresh_monthly_income(
    mut events: EventReader<MonthElapsed>,
    feature: Res<OrdinanceFeature>,
    mut ordinance: ResMut<GamblingOrdinance>,
) {
    for _ in events.read() {
        if !feature.active {
            continue;
        }
        ordinance.0.simulate();
    }
}

/// The active city is going away: release its services.
pub fn handle_city_teardown(
    mut events: EventReader<CityTeardown>,
    mut ordinance: ResMut<GamblingOrdinance>,
) {
    for _ in events.read() {
        ordinance.0.shutdown();
    }
}
