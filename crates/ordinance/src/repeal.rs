//! Side effects that fire when an ordinance is repealed (switched off).
//!
//! For the gambling ordinance this removes the casino from the city and
//! disables its reward-menu entry. Every step tolerates an absent
//! collaborator; a city with no matching structure or no menu control is
//! simply left as-is.

use bevy::log::{debug, info};

use crate::services::{CityHandles, StructureQuery};

/// What to tear down when a non-suppressed `set_on(false)` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RepealAction {
    /// Criteria for the structure to demolish.
    pub structure_query: StructureQuery,
    /// Build-menu entry to disable and whose placement tool to cancel.
    pub menu_building_id: u32,
}

/// Run the repeal sequence against the currently bound city services.
pub(crate) fn run_repeal(action: &RepealAction, city: &CityHandles) {
    if let Some(structures) = &city.structures {
        match structures.find_structure(&action.structure_query) {
            Some(structure) => {
                structures.start_demolish(structure);
                structures.end_demolish(structure);
                info!("repeal: demolished structure {structure:?}");
            }
            None => debug!("repeal: no matching structure in the city"),
        }
    }

    if let Some(menu) = &city.build_menu {
        menu.set_conditional_building_disabled(action.menu_building_id, true);
        menu.cancel_placement_tool(action.menu_building_id);
    }
}
