//! Contracts for the city services an ordinance consumes.
//!
//! The host owns all of these. The record receives refcounted handles when a
//! city becomes active and drops them when the city shuts down, so every
//! handle is optional and every caller checks before use. Mutating contracts
//! take `&self`; host registries are shared services and manage their own
//! interior state.

use std::fmt;
use std::sync::Arc;

use crate::localization::StringLookup;

/// Opaque identifier for a structure occupying a developed lot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StructureId(pub u64);

/// Match criteria for locating one structure in the city.
///
/// The registry scans city occupants, keeping those of the requested
/// occupant type that belong to the occupant group and whose
/// city-exclusion-group property equals `city_exclusion_group`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureQuery {
    pub occupant_type: u32,
    pub occupant_group: u32,
    pub city_exclusion_group: u32,
}

/// Core simulator state: city-wide residential population and the calendar.
pub trait SimulatorServices: Send + Sync {
    fn residential_population(&self) -> i32;
    fn simulation_year(&self) -> u32;
}

/// Demand simulator lookup for per-group population series.
pub trait WealthDemandQuery: Send + Sync {
    /// Current supply value for a demand series, or `None` when the series
    /// does not exist in this city.
    fn supply_value(&self, demand_id: u32) -> Option<f32>;
}

/// Developed-lot registry: structure lookup and demolition.
pub trait StructureRegistry: Send + Sync {
    fn find_structure(&self, query: &StructureQuery) -> Option<StructureId>;

    /// Demolition is a paired sequence; `start_demolish` and `end_demolish`
    /// are always called back to back for the same structure.
    fn start_demolish(&self, structure: StructureId);
    fn end_demolish(&self, structure: StructureId);
}

/// Build-menu control for conditional (reward) buildings.
pub trait BuildMenu: Send + Sync {
    fn set_conditional_building_disabled(&self, building_id: u32, disabled: bool);

    /// Cancel the placement tool for a building if that tool is currently
    /// active; otherwise a no-op.
    fn cancel_placement_tool(&self, building_id: u32);
}

/// The bundle of service handles a live city offers to an ordinance.
///
/// Cloning is cheap (five `Arc` clones at most). `Default` yields the fully
/// unbound bundle.
#[derive(Clone, Default)]
pub struct CityHandles {
    pub simulator: Option<Arc<dyn SimulatorServices>>,
    pub demand: Option<Arc<dyn WealthDemandQuery>>,
    pub structures: Option<Arc<dyn StructureRegistry>>,
    pub build_menu: Option<Arc<dyn BuildMenu>>,
    pub strings: Option<Arc<dyn StringLookup>>,
}

impl CityHandles {
    pub fn is_unbound(&self) -> bool {
        self.simulator.is_none()
            && self.demand.is_none()
            && self.structures.is_none()
            && self.build_menu.is_none()
            && self.strings.is_none()
    }
}

impl fmt::Debug for CityHandles {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn mark(bound: bool) -> &'static str {
            if bound {
                "bound"
            } else {
                "unbound"
            }
        }

        f.debug_struct("CityHandles")
            .field("simulator", &mark(self.simulator.is_some()))
            .field("demand", &mark(self.demand.is_some()))
            .field("structures", &mark(self.structures.is_some()))
            .field("build_menu", &mark(self.build_menu.is_some()))
            .field("strings", &mark(self.strings.is_some()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::StubSimulator;

    #[test]
    fn test_default_handles_are_unbound() {
        let handles = CityHandles::default();
        assert!(handles.is_unbound());
    }

    #[test]
    fn test_debug_shows_binding_state() {
        let handles = CityHandles {
            simulator: Some(StubSimulator::new(0, 2000)),
            ..Default::default()
        };
        let text = format!("{handles:?}");
        assert!(text.contains("simulator: \"bound\""), "got: {text}");
        assert!(text.contains("demand: \"unbound\""), "got: {text}");
        assert!(!handles.is_unbound());
    }
}
