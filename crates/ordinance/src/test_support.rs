//! Recording doubles for the city service contracts.
//!
//! Available to this crate's tests and, behind the `test-support` feature,
//! to downstream crates and host integrations that want to exercise the
//! ordinance without a live city.

use std::collections::HashMap;
use std::sync::atomic::{AtomicI32, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use crate::services::{
    BuildMenu, SimulatorServices, StructureId, StructureQuery, StructureRegistry,
    WealthDemandQuery,
};

/// Fixed simulator state with adjustable population and year.
pub struct StubSimulator {
    population: AtomicI32,
    year: AtomicU32,
}

impl StubSimulator {
    pub fn new(population: i32, year: u32) -> Arc<Self> {
        Arc::new(Self {
            population: AtomicI32::new(population),
            year: AtomicU32::new(year),
        })
    }

    pub fn set_population(&self, population: i32) {
        self.population.store(population, Ordering::Relaxed);
    }

    pub fn set_year(&self, year: u32) {
        self.year.store(year, Ordering::Relaxed);
    }
}

impl SimulatorServices for StubSimulator {
    fn residential_population(&self) -> i32 {
        self.population.load(Ordering::Relaxed)
    }

    fn simulation_year(&self) -> u32 {
        self.year.load(Ordering::Relaxed)
    }
}

/// Demand lookup that records every query it receives.
pub struct RecordingDemand {
    supplies: HashMap<u32, f32>,
    queries: Mutex<Vec<u32>>,
}

impl RecordingDemand {
    pub fn new(entries: &[(u32, f32)]) -> Arc<Self> {
        Arc::new(Self {
            supplies: entries.iter().copied().collect(),
            queries: Mutex::new(Vec::new()),
        })
    }

    /// All demand ids queried so far, in call order.
    pub fn queries(&self) -> Vec<u32> {
        self.queries.lock().unwrap().clone()
    }

    /// How many times one demand id was queried.
    pub fn query_count(&self, demand_id: u32) -> usize {
        self.queries
            .lock()
            .unwrap()
            .iter()
            .filter(|&&id| id == demand_id)
            .count()
    }
}

impl WealthDemandQuery for RecordingDemand {
    fn supply_value(&self, demand_id: u32) -> Option<f32> {
        self.queries.lock().unwrap().push(demand_id);
        self.supplies.get(&demand_id).copied()
    }
}

/// Structure registry holding at most one findable structure and recording
/// all demolition calls.
pub struct RecordingStructures {
    structure: Option<StructureId>,
    find_queries: Mutex<Vec<StructureQuery>>,
    started: Mutex<Vec<StructureId>>,
    ended: Mutex<Vec<StructureId>>,
}

impl RecordingStructures {
    pub fn new(structure: Option<StructureId>) -> Arc<Self> {
        Arc::new(Self {
            structure,
            find_queries: Mutex::new(Vec::new()),
            started: Mutex::new(Vec::new()),
            ended: Mutex::new(Vec::new()),
        })
    }

    pub fn find_queries(&self) -> Vec<StructureQuery> {
        self.find_queries.lock().unwrap().clone()
    }

    pub fn started(&self) -> Vec<StructureId> {
        self.started.lock().unwrap().clone()
    }

    pub fn ended(&self) -> Vec<StructureId> {
        self.ended.lock().unwrap().clone()
    }
}

impl StructureRegistry for RecordingStructures {
    fn find_structure(&self, query: &StructureQuery) -> Option<StructureId> {
        self.find_queries.lock().unwrap().push(*query);
        self.structure
    }

    fn start_demolish(&self, structure: StructureId) {
        self.started.lock().unwrap().push(structure);
    }

    fn end_demolish(&self, structure: StructureId) {
        self.ended.lock().unwrap().push(structure);
    }
}

/// Build menu that records status changes and tool cancellations.
#[derive(Default)]
pub struct RecordingMenu {
    disabled: Mutex<Vec<(u32, bool)>>,
    cancelled: Mutex<Vec<u32>>,
}

impl RecordingMenu {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn disabled(&self) -> Vec<(u32, bool)> {
        self.disabled.lock().unwrap().clone()
    }

    pub fn cancelled(&self) -> Vec<u32> {
        self.cancelled.lock().unwrap().clone()
    }
}

impl BuildMenu for RecordingMenu {
    fn set_conditional_building_disabled(&self, building_id: u32, disabled: bool) {
        self.disabled.lock().unwrap().push((building_id, disabled));
    }

    fn cancel_placement_tool(&self, building_id: u32) {
        self.cancelled.lock().unwrap().push(building_id);
    }
}
