//! The "Legalize Gambling" ordinance definition.
//!
//! All ids below are part of the legacy save and asset compatibility
//! surface and must not change: the exemplar identity is what old save
//! files carry, and the occupant/property ids are how the casino reward
//! building is located in a city.

use crate::effects::OrdinanceEffects;
use crate::income::IncomePolicy;
use crate::localization::StringKey;
use crate::record::{ExemplarInfo, OrdinanceRecord, OrdinanceTemplate};
use crate::repeal::RepealAction;
use crate::services::StructureQuery;

/// Exemplar group of the ordinance definition asset.
pub const EXEMPLAR_GROUP: u32 = 0xA9C2_C209;
/// Exemplar instance, doubling as the ordinance class id.
pub const EXEMPLAR_INSTANCE: u32 = 0xA0D0_7129;

/// Localized-string keys for the display name and description.
pub const NAME_KEY: StringKey = StringKey::new(0x6A23_1EAA, 0x2A5E_A6BF);
pub const DESCRIPTION_KEY: StringKey = StringKey::new(0x6A23_1EAA, 0x0A5E_A6BF);

/// Reward-menu entry for the casino.
pub const CASINO_BUILDING_ID: u32 = 0x033A_0000;

/// Occupant type of buildings.
pub const BUILDING_OCCUPANT_TYPE: u32 = 0x2781_28A0;
/// Occupant group of reward buildings.
pub const REWARD_OCCUPANT_GROUP: u32 = 0x150B;
/// Property through which a structure declares its city exclusion group.
pub const CITY_EXCLUSION_GROUP_PROPERTY: u32 = 0xEA2E_078B;
/// City exclusion group of the casino.
pub const CASINO_CITY_EXCLUSION_GROUP: u32 = 0xCA78_B74B;

/// Crime-rate effect property carried while the ordinance is on.
pub const CRIME_EFFECT_PROPERTY: u32 = 0x28ED_0380;
/// Default crime multiplier: +20%.
pub const DEFAULT_CRIME_EFFECT_MULTIPLIER: f32 = 1.20;

/// Default income tuning, matching the shipped settings file.
pub const DEFAULT_BASE_MONTHLY_INCOME: i64 = 100;
pub const DEFAULT_TIER_FACTORS: [f32; 3] = [0.05, 0.03, 0.01];

const NAME: &str = "Legalize Gambling";
const DESCRIPTION: &str = "Opens the doors for casino operators to set up business.  Deals can \
                           be cut with casino operators for income but these come at the cost \
                           of local Mayor Rating and potential crime elements.";

/// Match criteria for the casino structure.
pub fn casino_query() -> StructureQuery {
    StructureQuery {
        occupant_type: BUILDING_OCCUPANT_TYPE,
        occupant_group: REWARD_OCCUPANT_GROUP,
        city_exclusion_group: CASINO_CITY_EXCLUSION_GROUP,
    }
}

/// Effects applied when no settings file overrides them.
pub fn default_effects() -> OrdinanceEffects {
    let mut effects = OrdinanceEffects::default();
    effects.add_property(CRIME_EFFECT_PROPERTY, DEFAULT_CRIME_EFFECT_MULTIPLIER);
    effects
}

/// Build the gambling ordinance record.
///
/// The legacy flat-income parameters (100 constant, 1.0 factor) are written
/// into the record purely so the persisted layout stays byte-identical to
/// what older builds produced; the wealth-tiered policy is what actually
/// computes income.
pub fn legalize_gambling() -> OrdinanceRecord {
    OrdinanceRecord::new(OrdinanceTemplate {
        exemplar: ExemplarInfo {
            group: EXEMPLAR_GROUP,
            instance: EXEMPLAR_INSTANCE,
        },
        name: NAME.to_string(),
        name_key: NAME_KEY,
        description: DESCRIPTION.to_string(),
        description_key: DESCRIPTION_KEY,
        year_first_available: 0,
        monthly_chance: 0.005,
        enactment_income: 0,
        retraction_income: -20,
        monthly_constant_income: 100,
        monthly_income_factor: 1.0,
        advisor_id: 0,
        is_income_ordinance: true,
        effects: default_effects(),
        income_policy: IncomePolicy::WealthTiered {
            base_monthly_income: DEFAULT_BASE_MONTHLY_INCOME,
            tier_factors: DEFAULT_TIER_FACTORS,
        },
        repeal: Some(RepealAction {
            structure_query: casino_query(),
            menu_building_id: CASINO_BUILDING_ID,
        }),
    })
}
