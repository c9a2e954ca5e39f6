// ---------------------------------------------------------------------------
// ordinance_codec – fixed-layout binary codec for persisted ordinance state
// ---------------------------------------------------------------------------
//
// The layout below is a compatibility contract with existing save files and
// must not change. All fields are little-endian, in this order:
//
//   u16  state version (always 4)
//   u8   initialized
//   u32  clsid
//   str  name                (u32 length + UTF-8 bytes)
//   str  description
//   u32  year first available
//   f32  monthly chance
//   i64  enactment income
//   i64  retraction income
//   i64  monthly constant income
//   f32  monthly income factor
//   u32  advisor id
//   u8   available
//   u8   on
//   u8   enabled
//   i64  monthly adjusted income
//   u8   is income ordinance
//   --- exemplar block ---
//   u16  exemplar property data version (always 2)
//   u16  generic property data version (always 2)
//   u32  generic property count (always 0)
//   u32  exemplar group
//   u32  exemplar type (always 0x6534284A; validated, never taken from the
//        record)
//   u32  exemplar instance
//
// The record's session-only state (income policy parameters, suppress
// depth, effects, service handles) is never written. Decoding is
// all-or-nothing: the target record is only touched after the entire
// layout, including the exemplar block, has validated.

use ordinance::record::{OrdinanceRecord, SavedOrdinanceState};

use crate::save_error::SaveError;
use crate::stream::{ByteReader, ByteWriter};

/// Version of the persisted ordinance state. Any other value is rejected;
/// there is no migration in either direction.
pub const ORDINANCE_STATE_VERSION: u16 = 4;

/// Fixed values of the exemplar block.
pub const EXEMPLAR_PROPERTY_DATA_VERSION: u16 = 2;
pub const GENERIC_PROPERTY_DATA_VERSION: u16 = 2;
pub const GENERIC_PROPERTY_COUNT: u32 = 0;
/// Exemplar type id shared by every ordinance definition asset.
pub const EXEMPLAR_TYPE_ID: u32 = 0x6534_284A;

/// Encode a record's persisted state.
pub fn encode_ordinance(record: &OrdinanceRecord) -> Vec<u8> {
    encode_state(&record.saved_state())
}

/// Encode an already-snapshotted state.
pub fn encode_state(state: &SavedOrdinanceState) -> Vec<u8> {
    let mut w = ByteWriter::new();

    w.put_u16(ORDINANCE_STATE_VERSION);
    w.put_bool(state.initialized);
    w.put_u32(state.clsid);
    w.put_string(&state.name);
    w.put_string(&state.description);
    w.put_u32(state.year_first_available);
    w.put_f32(state.monthly_chance);
    w.put_i64(state.enactment_income);
    w.put_i64(state.retraction_income);
    w.put_i64(state.monthly_constant_income);
    w.put_f32(state.monthly_income_factor);
    w.put_u32(state.advisor_id);
    w.put_bool(state.available);
    w.put_bool(state.on);
    w.put_bool(state.enabled);
    w.put_i64(state.monthly_adjusted_income);
    w.put_bool(state.is_income_ordinance);

    w.put_u16(EXEMPLAR_PROPERTY_DATA_VERSION);
    w.put_u16(GENERIC_PROPERTY_DATA_VERSION);
    w.put_u32(GENERIC_PROPERTY_COUNT);
    w.put_u32(state.exemplar_group);
    w.put_u32(EXEMPLAR_TYPE_ID);
    w.put_u32(state.exemplar_instance);

    w.into_bytes()
}

/// Decode persisted state from the front of `bytes` into `record`.
///
/// Returns the number of bytes consumed so the caller can continue reading
/// a surrounding save stream. On any error the record is left exactly as it
/// was.
pub fn decode_ordinance(
    bytes: &[u8],
    record: &mut OrdinanceRecord,
) -> Result<usize, SaveError> {
    let mut reader = ByteReader::new(bytes);
    let state = read_state(&mut reader)?;
    record.restore_saved_state(state);
    Ok(reader.position())
}

/// Decode persisted state without a target record.
pub fn decode_state(bytes: &[u8]) -> Result<(SavedOrdinanceState, usize), SaveError> {
    let mut reader = ByteReader::new(bytes);
    let state = read_state(&mut reader)?;
    let consumed = reader.position();
    Ok((state, consumed))
}

fn read_state(r: &mut ByteReader<'_>) -> Result<SavedOrdinanceState, SaveError> {
    let version = r.get_u16()?;
    if version != ORDINANCE_STATE_VERSION {
        return Err(SaveError::VersionMismatch {
            expected: ORDINANCE_STATE_VERSION,
            found: version,
        });
    }

    let initialized = r.get_bool()?;
    let clsid = r.get_u32()?;
    let name = r.get_string()?;
    let description = r.get_string()?;
    let year_first_available = r.get_u32()?;
    let monthly_chance = r.get_f32()?;
    let enactment_income = r.get_i64()?;
    let retraction_income = r.get_i64()?;
    let monthly_constant_income = r.get_i64()?;
    let monthly_income_factor = r.get_f32()?;
    let advisor_id = r.get_u32()?;
    let available = r.get_bool()?;
    let on = r.get_bool()?;
    let enabled = r.get_bool()?;
    let monthly_adjusted_income = r.get_i64()?;
    let is_income_ordinance = r.get_bool()?;

    let (exemplar_group, exemplar_instance) = read_exemplar_block(r)?;

    Ok(SavedOrdinanceState {
        initialized,
        clsid,
        name,
        description,
        year_first_available,
        monthly_chance,
        enactment_income,
        retraction_income,
        monthly_constant_income,
        monthly_income_factor,
        advisor_id,
        available,
        on,
        enabled,
        monthly_adjusted_income,
        is_income_ordinance,
        exemplar_group,
        exemplar_instance,
    })
}

fn read_exemplar_block(r: &mut ByteReader<'_>) -> Result<(u32, u32), SaveError> {
    let property_version = r.get_u16()?;
    if property_version != EXEMPLAR_PROPERTY_DATA_VERSION {
        return Err(SaveError::ExemplarFieldMismatch {
            field: "exemplar property data version",
            expected: EXEMPLAR_PROPERTY_DATA_VERSION as u32,
            found: property_version as u32,
        });
    }

    let generic_version = r.get_u16()?;
    if generic_version != GENERIC_PROPERTY_DATA_VERSION {
        return Err(SaveError::ExemplarFieldMismatch {
            field: "generic property data version",
            expected: GENERIC_PROPERTY_DATA_VERSION as u32,
            found: generic_version as u32,
        });
    }

    let property_count = r.get_u32()?;
    if property_count != GENERIC_PROPERTY_COUNT {
        return Err(SaveError::ExemplarFieldMismatch {
            field: "generic property count",
            expected: GENERIC_PROPERTY_COUNT,
            found: property_count,
        });
    }

    let group = r.get_u32()?;

    let exemplar_type = r.get_u32()?;
    if exemplar_type != EXEMPLAR_TYPE_ID {
        return Err(SaveError::ExemplarFieldMismatch {
            field: "exemplar type",
            expected: EXEMPLAR_TYPE_ID,
            found: exemplar_type,
        });
    }

    let instance = r.get_u32()?;

    Ok((group, instance))
}
