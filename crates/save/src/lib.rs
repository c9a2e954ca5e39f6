//! Binary persistence for the gambling ordinance.
//!
//! The ordinance is stored inside the host's city save with a fixed
//! little-endian layout that predates this crate; byte order and field
//! order are a compatibility contract. `encode_ordinance` and
//! `decode_ordinance` are pure functions over that layout, so the codec is
//! testable without any host or app machinery.

pub mod ordinance_codec;
pub mod save_error;
pub mod stream;

#[cfg(test)]
mod codec_fuzz_tests;

pub use ordinance_codec::{
    decode_ordinance, decode_state, encode_ordinance, encode_state, EXEMPLAR_TYPE_ID,
    ORDINANCE_STATE_VERSION,
};
pub use save_error::SaveError;
