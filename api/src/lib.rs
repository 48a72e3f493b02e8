//! This crate contains the platform-independent side of the converter:
//! currencies, amounts, the conversion wire format and rate providers.

pub mod amount;
pub mod conversion;
pub mod currency;
pub mod prefs;
pub mod rate_map;
pub mod rate_providers;

pub type ApiError = anyhow::Error;
