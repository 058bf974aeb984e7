//! Leaf value types for the token context: names, validated domains, and dates.

/// Calendar types for the world clock.
pub mod date;
/// Validated value domains with defined fallbacks.
pub mod domain;
/// Case-normalized token identity.
pub mod name;
/// Numeric profession ids and their display names.
pub mod profession;

pub use date::{DAYS_PER_SEASON, DateError, GameDate};
pub use domain::{
	DayOfWeek, FarmCaveKind, FarmType, Gender, Normalized, PetKind, Season, Skill, UnknownValue,
	ValueDomain, Weather,
};
pub use name::TokenName;
pub use profession::profession_name;
