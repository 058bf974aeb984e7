//! External state access.
//!
//! [`WorldState`] is the single collaborator through which builtin tokens
//! read the host's world. Every accessor returns owned snapshots and reports
//! absent state as `None` or an empty collection.

use patchwork_primitives::{FarmCaveKind, FarmType, GameDate, Gender, PetKind, Skill};
use rustc_hash::FxHashMap as HashMap;

use crate::error::ProviderError;

/// Keyed lookup into an external content table.
pub trait ContentSource: Send + Sync {
	/// Returns the entry for `key`. A missing key is not an error.
	fn get(&self, key: &str) -> Option<String>;
}

/// In-memory content table.
#[derive(Debug, Clone, Default)]
pub struct StaticContentSource {
	entries: HashMap<Box<str>, String>,
}

impl StaticContentSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, key: &str, value: impl Into<String>) -> Self {
		self.insert(key, value);
		self
	}

	pub fn insert(&mut self, key: &str, value: impl Into<String>) {
		self.entries.insert(Box::from(key), value.into());
	}
}

impl ContentSource for StaticContentSource {
	fn get(&self, key: &str) -> Option<String> {
		self.entries.get(key).cloned()
	}
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for StaticContentSource {
	fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
		let mut source = Self::new();
		for (k, v) in iter {
			source.insert(k.as_ref(), v);
		}
		source
	}
}

/// Snapshot of the active player.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerState {
	pub name: String,
	pub gender: Option<Gender>,
	pub preferred_pet: Option<PetKind>,
	pub spouse: Option<String>,
	pub mail_flags: Vec<String>,
	pub seen_events: Vec<i32>,
	pub professions: Vec<i32>,
	pub dialogue_answers: Vec<i32>,
	pub skill_levels: Vec<(Skill, u8)>,
	pub house_upgrade_level: u8,
}

impl PlayerState {
	pub fn skill_level(&self, skill: Skill) -> u8 {
		self.skill_levels
			.iter()
			.find(|(s, _)| *s == skill)
			.map_or(0, |(_, level)| *level)
	}
}

/// Snapshot of the farm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FarmState {
	pub name: String,
	/// Raw layout id as reported by the host; unknown layouts map to [`FarmType::Custom`].
	pub layout: String,
	pub cave: FarmCaveKind,
}

impl FarmState {
	pub fn farm_type(&self) -> FarmType {
		FarmType::parse_or_default(&self.layout)
	}
}

/// Read access to the host's world.
///
/// Accessors are synchronous probes of in-memory state and are only called
/// during a refresh. Implementations return `Ok(None)` (or an empty value)
/// when the state does not exist yet, and reserve `Err` for state that
/// should exist but cannot be read.
pub trait WorldState: Send + Sync {
	/// Current display language code, e.g. `en` or `pt-BR`.
	fn language(&self) -> Result<Option<String>, ProviderError>;

	fn date(&self) -> Result<Option<GameDate>, ProviderError>;

	/// Raw weather id for today.
	fn weather(&self) -> Result<Option<String>, ProviderError>;

	fn is_wedding_day(&self) -> Result<bool, ProviderError>;

	/// Festival table keyed by [`GameDate::event_key`].
	fn festival_dates(&self) -> &dyn ContentSource;

	fn player(&self) -> Result<Option<PlayerState>, ProviderError>;

	fn farm(&self) -> Result<Option<FarmState>, ProviderError>;
}
