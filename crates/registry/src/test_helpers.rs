//! In-memory [`WorldState`] for tests.

use parking_lot::RwLock;
use patchwork_primitives::{FarmCaveKind, GameDate, Gender, PetKind, Season, Skill};

use crate::error::ProviderError;
use crate::world::{ContentSource, FarmState, PlayerState, StaticContentSource, WorldState};

/// Mutable world snapshot behind a [`FakeWorld`].
#[derive(Debug, Clone, Default)]
pub struct FakeState {
	pub language: Option<String>,
	pub date: Option<GameDate>,
	pub weather: Option<String>,
	pub wedding: bool,
	pub player: Option<PlayerState>,
	pub farm: Option<FarmState>,
	/// Accessor that reports [`ProviderError::Failed`] instead of reading.
	pub fail: Option<&'static str>,
}

/// World whose state tests edit between refreshes.
#[derive(Debug, Default)]
pub struct FakeWorld {
	state: RwLock<FakeState>,
	festivals: StaticContentSource,
}

impl FakeWorld {
	/// A world with no session loaded.
	pub fn new() -> Self {
		Self::default()
	}

	/// A world with a loaded save: spring 1 of year 1, sunny, one player.
	pub fn loaded() -> Self {
		let world = Self::new();
		world.update(|s| {
			s.language = Some("en".into());
			s.date = GameDate::new(1, Season::Spring, 1).ok();
			s.weather = Some("Sun".into());
			s.player = Some(PlayerState {
				name: "Alex".into(),
				gender: Some(Gender::Female),
				preferred_pet: Some(PetKind::Dog),
				spouse: None,
				mail_flags: vec!["ccBoilerRoom".into()],
				seen_events: vec![60367],
				professions: vec![0, 4],
				dialogue_answers: vec![12],
				skill_levels: vec![(Skill::Farming, 3), (Skill::Mining, 5)],
				house_upgrade_level: 1,
			});
			s.farm = Some(FarmState {
				name: "Sunny Acres".into(),
				layout: "Forest".into(),
				cave: FarmCaveKind::Mushrooms,
			});
		});
		world
	}

	pub fn with_festival(mut self, key: &str, name: &str) -> Self {
		self.festivals.insert(key, name);
		self
	}

	pub fn update(&self, f: impl FnOnce(&mut FakeState)) {
		f(&mut *self.state.write());
	}

	fn read<T>(&self, what: &'static str, f: impl FnOnce(&FakeState) -> T) -> Result<T, ProviderError> {
		let state = self.state.read();
		if state.fail == Some(what) {
			return Err(ProviderError::Failed(format!("{what} exploded")));
		}
		Ok(f(&*state))
	}
}

impl WorldState for FakeWorld {
	fn language(&self) -> Result<Option<String>, ProviderError> {
		self.read("language", |s| s.language.clone())
	}

	fn date(&self) -> Result<Option<GameDate>, ProviderError> {
		self.read("date", |s| s.date)
	}

	fn weather(&self) -> Result<Option<String>, ProviderError> {
		self.read("weather", |s| s.weather.clone())
	}

	fn is_wedding_day(&self) -> Result<bool, ProviderError> {
		self.read("wedding", |s| s.wedding)
	}

	fn festival_dates(&self) -> &dyn ContentSource {
		&self.festivals
	}

	fn player(&self) -> Result<Option<PlayerState>, ProviderError> {
		self.read("player", |s| s.player.clone())
	}

	fn farm(&self) -> Result<Option<FarmState>, ProviderError> {
		self.read("farm", |s| s.farm.clone())
	}
}
