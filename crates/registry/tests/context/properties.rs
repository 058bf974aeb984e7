use std::sync::Arc;

use patchwork_registry::{Context, ProviderToken};
use pretty_assertions::assert_eq;

use crate::common::{loaded_manager, manager, snapshot};

#[test]
fn immutable_tokens_never_change() {
	let (world, manager) = loaded_manager();
	let immutable: Vec<_> = manager.all(false).into_iter().filter(|t| !t.is_mutable()).collect();
	assert!(!immutable.is_empty());
	let before: Vec<_> = immutable.iter().map(|t| t.values()).collect();

	for day in 2..5 {
		world.update(|s| s.date = patchwork_registry::primitives::GameDate::new(day, Default::default(), 1).ok());
		manager.refresh().unwrap();
	}
	for (token, before) in immutable.iter().zip(before) {
		assert_eq!(token.values(), before, "{} changed", token.name());
	}
}

#[test]
fn gated_tokens_are_hidden_until_the_gate_opens() {
	let (_, manager) = manager();
	manager.refresh().unwrap();

	assert!(manager.lookup("Season", true).is_none());
	assert!(!manager.contains("Season", true));
	assert!(manager.all(true).iter().all(|t| t.name().as_str() != "Season"));
	assert!(manager.all(false).iter().any(|t| t.name().as_str() == "Season"));
	assert!(manager.values_of("Season", true).is_empty());

	manager.mark_basic_info_loaded();
	manager.refresh().unwrap();
	assert!(manager.lookup("Season", true).is_some());
	assert_eq!(*manager.values_of("Season", true), ["Spring"]);
}

#[test]
fn unknown_names_resolve_to_nothing() {
	let (_, manager) = loaded_manager();
	assert!(manager.lookup("NoSuchToken", false).is_none());
	assert!(!manager.contains("NoSuchToken", false));
	assert!(manager.values_of("NoSuchToken", false).is_empty());
}

#[test]
fn refresh_twice_is_idempotent() {
	let (_, manager) = loaded_manager();
	let first = snapshot(&manager);
	let summary = manager.refresh().unwrap();
	assert_eq!(summary.changed, 0);
	assert_eq!(snapshot(&manager), first);
}

#[test]
fn multi_value_getter_keeps_order() {
	let (_, manager) = loaded_manager();
	manager
		.shared()
		.register(ProviderToken::new("Letters", || Ok(vec!["a", "b", "c"])));
	manager.refresh().unwrap();
	assert_eq!(*manager.values_of("Letters", false), ["a", "b", "c"]);
}

#[test]
fn world_changes_show_up_after_refresh_only() {
	let (world, manager) = loaded_manager();
	world.update(|s| s.weather = Some("Storm".into()));
	assert_eq!(*manager.values_of("Weather", true), ["Sun"]);
	manager.refresh().unwrap();
	assert_eq!(*manager.values_of("Weather", true), ["Storm"]);
}

#[test]
fn festival_and_wedding_days() {
	let (world, manager) = loaded_manager();
	assert!(manager.values_of("DayEvent", true).is_empty());

	world.update(|s| s.wedding = true);
	manager.refresh().unwrap();
	assert_eq!(*manager.values_of("DayEvent", true), ["wedding"]);
}

#[test]
fn provider_failure_aborts_and_recovers() {
	let (world, manager) = loaded_manager();
	world.update(|s| {
		s.fail = Some("date");
		s.weather = Some("Snow".into());
	});
	let err = manager.refresh().unwrap_err();
	assert_eq!(err.token, "Day");
	assert_eq!(*manager.values_of("Weather", true), ["Sun"]);

	world.update(|s| s.fail = None);
	manager.refresh().unwrap();
	assert_eq!(*manager.values_of("Weather", true), ["Snow"]);
}

#[test]
fn values_held_across_refresh_stay_whole() {
	let (world, manager) = loaded_manager();
	let held: Arc<Vec<String>> = manager.values_of("HasFlag", true);
	world.update(|s| {
		if let Some(player) = s.player.as_mut() {
			player.mail_flags.push("beenToWoods".into());
		}
	});
	manager.refresh().unwrap();
	assert_eq!(*held, ["ccBoilerRoom"]);
	assert_eq!(*manager.values_of("HasFlag", true), ["ccBoilerRoom", "beenToWoods"]);
}
