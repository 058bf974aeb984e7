//! Shared setup for context integration tests.

use std::sync::Arc;

use patchwork_registry::ContextManager;
use patchwork_registry::test_helpers::FakeWorld;

pub const INSTALLED: &[&str] = &["Example.Core", "Example.Pack"];

/// Builds a manager over a loaded fake world without opening any gate.
pub fn manager() -> (Arc<FakeWorld>, ContextManager) {
	let _ = tracing_subscriber::fmt::try_init();
	let world = Arc::new(FakeWorld::loaded());
	let manager = ContextManager::new(world.clone(), INSTALLED);
	(world, manager)
}

/// Like [`manager`], with basic info loaded and one refresh run.
pub fn loaded_manager() -> (Arc<FakeWorld>, ContextManager) {
	let (world, manager) = manager();
	manager.mark_basic_info_loaded();
	manager.refresh().expect("initial refresh");
	(world, manager)
}

/// Snapshot of every token's values, keyed by name.
pub fn snapshot(manager: &ContextManager) -> Vec<(String, Vec<String>)> {
	use patchwork_registry::Context;

	manager
		.all(false)
		.into_iter()
		.map(|t| (t.name().to_string(), t.values().to_vec()))
		.collect()
}
