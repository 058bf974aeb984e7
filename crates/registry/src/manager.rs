//! The context manager.
//!
//! [`ContextManager`] is the object hosts talk to. It owns the shared global
//! registry, caches one [`ContextOverlay`] per namespace, and runs the update
//! cycle.
//!
//! # Update cycle
//!
//! The host calls [`ContextManager::refresh`] once per tick from its update
//! loop. A cycle refreshes every mutable global token once, then each cached
//! overlay's private tokens. Reads between cycles observe the values
//! published by the last one; nothing is recomputed on read.
//!
//! # Sessions
//!
//! Gates open once per session and are never reset. A new session builds a
//! new manager.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use rustc_hash::FxBuildHasher;

use crate::builtins;
use crate::config::ManagerSettings;
use crate::context::Context;
use crate::error::RefreshError;
use crate::gate::Gates;
use crate::namespace::{Namespace, NamespaceId};
use crate::overlay::ContextOverlay;
use crate::registry::{RefreshSummary, TokenRegistry};
use crate::token::TokenRef;
use crate::world::WorldState;


type OverlayMap = IndexMap<NamespaceId, Arc<ContextOverlay>, FxBuildHasher>;

/// Owns the global token context and every namespace overlay.
pub struct ContextManager {
	gates: Gates,
	shared: Arc<TokenRegistry>,
	overlays: RwLock<OverlayMap>,
	settings: ManagerSettings,
}

impl ContextManager {
	/// Builds the manager and registers the global catalog.
	///
	/// `installed` lists the ids of every installed namespace; it backs the
	/// immutable `HasMod` token.
	pub fn new<S: AsRef<str>>(world: Arc<dyn WorldState>, installed: &[S]) -> Self {
		Self::with_settings(world, installed, ManagerSettings::default())
	}

	pub fn with_settings<S: AsRef<str>>(
		world: Arc<dyn WorldState>,
		installed: &[S],
		settings: ManagerSettings,
	) -> Self {
		let gates = Gates::new();
		let shared = TokenRegistry::new("global").with_duplicate_warnings(settings.warn_on_duplicate);
		shared.extend(builtins::global_tokens(&world, &gates, installed));
		tracing::debug!(tokens = shared.len(), installed = installed.len(), "context manager ready");

		Self {
			gates,
			shared: Arc::new(shared),
			overlays: RwLock::new(OverlayMap::default()),
			settings,
		}
	}

	/// Readiness inputs; the host opens them as world state becomes known.
	pub fn gates(&self) -> &Gates {
		&self.gates
	}

	/// Opens the `basic_info_loaded` gate. There is no way back within a session.
	pub fn mark_basic_info_loaded(&self) {
		self.gates.basic_info_loaded().open();
	}

	/// The shared global registry.
	pub fn shared(&self) -> &Arc<TokenRegistry> {
		&self.shared
	}

	/// Returns the overlay for `namespace`, creating and seeding it on first use.
	///
	/// Overlays are keyed by namespace identity, so every call with the same
	/// namespace returns the same overlay.
	pub fn overlay_for(&self, namespace: &Namespace) -> Arc<ContextOverlay> {
		if let Some(overlay) = self.overlays.read().get(&namespace.id()) {
			return Arc::clone(overlay);
		}

		let mut overlays = self.overlays.write();
		let overlay = overlays.entry(namespace.id()).or_insert_with(|| {
			let overlay = ContextOverlay::new(namespace.clone(), Arc::clone(&self.shared));
			for token in builtins::namespace_tokens(namespace) {
				overlay.register_ref(token);
			}
			tracing::debug!(
				namespace = namespace.name(),
				id = %namespace.id(),
				private = overlay.private_tokens().len(),
				"created namespace overlay",
			);
			Arc::new(overlay)
		});
		Arc::clone(overlay)
	}

	/// Every cached overlay, in creation order.
	pub fn overlays(&self) -> Vec<Arc<ContextOverlay>> {
		self.overlays.read().values().cloned().collect()
	}

	pub fn settings(&self) -> &ManagerSettings {
		&self.settings
	}

	/// Runs one update cycle.
	///
	/// Refreshes the shared registry, then each overlay's private tokens. A
	/// getter failure aborts the rest of the cycle and is returned; tokens
	/// not yet visited keep their previous values.
	pub fn refresh(&self) -> Result<RefreshSummary, RefreshError> {
		let mut summary = self.shared.refresh()?;
		for overlay in self.overlays() {
			summary += overlay.refresh()?;
		}
		tracing::trace!(
			refreshed = summary.refreshed,
			changed = summary.changed,
			"context refreshed"
		);
		Ok(summary)
	}
}

impl Context for ContextManager {
	fn lookup(&self, name: &str, enforce_context: bool) -> Option<TokenRef> {
		self.shared.lookup(name, enforce_context)
	}

	fn all(&self, enforce_context: bool) -> Vec<TokenRef> {
		self.shared.all(enforce_context)
	}
}

impl std::fmt::Debug for ContextManager {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("ContextManager")
			.field("shared", &self.shared)
			.field("overlays", &self.overlays.read().len())
			.field("basic_info_loaded", &self.gates.basic_info_loaded().is_open())
			.finish_non_exhaustive()
	}
}
