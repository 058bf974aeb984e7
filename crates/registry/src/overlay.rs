//! Namespace overlays.
//!
//! An overlay layers a namespace's private tokens over the shared global
//! registry. Resolution order:
//!
//! 1. Private mapping
//! 2. Shared registry
//!
//! A private token fully shadows a shared token with the same name; values
//! are never merged across tiers.

use std::sync::Arc;

use rustc_hash::FxHashSet as HashSet;

use crate::context::Context;
use crate::error::RefreshError;
use crate::namespace::Namespace;
use crate::registry::{InsertAction, RefreshSummary, TokenRegistry};
use crate::token::{Token, TokenRef};

/// Private token view for one namespace.
///
/// Handles are shared: the manager caches one overlay per namespace and hands
/// out clones of the same `Arc`, so tokens registered through one handle are
/// visible through every other.
#[derive(Debug)]
pub struct ContextOverlay {
	namespace: Namespace,
	shared: Arc<TokenRegistry>,
	private: TokenRegistry,
}

impl ContextOverlay {
	pub fn new(namespace: Namespace, shared: Arc<TokenRegistry>) -> Self {
		let private = TokenRegistry::new(namespace.name());
		Self {
			namespace,
			shared,
			private,
		}
	}

	pub fn namespace(&self) -> &Namespace {
		&self.namespace
	}

	/// Registers a namespace-private token.
	pub fn register(&self, token: impl Token + 'static) -> InsertAction {
		self.private.register(token)
	}

	pub fn register_ref(&self, token: TokenRef) -> InsertAction {
		self.private.register_ref(token)
	}

	/// The private tier alone, without the shared fallback.
	pub fn private_tokens(&self) -> &TokenRegistry {
		&self.private
	}

	/// Refreshes the private tier.
	///
	/// Private tokens resolve against this overlay, so they may read both
	/// private and shared tokens. The shared registry is refreshed once per
	/// cycle by the manager, not here.
	pub fn refresh(&self) -> Result<RefreshSummary, RefreshError> {
		self.private.refresh_in(self)
	}
}

impl Context for ContextOverlay {
	fn lookup(&self, name: &str, enforce_context: bool) -> Option<TokenRef> {
		if self.private.get(name).is_some() {
			return self.private.lookup_in(name, enforce_context, self);
		}
		self.shared.lookup_in(name, enforce_context, self)
	}

	fn all(&self, enforce_context: bool) -> Vec<TokenRef> {
		let mut tokens = self.private.all_in(false, self);
		let shadowed: HashSet<Box<str>> = tokens
			.iter()
			.map(|t| Box::from(t.name().key()))
			.collect();
		tokens.extend(
			self.shared
				.all_in(false, self)
				.into_iter()
				.filter(|t| !shadowed.contains(t.name().key())),
		);
		if enforce_context {
			tokens.retain(|t| t.is_ready(self));
		}
		tokens
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::gate::Gate;
	use crate::token::{ConstantToken, ProviderToken, Readiness};

	fn overlay_with_shared() -> (Arc<TokenRegistry>, ContextOverlay) {
		let shared = Arc::new(TokenRegistry::new("global"));
		shared.register(ConstantToken::new("Language", "en"));
		shared.register(ConstantToken::new("Season", "Fall"));
		let overlay = ContextOverlay::new(Namespace::new("Example.Pack", "/packs/example"), shared.clone());
		(shared, overlay)
	}

	#[test]
	fn falls_back_to_shared_tokens() {
		let (_, overlay) = overlay_with_shared();
		assert_eq!(*overlay.values_of("language", true), ["en"]);
		assert!(overlay.private_tokens().is_empty());
	}

	#[test]
	fn private_token_shadows_shared() {
		let (shared, overlay) = overlay_with_shared();
		overlay.register(ConstantToken::new("Season", "Winter"));

		assert_eq!(*overlay.values_of("Season", false), ["Winter"]);
		assert_eq!(*shared.values_of("Season", false), ["Fall"]);

		let names: Vec<String> = overlay.all(false).iter().map(|t| t.name().to_string()).collect();
		assert_eq!(names, ["Season", "Language"]);
	}

	#[test]
	fn unready_private_token_does_not_expose_shared_one() {
		let (_, overlay) = overlay_with_shared();
		overlay.register(ProviderToken::new("Season", || Ok("Summer")).gated(Readiness::Gate(Gate::new())));
		assert!(overlay.lookup("Season", true).is_none());
		assert!(overlay.lookup("Season", false).is_some());
		assert!(overlay.values_of("Season", false).is_empty());
	}

	#[test]
	fn private_tokens_read_through_the_overlay() {
		let (_, overlay) = overlay_with_shared();
		overlay.register(ConstantToken::new("Enabled", "true"));
		overlay.register(ProviderToken::new("Always", || Ok("yes")).gated(Readiness::when(|ctx| {
			ctx.values_of("Enabled", true).iter().any(|v| v == "true")
				&& ctx.contains("Language", true)
		})));

		let summary = overlay.refresh().unwrap();
		assert_eq!(summary.refreshed, 1);
		assert_eq!(*overlay.values_of("Always", true), ["yes"]);
	}

	#[test]
	fn overlay_refresh_leaves_shared_tier_alone() {
		let shared = Arc::new(TokenRegistry::new("global"));
		shared.register(ProviderToken::new("Day", || Ok("5")));
		let overlay = ContextOverlay::new(Namespace::new("A", "/a"), shared.clone());

		overlay.refresh().unwrap();
		assert!(overlay.values_of("Day", false).is_empty());
		shared.refresh().unwrap();
		assert_eq!(*overlay.values_of("Day", false), ["5"]);
	}
}
