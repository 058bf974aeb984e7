use std::sync::Arc;

use crate::token::TokenRef;

/// Read-only token resolution.
///
/// Implemented by the shared registry (global view) and by namespace
/// overlays (private tokens first, then the shared registry). Reads never
/// refresh anything and never fail: unknown names resolve to nothing.
///
/// With `enforce_context` set, a token that exists but is not ready is
/// reported exactly like an unknown one.
pub trait Context: Send + Sync {
	fn lookup(&self, name: &str, enforce_context: bool) -> Option<TokenRef>;

	/// Lists every visible token.
	///
	/// Each call applies the readiness filter against current state.
	fn all(&self, enforce_context: bool) -> Vec<TokenRef>;

	fn contains(&self, name: &str, enforce_context: bool) -> bool {
		self.lookup(name, enforce_context).is_some()
	}

	/// Current values of `name`, or an empty set if it is unknown or not ready.
	///
	/// An unready token has no knowable values, so readiness applies here even
	/// when `enforce_context` is unset.
	fn values_of(&self, name: &str, _enforce_context: bool) -> Arc<Vec<String>> {
		self.lookup(name, true)
			.map(|token| token.values())
			.unwrap_or_default()
	}
}
