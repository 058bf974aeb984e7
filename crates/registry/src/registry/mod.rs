//! Flat name-to-token mapping for one tier.
//!
//! The shared global registry and each overlay's private mapping are both a
//! [`TokenRegistry`]. Names are compared case-insensitively. Readiness is
//! enforced here, at the lookup boundary, so callers never see a hidden token.

use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;
use patchwork_primitives::TokenName;
use rustc_hash::FxBuildHasher;

use crate::context::Context;
use crate::error::RefreshError;
use crate::token::{Token, TokenRef};


/// Result of registering a token.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InsertAction {
	/// Name was new; token inserted.
	InsertedNew,
	/// Name existed in this tier; the new token replaced it.
	ReplacedExisting,
}

/// Counters from one registry refresh pass.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct RefreshSummary {
	/// Mutable tokens visited.
	pub refreshed: usize,
	/// Tokens whose published value set changed.
	pub changed: usize,
}

impl std::ops::AddAssign for RefreshSummary {
	fn add_assign(&mut self, rhs: Self) {
		self.refreshed += rhs.refreshed;
		self.changed += rhs.changed;
	}
}

type TokenMap = IndexMap<Box<str>, TokenRef, FxBuildHasher>;

/// Tokens registered in one tier, in registration order.
pub struct TokenRegistry {
	tier: Box<str>,
	tokens: RwLock<TokenMap>,
	warn_on_duplicate: bool,
}

impl TokenRegistry {
	/// Creates an empty registry. `tier` labels log output.
	pub fn new(tier: impl Into<Box<str>>) -> Self {
		Self {
			tier: tier.into(),
			tokens: RwLock::new(TokenMap::default()),
			warn_on_duplicate: true,
		}
	}

	/// Sets whether same-tier duplicates are logged at `warn` (default) or `debug`.
	pub fn with_duplicate_warnings(mut self, warn: bool) -> Self {
		self.warn_on_duplicate = warn;
		self
	}

	/// Inserts a token, replacing any token with the same name in this tier.
	///
	/// Registering a name twice is a programmer error; the last registration
	/// wins and the replacement is logged.
	pub fn register(&self, token: impl Token + 'static) -> InsertAction {
		self.register_ref(Arc::new(token))
	}

	/// Shared-handle form of [`TokenRegistry::register`].
	pub fn register_ref(&self, token: TokenRef) -> InsertAction {
		let key = Box::from(token.name().key());
		let name = token.name().to_string();
		let replaced = self.tokens.write().insert(key, token).is_some();
		if replaced {
			if self.warn_on_duplicate {
				tracing::warn!(tier = %self.tier, token = %name, "duplicate token registration; last one wins");
			} else {
				tracing::debug!(tier = %self.tier, token = %name, "token replaced");
			}
			InsertAction::ReplacedExisting
		} else {
			tracing::debug!(tier = %self.tier, token = %name, "token registered");
			InsertAction::InsertedNew
		}
	}

	/// Registers every token in order.
	pub fn extend<I>(&self, tokens: I)
	where
		I: IntoIterator<Item = TokenRef>,
	{
		for token in tokens {
			self.register_ref(token);
		}
	}

	/// Returns the token registered under `name`, ignoring readiness.
	pub fn get(&self, name: &str) -> Option<TokenRef> {
		self.tokens.read().get(TokenName::normalize(name).as_str()).cloned()
	}

	/// Number of tokens in this tier.
	pub fn len(&self) -> usize {
		self.tokens.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.tokens.read().is_empty()
	}

	/// Display names, in registration order.
	pub fn names(&self) -> Vec<String> {
		self.tokens
			.read()
			.values()
			.map(|t| t.name().to_string())
			.collect()
	}

	/// Resolves `name` in this tier, checking readiness against `ctx`.
	pub(crate) fn lookup_in(&self, name: &str, enforce_context: bool, ctx: &dyn Context) -> Option<TokenRef> {
		let token = self.get(name)?;
		(!enforce_context || token.is_ready(ctx)).then_some(token)
	}

	/// Lists this tier's tokens, filtering readiness against `ctx`.
	pub(crate) fn all_in(&self, enforce_context: bool, ctx: &dyn Context) -> Vec<TokenRef> {
		let tokens: Vec<TokenRef> = self.tokens.read().values().cloned().collect();
		if enforce_context {
			tokens.into_iter().filter(|t| t.is_ready(ctx)).collect()
		} else {
			tokens
		}
	}

	/// Refreshes every mutable token in this tier against `ctx`.
	///
	/// Stops at the first getter failure; tokens after it keep their previous
	/// values until the next cycle.
	pub fn refresh_in(&self, ctx: &dyn Context) -> Result<RefreshSummary, RefreshError> {
		let mutable: Vec<TokenRef> = self
			.tokens
			.read()
			.values()
			.filter(|t| t.is_mutable())
			.cloned()
			.collect();

		let mut summary = RefreshSummary::default();
		for token in mutable {
			let changed = token.refresh(ctx).map_err(|source| {
				tracing::error!(tier = %self.tier, token = %token.name(), error = %source, "token refresh failed; aborting cycle");
				RefreshError {
					token: token.name().to_string(),
					source,
				}
			})?;
			summary.refreshed += 1;
			if changed {
				summary.changed += 1;
				tracing::trace!(tier = %self.tier, token = %token.name(), values = ?token.values(), "token changed");
			}
		}
		Ok(summary)
	}

	/// Refreshes this tier with itself as the resolution context.
	pub fn refresh(&self) -> Result<RefreshSummary, RefreshError> {
		self.refresh_in(self)
	}
}

impl Context for TokenRegistry {
	fn lookup(&self, name: &str, enforce_context: bool) -> Option<TokenRef> {
		self.lookup_in(name, enforce_context, self)
	}

	fn all(&self, enforce_context: bool) -> Vec<TokenRef> {
		self.all_in(enforce_context, self)
	}
}

impl std::fmt::Debug for TokenRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TokenRegistry")
			.field("tier", &self.tier)
			.field("tokens", &self.names())
			.finish()
	}
}
