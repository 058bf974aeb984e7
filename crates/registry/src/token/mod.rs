//! Tokens: named, possibly multi-valued units of context.
//!
//! Every token satisfies the [`Token`] capability contract. The concrete
//! variants are:
//!
//! - [`ConstantToken`] - values fixed at construction, never refreshed.
//! - [`ProviderToken`] - values produced by an external getter on refresh,
//!   optionally gated by a [`Readiness`] predicate and validated against a
//!   [`ValueDomain`].
//! - [`ProbeToken`] - a provider that also answers sub-key queries
//!   ("is skill Mining at least 5?") without materializing every sub-key.
//!
//! # Value storage
//!
//! Values live in an [`ArcSwap`]: a refresh computes the complete new set and
//! publishes it with a single store, so a reader always sees either the old
//! set or the new one.

mod constant;
mod probe;
mod provider;

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
pub use constant::ConstantToken;
use patchwork_primitives::{TokenName, ValueDomain};
pub use probe::ProbeToken;
pub use provider::{Getter, ProviderToken};

use crate::context::Context;
use crate::error::ProviderError;
use crate::gate::Gate;


/// Shared handle to a registered token.
pub type TokenRef = Arc<dyn Token>;

/// Capability contract shared by all token variants.
pub trait Token: Send + Sync {
	fn name(&self) -> &TokenName;

	/// Whether values can change between refreshes.
	///
	/// Immutable tokens are computed once when built and skipped by refresh.
	fn is_mutable(&self) -> bool;

	/// Whether the token's value is currently knowable.
	fn is_ready(&self, ctx: &dyn Context) -> bool;

	/// Current value set, as published by the last refresh.
	///
	/// Empty when the token is not ready.
	fn values(&self) -> Arc<Vec<String>>;

	/// Recomputes the value set.
	///
	/// Returns whether the published set changed. Calling this again without
	/// an external change yields the same values.
	fn refresh(&self, ctx: &dyn Context) -> Result<bool, ProviderError>;

	/// Domain the values are validated against, if any.
	fn allowed_values(&self) -> Option<&ValueDomain> {
		None
	}

	/// Whether [`Token::probe`] evaluates sub-keys directly.
	fn accepts_input(&self) -> bool {
		false
	}

	/// Tests one sub-key.
	///
	/// The default checks membership in [`Token::values`], ignoring case.
	fn probe(&self, ctx: &dyn Context, input: &str) -> bool {
		self.is_ready(ctx) && self.values().iter().any(|v| v.eq_ignore_ascii_case(input.trim()))
	}

	/// Returns the value set, or only `filter` if it holds for this token.
	fn query(&self, ctx: &dyn Context, filter: Option<&str>) -> Vec<String> {
		match filter {
			None => self.values().to_vec(),
			Some(input) if self.probe(ctx, input) => vec![input.trim().to_string()],
			Some(_) => Vec::new(),
		}
	}
}

impl fmt::Debug for dyn Token {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Token")
			.field("name", self.name())
			.field("mutable", &self.is_mutable())
			.field("values", &self.values())
			.finish()
	}
}

/// Predicate deciding whether a token's value is knowable.
#[derive(Clone, Default)]
pub enum Readiness {
	#[default]
	Always,
	/// Ready while the gate is open.
	Gate(Gate),
	/// Ready when the predicate holds against the resolving context.
	When(Arc<dyn Fn(&dyn Context) -> bool + Send + Sync>),
}

impl Readiness {
	pub fn when(f: impl Fn(&dyn Context) -> bool + Send + Sync + 'static) -> Self {
		Readiness::When(Arc::new(f))
	}

	pub fn check(&self, ctx: &dyn Context) -> bool {
		match self {
			Readiness::Always => true,
			Readiness::Gate(gate) => gate.is_open(),
			Readiness::When(f) => f(ctx),
		}
	}
}

impl fmt::Debug for Readiness {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Readiness::Always => f.write_str("Always"),
			Readiness::Gate(gate) => f.debug_tuple("Gate").field(&gate.is_open()).finish(),
			Readiness::When(_) => f.write_str("When(..)"),
		}
	}
}

/// Raw output of an external getter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Provided {
	#[default]
	None,
	One(String),
	Many(Vec<String>),
}

impl Provided {
	/// Flattens into a value list, dropping blank entries.
	pub fn into_values(self) -> Vec<String> {
		let raw = match self {
			Provided::None => Vec::new(),
			Provided::One(v) => vec![v],
			Provided::Many(vs) => vs,
		};
		raw.into_iter()
			.filter_map(|v| {
				let trimmed = v.trim();
				if trimmed.is_empty() {
					None
				} else if trimmed.len() == v.len() {
					Some(v)
				} else {
					Some(trimmed.to_string())
				}
			})
			.collect()
	}
}

impl From<String> for Provided {
	fn from(v: String) -> Self {
		Provided::One(v)
	}
}

impl From<&str> for Provided {
	fn from(v: &str) -> Self {
		Provided::One(v.to_string())
	}
}

impl From<Option<String>> for Provided {
	fn from(v: Option<String>) -> Self {
		v.map_or(Provided::None, Provided::One)
	}
}

impl From<Vec<String>> for Provided {
	fn from(vs: Vec<String>) -> Self {
		Provided::Many(vs)
	}
}

impl From<Vec<&str>> for Provided {
	fn from(vs: Vec<&str>) -> Self {
		Provided::Many(vs.into_iter().map(str::to_string).collect())
	}
}

/// Atomically replaced value set.
pub(crate) struct ValueCell(ArcSwap<Vec<String>>);

impl ValueCell {
	pub(crate) fn new(values: Vec<String>) -> Self {
		Self(ArcSwap::from_pointee(values))
	}

	#[inline]
	pub(crate) fn load(&self) -> Arc<Vec<String>> {
		self.0.load_full()
	}

	/// Publishes `values` if they differ from the current set.
	pub(crate) fn replace(&self, values: Vec<String>) -> bool {
		if **self.0.load() == values {
			return false;
		}
		self.0.store(Arc::new(values));
		true
	}
}
