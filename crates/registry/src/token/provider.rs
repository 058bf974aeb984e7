use std::fmt;
use std::sync::Arc;

use patchwork_primitives::{Normalized, TokenName, ValueDomain};

use super::{Provided, Readiness, Token, ValueCell};
use crate::context::Context;
use crate::error::ProviderError;
use crate::world::WorldState;

/// Zero-argument external getter.
pub type Getter = Box<dyn Fn() -> Result<Provided, ProviderError> + Send + Sync>;

/// Token backed by an external getter, re-evaluated on every refresh.
///
/// A gated provider that is not ready when refreshed publishes an empty set;
/// enforced lookups hide it entirely, which is how "not yet known" stays
/// distinct from "known to be empty".
pub struct ProviderToken {
	name: TokenName,
	getter: Getter,
	readiness: Readiness,
	domain: Option<ValueDomain>,
	cell: ValueCell,
}

impl ProviderToken {
	pub fn new<F, P>(name: impl Into<TokenName>, getter: F) -> Self
	where
		F: Fn() -> Result<P, ProviderError> + Send + Sync + 'static,
		P: Into<Provided> + 'static,
	{
		Self {
			name: name.into(),
			getter: Box::new(move || getter().map(Into::into)),
			readiness: Readiness::Always,
			domain: None,
			cell: ValueCell::new(Vec::new()),
		}
	}

	/// Creates a provider that reads from an explicit world handle.
	pub fn from_world<F, P>(name: impl Into<TokenName>, world: &Arc<dyn WorldState>, read: F) -> Self
	where
		F: Fn(&dyn WorldState) -> Result<P, ProviderError> + Send + Sync + 'static,
		P: Into<Provided> + 'static,
	{
		let world = Arc::clone(world);
		Self::new(name, move || read(&*world))
	}

	pub fn gated(mut self, readiness: Readiness) -> Self {
		self.readiness = readiness;
		self
	}

	/// Validates produced values against `domain`, substituting its default.
	pub fn with_domain(mut self, domain: ValueDomain) -> Self {
		self.domain = Some(domain);
		self
	}

	fn validate(&self, values: Vec<String>) -> Vec<String> {
		let Some(domain) = &self.domain else {
			return values;
		};
		values
			.into_iter()
			.map(|raw| match domain.normalize(&raw) {
				Normalized::Valid(v) => v.to_string(),
				Normalized::Fallback(default) => {
					tracing::warn!(
						domain = "tokens",
						token = %self.name,
						rejected = %raw,
						suggestion = ?domain.suggest(&raw),
						fallback = default,
						"value outside token domain; falling back to default",
					);
					default.to_string()
				}
			})
			.collect()
	}
}

impl Token for ProviderToken {
	fn name(&self) -> &TokenName {
		&self.name
	}

	fn is_mutable(&self) -> bool {
		true
	}

	fn is_ready(&self, ctx: &dyn Context) -> bool {
		self.readiness.check(ctx)
	}

	fn values(&self) -> Arc<Vec<String>> {
		self.cell.load()
	}

	fn refresh(&self, ctx: &dyn Context) -> Result<bool, ProviderError> {
		if !self.readiness.check(ctx) {
			return Ok(self.cell.replace(Vec::new()));
		}
		let values = self.validate((self.getter)()?.into_values());
		Ok(self.cell.replace(values))
	}

	fn allowed_values(&self) -> Option<&ValueDomain> {
		self.domain.as_ref()
	}
}

impl fmt::Debug for ProviderToken {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ProviderToken")
			.field("name", &self.name)
			.field("readiness", &self.readiness)
			.field("values", &self.cell.load())
			.finish_non_exhaustive()
	}
}
