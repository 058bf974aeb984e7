use std::sync::Arc;

use patchwork_primitives::{TokenName, ValueDomain};

use super::{Provided, ProviderToken, Readiness, Token};
use crate::context::Context;
use crate::error::ProviderError;

type SubKeyTest = Box<dyn Fn(&[String], &str) -> bool + Send + Sync>;

/// Token that answers sub-key queries directly.
///
/// The value set lists the sub-keys currently known to hold (it may be
/// empty when the key space cannot be enumerated, as with file paths).
/// [`Token::probe`] hands one sub-key to the test together with the set
/// published by the last refresh; tests that answer from that set never see
/// state newer than the values readers observe.
pub struct ProbeToken {
	inner: ProviderToken,
	test: SubKeyTest,
}

impl ProbeToken {
	/// Creates a probe whose value set is produced by `getter`.
	pub fn new<F, P>(
		name: impl Into<TokenName>,
		getter: F,
		test: impl Fn(&[String], &str) -> bool + Send + Sync + 'static,
	) -> Self
	where
		F: Fn() -> Result<P, ProviderError> + Send + Sync + 'static,
		P: Into<Provided> + 'static,
	{
		Self {
			inner: ProviderToken::new(name, getter),
			test: Box::new(test),
		}
	}

	/// Creates a probe that never enumerates its sub-keys.
	pub fn opaque(
		name: impl Into<TokenName>,
		test: impl Fn(&[String], &str) -> bool + Send + Sync + 'static,
	) -> Self {
		Self::new(name, || Ok(Provided::None), test)
	}

	pub fn gated(mut self, readiness: Readiness) -> Self {
		self.inner = self.inner.gated(readiness);
		self
	}
}

impl Token for ProbeToken {
	fn name(&self) -> &TokenName {
		self.inner.name()
	}

	fn is_mutable(&self) -> bool {
		true
	}

	fn is_ready(&self, ctx: &dyn Context) -> bool {
		self.inner.is_ready(ctx)
	}

	fn values(&self) -> Arc<Vec<String>> {
		self.inner.values()
	}

	fn refresh(&self, ctx: &dyn Context) -> Result<bool, ProviderError> {
		self.inner.refresh(ctx)
	}

	fn allowed_values(&self) -> Option<&ValueDomain> {
		self.inner.allowed_values()
	}

	fn accepts_input(&self) -> bool {
		true
	}

	fn probe(&self, ctx: &dyn Context, input: &str) -> bool {
		let input = input.trim();
		!input.is_empty() && self.is_ready(ctx) && (self.test)(&self.values(), input)
	}
}
