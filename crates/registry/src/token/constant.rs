use std::sync::Arc;

use patchwork_primitives::{TokenName, ValueDomain};

use super::{Provided, Token};
use crate::context::Context;
use crate::error::ProviderError;

/// Token whose values are fixed at construction.
pub struct ConstantToken {
	name: TokenName,
	values: Arc<Vec<String>>,
	domain: Option<ValueDomain>,
}

impl ConstantToken {
	pub fn new(name: impl Into<TokenName>, values: impl Into<Provided>) -> Self {
		Self {
			name: name.into(),
			values: Arc::new(values.into().into_values()),
			domain: None,
		}
	}

	/// Records the domain the values were chosen from, for diagnostics.
	pub fn with_domain(mut self, domain: ValueDomain) -> Self {
		self.domain = Some(domain);
		self
	}
}

impl Token for ConstantToken {
	fn name(&self) -> &TokenName {
		&self.name
	}

	fn is_mutable(&self) -> bool {
		false
	}

	fn is_ready(&self, _ctx: &dyn Context) -> bool {
		true
	}

	fn values(&self) -> Arc<Vec<String>> {
		self.values.clone()
	}

	fn refresh(&self, _ctx: &dyn Context) -> Result<bool, ProviderError> {
		Ok(false)
	}

	fn allowed_values(&self) -> Option<&ValueDomain> {
		self.domain.as_ref()
	}
}
