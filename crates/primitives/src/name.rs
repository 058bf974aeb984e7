use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Identity of a token within a tier.
///
/// Names compare case-insensitively: `Season`, `season` and ` SEASON ` all
/// refer to the same token. The spelling passed at construction is kept for
/// display and diagnostics.
#[derive(Clone)]
pub struct TokenName {
	display: Box<str>,
	key: Box<str>,
}

impl TokenName {
	/// Creates a name, trimming surrounding whitespace.
	pub fn new(name: impl AsRef<str>) -> Self {
		let display = name.as_ref().trim();
		Self {
			key: Self::normalize(display).into_boxed_str(),
			display: Box::from(display),
		}
	}

	/// Returns the normalized lookup key for an arbitrary name.
	pub fn normalize(name: &str) -> String {
		name.trim().to_lowercase()
	}

	/// Returns the name as originally spelled.
	#[inline]
	pub fn as_str(&self) -> &str {
		&self.display
	}

	/// Returns the normalized key used for comparison.
	#[inline]
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Returns true if `other` names this token.
	pub fn matches(&self, other: &str) -> bool {
		*self.key == *Self::normalize(other)
	}
}

impl PartialEq for TokenName {
	fn eq(&self, other: &Self) -> bool {
		self.key == other.key
	}
}

impl Eq for TokenName {}

impl Hash for TokenName {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.key.hash(state);
	}
}

impl Borrow<str> for TokenName {
	fn borrow(&self) -> &str {
		&self.key
	}
}

impl fmt::Debug for TokenName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TokenName({:?})", self.display)
	}
}

impl fmt::Display for TokenName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.display)
	}
}

impl From<&str> for TokenName {
	fn from(name: &str) -> Self {
		Self::new(name)
	}
}

impl From<String> for TokenName {
	fn from(name: String) -> Self {
		Self::new(name)
	}
}
