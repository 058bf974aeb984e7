//! Validated value domains.
//!
//! A [`ValueDomain`] is the fixed set of strings a token may produce, plus the
//! default used when an external getter reports something outside that set.
//! Typed domains ([`Season`], [`Weather`], ...) are generated by
//! `domain_enum!` and convert to a [`ValueDomain`] with [`Season::domain`] and
//! friends.

use std::fmt;

/// A value was not a member of a typed domain.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("'{value}' is not a valid {domain}")]
pub struct UnknownValue {
	pub domain: &'static str,
	pub value: String,
}

/// Outcome of [`ValueDomain::normalize`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalized<'a> {
	/// The value is allowed; carries its canonical spelling.
	Valid(&'a str),
	/// The value was rejected; carries the domain default.
	Fallback(&'a str),
}

impl<'a> Normalized<'a> {
	/// Returns the value to store, whichever branch was taken.
	pub fn value(self) -> &'a str {
		match self {
			Normalized::Valid(v) | Normalized::Fallback(v) => v,
		}
	}

	pub fn is_fallback(self) -> bool {
		matches!(self, Normalized::Fallback(_))
	}
}

/// Fixed set of allowed values with a defined default.
///
/// Membership is case-insensitive. The domain is used when a token refreshes
/// and for diagnostics; reads never consult it.
#[derive(Clone, PartialEq, Eq)]
pub struct ValueDomain {
	allowed: Vec<Box<str>>,
	default: Box<str>,
}

impl ValueDomain {
	/// Creates a domain from its allowed values and its fallback.
	pub fn new<I, S>(allowed: I, default: impl Into<String>) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			allowed: allowed
				.into_iter()
				.map(|v| v.into().into_boxed_str())
				.collect(),
			default: default.into().into_boxed_str(),
		}
	}

	/// Returns the canonical spelling of `value` if it is allowed.
	pub fn canonical(&self, value: &str) -> Option<&str> {
		let value = value.trim();
		self.allowed
			.iter()
			.find(|a| a.eq_ignore_ascii_case(value))
			.map(|a| &**a)
	}

	pub fn contains(&self, value: &str) -> bool {
		self.canonical(value).is_some()
	}

	/// Maps `value` into the domain, substituting the default when it is not allowed.
	pub fn normalize(&self, value: &str) -> Normalized<'_> {
		match self.canonical(value) {
			Some(v) => Normalized::Valid(v),
			None => Normalized::Fallback(&self.default),
		}
	}

	pub fn default_value(&self) -> &str {
		&self.default
	}

	pub fn allowed(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
		self.allowed.iter().map(|v| &**v)
	}

	/// Returns the closest allowed value to a rejected input, for diagnostics.
	pub fn suggest(&self, value: &str) -> Option<&str> {
		let value = value.trim().to_lowercase();
		self.allowed
			.iter()
			.map(|a| (strsim::jaro_winkler(&value, &a.to_lowercase()), &**a))
			.filter(|(score, _)| *score >= 0.8)
			.max_by(|a, b| a.0.total_cmp(&b.0))
			.map(|(_, a)| a)
	}
}

impl fmt::Debug for ValueDomain {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ValueDomain")
			.field("allowed", &self.allowed)
			.field("default", &self.default)
			.finish()
	}
}

/// Generates a closed string domain with a defined default.
macro_rules! domain_enum {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident (default $default:ident) {
			$($variant:ident => $text:literal),+ $(,)?
		}
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$($variant),+
		}

		impl $name {
			/// Every member, in declaration order.
			pub const ALL: &'static [$name] = &[$($name::$variant),+];

			/// Value substituted for anything outside the domain.
			pub const DEFAULT: $name = $name::$default;

			pub const fn as_str(self) -> &'static str {
				match self {
					$($name::$variant => $text),+
				}
			}

			/// Parses case-insensitively, falling back to [`Self::DEFAULT`].
			pub fn parse_or_default(text: &str) -> Self {
				text.parse().unwrap_or(Self::DEFAULT)
			}

			/// Returns the untyped domain for token validation.
			pub fn domain() -> ValueDomain {
				ValueDomain::new(Self::ALL.iter().map(|v| v.as_str()), Self::DEFAULT.as_str())
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::DEFAULT
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				f.write_str(self.as_str())
			}
		}

		impl std::str::FromStr for $name {
			type Err = UnknownValue;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				let s = s.trim();
				Self::ALL
					.iter()
					.copied()
					.find(|v| v.as_str().eq_ignore_ascii_case(s))
					.ok_or_else(|| UnknownValue {
						domain: stringify!($name),
						value: s.to_string(),
					})
			}
		}
	};
}

domain_enum! {
	/// Calendar season.
	pub enum Season (default Spring) {
		Spring => "Spring",
		Summer => "Summer",
		Fall => "Fall",
		Winter => "Winter",
	}
}

domain_enum! {
	/// Weather for the current day.
	pub enum Weather (default Sun) {
		Sun => "Sun",
		Rain => "Rain",
		Snow => "Snow",
		Storm => "Storm",
		Wind => "Wind",
		Festival => "Festival",
		Wedding => "Wedding",
	}
}

domain_enum! {
	pub enum DayOfWeek (default Monday) {
		Monday => "Monday",
		Tuesday => "Tuesday",
		Wednesday => "Wednesday",
		Thursday => "Thursday",
		Friday => "Friday",
		Saturday => "Saturday",
		Sunday => "Sunday",
	}
}

domain_enum! {
	/// Farm map layout. Unrecognized layouts are reported as `Custom`.
	pub enum FarmType (default Custom) {
		Standard => "Standard",
		Riverland => "Riverland",
		Forest => "Forest",
		Hilltop => "Hilltop",
		Wilderness => "Wilderness",
		FourCorners => "FourCorners",
		Beach => "Beach",
		Custom => "Custom",
	}
}

domain_enum! {
	/// Farm cave choice.
	pub enum FarmCaveKind (default None) {
		None => "None",
		Bats => "Bats",
		Mushrooms => "Mushrooms",
	}
}

domain_enum! {
	pub enum Gender (default Male) {
		Male => "Male",
		Female => "Female",
	}
}

domain_enum! {
	pub enum PetKind (default Cat) {
		Cat => "Cat",
		Dog => "Dog",
	}
}

domain_enum! {
	/// Player skill, as used by skill-level probes.
	pub enum Skill (default Farming) {
		Farming => "Farming",
		Fishing => "Fishing",
		Foraging => "Foraging",
		Mining => "Mining",
		Combat => "Combat",
		Luck => "Luck",
	}
}
