//! Configuration.
//!
//! Two layers are configurable:
//!
//! - [`ManagerSettings`] tunes the context manager itself.
//! - [`NamespaceConfig`] holds a namespace's player-facing config fields.
//!   Each field becomes a private constant token in that namespace's overlay.
//!
//! Both are written in TOML. A namespace config file declares a schema and the
//! player's chosen values:
//!
//! ```toml
//! [schema.Material]
//! allow = ["Wood", "Stone", "Marble"]
//! default = "Wood"
//!
//! [schema.Extras]
//! allow_multiple = true
//! default = "Lamps, Rugs"
//!
//! [values]
//! Material = "stone"
//! ```
//!
//! # Fallback
//!
//! A chosen value outside `allow`, or several values for a field without
//! `allow_multiple`, is replaced by the field's default and logged. String
//! values are split on commas.

use std::path::Path;

use indexmap::IndexMap;
use patchwork_primitives::{TokenName, ValueDomain};
use serde::Deserialize;

use crate::error::ConfigError;

/// Settings for a [`ContextManager`](crate::ContextManager).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManagerSettings {
	/// Log same-tier duplicate registrations at `warn` instead of `debug`.
	pub warn_on_duplicate: bool,
}

impl Default for ManagerSettings {
	fn default() -> Self {
		Self {
			warn_on_duplicate: true,
		}
	}
}

impl ManagerSettings {
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(text)?)
	}
}

/// A scalar or list value as written in TOML.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
enum RawValue {
	Bool(bool),
	Int(i64),
	Text(String),
	List(Vec<String>),
}

impl RawValue {
	fn into_values(self) -> Vec<String> {
		match self {
			RawValue::Bool(b) => vec![b.to_string()],
			RawValue::Int(n) => vec![n.to_string()],
			RawValue::Text(s) => split_csv(&s),
			RawValue::List(items) => items.iter().flat_map(|s| split_csv(s)).collect(),
		}
	}
}

fn split_csv(text: &str) -> Vec<String> {
	text.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(str::to_string)
		.collect()
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct FieldSchema {
	allow: Option<Vec<String>>,
	default: Option<RawValue>,
	allow_multiple: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
	schema: IndexMap<String, FieldSchema>,
	values: IndexMap<String, RawValue>,
}

/// One resolved config field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigField {
	pub name: TokenName,
	pub values: Vec<String>,
	/// Allowed values, when the schema restricts them.
	pub domain: Option<ValueDomain>,
}

/// Resolved configuration for one namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceConfig {
	fields: Vec<ConfigField>,
}

impl NamespaceConfig {
	/// Parses and resolves a config document.
	pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
		let raw: RawConfig = toml::from_str(text)?;
		Self::resolve(raw)
	}

	/// Reads and resolves a config file.
	pub fn load(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		tracing::debug!(path = %path.display(), "loading namespace config");
		Self::from_toml_str(&text)
	}

	pub fn fields(&self) -> &[ConfigField] {
		&self.fields
	}

	pub fn get(&self, name: &str) -> Option<&ConfigField> {
		self.fields.iter().find(|f| f.name.matches(name))
	}

	fn resolve(raw: RawConfig) -> Result<Self, ConfigError> {
		let RawConfig { schema, mut values } = raw;

		let mut fields = Vec::with_capacity(schema.len());
		for (field, spec) in schema {
			let name = TokenName::new(&field);
			let domain = spec.allow.as_ref().map(|allow| {
				let fallback = spec
					.default
					.clone()
					.and_then(|d| d.into_values().into_iter().next())
					.unwrap_or_default();
				ValueDomain::new(allow.iter().cloned(), fallback)
			});

			let default_values = spec.default.map(RawValue::into_values).unwrap_or_default();
			let default = canonicalize(&name, domain.as_ref(), default_values).map_err(|value| {
				ConfigError::UnknownDefault {
					field: field.clone(),
					value,
				}
			})?;

			let chosen = take_value(&mut values, &name).map(RawValue::into_values);
			let resolved = match chosen {
				None => default,
				Some(chosen) if chosen.len() > 1 && !spec.allow_multiple => {
					tracing::warn!(field = %name, ?chosen, "field does not allow multiple values; using default");
					default
				}
				Some(chosen) => match canonicalize(&name, domain.as_ref(), chosen) {
					Ok(values) => values,
					Err(rejected) => {
						tracing::warn!(
							field = %name,
							rejected = %rejected,
							suggestion = ?domain.as_ref().and_then(|d| d.suggest(&rejected)),
							"value not allowed; using default",
						);
						default
					}
				},
			};

			fields.push(ConfigField {
				name,
				values: resolved,
				domain,
			});
		}

		for field in values.keys() {
			tracing::warn!(field = %field, "value for undeclared config field ignored");
		}

		Ok(Self { fields })
	}
}

/// Removes the chosen value for `name`, matching field names case-insensitively.
fn take_value(values: &mut IndexMap<String, RawValue>, name: &TokenName) -> Option<RawValue> {
	let key = values.keys().find(|k| name.matches(k))?.clone();
	values.shift_remove(&key)
}

/// Maps values to their allowed spelling, or returns the first rejected value.
fn canonicalize(
	name: &TokenName,
	domain: Option<&ValueDomain>,
	values: Vec<String>,
) -> Result<Vec<String>, String> {
	let Some(domain) = domain else {
		return Ok(values);
	};
	values
		.into_iter()
		.map(|v| match domain.canonical(&v) {
			Some(c) => Ok(c.to_string()),
			None => {
				tracing::trace!(field = %name, value = %v, "rejected config value");
				Err(v)
			}
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	const PACK_CONFIG: &str = r#"
		[schema.Material]
		allow = ["Wood", "Stone", "Marble"]
		default = "Wood"

		[schema.Extras]
		allow_multiple = true
		default = "Lamps, Rugs"

		[schema.Greeting]
		default = "hello"

		[values]
		material = "stone"
	"#;

	#[test]
	fn chosen_values_use_allowed_spelling() {
		let config = NamespaceConfig::from_toml_str(PACK_CONFIG).unwrap();
		assert_eq!(config.get("Material").unwrap().values, ["Stone"]);
	}

	#[test]
	fn unset_fields_take_their_default() {
		let config = NamespaceConfig::from_toml_str(PACK_CONFIG).unwrap();
		assert_eq!(config.get("extras").unwrap().values, ["Lamps", "Rugs"]);
		assert_eq!(config.get("Greeting").unwrap().values, ["hello"]);
		assert!(config.get("Greeting").unwrap().domain.is_none());
	}

	#[test]
	fn disallowed_value_falls_back_to_default() {
		let text = PACK_CONFIG.replace("material = \"stone\"", "Material = \"Gold\"");
		let config = NamespaceConfig::from_toml_str(&text).unwrap();
		assert_eq!(config.get("Material").unwrap().values, ["Wood"]);
	}

	#[test]
	fn multiple_values_need_allow_multiple() {
		let text = PACK_CONFIG.replace("material = \"stone\"", "Material = [\"Wood\", \"Stone\"]");
		let config = NamespaceConfig::from_toml_str(&text).unwrap();
		assert_eq!(config.get("Material").unwrap().values, ["Wood"]);
	}

	#[test]
	fn default_outside_allow_is_an_error() {
		let err = NamespaceConfig::from_toml_str(
			r#"
			[schema.Size]
			allow = ["Small", "Large"]
			default = "Huge"
			"#,
		)
		.unwrap_err();
		assert!(matches!(err, ConfigError::UnknownDefault { ref field, ref value } if field == "Size" && value == "Huge"));
	}

	#[test]
	fn scalar_values_become_strings() {
		let config = NamespaceConfig::from_toml_str(
			r#"
			[schema.Enabled]
			default = true
			[schema.Count]
			default = 3
			"#,
		)
		.unwrap();
		assert_eq!(config.get("Enabled").unwrap().values, ["true"]);
		assert_eq!(config.get("Count").unwrap().values, ["3"]);
	}

	#[test]
	fn malformed_toml_is_a_parse_error() {
		let err = NamespaceConfig::from_toml_str("[schema.X]\nallow = 5").unwrap_err();
		assert!(matches!(err, ConfigError::Parse(_)));
	}

	#[test]
	fn load_reports_missing_file() {
		let dir = tempfile::tempdir().unwrap();
		let err = NamespaceConfig::load(&dir.path().join("config.toml")).unwrap_err();
		assert!(matches!(err, ConfigError::Io { .. }));
	}

	#[test]
	fn manager_settings_default_when_empty() {
		assert_eq!(ManagerSettings::from_toml_str("").unwrap(), ManagerSettings::default());
		let quiet = ManagerSettings::from_toml_str("warn_on_duplicate = false").unwrap();
		assert!(!quiet.warn_on_duplicate);
	}
}
