use std::path::PathBuf;

/// Failure reported by an external getter.
///
/// Getters return an empty result for normal absence of state (no active
/// player, no date yet); this error is for state that should exist but
/// cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
	#[error("{what} is unavailable")]
	Unavailable { what: &'static str },
	#[error("{0}")]
	Failed(String),
}

/// A refresh cycle stopped at the first failing token.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("refreshing token '{token}' failed: {source}")]
pub struct RefreshError {
	pub token: String,
	#[source]
	pub source: ProviderError,
}

/// Namespace configuration could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	#[error("reading {}: {source}", path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
	#[error("parsing config: {0}")]
	Parse(#[from] toml::de::Error),
	#[error("field '{field}' has default '{value}' outside its allowed values")]
	UnknownDefault { field: String, value: String },
}
