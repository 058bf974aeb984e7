use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::config::NamespaceConfig;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique namespace identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(u64);

impl NamespaceId {
	fn next() -> Self {
		Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
	}
}

impl fmt::Display for NamespaceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "ns#{}", self.0)
	}
}

#[derive(Debug)]
struct NamespaceInner {
	id: NamespaceId,
	name: String,
	root: PathBuf,
	config: NamespaceConfig,
}

/// An external namespace (a loaded content pack) that owns private tokens.
///
/// Identity is assigned at construction: clones share it, while two
/// namespaces built separately are distinct even when their names and roots
/// are equal.
#[derive(Debug, Clone)]
pub struct Namespace(Arc<NamespaceInner>);

impl Namespace {
	pub fn new(name: impl Into<String>, root: impl Into<PathBuf>) -> Self {
		Self(Arc::new(NamespaceInner {
			id: NamespaceId::next(),
			name: name.into(),
			root: root.into(),
			config: NamespaceConfig::default(),
		}))
	}

	/// Attaches resolved configuration; each field becomes a private token.
	///
	/// The result is a new namespace with its own identity, so handles that
	/// share an identity always share a config.
	pub fn with_config(self, config: NamespaceConfig) -> Self {
		Self(Arc::new(NamespaceInner {
			id: NamespaceId::next(),
			name: self.0.name.clone(),
			root: self.0.root.clone(),
			config,
		}))
	}

	#[inline]
	pub fn id(&self) -> NamespaceId {
		self.0.id
	}

	pub fn name(&self) -> &str {
		&self.0.name
	}

	/// Directory that relative file probes resolve against.
	pub fn root(&self) -> &Path {
		&self.0.root
	}

	pub fn config(&self) -> &NamespaceConfig {
		&self.0.config
	}
}

impl PartialEq for Namespace {
	fn eq(&self, other: &Self) -> bool {
		self.id() == other.id()
	}
}

impl Eq for Namespace {}
