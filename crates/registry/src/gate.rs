//! Readiness gates.
//!
//! Gates are boolean inputs owned by the host lifecycle. Tokens read them
//! through their readiness predicate; nothing in this crate opens a gate on
//! its own.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap as HashMap;

/// Shared handle to one readiness flag.
///
/// Clones observe the same flag. A new gate starts closed and, once opened,
/// stays open for the rest of the session.
#[derive(Debug, Clone, Default)]
pub struct Gate {
	open: Arc<AtomicBool>,
}

impl Gate {
	pub fn new() -> Self {
		Self::default()
	}

	#[inline]
	pub fn is_open(&self) -> bool {
		self.open.load(Ordering::Acquire)
	}

	/// Marks the gated state as known. Called once per session load.
	pub fn open(&self) {
		if !self.open.swap(true, Ordering::AcqRel) {
			tracing::debug!("readiness gate opened");
		}
	}

}

/// The set of gates one context manager reads.
#[derive(Debug, Default)]
pub struct Gates {
	basic_info_loaded: Gate,
	named: Mutex<HashMap<Box<str>, Gate>>,
}

impl Gates {
	pub fn new() -> Self {
		Self::default()
	}

	/// Open once the save's basic world info (date, player, farm) is loaded.
	pub fn basic_info_loaded(&self) -> &Gate {
		&self.basic_info_loaded
	}

	/// Returns the gate registered under `name`, creating it closed on first use.
	pub fn named(&self, name: &str) -> Gate {
		self.named
			.lock()
			.entry(Box::from(name))
			.or_default()
			.clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clones_share_state() {
		let gate = Gate::new();
		let view = gate.clone();
		assert!(!view.is_open());
		gate.open();
		assert!(view.is_open());
	}

	#[test]
	fn named_gates_are_memoized() {
		let gates = Gates::new();
		gates.named("festival").open();
		assert!(gates.named("festival").is_open());
		assert!(!gates.named("other").is_open());
		assert!(!gates.basic_info_loaded().is_open());
	}
}
