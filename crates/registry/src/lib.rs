//! Token context for conditional content.
//!
//! This crate exposes named, dynamically computed values ("tokens") that a
//! condition evaluator reads to decide whether a patch applies. Consumers ask
//! for tokens by name and get zero or more strings back; they never compute
//! values themselves.
//!
//! # Layout
//!
//! - [`token`] - the [`Token`] contract and its variants
//! - [`registry`] - one tier of tokens with readiness-enforced lookups
//! - [`overlay`] - a namespace's private tokens over the shared registry
//! - [`gate`] - readiness flags set by the host
//! - [`manager`] - the [`ContextManager`] hosts talk to
//! - [`builtins`] - the global catalog and namespace-private tokens
//! - [`world`] - the [`WorldState`] collaborator builtins read from
//!
//! # Example
//!
//! ```ignore
//! let manager = ContextManager::new(world, &["Example.Pack"]);
//! manager.mark_basic_info_loaded();
//! manager.refresh()?;
//!
//! let season = manager.values_of("Season", true);
//! let pack = manager.overlay_for(&namespace);
//! let has_file = pack.lookup("HasFile", true).is_some_and(|t| t.probe(&*pack, "assets/x.png"));
//! ```

pub mod builtins;
pub mod config;
mod context;
pub mod error;
pub mod gate;
pub mod manager;
pub mod namespace;
pub mod overlay;
pub mod registry;
#[doc(hidden)]
pub mod test_helpers;
pub mod token;
pub mod world;

pub use config::{ConfigField, ManagerSettings, NamespaceConfig};
pub use context::Context;
pub use error::{ConfigError, ProviderError, RefreshError};
pub use gate::{Gate, Gates};
pub use manager::ContextManager;
pub use namespace::{Namespace, NamespaceId};
pub use overlay::ContextOverlay;
pub use patchwork_primitives as primitives;
pub use registry::{InsertAction, RefreshSummary, TokenRegistry};
pub use token::{ConstantToken, ProbeToken, Provided, ProviderToken, Readiness, Token, TokenRef};
pub use world::{ContentSource, FarmState, PlayerState, StaticContentSource, WorldState};
