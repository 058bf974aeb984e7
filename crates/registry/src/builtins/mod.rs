//! Builtin token catalog.
//!
//! The global catalog is built eagerly, in a fixed order, when the context
//! manager is constructed. Namespace tokens are built when an overlay is first
//! requested.
//!
//! | Group    | Tokens                                                        | Ready        |
//! |----------|---------------------------------------------------------------|--------------|
//! | identity | `HasMod` (immutable), `Language`                              | always       |
//! | calendar | `Day`, `DayOfWeek`, `DayEvent`, `Season`, `Year`, `Weather`   | basic info   |
//! | farm     | `FarmCave`, `FarmName`, `FarmType`                            | basic info   |
//! | player   | `FarmhouseUpgrade`, `HasDialogueAnswer`, `HasFlag`, `HasProfession`, `HasSeenEvent`, `PlayerGender`, `PlayerName`, `PreferredPet`, `SkillLevel`, `Spouse` | basic info |
//! | namespace| `HasFile`, one constant per config field                      | always       |

mod calendar;
mod farm;
mod identity;
mod namespace;
mod player;

use std::sync::Arc;

pub use calendar::day_event;
pub use namespace::has_file;
pub use player::skill_at_least;

use crate::error::ProviderError;
use crate::gate::Gates;
use crate::namespace::Namespace;
use crate::token::{Provided, ProviderToken, Readiness, TokenRef};
use crate::world::WorldState;

/// Builds the global catalog in registration order.
pub fn global_tokens<S: AsRef<str>>(
	world: &Arc<dyn WorldState>,
	gates: &Gates,
	installed: &[S],
) -> Vec<TokenRef> {
	let basic_info = Readiness::Gate(gates.basic_info_loaded().clone());

	let mut tokens = identity::tokens(world, installed);
	tokens.extend(calendar::tokens(world, &basic_info));
	tokens.extend(farm::tokens(world, &basic_info));
	tokens.extend(player::tokens(world, &basic_info));
	tokens
}

/// Builds the private tokens seeded into a namespace's overlay.
pub fn namespace_tokens(namespace: &Namespace) -> Vec<TokenRef> {
	namespace::tokens(namespace)
}

/// Provider reading `world`, gated on `ready`.
fn world_token<F, P>(name: &str, world: &Arc<dyn WorldState>, ready: &Readiness, read: F) -> ProviderToken
where
	F: Fn(&dyn WorldState) -> Result<P, ProviderError> + Send + Sync + 'static,
	P: Into<Provided> + 'static,
{
	ProviderToken::from_world(name, world, read).gated(ready.clone())
}
