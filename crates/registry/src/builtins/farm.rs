use std::sync::Arc;

use patchwork_primitives::{FarmCaveKind, FarmType};

use super::world_token;
use crate::token::{Readiness, TokenRef};
use crate::world::WorldState;

pub(super) fn tokens(world: &Arc<dyn WorldState>, ready: &Readiness) -> Vec<TokenRef> {
	[
		world_token("FarmCave", world, ready, |w| {
			Ok(w.farm()?.map(|f| f.cave.to_string()))
		})
		.with_domain(FarmCaveKind::domain()),
		world_token("FarmName", world, ready, |w| Ok(w.farm()?.map(|f| f.name))),
		world_token("FarmType", world, ready, |w| {
			Ok(w.farm()?.map(|f| f.farm_type().to_string()))
		})
		.with_domain(FarmType::domain()),
	]
	.into_iter()
	.map(|token| Arc::new(token) as TokenRef)
	.collect()
}
