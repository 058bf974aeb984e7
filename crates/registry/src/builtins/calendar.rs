use std::sync::Arc;

use patchwork_primitives::{DayOfWeek, Season, Weather};

use super::world_token;
use crate::error::ProviderError;
use crate::token::{Readiness, TokenRef};
use crate::world::WorldState;

pub(super) fn tokens(world: &Arc<dyn WorldState>, ready: &Readiness) -> Vec<TokenRef> {
	[
		world_token("Day", world, ready, |w| Ok(w.date()?.map(|d| d.day().to_string()))),
		world_token("DayOfWeek", world, ready, |w| {
			Ok(w.date()?.map(|d| d.day_of_week().to_string()))
		})
		.with_domain(DayOfWeek::domain()),
		world_token("DayEvent", world, ready, day_event),
		world_token("Season", world, ready, |w| {
			Ok(w.date()?.map(|d| d.season().to_string()))
		})
		.with_domain(Season::domain()),
		world_token("Year", world, ready, |w| Ok(w.date()?.map(|d| d.year().to_string()))),
		world_token("Weather", world, ready, |w| w.weather()).with_domain(Weather::domain()),
	]
	.into_iter()
	.map(|token| Arc::new(token) as TokenRef)
	.collect()
}

/// Names today's special event.
///
/// A wedding takes precedence; otherwise the festival table is consulted
/// with the date key. Days with neither have no event.
pub fn day_event(world: &dyn WorldState) -> Result<Option<String>, ProviderError> {
	let Some(date) = world.date()? else {
		return Ok(None);
	};
	if world.is_wedding_day()? {
		return Ok(Some("wedding".to_string()));
	}
	Ok(world.festival_dates().get(&date.event_key()))
}
