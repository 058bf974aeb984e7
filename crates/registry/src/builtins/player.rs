use std::sync::Arc;

use patchwork_primitives::{Gender, PetKind, Skill, profession_name};

use super::world_token;
use crate::token::{ProbeToken, Readiness, TokenRef};
use crate::world::{PlayerState, WorldState};

pub(super) fn tokens(world: &Arc<dyn WorldState>, ready: &Readiness) -> Vec<TokenRef> {
	let mut tokens: Vec<TokenRef> = [
		world_token("FarmhouseUpgrade", world, ready, |w| {
			Ok(w.player()?.map(|p| p.house_upgrade_level.to_string()))
		}),
		world_token("HasDialogueAnswer", world, ready, |w| {
			Ok(ids(w.player()?, |p| &p.dialogue_answers))
		}),
		world_token("HasFlag", world, ready, |w| {
			Ok(w.player()?.map(|p| p.mail_flags).unwrap_or_default())
		}),
		world_token("HasProfession", world, ready, |w| {
			Ok(w.player()?
				.map(|p| {
					p.professions
						.iter()
						.map(|&id| profession_name(id).into_owned())
						.collect::<Vec<_>>()
				})
				.unwrap_or_default())
		}),
		world_token("HasSeenEvent", world, ready, |w| {
			Ok(ids(w.player()?, |p| &p.seen_events))
		}),
		world_token("PlayerGender", world, ready, |w| {
			Ok(w.player()?.and_then(|p| p.gender).map(|g| g.to_string()))
		})
		.with_domain(Gender::domain()),
		world_token("PlayerName", world, ready, |w| Ok(w.player()?.map(|p| p.name))),
		world_token("PreferredPet", world, ready, |w| {
			Ok(w.player()?.and_then(|p| p.preferred_pet).map(|p| p.to_string()))
		})
		.with_domain(PetKind::domain()),
		world_token("Spouse", world, ready, |w| Ok(w.player()?.and_then(|p| p.spouse))),
	]
	.into_iter()
	.map(|token| Arc::new(token) as TokenRef)
	.collect();

	tokens.push(Arc::new(skill_level(world).gated(ready.clone())));
	tokens
}

fn ids(player: Option<PlayerState>, field: fn(&PlayerState) -> &Vec<i32>) -> Vec<String> {
	player
		.as_ref()
		.map(|p| field(p).iter().map(i32::to_string).collect())
		.unwrap_or_default()
}

/// `SkillLevel` lists `Skill:level` for every skill with progress, and
/// answers `Skill:N` (or bare `Skill`, meaning level 1) probes from that list.
fn skill_level(world: &Arc<dyn WorldState>) -> ProbeToken {
	let world = Arc::clone(world);
	ProbeToken::new(
		"SkillLevel",
		move || {
			Ok(world
				.player()?
				.map(|p| {
					Skill::ALL
						.iter()
						.filter_map(|&skill| {
							let level = p.skill_level(skill);
							(level > 0).then(|| format!("{skill}:{level}"))
						})
						.collect::<Vec<_>>()
				})
				.unwrap_or_default())
		},
		skill_at_least,
	)
}

/// Tests a `Skill:N` query against published `Skill:level` entries.
///
/// Skills without an entry are at level 0. Malformed queries (unknown skill,
/// non-numeric level) are false.
pub fn skill_at_least(published: &[String], query: &str) -> bool {
	let (skill, level) = match query.split_once(':') {
		Some((skill, level)) => match level.trim().parse::<u8>() {
			Ok(level) => (skill, level),
			Err(_) => return false,
		},
		None => (query, 1),
	};
	let Ok(skill) = skill.parse::<Skill>() else {
		return false;
	};
	let current = published
		.iter()
		.filter_map(|entry| entry.split_once(':'))
		.find(|(name, _)| name.parse::<Skill>().is_ok_and(|s| s == skill))
		.and_then(|(_, level)| level.parse::<u8>().ok())
		.unwrap_or(0);
	current >= level
}
