use std::sync::Arc;

use crate::token::{ConstantToken, ProviderToken, TokenRef};
use crate::world::WorldState;

pub(super) fn tokens<S: AsRef<str>>(world: &Arc<dyn WorldState>, installed: &[S]) -> Vec<TokenRef> {
	let installed: Vec<String> = installed.iter().map(|s| s.as_ref().to_string()).collect();
	let has_mod: TokenRef = Arc::new(ConstantToken::new("HasMod", installed));
	let language: TokenRef = Arc::new(ProviderToken::from_world("Language", world, |w| w.language()));
	vec![has_mod, language]
}
