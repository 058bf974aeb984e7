use std::borrow::Cow;

const PROFESSIONS: [&str; 30] = [
	"Rancher",
	"Tiller",
	"Coopmaster",
	"Shepherd",
	"Artisan",
	"Agriculturist",
	"Fisher",
	"Trapper",
	"Angler",
	"Pirate",
	"Mariner",
	"Luremaster",
	"Forester",
	"Gatherer",
	"Lumberjack",
	"Tapper",
	"Botanist",
	"Tracker",
	"Miner",
	"Geologist",
	"Blacksmith",
	"Prospector",
	"Excavator",
	"Gemologist",
	"Fighter",
	"Scout",
	"Brute",
	"Defender",
	"Acrobat",
	"Desperado",
];

/// Returns the display name for a profession id.
///
/// Ids without a known name (added by other content) pass through as their
/// decimal form so they stay matchable.
pub fn profession_name(id: i32) -> Cow<'static, str> {
	usize::try_from(id)
		.ok()
		.and_then(|i| PROFESSIONS.get(i))
		.map_or_else(|| Cow::Owned(id.to_string()), |name| Cow::Borrowed(*name))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn known_ids_map_to_names() {
		assert_eq!(profession_name(0), "Rancher");
		assert_eq!(profession_name(29), "Desperado");
	}

	#[test]
	fn unknown_ids_pass_through() {
		assert_eq!(profession_name(77), "77");
		assert_eq!(profession_name(-1), "-1");
	}
}
