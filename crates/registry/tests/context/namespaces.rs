use std::fs;
use std::sync::Arc;

use patchwork_registry::{ConstantToken, Context, Namespace, NamespaceConfig};
use pretty_assertions::assert_eq;

use crate::common::loaded_manager;

fn probe(ctx: &dyn Context, path: &str) -> bool {
	ctx.lookup("HasFile", true).is_some_and(|t| t.probe(ctx, path))
}

#[test]
fn private_tokens_shadow_without_touching_shared() {
	let (_, manager) = loaded_manager();
	let overlay = manager.overlay_for(&Namespace::new("Pack", "/pack"));
	overlay.register(ConstantToken::new("Season", "Winter"));

	assert_eq!(*overlay.values_of("Season", false), ["Winter"]);
	assert_eq!(*manager.shared().values_of("Season", false), ["Spring"]);
	assert_eq!(*overlay.values_of("Weather", true), ["Sun"]);
}

#[test]
fn overlay_handles_share_mutations() {
	let (_, manager) = loaded_manager();
	let ns = Namespace::new("Pack", "/pack");
	let a = manager.overlay_for(&ns);
	let b = manager.overlay_for(&ns);
	a.register(ConstantToken::new("Marker", "set"));
	assert!(b.contains("Marker", true));
	assert_eq!(manager.overlays().len(), 1);
}

#[test]
fn has_file_and_config_tokens_resolve_per_namespace() {
	let dir = tempfile::tempdir().unwrap();
	fs::write(dir.path().join("content.json"), "{}").unwrap();
	let config_path = dir.path().join("config.toml");
	fs::write(
		&config_path,
		r#"
[schema.Extras]
allow = ["Hats", "Shirts", "Boots"]
allow_multiple = true

[values]
Extras = "hats, boots"
"#,
	)
	.unwrap();

	let (_, manager) = loaded_manager();
	let config = NamespaceConfig::load(&config_path).unwrap();
	let with_files = manager.overlay_for(&Namespace::new("Files", dir.path()).with_config(config));
	let without = manager.overlay_for(&Namespace::new("Empty", dir.path().join("missing")));

	assert!(probe(&*with_files, "content.json"));
	assert!(!probe(&*with_files, "../content.json"));
	assert!(!probe(&*without, "content.json"));

	assert_eq!(*with_files.values_of("Extras", true), ["Hats", "Boots"]);
	assert!(without.lookup("Extras", false).is_none());
	assert!(!manager.contains("Extras", false));
}

#[test]
fn overlay_refresh_uses_the_private_view() {
	let (_, manager) = loaded_manager();
	let overlay = manager.overlay_for(&Namespace::new("Pack", "/pack"));
	let shared = Arc::clone(manager.shared());
	overlay.register(patchwork_registry::ProviderToken::new("Echo", || Ok("hello")));

	manager.refresh().unwrap();
	assert_eq!(*overlay.values_of("Echo", true), ["hello"]);
	assert!(shared.lookup("Echo", false).is_none());
}
