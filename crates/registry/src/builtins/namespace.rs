use std::path::{Component, Path};
use std::sync::Arc;

use crate::namespace::Namespace;
use crate::token::{ConstantToken, ProbeToken, TokenRef};

pub(super) fn tokens(namespace: &Namespace) -> Vec<TokenRef> {
	let root = namespace.root().to_path_buf();
	let has_file_token: TokenRef = Arc::new(ProbeToken::opaque("HasFile", move |_, path| has_file(&root, path)));
	let mut tokens = vec![has_file_token];

	for field in namespace.config().fields() {
		let mut token = ConstantToken::new(field.name.clone(), field.values.clone());
		if let Some(domain) = &field.domain {
			token = token.with_domain(domain.clone());
		}
		tokens.push(Arc::new(token));
	}
	tokens
}

/// Whether `relative` names an existing file under `root`.
///
/// Absolute paths and paths that climb out of `root` are never found.
pub fn has_file(root: &Path, relative: &str) -> bool {
	let relative = Path::new(relative.trim());
	let contained = relative
		.components()
		.all(|c| matches!(c, Component::Normal(_) | Component::CurDir));
	contained && root.join(relative).is_file()
}
