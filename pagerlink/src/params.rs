//! Route parameters and the shallow merges the helpers perform on them.

use std::collections::BTreeMap;

/// Route parameters by name.
///
/// Ordered so that generated query strings are stable from one render to the next.
pub type Params = BTreeMap<String, String>;

/// `base` with every entry of `overrides` written over it.
#[must_use]
pub fn merged(base: &Params, overrides: &Params) -> Params {
	let mut ret = base.clone();
	ret.extend(
		overrides
			.iter()
			.map(|(key, value)| (key.clone(), value.clone())),
	);
	ret
}

/// `params` with `key` set to `value`, replacing any previous value.
#[must_use]
pub fn with(params: &Params, key: &str, value: impl Into<String>) -> Params {
	let mut ret = params.clone();
	ret.insert(key.to_owned(), value.into());
	ret
}

/// Build [`Params`] from borrowed pairs, mostly for tests and defaults.
pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Params {
	pairs
		.into_iter()
		.map(|(key, value)| (key.to_owned(), value.to_owned()))
		.collect()
}
