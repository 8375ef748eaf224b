//! Rendering a pager widget whose page links point back at the current listing.

use serde::Deserialize;

use crate::context::RequestContext;
use crate::error::Result;
use crate::params::{self, Params};
use crate::resolve::resolve;
use crate::routing::Routing;
use crate::view::{Pager, ViewRegistry};

/// Options for [`render`].
///
/// All fields are optional, so this can be deserialized from a partial configuration table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PagerOptions {
	/// Link to this route instead of the current one.
	pub route_name: Option<String>,
	/// Parameters for `route_name`. Ignored when the route is inferred.
	pub route_params: Params,
	/// How many pages either side of the current one to show; each view has its own default.
	pub proximity: Option<u32>,
	/// Markup of the previous-page link.
	pub prev_message: Option<String>,
	/// Markup of the next-page link.
	pub next_message: Option<String>,
}

impl PagerOptions {
	/// Link to `route_name` instead of the current route.
	#[must_use]
	pub fn route(mut self, route_name: impl Into<String>) -> Self {
		self.route_name = Some(route_name.into());
		self
	}

	/// Add a parameter for the explicit route.
	#[must_use]
	pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.route_params.insert(key.into(), value.into());
		self
	}

	/// Override the view's proximity.
	#[must_use]
	pub fn proximity(mut self, proximity: u32) -> Self {
		self.proximity = Some(proximity);
		self
	}
}

/// Render `pager` through the view registered as `view_name`.
///
/// Every page links to the resolved route (see [`resolve()`]) with its parameters plus `page`, which always overrides an existing `page` value.
/// The view's output is returned unchanged.
///
/// # Errors
///
/// Route resolution errors, [`Error::UnknownView`](crate::Error::UnknownView), and whatever the view or URL generation fails with.
pub fn render(
	routing: &dyn Routing,
	request: &dyn RequestContext,
	views: &ViewRegistry,
	pager: &dyn Pager,
	view_name: &str,
	options: &PagerOptions,
) -> Result<String> {
	let context = resolve(
		routing,
		request,
		options.route_name.as_deref(),
		&options.route_params,
		&Params::new(),
	)?;

	let url_for = |page: u32| {
		routing.generate_url(
			&context.route_name,
			&params::with(&context.route_params, "page", page.to_string()),
		)
	};

	views.get(view_name)?.render(pager, &url_for, options)
}

#[cfg(test)]
mod test;
