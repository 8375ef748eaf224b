//! Rendering a column header link that sorts a listing by that column.
//!
//! The sort lives entirely in the `order` and `dir` parameters of the URL. A column is active when `order` names it. Clicking an inactive column sorts by it ascending; clicking the active column flips its direction.

use askama_escape::{escape, Html};

use crate::context::RequestContext;
use crate::error::Result;
use crate::params::{self, Params};
use crate::resolve::resolve;
use crate::routing::Routing;

/// The two sort directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// `asc`
	Ascending,
	/// `desc`
	Descending,
}

impl Direction {
	/// The value used in the `dir` parameter.
	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Ascending => "asc",
			Self::Descending => "desc",
		}
	}
}

/// Options for [`render`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOptions {
	/// Link to this route instead of the current one.
	pub route_name: Option<String>,
	/// With `route_name`, the exact parameters to link with; otherwise the defaults under the current query and path.
	///
	/// Defaults to `order=id` and `dir=asc`. Setting it replaces those defaults as a whole.
	pub route_params: Params,
	/// The `target` attribute of the link, left out when empty.
	pub target: Option<String>,
	/// The link label; see [`title_case`] for the default.
	///
	/// Inserted as markup, like the pager messages, so entities and tags pass through.
	pub name: Option<String>,
}

impl Default for SortOptions {
	fn default() -> Self {
		Self {
			route_name: None,
			route_params: params::from_pairs([("order", "id"), ("dir", "asc")]),
			target: None,
			name: None,
		}
	}
}

impl SortOptions {
	/// Link to `route_name` instead of the current route.
	#[must_use]
	pub fn route(mut self, route_name: impl Into<String>) -> Self {
		self.route_name = Some(route_name.into());
		self
	}

	/// Replace the route parameters.
	#[must_use]
	pub fn params(mut self, route_params: Params) -> Self {
		self.route_params = route_params;
		self
	}

	/// Set the `target` attribute.
	#[must_use]
	pub fn target(mut self, target: impl Into<String>) -> Self {
		self.target = Some(target.into());
		self
	}

	/// Set the label.
	#[must_use]
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}
}

/// Where a column stands given the resolved route parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
	/// The listing is currently sorted by this column.
	pub active: bool,
	/// The current `dir` is `asc`.
	pub ascending: bool,
	/// The `dir` a click on this column switches to.
	pub next_dir: Direction,
}

impl SortState {
	/// The state of `column` under `params`.
	///
	/// An inactive column always starts ascending, whatever `dir` currently holds.
	#[must_use]
	pub fn of(column: &str, params: &Params) -> Self {
		let active = params.get("order").map(String::as_str) == Some(column);
		let ascending =
			params.get("dir").map(String::as_str) == Some(Direction::Ascending.as_str());
		let next_dir = if active && ascending {
			Direction::Descending
		} else {
			Direction::Ascending
		};
		Self {
			active,
			ascending,
			next_dir,
		}
	}

	/// The direction marker shown next to an active column's label, reflecting the current direction.
	#[must_use]
	pub fn marker(self) -> Option<&'static str> {
		match (self.active, self.ascending) {
			(false, _) => None,
			(true, true) => Some("&#9660;"),
			(true, false) => Some("&#9650;"),
		}
	}
}

/// Uppercase the first letter of every word, after turning underscores into spaces.
///
/// `created_at` becomes `Created At`. Letters other than the first of a word are left alone.
#[must_use]
pub fn title_case(column: &str) -> String {
	let mut ret = String::with_capacity(column.len());
	let mut word_start = true;
	for ch in column.chars().map(|ch| if ch == '_' { ' ' } else { ch }) {
		if word_start {
			ret.extend(ch.to_uppercase());
		} else {
			ret.push(ch);
		}
		word_start = ch.is_whitespace();
	}
	ret
}

/// Render the sort link of `column`.
///
/// The link targets the resolved route (see [`resolve()`], with [`SortOptions::route_params`] as the defaults) with `order` set to `column` and `dir` set to [`SortState::next_dir`].
/// An active column gets `class="active"` and a direction marker.
///
/// # Errors
///
/// Route resolution and URL generation errors.
pub fn render(
	routing: &dyn Routing,
	request: &dyn RequestContext,
	column: &str,
	options: &SortOptions,
) -> Result<String> {
	let context = match options.route_name.as_deref() {
		explicit @ Some(_) => resolve(
			routing,
			request,
			explicit,
			&options.route_params,
			&Params::new(),
		)?,
		None => resolve(routing, request, None, &Params::new(), &options.route_params)?,
	};

	let state = SortState::of(column, &context.route_params);

	let mut link_params = params::with(&context.route_params, "order", column);
	link_params.insert("dir".to_owned(), state.next_dir.as_str().to_owned());
	let href = routing.generate_url(&context.route_name, &link_params)?;

	let name = match &options.name {
		Some(name) => name.clone(),
		None => title_case(column),
	};

	let mut ret = format!("<a href=\"{}\"", escape(&href, Html));
	if let Some(target) = options.target.as_deref().filter(|target| !target.is_empty()) {
		ret.push_str(&format!(" target=\"{}\"", escape(target, Html)));
	}
	if state.active {
		ret.push_str(" class=\"active\"");
	}
	ret.push('>');
	ret.push_str(&name);
	if let Some(marker) = state.marker() {
		ret.push_str(&format!(" <span class=\"triangle\">{marker}</span>"));
	}
	ret.push_str("</a>");

	Ok(ret)
}
