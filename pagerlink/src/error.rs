//! Provides [`Error`], the single failure type of the helpers.

/// Reasons why resolving a route or rendering a link can fail.
///
/// Nothing in this crate recovers from these; they are meant to abort the render of the enclosing page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// The current request is an internal sub-request, so there is no user-facing route to reuse.
	#[error("cannot guess the route inside an internal sub-request; pass an explicit route name")]
	AmbiguousRoute,
	/// The current request was not matched to any route.
	#[error("the current request has no route; pass an explicit route name")]
	NoCurrentRoute,
	/// The routing service does not know this route name.
	#[error("unknown route {0:?}")]
	UnknownRoute(String),
	/// No pager view is registered under this name.
	#[error("unknown pager view {0:?}")]
	UnknownView(String),
	/// A path variable of the route had no value when generating its URL.
	#[error("missing parameter {parameter:?} when generating a URL for route {route:?}")]
	MissingParameter {
		/// The route being generated.
		route: String,
		/// The path variable without a value.
		parameter: String,
	},
	/// A route pattern could not be compiled.
	#[error("invalid route pattern {pattern:?}: {reason}")]
	InvalidPattern {
		/// The pattern as written.
		pattern: String,
		/// What is wrong with it.
		reason: &'static str,
	},
	/// A route name was registered twice.
	#[error("route {0:?} is already registered")]
	DuplicateRoute(String),
	/// A pager view template failed to render.
	#[error("rendering pager view: {0}")]
	Render(#[from] askama::Error),
}

/// Shorthand used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
