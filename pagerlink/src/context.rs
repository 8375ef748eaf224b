//! The ambient request, passed explicitly.

use crate::params::Params;

/// Route name marking a framework-internal sub-request, in which no user-facing route can be inferred.
pub const INTERNAL_ROUTE: &str = "_internal";

/// What the helpers need to know about the request being rendered.
pub trait RequestContext {
	/// The name of the route the request was matched to, if any.
	fn current_route_name(&self) -> Option<&str>;
	/// The full query string, decoded.
	fn query_params(&self) -> &Params;
	/// The value captured for a path variable of the current route.
	fn path_attribute(&self, name: &str) -> Option<&str>;
}

/// An owned [`RequestContext`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Request {
	route: Option<String>,
	query: Params,
	attributes: Params,
}

impl Request {
	/// A request matched to `route`, without query or path attributes.
	pub fn new(route: impl Into<String>) -> Self {
		Self {
			route: Some(route.into()),
			..Self::default()
		}
	}

	/// A request that was not matched to any route.
	#[must_use]
	pub fn unrouted() -> Self {
		Self::default()
	}

	/// An internal sub-request.
	#[must_use]
	pub fn internal() -> Self {
		Self::new(INTERNAL_ROUTE)
	}

	/// Replace the query parameters.
	#[must_use]
	pub fn with_query(mut self, query: Params) -> Self {
		self.query = query;
		self
	}

	/// Replace the path attributes.
	#[must_use]
	pub fn with_attributes(mut self, attributes: Params) -> Self {
		self.attributes = attributes;
		self
	}
}

impl RequestContext for Request {
	fn current_route_name(&self) -> Option<&str> {
		self.route.as_deref()
	}

	fn query_params(&self) -> &Params {
		&self.query
	}

	fn path_attribute(&self, name: &str) -> Option<&str> {
		self.attributes.get(name).map(String::as_str)
	}
}
