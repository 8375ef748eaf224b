//! Working out which route and parameters a generated link should point at.

use crate::context::{RequestContext, INTERNAL_ROUTE};
use crate::error::{Error, Result};
use crate::params::{self, Params};
use crate::routing::Routing;

/// A concrete route to generate links for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
	/// The route name.
	pub route_name: String,
	/// The parameters to generate it with, before any per-link overrides.
	pub route_params: Params,
}

/// Resolve the route that links should target.
///
/// With an explicit route name, the result is that name with `explicit_params` merged over `defaults`, and the request is not consulted.
///
/// Otherwise the current route of `request` is reused. Its parameters start from `defaults`, are overridden by the whole query string, and then by the request's value for each path variable of the route. That last step keeps path-embedded parameters such as a slug, which never appear in the query string.
///
/// # Errors
///
/// - [`Error::AmbiguousRoute`] if inference is needed inside an internal sub-request.
/// - [`Error::NoCurrentRoute`] if inference is needed and the request has no route.
/// - [`Error::UnknownRoute`] if the routing service does not know the current route.
pub fn resolve(
	routing: &dyn Routing,
	request: &dyn RequestContext,
	explicit_name: Option<&str>,
	explicit_params: &Params,
	defaults: &Params,
) -> Result<RouteContext> {
	if let Some(route_name) = explicit_name {
		return Ok(RouteContext {
			route_name: route_name.to_owned(),
			route_params: params::merged(defaults, explicit_params),
		});
	}

	let route_name = match request.current_route_name() {
		Some(INTERNAL_ROUTE) => return Err(Error::AmbiguousRoute),
		Some(route_name) => route_name,
		None => return Err(Error::NoCurrentRoute),
	};

	let mut route_params = params::merged(defaults, request.query_params());
	for variable in routing.route_variables(route_name)? {
		if let Some(value) = request.path_attribute(variable) {
			route_params.insert(variable.clone(), value.to_owned());
		}
	}

	tracing::debug!(
		route = route_name,
		params = ?route_params,
		"inferred route from current request"
	);

	Ok(RouteContext {
		route_name: route_name.to_owned(),
		route_params,
	})
}
