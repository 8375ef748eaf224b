//! The routing service the helpers generate URLs with, and [`RouteTable`], a small implementation of it.

use crate::error::{Error, Result};
use crate::params::Params;

pub mod pattern;
pub use pattern::Pattern;

/// Named routes that can be turned into URLs.
pub trait Routing {
	/// Generate the URL of `route_name`.
	///
	/// Parameters that are not path variables of the route end up in the query string.
	///
	/// # Errors
	///
	/// [`Error::UnknownRoute`] for an unknown route, [`Error::MissingParameter`] when a path variable has no value.
	fn generate_url(&self, route_name: &str, params: &Params) -> Result<String>;

	/// The names of the path variables of `route_name`, in pattern order.
	///
	/// # Errors
	///
	/// [`Error::UnknownRoute`] for an unknown route.
	fn route_variables(&self, route_name: &str) -> Result<&[String]>;
}

#[derive(Debug)]
struct Route {
	name: String,
	pattern: Pattern,
}

/// A collection of named routes, matched in insertion order.
#[derive(Debug, Default)]
pub struct RouteTable {
	routes: Vec<Route>,
}

impl RouteTable {
	/// An empty table.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `pattern` under `name`.
	///
	/// # Errors
	///
	/// [`Error::InvalidPattern`] if the pattern does not compile, [`Error::DuplicateRoute`] if the name is taken.
	pub fn add(&mut self, name: impl Into<String>, pattern: &str) -> Result<&mut Self> {
		let name = name.into();
		if self.get(&name).is_some() {
			return Err(Error::DuplicateRoute(name));
		}
		let pattern = Pattern::compile(pattern)?;
		self.routes.push(Route { name, pattern });
		Ok(self)
	}

	/// The compiled pattern of `name`.
	pub fn get(&self, name: &str) -> Option<&Pattern> {
		self
			.routes
			.iter()
			.find(|route| route.name == name)
			.map(|route| &route.pattern)
	}

	fn get_or_unknown(&self, name: &str) -> Result<&Pattern> {
		self
			.get(name)
			.ok_or_else(|| Error::UnknownRoute(name.to_owned()))
	}

	/// Find the first route matching `path`, returning its name and the decoded path attributes.
	pub fn match_path(&self, path: &str) -> Option<(&str, Params)> {
		self.routes.iter().find_map(|route| {
			route
				.pattern
				.match_path(path)
				.map(|attributes| (route.name.as_str(), attributes))
		})
	}

	/// The path of `name` in axum's syntax, with `:variable` segments.
	///
	/// # Errors
	///
	/// [`Error::UnknownRoute`] for an unknown route.
	pub fn axum_path(&self, name: &str) -> Result<String> {
		self.get_or_unknown(name).map(Pattern::axum_path)
	}

	/// Route names in insertion order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.routes.iter().map(|route| route.name.as_str())
	}
}

impl Routing for RouteTable {
	fn generate_url(&self, route_name: &str, params: &Params) -> Result<String> {
		let url = self
			.get_or_unknown(route_name)?
			.generate(params)
			.map_err(|parameter| Error::MissingParameter {
				route: route_name.to_owned(),
				parameter: parameter.to_owned(),
			})?;
		tracing::trace!(route = route_name, %url, "generated URL");
		Ok(url)
	}

	fn route_variables(&self, route_name: &str) -> Result<&[String]> {
		self.get_or_unknown(route_name).map(Pattern::variables)
	}
}
