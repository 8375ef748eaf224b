//! # Pagerlink
//!
//! Template helpers that turn a paginated, sortable listing into links back to the page that rendered it.
//!
//! Two helpers are exposed through [`Helpers`]:
//!
//! - [`Helpers::pagerfanta`] renders a pager widget with one URL per page.
//! - [`Helpers::sortcol`] renders a column header link that toggles between ascending and descending order.
//!
//! Both reuse the current route and its parameters when the caller does not name a route explicitly; see [`resolve()`].

#![warn(clippy::pedantic)]
#![warn(
	missing_copy_implementations,
	elided_lifetimes_in_paths,
	explicit_outlives_requirements,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	noop_method_call,
	single_use_lifetimes,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_extern_crates,
	unused_import_braces,
	unused_lifetimes,
	unused_qualifications
)]
#![allow(clippy::tabs_in_doc_comments)] // rustfmt formats our doc comments and we use tabs
#![deny(unsafe_code)]

pub mod context;
pub mod error;
pub mod pager;
pub mod params;
pub mod resolve;
pub mod routing;
pub mod sort;
pub mod view;

pub use context::{Request, RequestContext, INTERNAL_ROUTE};
pub use error::{Error, Result};
pub use pager::PagerOptions;
pub use params::Params;
pub use resolve::{resolve, RouteContext};
pub use routing::{RouteTable, Routing};
pub use sort::SortOptions;
pub use view::{Pager, View, ViewRegistry};

/// The template-facing surface: everything a template needs to call the two helpers for one request.
///
/// The returned markup is already escaped where needed and must be rendered as-is (`|safe` in askama).
#[derive(Clone, Copy)]
pub struct Helpers<'a> {
	routing: &'a dyn Routing,
	request: &'a dyn RequestContext,
	views: &'a ViewRegistry,
}

impl std::fmt::Debug for Helpers<'_> {
	fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		formatter
			.debug_struct("Helpers")
			.field("views", &self.views)
			.finish_non_exhaustive()
	}
}

impl<'a> Helpers<'a> {
	/// Bundle the routing service, the current request, and the available pager views.
	pub fn new(
		routing: &'a dyn Routing,
		request: &'a dyn RequestContext,
		views: &'a ViewRegistry,
	) -> Self {
		Self {
			routing,
			request,
			views,
		}
	}

	/// Render `pager` with the view registered as `view_name`.
	///
	/// # Errors
	///
	/// See [`pager::render`].
	pub fn pagerfanta(
		&self,
		pager: &dyn Pager,
		view_name: &str,
		options: &PagerOptions,
	) -> Result<String> {
		pager::render(
			self.routing,
			self.request,
			self.views,
			pager,
			view_name,
			options,
		)
	}

	/// Render the sort link for `column`.
	///
	/// # Errors
	///
	/// See [`sort::render`].
	pub fn sortcol(&self, column: &str, options: &SortOptions) -> Result<String> {
		sort::render(self.routing, self.request, column, options)
	}
}
