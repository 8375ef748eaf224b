//! Pager views: the pluggable renderers that turn a pager and a page URL generator into markup.

use std::collections::HashMap;
use std::fmt::{self, Debug, Formatter};

use crate::error::{Error, Result};
use crate::pager::PagerOptions;

pub mod default;
pub mod twitter_bootstrap;
pub mod window;

pub use default::DefaultView;
pub use twitter_bootstrap::TwitterBootstrapView;

/// A paginated collection, as far as views are concerned. Pages are 1-based.
pub trait Pager {
	/// The page being shown.
	fn current_page(&self) -> u32;
	/// The total number of pages. Views treat zero as one.
	fn page_count(&self) -> u32;
}

/// Generates the URL of a page.
pub type UrlFor<'a> = dyn Fn(u32) -> Result<String> + 'a;

/// Renders a pager widget.
pub trait View: Send + Sync {
	/// Render `pager`, linking each page to `url_for(page)`.
	///
	/// # Errors
	///
	/// Whatever `url_for` returns, or [`Error::Render`] if the markup cannot be produced.
	fn render(
		&self,
		pager: &dyn Pager,
		url_for: &UrlFor<'_>,
		options: &PagerOptions,
	) -> Result<String>;
}

/// Views by name.
pub struct ViewRegistry {
	views: HashMap<String, Box<dyn View>>,
}

impl ViewRegistry {
	/// A registry without any views.
	#[must_use]
	pub fn empty() -> Self {
		Self {
			views: HashMap::new(),
		}
	}

	/// Register `view` as `name`, returning the view it replaced.
	pub fn register(
		&mut self,
		name: impl Into<String>,
		view: impl View + 'static,
	) -> Option<Box<dyn View>> {
		self.views.insert(name.into(), Box::new(view))
	}

	/// The view registered as `name`.
	///
	/// # Errors
	///
	/// [`Error::UnknownView`] if there is none.
	pub fn get(&self, name: &str) -> Result<&dyn View> {
		self
			.views
			.get(name)
			.map(|view| &**view)
			.ok_or_else(|| Error::UnknownView(name.to_owned()))
	}

	/// Whether a view is registered as `name`.
	pub fn contains(&self, name: &str) -> bool {
		self.views.contains_key(name)
	}

	/// Unregister `name`, returning its view.
	pub fn remove(&mut self, name: &str) -> Option<Box<dyn View>> {
		self.views.remove(name)
	}
}

/// `default` and `twitter_bootstrap`.
impl Default for ViewRegistry {
	fn default() -> Self {
		let mut ret = Self::empty();
		ret.register("default", DefaultView);
		ret.register("twitter_bootstrap", TwitterBootstrapView);
		ret
	}
}

impl Debug for ViewRegistry {
	fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
		let mut names: Vec<_> = self.views.keys().collect();
		names.sort_unstable();
		formatter.debug_set().entries(names).finish()
	}
}
