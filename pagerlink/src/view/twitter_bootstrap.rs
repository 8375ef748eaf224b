//! The `twitter_bootstrap` view, marked up for Bootstrap 2's pagination component.

use super::window::{self, Entry};
use super::{Pager, UrlFor, View};
use crate::error::Result;
use crate::pager::PagerOptions;

const DEFAULT_PROXIMITY: u32 = 3;

struct Item {
	label: String,
	href: Option<String>,
	class: Option<&'static str>,
}

#[derive(askama::Template)]
#[template(path = "views/twitter_bootstrap.html")]
struct Template {
	items: Vec<Item>,
}

/// A `div.pagination` holding one `<li>` per entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TwitterBootstrapView;

impl View for TwitterBootstrapView {
	fn render(
		&self,
		pager: &dyn Pager,
		url_for: &UrlFor<'_>,
		options: &PagerOptions,
	) -> Result<String> {
		let prev_message = options
			.prev_message
			.as_deref()
			.unwrap_or("&larr; Previous");
		let next_message = options.next_message.as_deref().unwrap_or("Next &rarr;");

		let items = window::entries(
			pager.current_page(),
			pager.page_count(),
			options.proximity.unwrap_or(DEFAULT_PROXIMITY),
		)
		.into_iter()
		.map(|entry| -> Result<Item> {
			let (label, page, class) = match entry {
				Entry::Previous(Some(page)) => (prev_message.to_owned(), Some(page), Some("prev")),
				Entry::Previous(None) => (prev_message.to_owned(), None, Some("prev disabled")),
				Entry::Page(page) => (page.to_string(), Some(page), None),
				Entry::Current(page) => (page.to_string(), None, Some("active")),
				Entry::Dots => ("&hellip;".to_owned(), None, Some("disabled")),
				Entry::Next(Some(page)) => (next_message.to_owned(), Some(page), Some("next")),
				Entry::Next(None) => (next_message.to_owned(), None, Some("next disabled")),
			};
			Ok(Item {
				label,
				href: page.map(url_for).transpose()?,
				class,
			})
		})
		.collect::<Result<Vec<_>>>()?;

		Ok(askama::Template::render(&Template { items })?)
	}
}
