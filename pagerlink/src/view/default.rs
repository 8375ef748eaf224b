//! The `default` view: a bare `<nav>` of links and spans.

use super::window::{self, Entry};
use super::{Pager, UrlFor, View};
use crate::error::Result;
use crate::pager::PagerOptions;

const DEFAULT_PROXIMITY: u32 = 2;

struct Item {
	label: String,
	href: Option<String>,
	class: &'static str,
	rel: Option<&'static str>,
}

impl Item {
	fn link(label: String, href: String, rel: Option<&'static str>) -> Self {
		Self {
			label,
			href: Some(href),
			class: "",
			rel,
		}
	}

	fn span(label: String, class: &'static str) -> Self {
		Self {
			label,
			href: None,
			class,
			rel: None,
		}
	}
}

#[derive(askama::Template)]
#[template(path = "views/default.html")]
struct Template {
	items: Vec<Item>,
}

/// Pages as plain `<a>` links; the current page, disabled arrows, and gaps as classed `<span>`s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultView;

impl View for DefaultView {
	fn render(
		&self,
		pager: &dyn Pager,
		url_for: &UrlFor<'_>,
		options: &PagerOptions,
	) -> Result<String> {
		let prev_message = options.prev_message.as_deref().unwrap_or("Previous");
		let next_message = options.next_message.as_deref().unwrap_or("Next");

		let items = window::entries(
			pager.current_page(),
			pager.page_count(),
			options.proximity.unwrap_or(DEFAULT_PROXIMITY),
		)
		.into_iter()
		.map(|entry| -> Result<Item> {
			Ok(match entry {
				Entry::Previous(Some(page)) => {
					Item::link(prev_message.to_owned(), url_for(page)?, Some("prev"))
				}
				Entry::Previous(None) => Item::span(prev_message.to_owned(), "disabled"),
				Entry::Page(page) => Item::link(page.to_string(), url_for(page)?, None),
				Entry::Current(page) => Item::span(page.to_string(), "current"),
				Entry::Dots => Item::span("...".to_owned(), "dots"),
				Entry::Next(Some(page)) => {
					Item::link(next_message.to_owned(), url_for(page)?, Some("next"))
				}
				Entry::Next(None) => Item::span(next_message.to_owned(), "disabled"),
			})
		})
		.collect::<Result<Vec<_>>>()?;

		Ok(askama::Template::render(&Template { items })?)
	}
}
