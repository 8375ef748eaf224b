use super::{render, PagerOptions};
use crate::context::Request;
use crate::error::{Error, Result};
use crate::params::{from_pairs, Params};
use crate::routing::RouteTable;
use crate::view::{Pager, UrlFor, View, ViewRegistry};

struct FixedPager {
	current: u32,
	count: u32,
}

impl Pager for FixedPager {
	fn current_page(&self) -> u32 {
		self.current
	}

	fn page_count(&self) -> u32 {
		self.count
	}
}

/// Lists the URL of every page, one per line.
struct UrlList;

impl View for UrlList {
	fn render(
		&self,
		pager: &dyn Pager,
		url_for: &UrlFor<'_>,
		_options: &PagerOptions,
	) -> Result<String> {
		(1..=pager.page_count())
			.map(url_for)
			.collect::<Result<Vec<_>>>()
			.map(|urls| urls.join("\n"))
	}
}

fn routing() -> RouteTable {
	let mut table = RouteTable::new();
	table
		.add("list", "/list")
		.unwrap()
		.add("product_list", "/categories/{slug}/products")
		.unwrap();
	table
}

fn views() -> ViewRegistry {
	let mut views = ViewRegistry::default();
	views.register("urls", UrlList);
	views
}

fn pager() -> FixedPager {
	FixedPager {
		current: 1,
		count: 3,
	}
}

fn ambient() -> Request {
	Request::new("product_list")
		.with_query(from_pairs([("cat", "books"), ("page", "7")]))
		.with_attributes(from_pairs([("slug", "fiction")]))
}

#[test]
fn page_overrides_the_ambient_page() {
	let urls = render(
		&routing(),
		&ambient(),
		&views(),
		&pager(),
		"urls",
		&PagerOptions::default(),
	)
	.unwrap();
	itertools::assert_equal(
		urls.lines(),
		[
			"/categories/fiction/products?cat=books&page=1",
			"/categories/fiction/products?cat=books&page=2",
			"/categories/fiction/products?cat=books&page=3",
		],
	);
}

#[test]
fn twitter_bootstrap_page_links() {
	let markup = render(
		&routing(),
		&ambient(),
		&views(),
		&FixedPager {
			current: 1,
			count: 5,
		},
		"twitter_bootstrap",
		&PagerOptions::default(),
	)
	.unwrap();
	assert!(markup.contains(
		r#"<a href="/categories/fiction/products?cat=books&amp;page=3">3</a>"#
	));
	assert!(!markup.contains("page=7"));
}

#[test]
fn explicit_route_and_params() {
	let options = PagerOptions::default().route("list").param("q", "x");
	let urls = render(
		&routing(),
		&Request::internal(),
		&views(),
		&pager(),
		"urls",
		&options,
	)
	.unwrap();
	assert_eq!(urls.lines().next(), Some("/list?page=1&q=x"));
}

#[test]
fn explicit_page_param_is_overridden() {
	let options = PagerOptions::default().route("list").param("page", "9");
	let urls = render(
		&routing(),
		&Request::unrouted(),
		&views(),
		&pager(),
		"urls",
		&options,
	)
	.unwrap();
	assert_eq!(urls.lines().last(), Some("/list?page=3"));
}

#[test]
fn rendering_is_idempotent() {
	let options = PagerOptions::default().route("list").param("q", "x");
	let routing = routing();
	let views = views();
	let request = ambient();
	let first = render(&routing, &request, &views, &pager(), "default", &options).unwrap();
	let second = render(&routing, &request, &views, &pager(), "default", &options).unwrap();
	assert_eq!(first, second);
}

#[test]
fn unknown_view() {
	assert!(matches!(
		render(
			&routing(),
			&ambient(),
			&views(),
			&pager(),
			"nope",
			&PagerOptions::default()
		),
		Err(Error::UnknownView(name)) if name == "nope"
	));
}

#[test]
fn sub_request_fails_before_the_view_is_looked_up() {
	assert!(matches!(
		render(
			&routing(),
			&Request::internal(),
			&views(),
			&pager(),
			"nope",
			&PagerOptions::default()
		),
		Err(Error::AmbiguousRoute)
	));
}

#[test]
fn missing_path_variable_surfaces_from_the_view() {
	let request = Request::new("product_list").with_query(Params::new());
	assert!(matches!(
		render(
			&routing(),
			&request,
			&views(),
			&pager(),
			"default",
			&PagerOptions::default()
		),
		Err(Error::MissingParameter { parameter, .. }) if parameter == "slug"
	));
}
