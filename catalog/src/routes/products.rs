use std::sync::Arc;

use axum::extract::{self, rejection::QueryRejection};
use axum::response::{ErrorResponse, IntoResponse};
use pagerlink::{
	Helpers, Params, RequestContext as _, RouteTable, Routing as _, SortOptions, ViewRegistry,
};

use crate::config::Config;
use crate::error;
use crate::helpers::{pagination, Current};
use crate::products::{self, Catalog, Product, Sort};

struct CategoryLink {
	name: &'static str,
	href: String,
	current: bool,
}

#[derive(askama::Template)]
#[template(path = "products.html")]
struct Template {
	category: Option<String>,
	categories: Vec<CategoryLink>,
	sort_links: Vec<String>,
	products: Vec<Product>,
	pager: String,
}
crate::helpers::impl_into_response!(Template);

#[derive(serde::Deserialize)]
pub struct SortQuery {
	order: Option<String>,
	dir: Option<String>,
}

pub async fn get_handler(
	Current(request): Current,
	pagination: Result<extract::Query<pagination::Query>, QueryRejection>,
	sort: Result<extract::Query<SortQuery>, QueryRejection>,
	extract::Extension(catalog): extract::Extension<Arc<Catalog>>,
	extract::Extension(routes): extract::Extension<Arc<RouteTable>>,
	extract::Extension(views): extract::Extension<Arc<ViewRegistry>>,
	extract::Extension(config): extract::Extension<Arc<Config>>,
) -> Result<impl IntoResponse, ErrorResponse> {
	let bad_query = |rejection: QueryRejection| error::BadRequest(rejection.to_string().into());
	let extract::Query(pagination) = pagination.map_err(bad_query)?;
	let extract::Query(SortQuery { order, dir }) = sort.map_err(bad_query)?;

	let category = request.path_attribute("slug");
	if let Some(category) = category {
		if !catalog.has_category(category) {
			return Err(error::EntityNotFound("category").into());
		}
	}

	let listed = catalog.list(category, Sort::from_query(order.as_deref(), dir.as_deref()));
	let page = pagination::Page::new(pagination, listed.len(), config.page_size)
		.ok_or(error::EntityNotFound("page"))?;

	let helpers = Helpers::new(&*routes, &request, &views);
	let sort_links = products::COLUMNS
		.iter()
		.map(|column| helpers.sortcol(column, &SortOptions::default()))
		.collect::<Result<Vec<_>, _>>()
		.map_err(error::Links)?;
	let pager = helpers
		.pagerfanta(&page, &config.pager_view, &config.pager)
		.map_err(error::Links)?;

	let categories = catalog
		.categories()
		.into_iter()
		.map(|name| -> pagerlink::Result<CategoryLink> {
			let href = routes.generate_url(
				super::CATEGORY_PRODUCTS,
				&Params::from([("slug".to_owned(), name.to_owned())]),
			)?;
			Ok(CategoryLink {
				name,
				href,
				current: category == Some(name),
			})
		})
		.collect::<pagerlink::Result<Vec<_>>>()
		.map_err(error::Links)?;

	tracing::debug!(
		category = category.unwrap_or("all"),
		first = page.items().start,
		shown = page.items().len(),
		"listing products"
	);

	Ok(Template {
		category: category.map(str::to_owned),
		categories,
		sort_links,
		products: listed[page.items()].to_vec(),
		pager,
	})
}
