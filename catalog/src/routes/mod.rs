use std::sync::Arc;

use axum::{Extension, Router};
use pagerlink::{RouteTable, ViewRegistry};

use crate::config::Config;
use crate::products::Catalog;

mod products;
mod root;

pub const PRODUCT_LIST: &str = "product_list";
pub const CATEGORY_PRODUCTS: &str = "category_products";

/// The named routes links are generated from. Handlers are registered from the same patterns.
pub fn route_table() -> pagerlink::Result<RouteTable> {
	let mut table = RouteTable::new();
	table
		.add(PRODUCT_LIST, "/products")?
		.add(CATEGORY_PRODUCTS, "/categories/{slug}")?;
	Ok(table)
}

pub fn configure(table: &RouteTable) -> pagerlink::Result<Router> {
	let mut app = Router::new();

	app = app.merge(root::configure());
	for name in [PRODUCT_LIST, CATEGORY_PRODUCTS] {
		app = app.route(
			&table.axum_path(name)?,
			axum::routing::get(products::get_handler),
		);
	}

	app = app.fallback(axum::handler::Handler::into_service(
		crate::error::default_handler,
	));

	Ok(app)
}

/// The whole application, with its shared state attached.
pub fn app(config: Arc<Config>) -> pagerlink::Result<Router> {
	let table = route_table()?;

	let mut app = configure(&table)?;
	app = app.layer(Extension(Arc::new(table)));
	app = app.layer(Extension(Arc::new(ViewRegistry::default())));
	app = app.layer(Extension(Arc::new(Catalog::sample())));
	app = app.layer(Extension(config));

	Ok(app)
}

#[cfg(test)]
mod test;
