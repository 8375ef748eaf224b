use std::sync::Arc;

use axum::response::{ErrorResponse, Redirect};
use axum::{extract, Router};
use pagerlink::{Params, RouteTable, Routing as _};

use crate::error;

pub async fn get_handler(
	extract::Extension(routes): extract::Extension<Arc<RouteTable>>,
) -> Result<Redirect, ErrorResponse> {
	let target = routes
		.generate_url(super::PRODUCT_LIST, &Params::new())
		.map_err(error::Links)?;
	Ok(Redirect::to(&target))
}

pub fn configure() -> Router {
	Router::new().route("/", axum::routing::get(get_handler))
}
