use std::sync::Arc;

use axum::async_trait;
use axum::extract::{self, FromRequest, RequestParts};
use axum::response::{IntoResponse, Response};
use pagerlink::{Params, Request, RouteTable};

use crate::error;

/// The current request as the link helpers see it: the matched route name, the query, and the path attributes.
pub struct Current(pub Request);

#[async_trait]
impl<B: Send> FromRequest<B> for Current {
	type Rejection = Response;

	async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
		let routes = Arc::clone(
			req
				.extensions()
				.get::<Arc<RouteTable>>()
				.expect("Could not get route table from app data"),
		);
		let extract::Query(query) = extract::Query::<Params>::from_request(req)
			.await
			.map_err(IntoResponse::into_response)?;
		let (route, attributes) = routes
			.match_path(req.uri().path())
			.ok_or_else(|| error::EntityNotFound("route").into_response())?;

		Ok(Self(
			Request::new(route)
				.with_query(query)
				.with_attributes(attributes),
		))
	}
}
