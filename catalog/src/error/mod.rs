use std::borrow::Cow;

mod template;
pub use template::{default_handler, error_response};

#[derive(Debug, thiserror::Error)]
#[error("{0} not found")]
pub struct EntityNotFound(pub &'static str);

#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct BadRequest(pub Cow<'static, str>);

/// A sort or pager link could not be rendered.
#[derive(Debug, thiserror::Error)]
#[error("rendering links: {0}")]
pub struct Links(#[source] pub pagerlink::Error);

macro_rules! impl_response {
	($struct_name:ident, $status:ident) => {
		impl axum::response::IntoResponse for $struct_name {
			fn into_response(self) -> axum::response::Response {
				crate::error::error_response(&self, http::StatusCode::$status)
			}
		}
	};
}

impl_response!(EntityNotFound, NOT_FOUND);
impl_response!(BadRequest, BAD_REQUEST);
impl_response!(Links, INTERNAL_SERVER_ERROR);
