use std::sync::Arc;

use axum::body::Body;
use http::{header, StatusCode};
use tower::ServiceExt as _;

use crate::config::Config;

async fn get(uri: &str) -> (StatusCode, http::HeaderMap, String) {
	let config: Config = figment::Figment::new().extract().unwrap();
	let app = super::app(Arc::new(config)).unwrap();
	let response = app
		.oneshot(http::Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap();
	let status = response.status();
	let headers = response.headers().clone();
	let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
	(status, headers, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn default_listing() {
	let (status, _, body) = get("/products").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.contains(
		r#"<th><a href="/products?dir=desc&amp;order=id" class="active">Id <span class="triangle">&#9660;</span></a></th>"#
	));
	assert!(body.contains(r#"<th><a href="/products?dir=asc&amp;order=name">Name</a></th>"#));
	assert!(body.contains(r#"<li><a href="/products?page=2">2</a></li>"#));
	assert!(body.contains(r#"<li class="active"><span>1</span></li>"#));
}

#[tokio::test]
async fn sorted_by_price() {
	let (status, _, body) = get("/products?order=price&dir=asc").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.contains(
		r#"<a href="/products?dir=desc&amp;order=price" class="active">Price <span class="triangle">&#9660;</span></a>"#
	));
	assert!(body.contains(r#"<a href="/products?dir=asc&amp;order=id">Id</a>"#));
	assert!(body.contains(r#"<a href="/products?dir=asc&amp;order=price&amp;page=2">2</a>"#));
	assert!(body.find("Paper Moons").unwrap() < body.find("Harbor Lights").unwrap());
}

#[tokio::test]
async fn category_keeps_its_slug_and_query() {
	let (status, _, body) = get("/categories/fiction?page=2&page_size=2").await;
	assert_eq!(status, StatusCode::OK);
	assert!(body.contains(r#"<a href="/categories/fiction?page=3&amp;page_size=2">3</a>"#));
	assert!(body.contains(
		r#"<a href="/categories/fiction?dir=asc&amp;order=name&amp;page=2&amp;page_size=2">Name</a>"#
	));
	assert!(body.contains(r#"<a href="/categories/fiction" class="active">fiction</a>"#));
	assert!(body.contains(r#"<a href="/categories/science">science</a>"#));
	assert!(!body.contains("Deep Time"));
}

#[tokio::test]
async fn unknown_category() {
	let (status, _, _) = get("/categories/poetry").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn page_past_the_end() {
	let (status, _, body) = get("/products?page=99").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert!(body.contains("page not found"));
}

#[tokio::test]
async fn malformed_page() {
	let (status, _, body) = get("/products?page=abc").await;
	assert_eq!(status, StatusCode::BAD_REQUEST);
	assert!(body.contains("<h1>400 Bad Request</h1>"));
	assert!(body.contains("Failed to deserialize query string"));
}

#[tokio::test]
async fn root_redirects_to_the_listing() {
	let (status, headers, _) = get("/").await;
	assert_eq!(status, StatusCode::SEE_OTHER);
	assert_eq!(headers[header::LOCATION], "/products");
}

#[tokio::test]
async fn fallback() {
	let (status, _, body) = get("/nowhere").await;
	assert_eq!(status, StatusCode::NOT_FOUND);
	assert!(body.contains("Page not found"));
}
