#![deny(
	absolute_paths_not_starting_with_crate,
	future_incompatible,
	keyword_idents,
	macro_use_extern_crate,
	meta_variable_misuse,
	missing_abi,
	missing_copy_implementations,
	non_ascii_idents,
	nonstandard_style,
	noop_method_call,
	rust_2018_idioms
)]
#![forbid(unsafe_code)]

use std::sync::Arc;

mod config;
mod error;
mod helpers;
mod products;
mod routes;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("reading configuration: {0}")]
	Config(#[from] figment::Error),
	#[error("building routes: {0}")]
	Routes(#[from] pagerlink::Error),
	#[error("running server: {0}")]
	RunServer(#[from] hyper::Error),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
	let config = config::config()?;

	init_logging(config.log_level);

	let config = Arc::new(config);

	let mut app = routes::app(Arc::clone(&config))?;
	app = app.layer(tower_http::trace::TraceLayer::new_for_http());

	tracing::info!(address = %config.address, "listening");
	axum::Server::bind(&config.address)
		.serve(app.into_make_service())
		.await?;

	Ok(())
}

fn is_internal(module_path: &str) -> bool {
	[env!("CARGO_PKG_NAME"), "pagerlink"].iter().any(|krate| {
		module_path
			.strip_prefix(krate)
			.map_or(false, |rest| rest.is_empty() || rest.starts_with("::"))
	})
}

fn init_logging(log_level: config::LogLevel) {
	use tracing_subscriber::filter::FilterFn;
	use tracing_subscriber::layer::{Layer, SubscriberExt};
	use tracing_subscriber::util::SubscriberInitExt;

	let filter = FilterFn::new(move |metadata| {
		let required_level = match metadata.module_path() {
			Some(path) if is_internal(path) => log_level.internal,
			_ => log_level.external,
		};
		// more verbose levels compare greater
		metadata.level() <= &required_level
	});

	let layer = tracing_subscriber::fmt::layer()
		.with_file(true)
		.with_line_number(true)
		.with_writer(std::io::stderr);

	tracing_subscriber::registry()
		.with(layer.with_filter(filter))
		.init();
}
