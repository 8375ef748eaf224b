use figment::providers::{Format as _, Toml};
use figment::Figment;
use tracing_subscriber::filter::LevelFilter;

use super::{Config, LogLevel};

fn parse(toml: &str) -> Config {
	Figment::new().merge(Toml::string(toml)).extract().unwrap()
}

#[test]
fn defaults() {
	let config = parse("");
	assert_eq!(config.address.to_string(), "127.0.0.1:3000");
	assert_eq!(config.page_size, 10);
	assert_eq!(config.pager_view, "twitter_bootstrap");
	assert_eq!(config.pager, pagerlink::PagerOptions::default());
	assert_eq!(
		config.log_level,
		LogLevel {
			internal: LevelFilter::INFO,
			external: LevelFilter::WARN,
		}
	);
}

#[test]
fn single_log_level() {
	assert_eq!(
		parse(r#"log_level = "debug""#).log_level,
		LogLevel {
			internal: LevelFilter::DEBUG,
			external: LevelFilter::DEBUG,
		}
	);
}

#[test]
fn separate_log_levels() {
	assert_eq!(
		parse(r#"log_level = { internal = "trace" }"#).log_level,
		LogLevel {
			internal: LevelFilter::TRACE,
			external: LevelFilter::WARN,
		}
	);
}

#[test]
fn pager_table() {
	let config = parse(
		r#"
		address = "0.0.0.0:8080"
		page_size = 25
		pager_view = "default"

		[pager]
		proximity = 1
		prev_message = "&laquo;"
		"#,
	);
	assert_eq!(config.address.port(), 8080);
	assert_eq!(config.page_size, 25);
	assert_eq!(config.pager_view, "default");
	assert_eq!(config.pager.proximity, Some(1));
	assert_eq!(config.pager.prev_message.as_deref(), Some("&laquo;"));
	assert_eq!(config.pager.next_message, None);
	assert_eq!(config.pager.route_name, None);
}
