use std::net::SocketAddr;

use pagerlink::PagerOptions;
use serde::Deserialize;
use tracing_subscriber::filter::LevelFilter;

#[derive(Deserialize)]
pub struct Config {
	#[serde(default = "default_address")]
	pub address: SocketAddr,
	#[serde(default = "default_log_level")]
	pub log_level: LogLevel,
	#[serde(default = "default_page_size")]
	pub page_size: u32,
	/// Name of the registered pager view used on listings.
	#[serde(default = "default_pager_view")]
	pub pager_view: String,
	#[serde(default)]
	pub pager: PagerOptions,
}

fn default_address() -> SocketAddr {
	SocketAddr::from(([127, 0, 0, 1], 3000))
}

const fn default_page_size() -> u32 {
	10
}

fn default_pager_view() -> String {
	"twitter_bootstrap".to_owned()
}

fn deserialize_level_filter<'de, D: serde::de::Deserializer<'de>>(
	d: D,
) -> Result<LevelFilter, D::Error>
where
	D::Error: serde::de::Error,
{
	String::deserialize(d)?
		.parse()
		.map_err(serde::de::Error::custom)
}

/// Separate levels for our own crates and for everything else.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(from = "LogLevelSerdeHelper")]
pub struct LogLevel {
	pub internal: LevelFilter,
	pub external: LevelFilter,
}

const fn default_log_level_internal() -> LevelFilter {
	LevelFilter::INFO
}

const fn default_log_level_external() -> LevelFilter {
	LevelFilter::WARN
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LogLevelSerdeHelper {
	#[serde(deserialize_with = "deserialize_level_filter")]
	Together(LevelFilter),
	Separate {
		#[serde(
			deserialize_with = "deserialize_level_filter",
			default = "default_log_level_internal"
		)]
		internal: LevelFilter,
		#[serde(
			deserialize_with = "deserialize_level_filter",
			default = "default_log_level_external"
		)]
		external: LevelFilter,
	},
}

impl From<LogLevelSerdeHelper> for LogLevel {
	fn from(helper: LogLevelSerdeHelper) -> Self {
		match helper {
			LogLevelSerdeHelper::Together(level) => Self {
				internal: level,
				external: level,
			},
			LogLevelSerdeHelper::Separate { internal, external } => Self { internal, external },
		}
	}
}

const fn default_log_level() -> LogLevel {
	LogLevel {
		internal: default_log_level_internal(),
		external: default_log_level_external(),
	}
}

pub fn sources() -> figment::Figment {
	use figment::providers::Format as _;

	figment::Figment::new()
		.merge(figment::providers::Toml::file("catalog.toml"))
		.merge(figment::providers::Env::prefixed("CATALOG_"))
}

pub fn config() -> Result<Config, figment::Error> {
	sources().extract()
}

#[cfg(test)]
mod test;
