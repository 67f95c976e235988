mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Postgres, Pricing, Ranking, Search, Service, Storage};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(invalid("service", "http_bind must be non-empty."));
	}
	if cfg.storage.postgres.dsn.trim().is_empty() {
		return Err(invalid("storage.postgres", "dsn must be non-empty."));
	}
	if cfg.storage.postgres.pool_max_conns == 0 {
		return Err(invalid("storage.postgres", "pool_max_conns must be greater than zero."));
	}
	if cfg.search.default_page_size == 0 {
		return Err(invalid("search", "default_page_size must be greater than zero."));
	}
	if cfg.search.max_page_size == 0 {
		return Err(invalid("search", "max_page_size must be greater than zero."));
	}
	if cfg.search.default_page_size > cfg.search.max_page_size {
		return Err(invalid("search", "default_page_size must not exceed max_page_size."));
	}

	for (product_type, row) in &cfg.pricing.overrides {
		if product_type.trim().is_empty() {
			return Err(invalid("pricing", "overrides keys must be non-empty product types."));
		}

		for (label, price) in row {
			if !price.is_finite() || *price < 0.0 {
				return Err(invalid(
					"pricing",
					format!(
						"overrides.{product_type}.{label} must be a non-negative finite number."
					),
				));
			}
		}
	}

	Ok(())
}

fn invalid(section: &str, message: impl Into<String>) -> Error {
	Error::Validation { section: section.to_string(), message: message.into() }
}
