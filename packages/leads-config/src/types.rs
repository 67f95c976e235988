use std::collections::HashMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub storage: Storage,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub ranking: Ranking,
	#[serde(default)]
	pub pricing: Pricing,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Storage {
	pub postgres: Postgres,
}

#[derive(Debug, Deserialize)]
pub struct Postgres {
	pub dsn: String,
	pub pool_max_conns: u32,
}

#[derive(Debug, Deserialize)]
pub struct Search {
	#[serde(default = "default_page_size")]
	pub default_page_size: u32,
	#[serde(default = "max_page_size")]
	pub max_page_size: u32,
	/// Whether search hard-excludes leads already sold in the requested tier
	/// when the request does not say either way. Opt-in by default.
	#[serde(default)]
	pub exclude_sold_default: bool,
}

/// Additive boost weights. Matching criteria contribute their weight to a
/// lead's ranking score; nothing here excludes a lead from results.
#[derive(Debug, Deserialize)]
pub struct Ranking {
	#[serde(default = "availability_weight")]
	pub availability_weight: u32,
	#[serde(default = "lead_type_weight")]
	pub lead_type_weight: u32,
	#[serde(default = "region_weight")]
	pub region_weight: u32,
	#[serde(default = "postal_code_weight")]
	pub postal_code_weight: u32,
	#[serde(default = "tier_weight")]
	pub tier_weight: u32,
}

/// Raw pricing overrides as they appear in the config file. Keys are product
/// types, rows map tier identifiers (plus `RETAIL`) to prices. A row replaces
/// the built-in row for that product type wholesale.
#[derive(Debug, Default, Deserialize)]
pub struct Pricing {
	#[serde(default)]
	pub overrides: HashMap<String, HashMap<String, f64>>,
}

impl Default for Search {
	fn default() -> Self {
		Self {
			default_page_size: default_page_size(),
			max_page_size: max_page_size(),
			exclude_sold_default: false,
		}
	}
}

impl Default for Ranking {
	fn default() -> Self {
		Self {
			availability_weight: availability_weight(),
			lead_type_weight: lead_type_weight(),
			region_weight: region_weight(),
			postal_code_weight: postal_code_weight(),
			tier_weight: tier_weight(),
		}
	}
}

fn default_page_size() -> u32 {
	25
}

fn max_page_size() -> u32 {
	200
}

fn availability_weight() -> u32 {
	10
}

fn lead_type_weight() -> u32 {
	100
}

fn region_weight() -> u32 {
	50
}

fn postal_code_weight() -> u32 {
	30
}

fn tier_weight() -> u32 {
	20
}
