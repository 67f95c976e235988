use std::collections::{BTreeMap, HashMap};

use crate::{
	normalize,
	tier::{Tier, parse_tier},
};

/// Row key for the flat retail price, alongside the five tier identifiers.
pub const RETAIL_KEY: &str = "RETAIL";

#[derive(Debug, thiserror::Error)]
pub enum PricingError {
	#[error("Unknown tier identifier {label:?} in pricing override for {product_type:?}.")]
	UnknownTier { product_type: String, label: String },
}

#[derive(Clone, Debug, Default)]
struct PriceRow {
	by_tier: HashMap<Tier, f64>,
	retail: Option<f64>,
}

/// Immutable `(product type, tier) -> price` table, established at startup.
/// Missing product types or tiers yield "no price", never zero and never an
/// error.
#[derive(Clone, Debug)]
pub struct PricingTable {
	rows: HashMap<String, PriceRow>,
}

impl PricingTable {
	/// Builds the table from the built-in defaults plus config overrides. An
	/// override row replaces the entire built-in row for its product type;
	/// partial merges are not performed.
	pub fn from_config(pricing: &leads_config::Pricing) -> Result<Self, PricingError> {
		let mut rows = default_rows();

		for (product_type, raw_row) in &pricing.overrides {
			let key = normalize::lead_type(product_type);
			let mut row = PriceRow::default();

			for (label, price) in raw_row {
				if label.trim().eq_ignore_ascii_case(RETAIL_KEY) {
					row.retail = Some(*price);

					continue;
				}

				let Some(tier) = parse_tier(label) else {
					return Err(PricingError::UnknownTier {
						product_type: key,
						label: label.clone(),
					});
				};

				row.by_tier.insert(tier, *price);
			}

			rows.insert(key, row);
		}

		Ok(Self { rows })
	}

	pub fn price_for(&self, product_type: &str, tier: Tier) -> Option<f64> {
		self.rows.get(&normalize::lead_type(product_type))?.by_tier.get(&tier).copied()
	}

	pub fn retail_for(&self, product_type: &str) -> Option<f64> {
		self.rows.get(&normalize::lead_type(product_type))?.retail
	}

	/// Stable-ordered view of the whole table for client-side display.
	pub fn dump(&self) -> BTreeMap<String, BTreeMap<String, f64>> {
		self.rows
			.iter()
			.map(|(product_type, row)| {
				let mut out = BTreeMap::new();

				for (tier, price) in &row.by_tier {
					out.insert(tier.as_str().to_string(), *price);
				}
				if let Some(retail) = row.retail {
					out.insert(RETAIL_KEY.to_string(), retail);
				}

				(product_type.clone(), out)
			})
			.collect()
	}
}

fn default_rows() -> HashMap<String, PriceRow> {
	[
		("final_expense", [15.00, 10.00, 7.50, 5.00, 2.50], 25.00),
		("life", [21.00, 14.00, 10.00, 7.00, 3.50], 35.00),
		("veteran_life", [14.00, 9.00, 7.00, 4.00, 2.00], 23.00),
		("home", [16.00, 11.00, 8.00, 5.50, 3.00], 27.00),
		("auto", [16.00, 11.00, 8.00, 5.50, 3.00], 27.00),
		("medicare", [15.00, 10.00, 7.50, 5.00, 2.50], 25.00),
		("health", [16.00, 11.00, 8.00, 5.50, 3.00], 27.00),
		("retirement", [29.00, 19.00, 14.00, 9.00, 4.50], 50.00),
	]
	.into_iter()
	.map(|(product_type, prices, retail)| {
		let by_tier = Tier::ALL.into_iter().zip(prices).collect();

		(product_type.to_string(), PriceRow { by_tier, retail: Some(retail) })
	})
	.collect()
}
