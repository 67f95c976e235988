use std::collections::BTreeMap;

use crate::LeadsService;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct PricingResponse {
	pub pricing: BTreeMap<String, BTreeMap<String, f64>>,
}

impl LeadsService {
	/// Read-only dump of the startup-loaded pricing table.
	pub fn pricing_table(&self) -> PricingResponse {
		PricingResponse { pricing: self.pricing.dump() }
	}
}
