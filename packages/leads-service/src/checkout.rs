use uuid::Uuid;

use leads_domain::{Tier, parse_tier};

use crate::{LeadsService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CheckoutRequest {
	pub tier: String,
	pub lead_ids: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CheckoutResponse {
	pub tier: Tier,
	pub requested: u32,
	pub sold: u32,
	pub failed: Vec<String>,
}

impl LeadsService {
	/// Marks the given leads sold for one tier. The per-lead transition is
	/// one-directional and idempotent: a lead already sold in the tier counts
	/// as sold, and re-running the same checkout changes nothing. Malformed
	/// ids fail individually without sinking the batch.
	pub async fn checkout(&self, req: CheckoutRequest) -> ServiceResult<CheckoutResponse> {
		let Some(tier) = parse_tier(&req.tier) else {
			return Err(ServiceError::InvalidRequest {
				message: format!("Unknown tier identifier {:?}.", req.tier),
			});
		};
		if req.lead_ids.is_empty() {
			return Err(ServiceError::InvalidRequest {
				message: "lead_ids must be non-empty.".to_string(),
			});
		}

		let mut well_formed = Vec::new();

		for raw in &req.lead_ids {
			if let Ok(id) = Uuid::parse_str(raw.trim())
				&& !well_formed.contains(&id)
			{
				well_formed.push(id);
			}
		}

		let applied = self.store.add_sold_tier(&well_formed, tier).await?;
		// Fresh read after the conditional update; concurrent checkouts of the
		// same pair settle here, since every caller observes the final ledger.
		let ledgers = self.store.sold_tiers(&well_formed).await?;

		// Sold is the number of distinct records now carrying the tier; a
		// repeated id in the request counts once.
		let mut sold_ids: Vec<Uuid> = Vec::new();
		let mut failed = Vec::new();

		for raw in &req.lead_ids {
			match Uuid::parse_str(raw.trim()) {
				Ok(id) if ledgers.get(&id).is_some_and(|tiers| tiers.contains(&tier)) =>
					if !sold_ids.contains(&id) {
						sold_ids.push(id);
					},
				_ => failed.push(raw.clone()),
			}
		}

		let sold = sold_ids.len() as u32;

		tracing::info!(
			tier = tier.as_str(),
			requested = req.lead_ids.len(),
			applied,
			sold,
			"Checkout processed."
		);

		Ok(CheckoutResponse { tier, requested: req.lead_ids.len() as u32, sold, failed })
	}
}
