use leads_storage::queries::LeadFilter;

use crate::{LeadsService, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct LeadTypesResponse {
	pub items: Vec<String>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct StoreHealthResponse {
	pub leads: u64,
}

impl LeadsService {
	pub async fn lead_types(&self) -> ServiceResult<LeadTypesResponse> {
		let items = self.store.distinct_lead_types().await?;

		Ok(LeadTypesResponse { items })
	}

	/// Round-trips a count through the store, so deploys can tell a live
	/// process from one that can actually reach its database.
	pub async fn store_health(&self) -> ServiceResult<StoreHealthResponse> {
		let leads = self.store.count(&LeadFilter::default()).await?;

		Ok(StoreHealthResponse { leads })
	}
}
