use time::OffsetDateTime;
use uuid::Uuid;

use crate::tier::Tier;

/// Canonical inventory record. Built at the storage-adapter boundary from the
/// legacy document shape; everything downstream sees normalized fields only.
#[derive(Clone, Debug)]
pub struct Lead {
	pub id: Uuid,
	pub created_at: OffsetDateTime,
	pub lead_type: String,
	pub region: Option<String>,
	pub postal_code: Option<String>,
	pub available: bool,
	pub status: Option<String>,
	pub sold_tiers: Vec<Tier>,
}

impl Lead {
	pub fn sold_in(&self, tier: Tier) -> bool {
		self.sold_tiers.contains(&tier)
	}
}
