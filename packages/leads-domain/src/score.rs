use leads_config::Ranking;

use crate::{
	record::Lead,
	tier::{Tier, TierSelector},
};

/// Optional ranking preferences. These never exclude a lead from results; a
/// lead matching none of them still scores its availability baseline (or
/// zero) and still appears.
#[derive(Clone, Debug)]
pub struct BoostCriteria {
	pub lead_type: Option<String>,
	pub region: Option<String>,
	pub postal_code: Option<String>,
	pub tier: TierSelector,
}

impl Default for BoostCriteria {
	fn default() -> Self {
		Self { lead_type: None, region: None, postal_code: None, tier: TierSelector::All }
	}
}

/// Additive boost score. Each criterion contributes its configured weight
/// when it matches and nothing otherwise; criteria are assumed normalized.
pub fn score(lead: &Lead, computed_tier: Tier, criteria: &BoostCriteria, weights: &Ranking) -> u32 {
	let mut total = 0;

	if lead.available {
		total += weights.availability_weight;
	}
	if let Some(lead_type) = criteria.lead_type.as_deref()
		&& lead.lead_type == lead_type
	{
		total += weights.lead_type_weight;
	}
	if let Some(region) = criteria.region.as_deref()
		&& lead.region.as_deref() == Some(region)
	{
		total += weights.region_weight;
	}
	if let Some(postal_code) = criteria.postal_code.as_deref()
		&& lead.postal_code.as_deref() == Some(postal_code)
	{
		total += weights.postal_code_weight;
	}
	if let TierSelector::Only(tier) = criteria.tier
		&& computed_tier == tier
	{
		total += weights.tier_weight;
	}

	total
}
