use time::OffsetDateTime;
use uuid::Uuid;

use leads_domain::{Lead, Tier, normalize, parse_tier};

/// A `leads` row as stored, legacy aliases and all. Ingest predates this
/// service, so region may live in `state` or `region` and postal code in
/// `zip5` or the raw `zip_code`.
#[derive(Debug, sqlx::FromRow)]
pub struct LeadRow {
	pub lead_id: Uuid,
	pub created_at: OffsetDateTime,
	pub lead_type: Option<String>,
	pub state: Option<String>,
	pub region: Option<String>,
	pub zip5: Option<String>,
	pub zip_code: Option<String>,
	pub status: Option<String>,
	pub sold_tiers: Vec<String>,
}

impl LeadRow {
	/// Folds the legacy shape onto the canonical record. Downstream code
	/// never branches on which alias a row happened to carry.
	pub fn into_lead(self) -> Lead {
		let region = fold_alias(self.state.as_deref(), self.region.as_deref())
			.map(normalize::region);
		let postal_code = fold_alias(self.zip5.as_deref(), self.zip_code.as_deref())
			.map(normalize::postal_code)
			.filter(|value| !value.is_empty());
		let lead_type =
			self.lead_type.as_deref().map(normalize::lead_type).unwrap_or_default();
		let available = self
			.status
			.as_deref()
			.map(|status| status.trim().eq_ignore_ascii_case("available"))
			.unwrap_or(false);
		let mut sold_tiers = Vec::new();

		// Ledger entries are set-like; unknown labels written by retired code are dropped.
		for label in &self.sold_tiers {
			if let Some(tier) = parse_tier(label)
				&& !sold_tiers.contains(&tier)
			{
				sold_tiers.push(tier);
			}
		}

		Lead {
			id: self.lead_id,
			created_at: self.created_at,
			lead_type,
			region,
			postal_code,
			available,
			status: self.status,
			sold_tiers,
		}
	}
}

fn fold_alias<'a>(primary: Option<&'a str>, legacy: Option<&'a str>) -> Option<&'a str> {
	primary.filter(|value| !value.trim().is_empty()).or(legacy)
}

#[cfg(test)]
mod tests {
	use time::macros::datetime;
	use uuid::Uuid;

	use leads_domain::Tier;

	use crate::models::LeadRow;

	fn row() -> LeadRow {
		LeadRow {
			lead_id: Uuid::new_v4(),
			created_at: datetime!(2026-02-03 12:00 UTC),
			lead_type: Some(" Final_Expense ".to_string()),
			state: None,
			region: Some("fl".to_string()),
			zip5: None,
			zip_code: Some("33101-2207".to_string()),
			status: Some("Available".to_string()),
			sold_tiers: vec![
				"TIER_0_3D".to_string(),
				"DAYS_4_14".to_string(),
				"TIER_0_3D".to_string(),
				"garbage".to_string(),
			],
		}
	}

	#[test]
	fn folds_legacy_aliases_onto_canonical_fields() {
		let lead = row().into_lead();

		assert_eq!(lead.lead_type, "final_expense");
		assert_eq!(lead.region.as_deref(), Some("FL"));
		assert_eq!(lead.postal_code.as_deref(), Some("33101"));
		assert!(lead.available);
	}

	#[test]
	fn primary_alias_wins_when_both_present() {
		let mut raw = row();

		raw.state = Some("tx".to_string());
		raw.zip5 = Some("90210".to_string());

		let lead = raw.into_lead();

		assert_eq!(lead.region.as_deref(), Some("TX"));
		assert_eq!(lead.postal_code.as_deref(), Some("90210"));
	}

	#[test]
	fn ledger_is_deduplicated_and_unknown_labels_dropped() {
		let lead = row().into_lead();

		assert_eq!(lead.sold_tiers, vec![Tier::Days0To3, Tier::Days4To14]);
	}
}
