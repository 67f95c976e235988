use time::OffsetDateTime;
use uuid::Uuid;

use leads_domain::{BoostCriteria, Lead, Tier, TierSelector, classify, normalize, score};
use leads_storage::queries::LeadFilter;

use crate::{LeadsService, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchRequest {
	pub lead_type: Option<String>,
	pub region: Option<String>,
	pub postal_code: Option<String>,
	/// A tier identifier, or `ALL` (the default) to rank across every tier.
	pub tier: Option<String>,
	pub page: Option<u32>,
	pub page_size: Option<u32>,
	pub only_available: Option<bool>,
	/// Hard-excludes leads already sold in the requested tier. Falls back to
	/// `search.exclude_sold_default` when unset; ignored for `ALL` requests,
	/// which have no single tier to exclude against.
	pub exclude_sold: Option<bool>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchItem {
	pub id: Uuid,
	#[serde(with = "crate::time_serde")]
	pub created_at: OffsetDateTime,
	pub lead_type: String,
	pub region: Option<String>,
	pub postal_code: Option<String>,
	pub status: Option<String>,
	pub sold_tiers: Vec<Tier>,
	pub tier: Tier,
	pub price: Option<f64>,
	pub retail_price: Option<f64>,
}

/// Echo of the resolved boost criteria, post-normalization.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchBoosts {
	pub lead_type: Option<String>,
	pub region: Option<String>,
	pub postal_code: Option<String>,
	pub tier: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SearchResponse {
	pub page: u32,
	pub page_size: u32,
	pub total: u64,
	pub items: Vec<SearchItem>,
	pub boosts: SearchBoosts,
}

struct ScoredLead {
	lead: Lead,
	tier: Tier,
	score: u32,
}

impl LeadsService {
	/// Ranked inventory query. Boost criteria never hide a lead; the only
	/// exclusionary conditions are the explicit base-filter flags.
	pub async fn search(&self, req: SearchRequest) -> ServiceResult<SearchResponse> {
		let page = req.page.unwrap_or(1);
		let page_size = req.page_size.unwrap_or(self.cfg.search.default_page_size);

		if page < 1 {
			return Err(ServiceError::InvalidRequest {
				message: "page must be at least 1.".to_string(),
			});
		}
		if page_size < 1 || page_size > self.cfg.search.max_page_size {
			return Err(ServiceError::InvalidRequest {
				message: format!(
					"page_size must be between 1 and {}.",
					self.cfg.search.max_page_size
				),
			});
		}

		let selector = match req.tier.as_deref() {
			None => TierSelector::All,
			Some(raw) => TierSelector::parse(raw).ok_or_else(|| ServiceError::InvalidRequest {
				message: format!("Unknown tier identifier {raw:?}."),
			})?,
		};
		let criteria = BoostCriteria {
			lead_type: normalize_criterion(req.lead_type.as_deref(), normalize::lead_type),
			region: normalize_criterion(req.region.as_deref(), normalize::region),
			postal_code: normalize_criterion(req.postal_code.as_deref(), normalize::postal_code),
			tier: selector,
		};

		let exclude_sold = req.exclude_sold.unwrap_or(self.cfg.search.exclude_sold_default);
		let exclude_sold_in = match (exclude_sold, selector) {
			(true, TierSelector::Only(tier)) => Some(tier),
			_ => None,
		};
		let filter = LeadFilter {
			only_available: req.only_available.unwrap_or(false),
			exclude_sold_in,
		};

		let total = self.store.count(&filter).await?;
		let leads = self.store.fetch(&filter).await?;
		let now = OffsetDateTime::now_utc();

		let mut scored: Vec<ScoredLead> = leads
			.into_iter()
			.map(|lead| {
				let tier = classify(lead.created_at, now);
				let score = score::score(&lead, tier, &criteria, &self.cfg.ranking);

				ScoredLead { lead, tier, score }
			})
			.collect();

		scored.sort_by(|a, b| {
			b.score
				.cmp(&a.score)
				.then_with(|| b.lead.created_at.cmp(&a.lead.created_at))
				.then_with(|| b.lead.id.cmp(&a.lead.id))
		});

		tracing::debug!(total, candidates = scored.len(), page, page_size, "Search scored.");

		let skip = (u64::from(page) - 1) * u64::from(page_size);
		let items = scored
			.into_iter()
			.skip(skip as usize)
			.take(page_size as usize)
			.map(|entry| {
				// Price follows each lead's own computed tier, for ALL and
				// single-tier requests alike.
				let price = self.pricing.price_for(&entry.lead.lead_type, entry.tier);
				let retail_price = self.pricing.retail_for(&entry.lead.lead_type);
				let lead = entry.lead;

				SearchItem {
					id: lead.id,
					created_at: lead.created_at,
					lead_type: lead.lead_type,
					region: lead.region,
					postal_code: lead.postal_code,
					status: lead.status,
					sold_tiers: lead.sold_tiers,
					tier: entry.tier,
					price,
					retail_price,
				}
			})
			.collect();

		Ok(SearchResponse {
			page,
			page_size,
			total,
			items,
			boosts: SearchBoosts {
				lead_type: criteria.lead_type,
				region: criteria.region,
				postal_code: criteria.postal_code,
				tier: selector.as_str().to_string(),
			},
		})
	}
}

fn normalize_criterion(raw: Option<&str>, normalize: fn(&str) -> String) -> Option<String> {
	raw.map(normalize).filter(|value| !value.is_empty())
}
