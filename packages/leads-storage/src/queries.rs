use std::collections::HashMap;

use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

use leads_domain::{Lead, Tier, normalize, parse_tier};

use crate::{Result, db::Db, models::LeadRow};

const LEAD_COLUMNS: &str =
	"lead_id, created_at, lead_type, state, region, zip5, zip_code, status, sold_tiers";

/// The one exclusionary condition search may apply. Everything else about a
/// query is a ranking boost, so the filter is deliberately light: inventory
/// always shows unless the caller opts into one of these.
#[derive(Clone, Copy, Debug, Default)]
pub struct LeadFilter {
	pub only_available: bool,
	pub exclude_sold_in: Option<Tier>,
}

pub async fn count_leads(db: &Db, filter: &LeadFilter) -> Result<u64> {
	let mut builder = QueryBuilder::new("SELECT count(*) FROM leads");

	push_filter(&mut builder, filter);

	let count: i64 = builder.build_query_scalar().fetch_one(&db.pool).await?;

	Ok(count as u64)
}

/// Fetches every lead surviving the base filter, newest first with the id as
/// a stable tie-break. Scoring, final ordering, and pagination happen in the
/// service layer against the full survivor set.
pub async fn fetch_leads(db: &Db, filter: &LeadFilter) -> Result<Vec<Lead>> {
	let mut builder = QueryBuilder::new(format!("SELECT {LEAD_COLUMNS} FROM leads"));

	push_filter(&mut builder, filter);
	builder.push(" ORDER BY created_at DESC, lead_id DESC");

	let rows: Vec<LeadRow> = builder.build_query_as().fetch_all(&db.pool).await?;

	Ok(rows.into_iter().map(LeadRow::into_lead).collect())
}

/// Conditionally appends `tier` to the sale ledger of each given lead. The
/// guard and the append run in one statement per row, so concurrent checkouts
/// of the same `(lead, tier)` pair cannot both apply it. Returns the number
/// of rows actually transitioned.
pub async fn add_sold_tier(db: &Db, ids: &[Uuid], tier: Tier) -> Result<u64> {
	if ids.is_empty() {
		return Ok(0);
	}

	let result = sqlx::query(
		"\
UPDATE leads
SET sold_tiers = array_append(sold_tiers, $2)
WHERE lead_id = ANY($1)
	AND NOT ($2 = ANY(sold_tiers))",
	)
	.bind(ids)
	.bind(tier.as_str())
	.execute(&db.pool)
	.await?;

	Ok(result.rows_affected())
}

/// Fresh read of the sale ledgers for the given leads. Ids with no row are
/// simply absent from the map.
pub async fn sold_tiers(db: &Db, ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<Tier>>> {
	if ids.is_empty() {
		return Ok(HashMap::new());
	}

	let rows: Vec<(Uuid, Vec<String>)> =
		sqlx::query_as("SELECT lead_id, sold_tiers FROM leads WHERE lead_id = ANY($1)")
			.bind(ids)
			.fetch_all(&db.pool)
			.await?;

	Ok(rows
		.into_iter()
		.map(|(lead_id, labels)| {
			let tiers = labels.iter().filter_map(|label| parse_tier(label)).collect();

			(lead_id, tiers)
		})
		.collect())
}

pub async fn distinct_lead_types(db: &Db) -> Result<Vec<String>> {
	let values: Vec<Option<String>> =
		sqlx::query_scalar("SELECT DISTINCT lead_type FROM leads").fetch_all(&db.pool).await?;
	let mut out: Vec<String> = values
		.into_iter()
		.flatten()
		.map(|value| normalize::lead_type(&value))
		.filter(|value| !value.is_empty())
		.collect();

	out.sort();
	out.dedup();

	Ok(out)
}

/// Records are normally created by the external ingest pipeline; this exists
/// for seeding in tests and operational tooling.
pub async fn insert_lead(db: &Db, row: &LeadRow) -> Result<()> {
	sqlx::query(
		"\
INSERT INTO leads (
	lead_id,
	created_at,
	lead_type,
	state,
	region,
	zip5,
	zip_code,
	status,
	sold_tiers
)
VALUES ($1,$2,$3,$4,$5,$6,$7,$8,$9)",
	)
	.bind(row.lead_id)
	.bind(row.created_at)
	.bind(row.lead_type.as_deref())
	.bind(row.state.as_deref())
	.bind(row.region.as_deref())
	.bind(row.zip5.as_deref())
	.bind(row.zip_code.as_deref())
	.bind(row.status.as_deref())
	.bind(&row.sold_tiers)
	.execute(&db.pool)
	.await?;

	Ok(())
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &LeadFilter) {
	builder.push(" WHERE TRUE");

	if filter.only_available {
		builder.push(" AND lower(trim(coalesce(status, ''))) = 'available'");
	}
	if let Some(tier) = filter.exclude_sold_in {
		builder.push(" AND NOT (");
		builder.push_bind(tier.as_str());
		builder.push(" = ANY(sold_tiers))");
	}
}
