pub mod checkout;
pub mod meta;
pub mod pricing;
pub mod search;
pub mod time_serde;

use std::{collections::HashMap, future::Future, pin::Pin, sync::Arc};

use uuid::Uuid;

pub use checkout::{CheckoutRequest, CheckoutResponse};
use leads_config::Config;
use leads_domain::{Lead, PricingTable, Tier};
use leads_storage::{db::Db, queries, queries::LeadFilter};
pub use meta::{LeadTypesResponse, StoreHealthResponse};
pub use pricing::PricingResponse;
pub use search::{SearchBoosts, SearchItem, SearchRequest, SearchResponse};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The record-store collaborator. Search and checkout only ever touch leads
/// through this seam, so tests inject an in-memory implementation and the
/// binary injects the Postgres-backed one.
pub trait LeadStore
where
	Self: Send + Sync,
{
	fn count<'a>(&'a self, filter: &'a LeadFilter) -> BoxFuture<'a, leads_storage::Result<u64>>;

	fn fetch<'a>(
		&'a self,
		filter: &'a LeadFilter,
	) -> BoxFuture<'a, leads_storage::Result<Vec<Lead>>>;

	fn add_sold_tier<'a>(
		&'a self,
		ids: &'a [Uuid],
		tier: Tier,
	) -> BoxFuture<'a, leads_storage::Result<u64>>;

	fn sold_tiers<'a>(
		&'a self,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, leads_storage::Result<HashMap<Uuid, Vec<Tier>>>>;

	fn distinct_lead_types<'a>(&'a self) -> BoxFuture<'a, leads_storage::Result<Vec<String>>>;
}

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<leads_storage::Error> for ServiceError {
	fn from(err: leads_storage::Error) -> Self {
		Self::Storage { message: err.to_string() }
	}
}

pub struct LeadsService {
	pub cfg: Config,
	pub pricing: PricingTable,
	pub store: Arc<dyn LeadStore>,
}

impl LeadsService {
	pub fn new(cfg: Config, pricing: PricingTable, store: Arc<dyn LeadStore>) -> Self {
		Self { cfg, pricing, store }
	}
}

pub struct SqlLeadStore {
	pub db: Db,
}

impl SqlLeadStore {
	pub fn new(db: Db) -> Self {
		Self { db }
	}
}

impl LeadStore for SqlLeadStore {
	fn count<'a>(&'a self, filter: &'a LeadFilter) -> BoxFuture<'a, leads_storage::Result<u64>> {
		Box::pin(queries::count_leads(&self.db, filter))
	}

	fn fetch<'a>(
		&'a self,
		filter: &'a LeadFilter,
	) -> BoxFuture<'a, leads_storage::Result<Vec<Lead>>> {
		Box::pin(queries::fetch_leads(&self.db, filter))
	}

	fn add_sold_tier<'a>(
		&'a self,
		ids: &'a [Uuid],
		tier: Tier,
	) -> BoxFuture<'a, leads_storage::Result<u64>> {
		Box::pin(queries::add_sold_tier(&self.db, ids, tier))
	}

	fn sold_tiers<'a>(
		&'a self,
		ids: &'a [Uuid],
	) -> BoxFuture<'a, leads_storage::Result<HashMap<Uuid, Vec<Tier>>>> {
		Box::pin(queries::sold_tiers(&self.db, ids))
	}

	fn distinct_lead_types<'a>(&'a self) -> BoxFuture<'a, leads_storage::Result<Vec<String>>> {
		Box::pin(queries::distinct_lead_types(&self.db))
	}
}
