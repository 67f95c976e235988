use std::sync::Arc;

use leads_domain::PricingTable;
use leads_service::{LeadsService, SqlLeadStore};
use leads_storage::db::Db;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<LeadsService>,
}
impl AppState {
	pub async fn new(config: leads_config::Config) -> color_eyre::Result<Self> {
		// A broken pricing table means leads would sell at the wrong price;
		// refuse to start instead.
		let pricing = PricingTable::from_config(&config.pricing)?;
		let db = Db::connect(&config.storage.postgres).await?;

		db.ensure_schema().await?;

		let store = Arc::new(SqlLeadStore::new(db));
		let service = LeadsService::new(config, pricing, store);

		Ok(Self { service: Arc::new(service) })
	}
}
