pub mod normalize;
pub mod pricing;
pub mod record;
pub mod score;
pub mod tier;

pub use pricing::{PricingError, PricingTable};
pub use record::Lead;
pub use score::BoostCriteria;
pub use tier::{Tier, TierSelector, classify, parse_tier};
