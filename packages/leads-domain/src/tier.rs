use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Age-based freshness tier. Every non-negative age maps to exactly one tier;
/// the boundaries are half-open and contiguous.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum Tier {
	#[serde(rename = "TIER_0_3D")]
	Days0To3,
	#[serde(rename = "TIER_4_14D")]
	Days4To14,
	#[serde(rename = "TIER_15_30D")]
	Days15To30,
	#[serde(rename = "TIER_31_90D")]
	Days31To90,
	#[serde(rename = "TIER_91_PLUS")]
	Days91Plus,
}

/// Tier scope of a search request: a specific tier, or all of them.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TierSelector {
	All,
	Only(Tier),
}

impl Tier {
	pub const ALL: [Tier; 5] = [
		Tier::Days0To3,
		Tier::Days4To14,
		Tier::Days15To30,
		Tier::Days31To90,
		Tier::Days91Plus,
	];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Days0To3 => "TIER_0_3D",
			Self::Days4To14 => "TIER_4_14D",
			Self::Days15To30 => "TIER_15_30D",
			Self::Days31To90 => "TIER_31_90D",
			Self::Days91Plus => "TIER_91_PLUS",
		}
	}
}

impl TierSelector {
	/// Parses a request-level tier scope. Empty input and `ALL` select all
	/// tiers; anything else must resolve to a known tier identifier.
	pub fn parse(value: &str) -> Option<Self> {
		let trimmed = value.trim();

		if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("ALL") {
			return Some(Self::All);
		}

		parse_tier(trimmed).map(Self::Only)
	}

	pub fn as_str(self) -> &'static str {
		match self {
			Self::All => "ALL",
			Self::Only(tier) => tier.as_str(),
		}
	}
}

/// Resolves a tier identifier, accepting the legacy aliases still seen in
/// stored ledgers and older clients.
pub fn parse_tier(value: &str) -> Option<Tier> {
	let key = value.trim().to_ascii_uppercase().replace('-', "_");

	match key.as_str() {
		"TIER_0_3D" | "DAYS_0_3" | "YESTERDAY" | "YESTERDAY_72" | "YESTERDAY_72H" =>
			Some(Tier::Days0To3),
		"TIER_4_14D" | "DAYS_4_14" | "4_14" => Some(Tier::Days4To14),
		"TIER_15_30D" | "DAYS_15_30" | "15_30" => Some(Tier::Days15To30),
		"TIER_31_90D" | "DAYS_31_90" | "31_90" => Some(Tier::Days31To90),
		"TIER_91_PLUS" | "DAYS_91_PLUS" | "91_PLUS" => Some(Tier::Days91Plus),
		_ => None,
	}
}

/// Maps a lead's age to its tier. Future creation timestamps (clock skew)
/// clamp to age zero and classify as the freshest tier.
pub fn classify(created_at: OffsetDateTime, now: OffsetDateTime) -> Tier {
	let age_days = ((now - created_at).as_seconds_f64() / SECONDS_PER_DAY).max(0.0);

	if age_days <= 3.0 {
		Tier::Days0To3
	} else if age_days <= 14.0 {
		Tier::Days4To14
	} else if age_days <= 30.0 {
		Tier::Days15To30
	} else if age_days <= 90.0 {
		Tier::Days31To90
	} else {
		Tier::Days91Plus
	}
}

#[cfg(test)]
mod tests {
	use time::{Duration, OffsetDateTime, macros::datetime};

	use crate::tier::{Tier, TierSelector, classify, parse_tier};

	fn at_age_days(now: OffsetDateTime, days: f64) -> OffsetDateTime {
		now - Duration::seconds_f64(days * 86_400.0)
	}

	#[test]
	fn boundaries_are_half_open() {
		let now = datetime!(2026-02-04 12:00 UTC);

		assert_eq!(classify(at_age_days(now, 0.0), now), Tier::Days0To3);
		assert_eq!(classify(at_age_days(now, 3.0), now), Tier::Days0To3);
		assert_eq!(classify(at_age_days(now, 3.0001), now), Tier::Days4To14);
		assert_eq!(classify(at_age_days(now, 14.0), now), Tier::Days4To14);
		assert_eq!(classify(at_age_days(now, 14.0001), now), Tier::Days15To30);
		assert_eq!(classify(at_age_days(now, 30.0), now), Tier::Days15To30);
		assert_eq!(classify(at_age_days(now, 30.0001), now), Tier::Days31To90);
		assert_eq!(classify(at_age_days(now, 90.0), now), Tier::Days31To90);
		assert_eq!(classify(at_age_days(now, 90.0001), now), Tier::Days91Plus);
		assert_eq!(classify(at_age_days(now, 10_000.0), now), Tier::Days91Plus);
	}

	#[test]
	fn future_created_at_clamps_to_freshest() {
		let now = datetime!(2026-02-04 12:00 UTC);

		assert_eq!(classify(now + Duration::hours(1), now), Tier::Days0To3);
	}

	#[test]
	fn parses_legacy_aliases() {
		assert_eq!(parse_tier("YESTERDAY_72H"), Some(Tier::Days0To3));
		assert_eq!(parse_tier("days_4_14"), Some(Tier::Days4To14));
		assert_eq!(parse_tier("91_PLUS"), Some(Tier::Days91Plus));
		assert_eq!(parse_tier("tier-15-30d"), Some(Tier::Days15To30));
		assert_eq!(parse_tier("DAYS_31_90"), Some(Tier::Days31To90));
		assert_eq!(parse_tier("bogus"), None);
	}

	#[test]
	fn selector_treats_empty_and_all_alike() {
		assert_eq!(TierSelector::parse(""), Some(TierSelector::All));
		assert_eq!(TierSelector::parse("  all "), Some(TierSelector::All));
		assert_eq!(
			TierSelector::parse("TIER_0_3D"),
			Some(TierSelector::Only(Tier::Days0To3))
		);
		assert_eq!(TierSelector::parse("nope"), None);
	}
}
