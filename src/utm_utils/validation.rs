use url::Url;

use crate::common::types::UtmParameterSet;
use crate::utm_utils::slug::normalize;

/// Minimum length of a campaign name after normalization. Anything shorter
/// is too generic to group on in analytics.
pub const MIN_CAMPAIGN_LEN: usize = 5;

/// Outcome of validating a parameter set. A plain value, not an error type:
/// invalid input is the expected, common case and callers branch on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Valid,
    Invalid { reason: &'static str },
}

impl Validation {
    fn fail(reason: &'static str) -> Self {
        Validation::Invalid { reason }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Validation::Valid)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Validation::Valid => None,
            Validation::Invalid { reason } => Some(reason),
        }
    }
}

/// Check a parameter set against the naming-convention rules. Checks run in
/// a fixed order and stop at the first failure, so a caller always learns
/// exactly one reason per call. Never fails itself; a malformed base URL is
/// reported as a reason, not raised.
pub fn validate(set: &UtmParameterSet) -> Validation {
    if Url::parse(&set.base_url).is_err() {
        return Validation::fail("base URL invalid");
    }
    if set.params.channel.is_empty() {
        return Validation::fail("channel required");
    }
    if set.params.source.is_empty() {
        return Validation::fail("source required");
    }
    if set.params.medium.is_empty() {
        return Validation::fail("medium required");
    }
    if set.params.campaign.is_empty() {
        return Validation::fail("campaign required");
    }
    if set.params.source == set.params.medium {
        return Validation::fail("source and medium must differ");
    }
    if normalize(&set.params.campaign).chars().count() < MIN_CAMPAIGN_LEN {
        return Validation::fail("campaign name too short");
    }
    Validation::Valid
}
