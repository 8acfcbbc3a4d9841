use serde::{Deserialize, Serialize};
use std::fmt;

/// Field every rejection from this crate is attached to.
pub const USERNAME_FIELD: &str = "username";

/// Why a username was rejected. Serializes as the phrase key the host
/// resolves to a localized form-field message.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq)]
pub enum RejectionReason {
    #[serde(rename = "please_enter_another_name_required_format")]
    ReservedPrefix,
    #[serde(rename = "usernames_must_be_unique")]
    MustBeUnique,
}

impl RejectionReason {
    pub fn phrase_key(&self) -> &str {
        match self {
            RejectionReason::ReservedPrefix => "please_enter_another_name_required_format",
            RejectionReason::MustBeUnique => "usernames_must_be_unique",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.phrase_key())
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// The username passed every check so far. Carries the canonical
    /// username, which an earlier validator in the chain may have
    /// rewritten relative to what the user submitted.
    Accepted { username: String },
    Rejected {
        reason: RejectionReason,
        field: String,
    },
}

impl ValidationOutcome {
    pub fn accepted(username: &str) -> ValidationOutcome {
        ValidationOutcome::Accepted {
            username: username.to_string(),
        }
    }

    pub fn rejected(reason: RejectionReason) -> ValidationOutcome {
        ValidationOutcome::Rejected {
            reason,
            field: USERNAME_FIELD.to_string(),
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, ValidationOutcome::Rejected { .. })
    }
}
