use log::debug;

use crate::config::RestrictionsConfig;
use crate::models::{RejectionReason, ValidationOutcome};
use crate::normalization::{reduce_confusables, standardize_whitespace};

/// Leading character reserved by the host's username-tagging markup.
const RESERVED_PREFIX: char = '[';

/// Checks a candidate username against the host's user-group names.
///
/// Extends `prior` (the result of the validators that ran before this
/// one) rather than replacing it: a rejection already in `prior` passes
/// through untouched, and acceptance returns `prior` so a canonical
/// username rewritten upstream stays intact.
pub fn verify_username(
    username: &str,
    previous_username: Option<&str>,
    is_admin: bool,
    config: &RestrictionsConfig,
    group_names: &[String],
    prior: ValidationOutcome,
) -> ValidationOutcome {
    if prior.is_rejected() || username.is_empty() {
        return prior;
    }

    // Unconditional, even for admins and unchanged names: a leading `[`
    // breaks username tagging in rendered posts.
    if username.starts_with(RESERVED_PREFIX) {
        debug!("rejecting {:?}: reserved tagging prefix", username);
        return ValidationOutcome::rejected(RejectionReason::ReservedPrefix);
    }

    // Keeping the name already on record is always allowed.
    if previous_username == Some(username) {
        return prior;
    }

    if is_admin && !config.apply_to_admins_on() {
        return prior;
    }

    let username_lower = username.to_lowercase();
    let block_subset = config.block_group_subset_on();

    for group_name in group_names {
        let group_lower = standardize_whitespace(group_name).to_lowercase();
        if collides(&group_lower, &username_lower, block_subset) {
            debug!("rejecting {:?}: collides with group {:?}", username, group_name);
            return ValidationOutcome::rejected(RejectionReason::MustBeUnique);
        }

        // Compare against the romanized name as well, so accented or
        // cross-script lookalikes cannot shadow a group name.
        let group_confusable = reduce_confusables(&group_lower);
        if collides(&group_confusable, &username_lower, block_subset) {
            debug!(
                "rejecting {:?}: confusable with group {:?}",
                username, group_name
            );
            return ValidationOutcome::rejected(RejectionReason::MustBeUnique);
        }
    }

    prior
}

fn collides(group_name: &str, username_lower: &str, block_subset: bool) -> bool {
    group_name == username_lower || (block_subset && group_name.starts_with(username_lower))
}
