//! Inventory reconciliation
//!
//! Compares a local artifact inventory against a remote one and computes the
//! transfer set: local entries with no remote counterpart. Matching is done
//! on base-name keys ([`local_base_name`] vs [`remote_base_name`]), so a
//! local `tank/data@bk_..._exp_1d` matches the remote file
//! `tank-data@bk_..._exp_1d.gzip`.
//!
//! No normalization of case or whitespace is applied beyond those two
//! transforms; entries differing only in such ways are distinct artifacts as
//! far as the naming convention is concerned.

use std::collections::HashSet;

use super::identifier::{local_base_name, remote_base_name};

/// Local entries missing from the remote inventory
///
/// Returns the raw local names (not their comparison keys), in local
/// inventory order. Subtraction is over names, not multiset counts: a local
/// name appearing N times with no remote match appears N times in the
/// result, and zero times once any remote entry matches its key.
pub fn diff(local: &[String], remote: &[String]) -> Vec<String> {
    let remote_keys: HashSet<String> = remote.iter().map(|name| remote_base_name(name)).collect();

    local
        .iter()
        .filter(|name| !remote_keys.contains(&local_base_name(name)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_diff_matches_across_transforms() {
        let local = names(&[
            "tank/data@bk_20230101-0000_exp_1d",
            "tank/data@bk_20230102-0000_exp_1d",
        ]);
        let remote = names(&["tank-data@bk_20230101-0000_exp_1d.gzip"]);

        assert_eq!(
            diff(&local, &remote),
            names(&["tank/data@bk_20230102-0000_exp_1d"])
        );
    }

    #[test]
    fn test_diff_empty_remote_returns_all_local() {
        let local = names(&["a_20230101-0000_exp_1d", "b_20230101-0000_exp_1d"]);
        assert_eq!(diff(&local, &[]), local);
    }

    #[test]
    fn test_diff_is_idempotent() {
        let local = names(&["a_20230101-0000_exp_1d", "b_20230101-0000_exp_1d"]);
        let remote = names(&["a_20230101-0000_exp_1d.gzip"]);

        let first = diff(&local, &remote);
        let second = diff(&local, &remote);
        assert_eq!(first, second);
    }

    #[test]
    fn test_diff_against_self_is_empty() {
        // A flat inventory compared against itself: local and remote keys
        // coincide, so nothing is missing.
        let inventory = names(&["a_20230101-0000_exp_1d", "b_20230102-0000_exp_1d"]);
        assert!(diff(&inventory, &inventory).is_empty());
    }

    #[test]
    fn test_diff_preserves_order_and_duplicates() {
        let local = names(&[
            "b_20230102-0000_exp_1d",
            "a_20230101-0000_exp_1d",
            "b_20230102-0000_exp_1d",
        ]);

        // No remote match: both occurrences of the duplicate survive, in order
        assert_eq!(diff(&local, &[]), local);

        // One remote match suppresses every local occurrence of that name
        let remote = names(&["b_20230102-0000_exp_1d.gzip"]);
        assert_eq!(diff(&local, &remote), names(&["a_20230101-0000_exp_1d"]));
    }

    #[test]
    fn test_diff_does_not_normalize_case() {
        let local = names(&["Tank_20230101-0000_exp_1d"]);
        let remote = names(&["tank_20230101-0000_exp_1d.gzip"]);

        // Case-differing entries are distinct artifacts
        assert_eq!(diff(&local, &remote), local);
    }

    #[test]
    fn test_diff_includes_unparseable_names() {
        // Diffing needs only the string transforms, not a parseable
        // timestamp or expiry token.
        let local = names(&["tank/scratch"]);
        let remote = names(&["tank-other.gzip"]);

        assert_eq!(diff(&local, &remote), local);
        assert!(diff(&local, &names(&["tank-scratch.gzip"])).is_empty());
    }
}
