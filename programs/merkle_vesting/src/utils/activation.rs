use anchor_lang::prelude::Pubkey;

use crate::constants::{MAX_BATCH_ENTRIES, MAX_PROOF_DEPTH};
use crate::error::VestingError;
use crate::state::EntitlementInput;
use crate::utils::merkle::{self, Hash};

/// Decide which batch positions are new activations, verifying every new
/// entry before anything is written.
///
/// `root` is `None` for an unknown schedule; `already_activated[i]` reports
/// whether entry `i` has an activation record. A repeated index inside the
/// batch counts as activated after its first occurrence.
pub fn plan_activation(
    root: Option<&Hash>,
    beneficiary: &Pubkey,
    entries: &[EntitlementInput],
    already_activated: &[bool],
) -> Result<Vec<usize>, VestingError> {
    if entries.len() > MAX_BATCH_ENTRIES || already_activated.len() != entries.len() {
        return Err(VestingError::MalformedBatch);
    }
    if entries.iter().any(|e| e.proof.len() > MAX_PROOF_DEPTH) {
        return Err(VestingError::MalformedBatch);
    }

    let mut fresh: Vec<usize> = Vec::with_capacity(entries.len());
    for (i, entry) in entries.iter().enumerate() {
        if already_activated[i] || fresh.iter().any(|&j| entries[j].index == entry.index) {
            continue;
        }
        let root = root.ok_or(VestingError::InvalidProof)?;
        let leaf = merkle::leaf_hash(entry.index, beneficiary, entry.amount);
        if !merkle::verify(leaf, &entry.proof, root) {
            return Err(VestingError::InvalidProof);
        }
        fresh.push(i);
    }

    if fresh.is_empty() {
        return Err(VestingError::NothingNewToActivate);
    }
    Ok(fresh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::merkle_tree::Distribution;

    fn key(b: u8) -> Pubkey {
        Pubkey::new_from_array([b; 32])
    }

    fn dist() -> Distribution {
        Distribution::build(&[
            (key(1), 10_000),
            (key(2), 5_000),
            (key(1), 23_500),
            (key(3), 1_111),
            (key(2), 10_000),
            (key(1), 10_000),
        ])
        .unwrap()
    }

    fn inputs(d: &Distribution, account: &Pubkey) -> Vec<EntitlementInput> {
        d.claims_for(account)
            .iter()
            .map(|c| EntitlementInput {
                index: c.index,
                amount: c.amount,
                proof: c.proof.clone(),
            })
            .collect()
    }

    #[test]
    fn activates_all_valid_entries() {
        let d = dist();
        let entries = inputs(&d, &key(1));
        let fresh = plan_activation(Some(&d.root), &key(1), &entries, &[false; 3]).unwrap();
        assert_eq!(fresh, vec![0, 1, 2]);
    }

    #[test]
    fn skips_already_activated_and_keeps_new() {
        let d = dist();
        let entries = inputs(&d, &key(1));
        let fresh =
            plan_activation(Some(&d.root), &key(1), &entries, &[true, false, false]).unwrap();
        assert_eq!(fresh, vec![1, 2]);
    }

    #[test]
    fn resubmission_alone_is_nothing_new() {
        let d = dist();
        let entries = inputs(&d, &key(3));
        assert!(matches!(
            plan_activation(Some(&d.root), &key(3), &entries, &[true]),
            Err(VestingError::NothingNewToActivate)
        ));
    }

    #[test]
    fn empty_batch_is_nothing_new() {
        let d = dist();
        assert!(matches!(
            plan_activation(Some(&d.root), &key(4), &[], &[]),
            Err(VestingError::NothingNewToActivate)
        ));
        assert!(matches!(
            plan_activation(None, &key(4), &[], &[]),
            Err(VestingError::NothingNewToActivate)
        ));
    }

    #[test]
    fn unknown_schedule_rejects_proofs() {
        let d = dist();
        let entries = inputs(&d, &key(3));
        assert!(matches!(
            plan_activation(None, &key(3), &entries, &[false]),
            Err(VestingError::InvalidProof)
        ));
    }

    #[test]
    fn one_bad_proof_fails_whole_batch() {
        let d = dist();
        let mut entries = inputs(&d, &key(2));
        entries[1].amount += 1;
        assert!(matches!(
            plan_activation(Some(&d.root), &key(2), &entries, &[false, false]),
            Err(VestingError::InvalidProof)
        ));
    }

    #[test]
    fn bad_proof_on_already_activated_entry_is_skipped() {
        let d = dist();
        let mut entries = inputs(&d, &key(2));
        entries[0].proof.clear();
        let fresh =
            plan_activation(Some(&d.root), &key(2), &entries, &[true, false]).unwrap();
        assert_eq!(fresh, vec![1]);
    }

    #[test]
    fn proof_for_other_beneficiary_is_invalid() {
        let d = dist();
        let entries = inputs(&d, &key(3));
        assert!(matches!(
            plan_activation(Some(&d.root), &key(4), &entries, &[false]),
            Err(VestingError::InvalidProof)
        ));
    }

    #[test]
    fn proof_against_other_root_is_invalid() {
        let d = dist();
        let other = Distribution::build(&[(key(3), 1_111), (key(5), 2)]).unwrap();
        let entries = inputs(&d, &key(3));
        assert!(matches!(
            plan_activation(Some(&other.root), &key(3), &entries, &[false]),
            Err(VestingError::InvalidProof)
        ));
    }

    #[test]
    fn repeated_index_in_batch_counts_once() {
        let d = dist();
        let one = inputs(&d, &key(3)).remove(0);
        let entries = vec![one.clone(), one];
        let fresh = plan_activation(Some(&d.root), &key(3), &entries, &[false, false]).unwrap();
        assert_eq!(fresh, vec![0]);
    }

    #[test]
    fn rejects_oversized_batches_and_proofs() {
        let d = dist();
        let one = inputs(&d, &key(3)).remove(0);
        let entries = vec![one.clone(); MAX_BATCH_ENTRIES + 1];
        assert!(matches!(
            plan_activation(Some(&d.root), &key(3), &entries, &vec![false; entries.len()]),
            Err(VestingError::MalformedBatch)
        ));

        let mut deep = one;
        deep.proof = vec![[0u8; 32]; MAX_PROOF_DEPTH + 1];
        assert!(matches!(
            plan_activation(Some(&d.root), &key(3), &[deep], &[false]),
            Err(VestingError::MalformedBatch)
        ));
    }

    #[test]
    fn status_list_must_match_entries() {
        let d = dist();
        let entries = inputs(&d, &key(1));
        assert!(matches!(
            plan_activation(Some(&d.root), &key(1), &entries, &[false]),
            Err(VestingError::MalformedBatch)
        ));
    }
}
