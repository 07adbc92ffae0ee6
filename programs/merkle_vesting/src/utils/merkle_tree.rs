//! Off-chain tree builder. Host targets only; the program never builds trees.

use std::collections::BTreeMap;

use anchor_lang::prelude::Pubkey;

use crate::error::VestingError;
use crate::utils::merkle::{hash_pair, leaf_hash, Hash};

/// Sorted, deduplicated leaf layer hashed upward with `hash_pair`.
/// An odd trailing node is promoted unchanged.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    layers: Vec<Vec<Hash>>,
}

impl MerkleTree {
    pub fn new(leaves: impl IntoIterator<Item = Hash>) -> Self {
        let mut base: Vec<Hash> = leaves.into_iter().collect();
        base.sort_unstable();
        base.dedup();

        let mut layers = vec![base];
        while let Some(top) = layers.last().filter(|top| top.len() > 1) {
            let pairs = top.chunks_exact(2);
            let carry = pairs.remainder().first().copied();
            let next: Vec<Hash> = pairs
                .map(|pair| hash_pair(&pair[0], &pair[1]))
                .chain(carry)
                .collect();
            layers.push(next);
        }
        Self { layers }
    }

    /// Zero for an empty tree.
    pub fn root(&self) -> Hash {
        self.layers
            .last()
            .and_then(|top| top.first())
            .copied()
            .unwrap_or([0u8; 32])
    }

    pub fn proof(&self, leaf: &Hash) -> Option<Vec<Hash>> {
        let mut idx = self.layers.first()?.binary_search(leaf).ok()?;
        let (_root, below) = self.layers.split_last()?;
        let mut proof = Vec::with_capacity(below.len());
        for layer in below {
            if let Some(sibling) = layer.get(idx ^ 1) {
                proof.push(*sibling);
            }
            idx /= 2;
        }
        Some(proof)
    }
}

/// One allocation leaf as handed to a beneficiary for activation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AllocationClaim {
    pub index: u64,
    pub amount: u64,
    pub proof: Vec<Hash>,
}

/// Root, committed total and per-account activation material for a schedule.
#[derive(Clone, Debug)]
pub struct Distribution {
    pub root: Hash,
    pub total: u64,
    pub claims: BTreeMap<Pubkey, Vec<AllocationClaim>>,
}

impl Distribution {
    /// Leaf index is the allocation's position in `allocations`; an account
    /// may appear several times and gets one claim per occurrence.
    pub fn build(allocations: &[(Pubkey, u64)]) -> Result<Self, VestingError> {
        if allocations.is_empty() {
            return Err(VestingError::InvalidCommitment);
        }

        let leaves: Vec<Hash> = allocations
            .iter()
            .enumerate()
            .map(|(i, (account, amount))| leaf_hash(i as u64, account, *amount))
            .collect();
        let tree = MerkleTree::new(leaves.iter().copied());

        let mut total: u64 = 0;
        let mut claims: BTreeMap<Pubkey, Vec<AllocationClaim>> = BTreeMap::new();
        for (i, ((account, amount), leaf)) in allocations.iter().zip(&leaves).enumerate() {
            total = total
                .checked_add(*amount)
                .ok_or(VestingError::MathOverflow)?;
            let proof = tree.proof(leaf).ok_or(VestingError::InvalidProof)?;
            claims.entry(*account).or_default().push(AllocationClaim {
                index: i as u64,
                amount: *amount,
                proof,
            });
        }

        Ok(Self {
            root: tree.root(),
            total,
            claims,
        })
    }

    pub fn claims_for(&self, account: &Pubkey) -> &[AllocationClaim] {
        self.claims.get(account).map(Vec::as_slice).unwrap_or(&[])
    }
}
