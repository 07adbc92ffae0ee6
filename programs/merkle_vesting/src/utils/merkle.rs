//! Allocation leaves and sorted-pair merkle proof verification (BLAKE3).
//!
//! leaf    = H(H(tag || index_le || account || amount_le))
//! combine = H(min(a, b) || max(a, b))

use anchor_lang::prelude::Pubkey;
use bytemuck::{Pod, Zeroable};

use crate::constants::LEAF_DOMAIN_TAG;

pub type Hash = [u8; 32];

/// Canonical 56-byte encoding of one allocation.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct LeafPreimage {
    tag: [u8; 8],
    index: [u8; 8],
    account: [u8; 32],
    amount: [u8; 8],
}

pub fn leaf_hash(index: u64, account: &Pubkey, amount: u64) -> Hash {
    let preimage = LeafPreimage {
        tag: LEAF_DOMAIN_TAG,
        index: index.to_le_bytes(),
        account: account.to_bytes(),
        amount: amount.to_le_bytes(),
    };
    let inner = blake3::hash(bytemuck::bytes_of(&preimage));
    *blake3::hash(inner.as_bytes()).as_bytes()
}

/// Order-independent node hash.
pub fn hash_pair(a: &Hash, b: &Hash) -> Hash {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    let mut hasher = blake3::Hasher::new();
    hasher.update(lo);
    hasher.update(hi);
    *hasher.finalize().as_bytes()
}

pub fn verify(leaf: Hash, proof: &[Hash], root: &Hash) -> bool {
    let computed = proof.iter().fold(leaf, |acc, sibling| hash_pair(&acc, sibling));
    computed == *root
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preimage_layout_is_packed() {
        assert_eq!(core::mem::size_of::<LeafPreimage>(), 56);
    }

    #[test]
    fn leaf_is_double_hash_of_encoding() {
        let account = Pubkey::new_from_array([9u8; 32]);
        let mut encoded = Vec::with_capacity(56);
        encoded.extend_from_slice(&LEAF_DOMAIN_TAG);
        encoded.extend_from_slice(&3u64.to_le_bytes());
        encoded.extend_from_slice(account.as_ref());
        encoded.extend_from_slice(&1_111u64.to_le_bytes());
        let expected = blake3::hash(blake3::hash(&encoded).as_bytes());
        assert_eq!(leaf_hash(3, &account, 1_111), *expected.as_bytes());
    }

    #[test]
    fn leaf_binds_every_field() {
        let a = Pubkey::new_from_array([1u8; 32]);
        let b = Pubkey::new_from_array([2u8; 32]);
        let base = leaf_hash(0, &a, 100);
        assert_ne!(base, leaf_hash(1, &a, 100));
        assert_ne!(base, leaf_hash(0, &b, 100));
        assert_ne!(base, leaf_hash(0, &a, 101));
    }

    #[test]
    fn pair_hash_commutes() {
        let x = [3u8; 32];
        let y = [4u8; 32];
        assert_eq!(hash_pair(&x, &y), hash_pair(&y, &x));
        assert_ne!(hash_pair(&x, &y), hash_pair(&x, &x));
    }

    #[test]
    fn two_leaf_tree_verifies_both_sides() {
        let a = leaf_hash(0, &Pubkey::new_from_array([1u8; 32]), 5);
        let b = leaf_hash(1, &Pubkey::new_from_array([2u8; 32]), 7);
        let root = hash_pair(&a, &b);
        assert!(verify(a, &[b], &root));
        assert!(verify(b, &[a], &root));
        assert!(!verify(a, &[a], &root));
    }

    #[test]
    fn single_leaf_root_needs_empty_proof() {
        let a = leaf_hash(0, &Pubkey::new_from_array([1u8; 32]), 5);
        assert!(verify(a, &[], &a));
        assert!(!verify(a, &[], &[0u8; 32]));
    }
}
