//! Program-wide constants.

/// Seed of the ledger config PDA: `["ledger", admin, mint]`.
pub const LEDGER_SEED: &[u8] = b"ledger";

/// Seed of a schedule PDA: `["schedule", ledger, schedule_id_le]`.
pub const SCHEDULE_SEED: &[u8] = b"schedule";

/// Seed of a schedule's custody token account: `["vault", schedule]`.
pub const VAULT_SEED: &[u8] = b"vault";

/// Seed of an activation record: `["entitlement", schedule, index_le]`.
pub const ENTITLEMENT_SEED: &[u8] = b"entitlement";

/// Seed of an account position: `["position", schedule, beneficiary]`.
pub const POSITION_SEED: &[u8] = b"position";

/// Seconds per day (UTC).
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Length of one linear accrual step (30 days).
pub const PERIOD_SECONDS: i64 = 30 * SECONDS_PER_DAY;

/// 100% in basis points.
pub const BPS_DENOMINATOR: u16 = 10_000;

/// Type tag prepended to every encoded allocation leaf.
pub const LEAF_DOMAIN_TAG: [u8; 8] = *b"MVLEAF01";

/// Max entries processed per `activate_entitlements` call.
pub const MAX_BATCH_ENTRIES: usize = 8;

/// Max sibling hashes accepted in a single proof (covers 2^32 leaves).
pub const MAX_PROOF_DEPTH: usize = 32;
