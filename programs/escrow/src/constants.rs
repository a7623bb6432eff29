use anchor_lang::prelude::*;

/// Namespace tag for escrow PDAs: `[ESCROW_SEED, maker, seed.to_le_bytes()]`
#[constant]
pub const ESCROW_SEED: &[u8] = b"escrow";
