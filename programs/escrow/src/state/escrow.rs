use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address_with_program_id;

use crate::{constants::ESCROW_SEED, errors::EscrowError};

/// An open offer. Lives at the PDA derived from `ESCROW_SEED`, the maker's key
/// and `seed`, so any party can find it from those two values alone.
///
/// The account and its vault exist only while the offer is open; `take` and
/// `refund` close both.
#[account]
#[derive(InitSpace)]
pub struct Escrow {
    pub seed: u64,           // nonce separating concurrent offers of one maker
    pub maker: Pubkey,       // creator of the offer, receives mint_b and all rent
    pub mint_a: Pubkey,      // token deposited in the vault
    pub mint_b: Pubkey,      // token the maker wants in return
    pub receive_amount: u64, // amount of mint_b required to settle
    pub bump: u8,            // canonical bump of the escrow PDA
}

impl Escrow {
    /// Escrow PDA and bump for `(maker, seed)`.
    pub fn find_address(maker: &Pubkey, seed: u64) -> (Pubkey, u8) {
        Pubkey::find_program_address(
            &[ESCROW_SEED, maker.as_ref(), seed.to_le_bytes().as_ref()],
            &crate::ID,
        )
    }

    /// Vault holding the deposit: the escrow's associated token account for `mint_a`.
    pub fn vault_address(escrow: &Pubkey, mint_a: &Pubkey, token_program: &Pubkey) -> Pubkey {
        get_associated_token_address_with_program_id(escrow, mint_a, token_program)
    }

    /// Rejects degenerate offers before anything is created or moved.
    pub fn validate_terms(
        deposit: u64,
        receive_amount: u64,
        mint_a: &Pubkey,
        mint_b: &Pubkey,
    ) -> Result<()> {
        require_gt!(deposit, 0, EscrowError::InvalidAmount);
        require_gt!(receive_amount, 0, EscrowError::InvalidAmount);
        require_keys_neq!(*mint_a, *mint_b, EscrowError::IdenticalMints);
        Ok(())
    }
}
