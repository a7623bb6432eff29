use anchor_lang::prelude::*;

#[error_code]
pub enum EscrowError {
    #[msg("Invalid amount: deposit and receive amounts must be greater than zero")]
    InvalidAmount,
    #[msg("Identical mints: mint_a and mint_b must be different tokens")]
    IdenticalMints,
    #[msg("Insufficient balance: source token account cannot cover the transfer")]
    InsufficientBalance,
    #[msg("Invalid maker: maker does not match escrow maker")]
    InvalidMaker,
    #[msg("Invalid mint A: mint_a does not match escrow mint_a")]
    InvalidMintA,
    #[msg("Invalid mint B: mint_b does not match escrow mint_b")]
    InvalidMintB,
    #[msg("Unexpected transfer amount: destination did not receive the full amount, transfer fees are not supported")]
    UnexpectedTransferAmount,
}
