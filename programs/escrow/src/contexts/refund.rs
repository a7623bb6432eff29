use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::{constants::ESCROW_SEED, errors::EscrowError, Escrow};

/// Accounts for cancelling an open offer and returning the deposit to its maker.
#[derive(Accounts)]
pub struct Refund<'info> {
    /// Only the maker can cancel: the escrow seeds are re-derived from this signer
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Token held in the vault, must match the offer
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// Receives the refunded deposit, recreated if the maker closed it in the meantime
    #[account(
        init_if_needed,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program
    )]
    pub maker_ata_a: InterfaceAccount<'info, TokenAccount>,

    /// Offer being cancelled, closed to the maker
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::InvalidMaker,
        has_one = mint_a @ EscrowError::InvalidMintA,
        seeds = [ESCROW_SEED, maker.key().as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Account<'info, Escrow>,

    /// Deposit of the offer, emptied back into `maker_ata_a` and closed
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    pub associated_token_program: Program<'info, AssociatedToken>,
    /// Program owning `mint_a`, the vault and the maker's token account
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Refund<'info> {
    /// Returns the whole vault to the maker and closes it. Returns the amount refunded.
    pub fn refund_and_close_vault(&mut self) -> Result<u64> {
        let seed_bytes = self.escrow.seed.to_le_bytes();
        let signer_seeds: [&[&[u8]]; 1] = [&[
            ESCROW_SEED,
            self.maker.to_account_info().key.as_ref(),
            &seed_bytes[..],
            &[self.escrow.bump],
        ]];

        let refunded = self.vault.amount;

        let xfer_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.maker_ata_a.to_account_info(),
            authority: self.escrow.to_account_info(),
        };

        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            xfer_accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, refunded, self.mint_a.decimals)?;

        let close_accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };

        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            close_accounts,
            &signer_seeds,
        );
        close_account(ctx)?;

        Ok(refunded)
    }
}
