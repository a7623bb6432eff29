use anchor_lang::prelude::*;

use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{
        close_account, transfer_checked, CloseAccount, Mint, TokenAccount, TokenInterface,
        TransferChecked,
    },
};

use crate::{constants::ESCROW_SEED, errors::EscrowError, Escrow};

/// Accounts for settling an offer: the taker pays `receive_amount` of
/// `mint_b` to the maker and receives the whole vault.
#[derive(Accounts)]
pub struct Take<'info> {
    /// Accepts the offer, signs for the payment and funds any missing token accounts
    #[account(mut)]
    pub taker: Signer<'info>,

    /// Creator of the offer; receives mint_b and the rent of both closed accounts
    #[account(mut)]
    pub maker: SystemAccount<'info>,

    /// Token held in the vault, must match the offer
    pub mint_a: InterfaceAccount<'info, Mint>,
    /// Token the maker asked for, must match the offer
    pub mint_b: InterfaceAccount<'info, Mint>,

    /// Receives the vault contents
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_a,
        associated_token::authority = taker,
        associated_token::token_program = token_program
    )]
    pub taker_ata_a: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Pays the maker
    #[account(
        mut,
        associated_token::mint = mint_b,
        associated_token::authority = taker,
        associated_token::token_program = token_program
    )]
    pub taker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Receives the payment
    #[account(
        init_if_needed,
        payer = taker,
        associated_token::mint = mint_b,
        associated_token::authority = maker,
        associated_token::token_program = token_program
    )]
    pub maker_ata_b: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Offer being settled, closed to the maker on success
    #[account(
        mut,
        close = maker,
        has_one = maker @ EscrowError::InvalidMaker,
        has_one = mint_a @ EscrowError::InvalidMintA,
        has_one = mint_b @ EscrowError::InvalidMintB,
        seeds = [ESCROW_SEED, maker.key().as_ref(), escrow.seed.to_le_bytes().as_ref()],
        bump = escrow.bump
    )]
    pub escrow: Box<Account<'info, Escrow>>,

    /// Deposit of the offer, emptied into `taker_ata_a` and closed
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Creates the taker's and maker's token accounts when missing
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// Program owning both mints and every token account above
    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> Take<'info> {
    /// Pays `receive_amount` of `mint_b` from the taker to the maker
    pub fn deposit(&mut self) -> Result<()> {
        require_gte!(
            self.taker_ata_b.amount,
            self.escrow.receive_amount,
            EscrowError::InsufficientBalance
        );

        let transfer_accounts = TransferChecked {
            from: self.taker_ata_b.to_account_info(),
            mint: self.mint_b.to_account_info(),
            to: self.maker_ata_b.to_account_info(),
            authority: self.taker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        let before = self.maker_ata_b.amount;
        transfer_checked(cpi_ctx, self.escrow.receive_amount, self.mint_b.decimals)?;

        self.maker_ata_b.reload()?;
        require_eq!(
            self.maker_ata_b.amount.saturating_sub(before),
            self.escrow.receive_amount,
            EscrowError::UnexpectedTransferAmount
        );
        Ok(())
    }

    /// Releases the vault to the taker and closes it, rent going back to the maker.
    /// Returns the amount released.
    pub fn withdraw_and_close_vault(&mut self) -> Result<u64> {
        let seed_bytes = self.escrow.seed.to_le_bytes();
        let signer_seeds: [&[&[u8]]; 1] = [&[
            ESCROW_SEED,
            self.maker.key.as_ref(),
            &seed_bytes[..],
            &[self.escrow.bump],
        ]];

        let released = self.vault.amount;
        let before = self.taker_ata_a.amount;

        let accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.taker_ata_a.to_account_info(),
            authority: self.escrow.to_account_info(),
        };

        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        transfer_checked(ctx, released, self.mint_a.decimals)?;

        self.taker_ata_a.reload()?;
        require_eq!(
            self.taker_ata_a.amount.saturating_sub(before),
            released,
            EscrowError::UnexpectedTransferAmount
        );

        let accounts = CloseAccount {
            account: self.vault.to_account_info(),
            destination: self.maker.to_account_info(),
            authority: self.escrow.to_account_info(),
        };

        let ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            accounts,
            &signer_seeds,
        );
        close_account(ctx)?;

        Ok(released)
    }
}
