use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token_interface::{transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked},
};

use crate::{constants::ESCROW_SEED, errors::EscrowError, Escrow};

/// Accounts for opening an offer: the maker deposits `mint_a` into a fresh
/// vault and records what they want in `mint_b`.
#[derive(Accounts)]
#[instruction(seed: u64)]
pub struct Make<'info> {
    /// Signs for the deposit and pays rent for the escrow and vault
    #[account(mut)]
    pub maker: Signer<'info>,

    /// Token the maker deposits
    #[account(
        mint::token_program = token_program
    )]
    pub mint_a: InterfaceAccount<'info, Mint>,

    /// Token the maker expects in return
    #[account(
        mint::token_program = token_program
    )]
    pub mint_b: InterfaceAccount<'info, Mint>,

    /// Source of the deposit
    #[account(
        mut,
        associated_token::mint = mint_a,
        associated_token::authority = maker,
        associated_token::token_program = token_program
    )]
    pub maker_ata_a: InterfaceAccount<'info, TokenAccount>,

    /// Offer record. `init` fails if `(maker, seed)` already has an open offer
    #[account(
        init,
        payer = maker,
        space = 8 + Escrow::INIT_SPACE,
        seeds = [ESCROW_SEED, maker.key().as_ref(), seed.to_le_bytes().as_ref()],
        bump
    )]
    pub escrow: Account<'info, Escrow>,

    /// Holds the deposit until the offer resolves; only the escrow PDA can move funds out
    #[account(
        init,
        payer = maker,
        associated_token::mint = mint_a,
        associated_token::authority = escrow,
        associated_token::token_program = token_program
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Creates the vault
    pub associated_token_program: Program<'info, AssociatedToken>,
    /// SPL Token or Token-2022; both mints must belong to it
    pub token_program: Interface<'info, TokenInterface>,
    /// Funds the escrow account
    pub system_program: Program<'info, System>,
}

impl<'info> Make<'info> {
    /// Checks the offer terms and that the maker can cover the deposit
    pub fn validate(&self, deposit: u64, receive_amount: u64) -> Result<()> {
        Escrow::validate_terms(
            deposit,
            receive_amount,
            &self.mint_a.key(),
            &self.mint_b.key(),
        )?;
        require_gte!(
            self.maker_ata_a.amount,
            deposit,
            EscrowError::InsufficientBalance
        );
        Ok(())
    }

    pub fn save_escrow(&mut self, seed: u64, receive_amount: u64, bumps: &MakeBumps) -> Result<()> {
        self.escrow.set_inner(Escrow {
            seed,
            maker: self.maker.key(),
            mint_a: self.mint_a.key(),
            mint_b: self.mint_b.key(),
            receive_amount,
            bump: bumps.escrow,
        });
        Ok(())
    }

    /// Moves `deposit` of `mint_a` from the maker into the vault and checks all of it arrived
    pub fn deposit(&mut self, deposit: u64) -> Result<()> {
        let transfer_accounts = TransferChecked {
            from: self.maker_ata_a.to_account_info(),
            mint: self.mint_a.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.maker.to_account_info(),
        };

        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), transfer_accounts);

        transfer_checked(cpi_ctx, deposit, self.mint_a.decimals)?;

        // Token-2022 transfer fees would leave the vault short of `deposit`
        self.vault.reload()?;
        require_eq!(
            self.vault.amount,
            deposit,
            EscrowError::UnexpectedTransferAmount
        );
        Ok(())
    }
}
