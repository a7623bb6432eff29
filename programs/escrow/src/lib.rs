use anchor_lang::prelude::*;

declare_id!("F4AzBSfhz1ASmHzBX6ERbQJCK14GCEBzS6T6mv4CzXS1");

pub mod constants;
pub mod errors;
pub mod state;
pub use state::*;
pub mod contexts;
pub use contexts::*;

#[program]
pub mod escrow {
    use super::*;

    /// Opens an offer: deposits `deposit` of mint A into a vault owned by the
    /// escrow PDA of `(maker, seed)` and asks `receive_amount` of mint B for it
    pub fn make(ctx: Context<Make>, seed: u64, receive_amount: u64, deposit: u64) -> Result<()> {
        ctx.accounts.validate(deposit, receive_amount)?;
        ctx.accounts.deposit(deposit)?;
        ctx.accounts.save_escrow(seed, receive_amount, &ctx.bumps)?;

        msg!(
            "Offer {} opened by {}: {} of {} for {} of {}",
            ctx.accounts.escrow.key(),
            ctx.accounts.maker.key(),
            deposit,
            ctx.accounts.mint_a.key(),
            receive_amount,
            ctx.accounts.mint_b.key()
        );
        Ok(())
    }

    /// Cancels an open offer. Callable by the maker only; the deposit goes back
    /// to them and the escrow and vault are closed
    pub fn refund(ctx: Context<Refund>) -> Result<()> {
        let refunded = ctx.accounts.refund_and_close_vault()?;

        msg!(
            "Offer {} refunded: {} returned to {}",
            ctx.accounts.escrow.key(),
            refunded,
            ctx.accounts.maker.key()
        );
        Ok(())
    }

    /// Settles an open offer: the taker pays the maker in mint B and receives
    /// the vault. All transfers and closures happen in this one transaction
    pub fn take(ctx: Context<Take>) -> Result<()> {
        ctx.accounts.deposit()?;
        let released = ctx.accounts.withdraw_and_close_vault()?;

        msg!(
            "Offer {} taken by {}: {} of {} paid to {}, {} released",
            ctx.accounts.escrow.key(),
            ctx.accounts.taker.key(),
            ctx.accounts.escrow.receive_amount,
            ctx.accounts.mint_b.key(),
            ctx.accounts.maker.key(),
            released
        );
        Ok(())
    }
}
