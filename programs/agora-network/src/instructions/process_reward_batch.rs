use anchor_lang::prelude::*;

use crate::errors::AgoraError;
use crate::events::RewardBatchProcessed;
use crate::state::{Agent, AgentDirectory, Network};

/// One bounded step of a reward round. The Agent records for the directory
/// slice under the cursor are supplied as remaining accounts, in directory
/// order; each step credits at most one batch worth of agents.
#[derive(Accounts)]
pub struct ProcessRewardBatch<'info> {
    /// Network authority (must sign)
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"network"],
        bump = network.bump,
        has_one = authority @ AgoraError::InvalidAuthority
    )]
    pub network: Account<'info, Network>,

    #[account(
        seeds = [b"directory"],
        bump = directory.bump
    )]
    pub directory: Account<'info, AgentDirectory>,
}

pub fn handler<'info>(ctx: Context<'_, '_, 'info, 'info, ProcessRewardBatch<'info>>) -> Result<bool> {
    ctx.accounts.network.assert_not_paused()?;

    if ctx.accounts.network.pending_rewards == 0 {
        return Ok(true);
    }

    let directory = &ctx.accounts.directory;
    let range = directory.batch_range(ctx.accounts.network.last_processed_index);
    require!(
        ctx.remaining_accounts.len() == range.len(),
        AgoraError::BatchAccountsMismatch
    );

    let from_index = range.start as u32;
    for (account_info, expected) in ctx
        .remaining_accounts
        .iter()
        .zip(directory.agents[range.clone()].iter())
    {
        let mut agent: Account<Agent> = Account::try_from(account_info)?;
        require_keys_eq!(agent.authority, *expected, AgoraError::BatchAccountsMismatch);

        let share = ctx.accounts.network.pro_rata_share(agent.staked_amount)?;
        agent.credit_reward(share)?;
        ctx.accounts.network.credit_share(share)?;

        // Manually deserialized accounts are not written back by the
        // framework; persist explicitly.
        agent.exit(&crate::ID)?;
    }

    let network = &mut ctx.accounts.network;
    network.last_processed_index = range.end as u32;
    let completed = range.end >= directory.len();
    if completed {
        network.complete_round()?;
    }

    emit!(RewardBatchProcessed {
        from_index,
        processed: range.len() as u32,
        completed,
    });

    Ok(completed)
}
