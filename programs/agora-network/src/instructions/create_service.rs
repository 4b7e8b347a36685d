use anchor_lang::prelude::*;

use crate::constants::MAX_SERVICE_TYPE_LENGTH;
use crate::errors::AgoraError;
use crate::events::ServiceCreated;
use crate::state::{Agent, Network, Service};

#[derive(Accounts)]
pub struct CreateService<'info> {
    /// Providing participant; pays the service record's rent
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [b"network"],
        bump = network.bump
    )]
    pub network: Account<'info, Network>,

    #[account(
        seeds = [b"agent", authority.key().as_ref()],
        bump = provider_agent.bump,
        has_one = authority @ AgoraError::InvalidAuthority
    )]
    pub provider_agent: Account<'info, Agent>,

    #[account(
        seeds = [b"agent", consumer_agent.authority.as_ref()],
        bump = consumer_agent.bump
    )]
    pub consumer_agent: Account<'info, Agent>,

    /// Keyed by the id the network assigns to this creation
    #[account(
        init,
        payer = authority,
        space = Service::SIZE,
        seeds = [b"service", network.total_services.to_le_bytes().as_ref()],
        bump
    )]
    pub service: Account<'info, Service>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateService>, service_type: String, price: u64) -> Result<()> {
    ctx.accounts.network.assert_not_paused()?;

    // === Input Validation ===
    require!(
        ctx.accounts.provider_agent.is_active,
        AgoraError::AgentNotActive
    );
    require!(
        ctx.accounts.provider_agent.is_verified,
        AgoraError::AgentNotVerified
    );
    require!(
        ctx.accounts.consumer_agent.is_active,
        AgoraError::AgentNotActive
    );
    require!(
        ctx.accounts.consumer_agent.is_verified,
        AgoraError::AgentNotVerified
    );
    require_keys_neq!(
        ctx.accounts.provider_agent.authority,
        ctx.accounts.consumer_agent.authority,
        AgoraError::SelfServiceNotAllowed
    );
    require!(
        price > 0 && price <= ctx.accounts.network.max_service_price,
        AgoraError::InvalidServicePrice
    );
    require!(
        !service_type.is_empty() && service_type.len() <= MAX_SERVICE_TYPE_LENGTH,
        AgoraError::InvalidServiceType
    );

    let clock = Clock::get()?;
    let service_id = ctx.accounts.network.next_service_id()?;

    let service = &mut ctx.accounts.service;
    service.service_id = service_id;
    service.provider = ctx.accounts.provider_agent.authority;
    service.consumer = ctx.accounts.consumer_agent.authority;
    service.service_type = service_type.clone();
    service.price = price as u128;
    service.created_at = clock.unix_timestamp;
    service.is_completed = false;
    service.result_id = String::new();
    service.bump = ctx.bumps.service;

    emit!(ServiceCreated {
        service_id,
        provider: service.provider,
        consumer: service.consumer,
        service_type,
        price: price as u128,
    });

    Ok(())
}
