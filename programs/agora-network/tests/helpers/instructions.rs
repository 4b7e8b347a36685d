//! Instruction builders for Mollusk tests
//!
//! NOTE: This is written for mollusk-svm 0.5.1 with solana-sdk 2.2
//! All imports from solana_sdk::*, not modular crates
//!
//! These helpers are shared across multiple test files. Each test binary
//! only uses a subset, so dead_code warnings are expected and suppressed.

#![allow(dead_code)]

use {
    mollusk_svm_programs_token::token,
    solana_sdk::{
        instruction::{AccountMeta, Instruction},
        pubkey::Pubkey,
        system_program,
    },
};

/// Program ID - must match lib.rs
pub const PROGRAM_ID: Pubkey = solana_sdk::pubkey!("AgoraNetVxcwrWVZweDCtZXhgsC7VLA6btymh3fSVipg");

// Anchor discriminators (first 8 bytes of sha256("global:function_name"))
// These must match the IDL/program
pub const DISCRIMINATOR_REGISTER_AGENT: [u8; 8] = [0x87, 0x9d, 0x42, 0xc3, 0x02, 0x71, 0xaf, 0x1e];
pub const DISCRIMINATOR_UNSTAKE_AGENT: [u8; 8] = [0xe9, 0xf6, 0xef, 0x42, 0x5e, 0xb3, 0x41, 0x26];
pub const DISCRIMINATOR_VERIFY_AGENT: [u8; 8] = [0xce, 0xd4, 0x6c, 0x0c, 0x69, 0x3d, 0x64, 0x42];
pub const DISCRIMINATOR_WITHDRAW_FEES: [u8; 8] = [0xc6, 0xd4, 0xab, 0x6d, 0x90, 0xd7, 0xae, 0x59];
pub const DISCRIMINATOR_UPDATE_NETWORK_AUTHORITY: [u8; 8] =
    [0xa0, 0x0c, 0x48, 0x6d, 0x7e, 0x1e, 0xab, 0x6a];
pub const DISCRIMINATOR_PAUSE_NETWORK: [u8; 8] = [0x56, 0xb2, 0x99, 0xff, 0x53, 0x6e, 0x83, 0xfb];
pub const DISCRIMINATOR_UNPAUSE_NETWORK: [u8; 8] = [0x0f, 0xae, 0x8a, 0xa8, 0xb3, 0x2a, 0x8e, 0x34];
pub const DISCRIMINATOR_DISTRIBUTE_REWARDS: [u8; 8] =
    [0x61, 0x06, 0xe3, 0xff, 0x7c, 0xa5, 0x03, 0x94];
pub const DISCRIMINATOR_PROCESS_REWARD_BATCH: [u8; 8] =
    [0x69, 0xe1, 0xc2, 0x9a, 0xa2, 0xb6, 0xf8, 0x0c];

/// Derive the network config PDA
pub fn derive_network() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"network"], &PROGRAM_ID)
}

/// Derive the agent directory PDA
pub fn derive_directory() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"directory"], &PROGRAM_ID)
}

/// Derive the vault token account PDA
pub fn derive_vault() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"vault"], &PROGRAM_ID)
}

/// Derive an agent record PDA for a wallet
pub fn derive_agent(authority: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[b"agent", authority.as_ref()], &PROGRAM_ID)
}

/// Build register_agent instruction
///
/// Accounts:
/// 0. authority (writable, signer) - registering wallet, pays stake + fee
/// 1. network (writable)
/// 2. directory (writable)
/// 3. agent (writable) - PDA to initialize
/// 4. token_mint
/// 5. authority_token_account (writable)
/// 6. vault (writable)
/// 7. token_program
/// 8. system_program
#[allow(clippy::too_many_arguments)]
pub fn build_register_agent(
    authority: Pubkey,
    network: Pubkey,
    directory: Pubkey,
    agent: Pubkey,
    token_mint: Pubkey,
    authority_token_account: Pubkey,
    vault: Pubkey,
    identifier: &str,
    public_key: &str,
    stake_amount: u64,
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_REGISTER_AGENT);

    // identifier: String (4-byte length prefix + bytes)
    data.extend_from_slice(&(identifier.len() as u32).to_le_bytes());
    data.extend_from_slice(identifier.as_bytes());

    // public_key: String
    data.extend_from_slice(&(public_key.len() as u32).to_le_bytes());
    data.extend_from_slice(public_key.as_bytes());

    // stake_amount: u64
    data.extend_from_slice(&stake_amount.to_le_bytes());

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new(network, false),
            AccountMeta::new(directory, false),
            AccountMeta::new(agent, false),
            AccountMeta::new_readonly(token_mint, false),
            AccountMeta::new(authority_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(token::ID, false),
            AccountMeta::new_readonly(system_program::id(), false),
        ],
        data,
    }
}

/// Build unstake_agent instruction
///
/// Accounts:
/// 0. authority (writable, signer) - receives refund and record rent
/// 1. network (writable)
/// 2. directory (writable)
/// 3. agent (writable) - closed on success
/// 4. moved_agent (writable, optional) - record of the directory tail;
///    `None` is encoded as the program id
/// 5. token_mint
/// 6. authority_token_account (writable)
/// 7. vault (writable)
/// 8. token_program
#[allow(clippy::too_many_arguments)]
pub fn build_unstake_agent(
    authority: Pubkey,
    network: Pubkey,
    directory: Pubkey,
    agent: Pubkey,
    moved_agent: Option<Pubkey>,
    token_mint: Pubkey,
    authority_token_account: Pubkey,
    vault: Pubkey,
) -> Instruction {
    let moved_meta = match moved_agent {
        Some(record) => AccountMeta::new(record, false),
        None => AccountMeta::new_readonly(PROGRAM_ID, false),
    };

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(authority, true),
            AccountMeta::new(network, false),
            AccountMeta::new(directory, false),
            AccountMeta::new(agent, false),
            moved_meta,
            AccountMeta::new_readonly(token_mint, false),
            AccountMeta::new(authority_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(token::ID, false),
        ],
        data: DISCRIMINATOR_UNSTAKE_AGENT.to_vec(),
    }
}

/// Build verify_agent instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. verification_oracle (signer)
/// 2. network
/// 3. agent (writable)
pub fn build_verify_agent(
    authority: Pubkey,
    verification_oracle: Pubkey,
    network: Pubkey,
    agent: Pubkey,
    proof: [u8; 8],
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_VERIFY_AGENT);

    // proof: [u8; 8] (fixed array, no length prefix)
    data.extend_from_slice(&proof);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new_readonly(verification_oracle, true),
            AccountMeta::new_readonly(network, false),
            AccountMeta::new(agent, false),
        ],
        data,
    }
}

/// Build withdraw_fees instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. network (writable)
/// 2. token_mint
/// 3. treasury_token_account (writable)
/// 4. vault (writable)
/// 5. token_program
pub fn build_withdraw_fees(
    authority: Pubkey,
    network: Pubkey,
    token_mint: Pubkey,
    treasury_token_account: Pubkey,
    vault: Pubkey,
) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new(network, false),
            AccountMeta::new_readonly(token_mint, false),
            AccountMeta::new(treasury_token_account, false),
            AccountMeta::new(vault, false),
            AccountMeta::new_readonly(token::ID, false),
        ],
        data: DISCRIMINATOR_WITHDRAW_FEES.to_vec(),
    }
}

/// Build update_network_authority instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. network (writable)
pub fn build_update_network_authority(
    authority: Pubkey,
    network: Pubkey,
    new_authority: Option<Pubkey>,
) -> Instruction {
    let mut data = Vec::new();
    data.extend_from_slice(&DISCRIMINATOR_UPDATE_NETWORK_AUTHORITY);

    // new_authority: Option<Pubkey>
    match new_authority {
        None => data.push(0),
        Some(pk) => {
            data.push(1);
            data.extend_from_slice(&pk.to_bytes());
        }
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new(network, false),
        ],
        data,
    }
}

/// Build pause_network instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. network (writable)
pub fn build_pause_network(authority: Pubkey, network: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new(network, false),
        ],
        data: DISCRIMINATOR_PAUSE_NETWORK.to_vec(),
    }
}

/// Build unpause_network instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. network (writable)
pub fn build_unpause_network(authority: Pubkey, network: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new(network, false),
        ],
        data: DISCRIMINATOR_UNPAUSE_NETWORK.to_vec(),
    }
}

/// Build distribute_rewards instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. network (writable)
/// 2. vault
pub fn build_distribute_rewards(authority: Pubkey, network: Pubkey, vault: Pubkey) -> Instruction {
    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(authority, true),
            AccountMeta::new(network, false),
            AccountMeta::new_readonly(vault, false),
        ],
        data: DISCRIMINATOR_DISTRIBUTE_REWARDS.to_vec(),
    }
}

/// Build process_reward_batch instruction
///
/// Accounts:
/// 0. authority (signer)
/// 1. network (writable)
/// 2. directory
/// 3.. agent records for the directory slice under the cursor, in
///     directory order (writable)
pub fn build_process_reward_batch(
    authority: Pubkey,
    network: Pubkey,
    directory: Pubkey,
    agent_records: &[Pubkey],
) -> Instruction {
    let mut accounts = vec![
        AccountMeta::new_readonly(authority, true),
        AccountMeta::new(network, false),
        AccountMeta::new_readonly(directory, false),
    ];
    for record in agent_records {
        accounts.push(AccountMeta::new(*record, false));
    }

    Instruction {
        program_id: PROGRAM_ID,
        accounts,
        data: DISCRIMINATOR_PROCESS_REWARD_BATCH.to_vec(),
    }
}
