#![allow(ambiguous_glob_reexports)]

pub mod adjust_reputation;
pub mod claim_rewards;
pub mod classify_identifier;
pub mod complete_service;
pub mod create_service;
pub mod distribute_rewards;
pub mod initialize;
pub mod pause_network;
pub mod process_reward_batch;
pub mod register_agent;
pub mod send_message;
pub mod set_treasury;
pub mod set_verification_oracle;
pub mod unpause_network;
pub mod unstake_agent;
pub mod update_authority;
pub mod update_network_params;
pub mod verify_agent;
pub mod withdraw_fees;

pub use adjust_reputation::*;
pub use claim_rewards::*;
pub use classify_identifier::*;
pub use complete_service::*;
pub use create_service::*;
pub use distribute_rewards::*;
pub use initialize::*;
pub use pause_network::*;
pub use process_reward_batch::*;
pub use register_agent::*;
pub use send_message::*;
pub use set_treasury::*;
pub use set_verification_oracle::*;
pub use unpause_network::*;
pub use unstake_agent::*;
pub use update_authority::*;
pub use update_network_params::*;
pub use verify_agent::*;
pub use withdraw_fees::*;
