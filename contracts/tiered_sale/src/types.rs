use soroban_sdk::{contracttype, Address, Env, Vec};

#[derive(Clone)]
#[contracttype]
pub struct SaleConfig {
    pub owner: Address,
    pub token: Address,         // token being sold
    pub payment_token: Address, // token contributions are paid in
    pub cap_amount: u128,       // funding cap in cents
    pub start_time: u64,
    pub end_time: u64,
    pub percent_burn: u32, // % of unsold tokens burned on owner withdrawal
    pub exchange_rate: u128,
}

/// Price schedule for the sale. Only `last_change_time` mutates after init,
/// and only by exactly one `change_interval` per firing.
#[derive(Clone)]
#[contracttype]
pub struct TierSchedule {
    pub prices: Vec<u128>,    // unit price per tier, cents per token
    pub change_interval: u64, // seconds between tier advances, 0 = no schedule
    pub last_change_time: u64,
}

#[contracttype]
pub enum DataKey {
    Config,
    Schedule,
    TokensPerUnit,
    TokenDecimals,
    TokensSet,
    OwnerBalance,
    Contributed(Address),
    WithdrawableTokens(Address),
    Leftover(Address),
}

pub fn get_ledger_timestamp(env: &Env) -> u64 {
    env.ledger().timestamp()
}
