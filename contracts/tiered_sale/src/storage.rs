use crate::types::*;
use soroban_sdk::{Address, Env};

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> SaleConfig {
    env.storage().instance().get(&DataKey::Config).unwrap()
}

pub fn set_config(env: &Env, config: &SaleConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn get_schedule(env: &Env) -> TierSchedule {
    env.storage().instance().get(&DataKey::Schedule).unwrap()
}

pub fn set_schedule(env: &Env, schedule: &TierSchedule) {
    env.storage().instance().set(&DataKey::Schedule, schedule);
}

pub fn get_tokens_per_unit(env: &Env) -> u128 {
    env.storage().instance().get(&DataKey::TokensPerUnit).unwrap()
}

pub fn set_tokens_per_unit(env: &Env, price: u128) {
    env.storage().instance().set(&DataKey::TokensPerUnit, &price);
}

pub fn get_token_decimals(env: &Env) -> u32 {
    env.storage().instance().get(&DataKey::TokenDecimals).unwrap()
}

pub fn set_token_decimals(env: &Env, decimals: u32) {
    env.storage()
        .instance()
        .set(&DataKey::TokenDecimals, &decimals);
}

pub fn tokens_set(env: &Env) -> bool {
    env.storage()
        .instance()
        .get(&DataKey::TokensSet)
        .unwrap_or(false)
}

pub fn set_tokens_set(env: &Env) {
    env.storage().instance().set(&DataKey::TokensSet, &true);
}

pub fn get_owner_balance(env: &Env) -> u128 {
    env.storage()
        .instance()
        .get(&DataKey::OwnerBalance)
        .unwrap_or(0)
}

pub fn set_owner_balance(env: &Env, amount: u128) {
    env.storage().instance().set(&DataKey::OwnerBalance, &amount);
}

pub fn get_contributed(env: &Env, addr: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Contributed(addr.clone()))
        .unwrap_or(0)
}

pub fn set_contributed(env: &Env, addr: &Address, amount: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::Contributed(addr.clone()), &amount);
}

pub fn get_withdrawable_tokens(env: &Env, addr: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::WithdrawableTokens(addr.clone()))
        .unwrap_or(0)
}

pub fn set_withdrawable_tokens(env: &Env, addr: &Address, amount: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::WithdrawableTokens(addr.clone()), &amount);
}

pub fn get_leftover(env: &Env, addr: &Address) -> u128 {
    env.storage()
        .persistent()
        .get(&DataKey::Leftover(addr.clone()))
        .unwrap_or(0)
}

pub fn set_leftover(env: &Env, addr: &Address, amount: u128) {
    env.storage()
        .persistent()
        .set(&DataKey::Leftover(addr.clone()), &amount);
}
