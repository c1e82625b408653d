use crate::errors::Error;
use crate::purchase;
use crate::schedule;
use crate::storage::*;
use crate::types::*;
use soroban_sdk::{contract, contractimpl, contractmeta, token, Address, Env, Vec};

// Metadata that is added on to every WASM custom section
contractmeta!(
    key = "Description",
    val = "Capped Token Sale with Timed Price Tiers"
);

#[contract]
pub struct TieredSaleContract;

#[contractimpl]
impl TieredSaleContract {
    /// Initialize the sale. One-shot; a failed init leaves the contract
    /// uninitialized and unusable.
    #[allow(clippy::too_many_arguments)]
    pub fn init(
        env: Env,
        owner: Address,
        cap_amount: u128,
        start_time: u64,
        end_time: u64,
        tier_prices: Vec<u128>,
        fallback_rate: u128,
        change_interval: u64,
        percent_burn: u32,
        token: Address,
        payment_token: Address,
    ) -> Result<(), Error> {
        if is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }
        owner.require_auth();

        if tier_prices.is_empty() {
            return Err(Error::EmptyTierSchedule);
        }
        // A single-tier sale has no schedule to run.
        if tier_prices.len() == 1 && change_interval != 0 {
            return Err(Error::InvalidChangeInterval);
        }
        for price in tier_prices.iter() {
            if price == 0 {
                return Err(Error::InvalidTierPrice);
            }
        }
        if start_time >= end_time {
            return Err(Error::InvalidTimeRange);
        }
        if percent_burn > 100 {
            return Err(Error::InvalidBurnPercent);
        }
        if fallback_rate == 0 {
            return Err(Error::InvalidExchangeRate);
        }

        let initial_price = tier_prices.get(0).ok_or(Error::EmptyTierSchedule)?;
        let decimals = token::Client::new(&env, &token).decimals();

        set_config(
            &env,
            &SaleConfig {
                owner: owner.clone(),
                token: token.clone(),
                payment_token,
                cap_amount,
                start_time,
                end_time,
                percent_burn,
                exchange_rate: fallback_rate,
            },
        );
        set_schedule(
            &env,
            &TierSchedule {
                prices: tier_prices,
                change_interval,
                last_change_time: start_time,
            },
        );
        set_tokens_per_unit(&env, initial_price);
        set_token_decimals(&env, decimals);
        set_owner_balance(&env, 0);

        env.events().publish(
            ("sale_initialized",),
            (owner, token, cap_amount, start_time, end_time),
        );
        Ok(())
    }

    /// Process a contribution from `buyer` at the active tier price.
    pub fn receive_purchase(env: Env, buyer: Address, amount: u128) -> Result<bool, Error> {
        buyer.require_auth();
        Self::require_initialized(&env)?;
        purchase::process_purchase(&env, &buyer, amount)?;
        Ok(true)
    }

    /// Update the informational exchange rate. Only before the sale starts.
    pub fn set_token_exchange_rate(env: Env, new_rate: u128) -> Result<(), Error> {
        Self::require_initialized(&env)?;
        let mut config = get_config(&env);
        config.owner.require_auth();

        if new_rate == 0 {
            return Err(Error::InvalidExchangeRate);
        }
        if get_ledger_timestamp(&env) >= config.start_time {
            return Err(Error::SaleAlreadyStarted);
        }

        config.exchange_rate = new_rate;
        set_config(&env, &config);

        env.events().publish(("rate_changed",), new_rate);
        Ok(())
    }

    /// Record the sale token balance currently held by the contract as the
    /// owner's reserved inventory. One-shot: a later snapshot would count
    /// tokens already allocated to buyers as reserve again and oversell the
    /// inventory.
    pub fn set_tokens(env: Env) -> Result<u128, Error> {
        Self::require_initialized(&env)?;
        let config = get_config(&env);
        config.owner.require_auth();

        if tokens_set(&env) {
            return Err(Error::TokensAlreadySet);
        }
        set_tokens_set(&env);

        let balance =
            token::Client::new(&env, &config.token).balance(&env.current_contract_address());
        let inventory = u128::try_from(balance).map_err(|_| Error::ArithmeticUnderflow)?;
        set_withdrawable_tokens(&env, &config.owner, inventory);

        env.events().publish(("tokens_set",), inventory);
        Ok(inventory)
    }

    /// Withdraw the caller's allocated tokens. The owner may only withdraw
    /// unsold inventory after the sale ends, minus the configured burn.
    pub fn withdraw_tokens(env: Env, caller: Address) -> Result<u128, Error> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        let config = get_config(&env);

        let balance = get_withdrawable_tokens(&env, &caller);
        if balance == 0 {
            return Err(Error::NothingToWithdraw);
        }

        let token_client = token::Client::new(&env, &config.token);
        let mut payout = balance;
        if caller == config.owner {
            if !Self::crowdsale_ended(env.clone()) {
                return Err(Error::SaleNotEnded);
            }
            let burn = balance
                .checked_mul(config.percent_burn as u128)
                .ok_or(Error::ArithmeticOverflow)?
                / 100;
            payout = balance
                .checked_sub(burn)
                .ok_or(Error::ArithmeticUnderflow)?;
            if burn > 0 {
                let burn_amount = i128::try_from(burn).map_err(|_| Error::ArithmeticOverflow)?;
                token_client.burn(&env.current_contract_address(), &burn_amount);
            }
        }

        set_withdrawable_tokens(&env, &caller, 0);
        let transfer_amount = i128::try_from(payout).map_err(|_| Error::ArithmeticOverflow)?;
        token_client.transfer(&env.current_contract_address(), &caller, &transfer_amount);

        env.events()
            .publish(("tokens_withdrawn",), (caller, payout));
        Ok(payout)
    }

    /// Pay back the caller's accumulated leftover contribution remainder.
    pub fn withdraw_leftover(env: Env, caller: Address) -> Result<u128, Error> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        let config = get_config(&env);

        let amount = get_leftover(&env, &caller);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        set_leftover(&env, &caller, 0);
        let transfer_amount = i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)?;
        token::Client::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &caller,
            &transfer_amount,
        );

        env.events()
            .publish(("leftover_withdrawn",), (caller, amount));
        Ok(amount)
    }

    /// Pay out the accumulated sale proceeds to the owner after the sale ends.
    pub fn withdraw_owner_funds(env: Env) -> Result<u128, Error> {
        Self::require_initialized(&env)?;
        let config = get_config(&env);
        config.owner.require_auth();

        if !Self::crowdsale_ended(env.clone()) {
            return Err(Error::SaleNotEnded);
        }
        let amount = get_owner_balance(&env);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        set_owner_balance(&env, 0);
        let transfer_amount = i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)?;
        token::Client::new(&env, &config.payment_token).transfer(
            &env.current_contract_address(),
            &config.owner,
            &transfer_amount,
        );

        env.events().publish(("funds_withdrawn",), amount);
        Ok(amount)
    }

    pub fn crowdsale_active(env: Env) -> bool {
        let config = get_config(&env);
        let now = get_ledger_timestamp(&env);
        now >= config.start_time && now <= config.end_time
    }

    pub fn crowdsale_ended(env: Env) -> bool {
        get_ledger_timestamp(&env) > get_config(&env).end_time
    }

    // View functions
    pub fn get_config(env: Env) -> SaleConfig {
        get_config(&env)
    }

    pub fn get_schedule(env: Env) -> TierSchedule {
        get_schedule(&env)
    }

    pub fn get_tokens_per_unit(env: Env) -> u128 {
        get_tokens_per_unit(&env)
    }

    pub fn get_owner_balance(env: Env) -> u128 {
        get_owner_balance(&env)
    }

    pub fn get_contribution(env: Env, addr: Address) -> u128 {
        get_contributed(&env, &addr)
    }

    pub fn get_withdrawable_tokens(env: Env, addr: Address) -> u128 {
        get_withdrawable_tokens(&env, &addr)
    }

    pub fn get_leftover(env: Env, addr: Address) -> u128 {
        get_leftover(&env, &addr)
    }

    /// Tier the schedule would select right now, without mutating anything.
    pub fn get_current_tier(env: Env) -> u32 {
        let schedule = get_schedule(&env);
        let config = get_config(&env);
        schedule::tier_index_at(&schedule, config.start_time, get_ledger_timestamp(&env))
    }

    fn require_initialized(env: &Env) -> Result<(), Error> {
        if !is_initialized(env) {
            return Err(Error::NotInitialized);
        }
        Ok(())
    }
}
