use crate::errors::Error;
use crate::schedule;
use crate::storage::*;
use crate::types::get_ledger_timestamp;
use soroban_sdk::{token, Address, Env};

/// Fractional precision the contribution currency is assumed to carry.
const PAYMENT_DECIMALS: u32 = 18;

/// Convert a contribution into a token allocation at the active tier price
/// and commit every balance update, or fail with no effect at all.
///
/// Every new balance is staged in locals before the first write, so a
/// rejection at any step leaves the ledger exactly as it was.
pub fn process_purchase(env: &Env, buyer: &Address, amount: u128) -> Result<(), Error> {
    let config = get_config(env);
    if *buyer == config.owner {
        return Err(Error::OwnerCannotPurchase);
    }

    let now = get_ledger_timestamp(env);
    if now < config.start_time || now > config.end_time {
        return Err(Error::SaleNotActive);
    }
    if amount == 0 {
        return Err(Error::InvalidAmount);
    }

    let owner_balance = get_owner_balance(env);
    let projected = owner_balance
        .checked_add(amount)
        .ok_or(Error::ArithmeticOverflow)?;
    if projected > config.cap_amount {
        return Err(Error::CapExceeded);
    }

    schedule::maybe_advance_tier(env, now)?;

    let tokens_per_unit = get_tokens_per_unit(env);
    let raw_token_units = amount
        .checked_mul(tokens_per_unit)
        .ok_or(Error::ArithmeticOverflow)?;

    let decimals = get_token_decimals(env);
    let (num_tokens, leftover) = if decimals <= PAYMENT_DECIMALS {
        let scale = 10u128
            .checked_pow(PAYMENT_DECIMALS - decimals)
            .ok_or(Error::ArithmeticOverflow)?;
        (raw_token_units / scale, raw_token_units % scale)
    } else {
        let scale = 10u128
            .checked_pow(decimals - PAYMENT_DECIMALS)
            .ok_or(Error::ArithmeticOverflow)?;
        let tokens = raw_token_units
            .checked_mul(scale)
            .ok_or(Error::ArithmeticOverflow)?;
        (tokens, 0)
    };

    // The leftover slice bought no whole token unit, so it is owed back to
    // the buyer rather than credited to the owner.
    let net = amount
        .checked_sub(leftover)
        .ok_or(Error::ArithmeticUnderflow)?;

    let new_contributed = get_contributed(env, buyer)
        .checked_add(net)
        .ok_or(Error::ArithmeticOverflow)?;
    let new_owner_balance = owner_balance
        .checked_add(net)
        .ok_or(Error::ArithmeticOverflow)?;
    let new_buyer_tokens = get_withdrawable_tokens(env, buyer)
        .checked_add(num_tokens)
        .ok_or(Error::ArithmeticOverflow)?;
    // The owner's entry is the reserved inventory; this subtraction is the
    // inventory check.
    let new_reserve = get_withdrawable_tokens(env, &config.owner)
        .checked_sub(num_tokens)
        .ok_or(Error::InsufficientTokenInventory)?;
    let new_leftover = get_leftover(env, buyer)
        .checked_add(leftover)
        .ok_or(Error::ArithmeticOverflow)?;

    let payment = i128::try_from(amount).map_err(|_| Error::ArithmeticOverflow)?;
    token::Client::new(env, &config.payment_token).transfer(
        buyer,
        &env.current_contract_address(),
        &payment,
    );

    set_contributed(env, buyer, new_contributed);
    set_owner_balance(env, new_owner_balance);
    set_withdrawable_tokens(env, buyer, new_buyer_tokens);
    set_withdrawable_tokens(env, &config.owner, new_reserve);
    set_leftover(env, buyer, new_leftover);

    env.events()
        .publish(("purchase",), (buyer.clone(), num_tokens));
    Ok(())
}
