use anchor_lang::prelude::*;
use crate::errors::GridError;
use crate::state::CoinState;

/// Share of the paid price credited to the displaced owner (9000 = 90%)
pub const COMPENSATION_BPS: u64 = 9_000;
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Price after a takeover, in percent of the price paid
pub const ESCALATION_PCT: u64 = 110;

/// Split a paid price into (compensation, protocol_fee).
/// Compensation rounds down, so the truncation remainder always lands in the
/// protocol fee and the two parts sum to `price` exactly.
pub fn split_price(price: u64) -> Result<(u64, u64)> {
    let compensation = (price as u128)
        .checked_mul(COMPENSATION_BPS as u128)
        .ok_or(GridError::Overflow)?
        .checked_div(BPS_DENOMINATOR as u128)
        .ok_or(GridError::Overflow)?;
    let compensation = u64::try_from(compensation).map_err(|_| GridError::Overflow)?;
    let protocol_fee = price.checked_sub(compensation).ok_or(GridError::Overflow)?;
    Ok((compensation, protocol_fee))
}

/// Next takeover price: floor(price * 110 / 100)
pub fn escalate_price(price: u64) -> Result<u64> {
    let next = (price as u128)
        .checked_mul(ESCALATION_PCT as u128)
        .ok_or(GridError::Overflow)?
        .checked_div(100)
        .ok_or(GridError::Overflow)?;
    let next = u64::try_from(next).map_err(|_| GridError::Overflow)?;
    Ok(next)
}

/// Deserialize an account owned by this program, `None` if it was never created.
pub fn load_program_account<T: AccountDeserialize>(info: &AccountInfo) -> Result<Option<T>> {
    if info.data_is_empty() {
        return Ok(None);
    }
    require_keys_eq!(*info.owner, crate::ID, GridError::Unauthorized);

    let data = info.try_borrow_data()?;
    Ok(Some(T::try_deserialize(&mut &data[..])?))
}

/// Write back an account loaded with `load_program_account`.
pub fn store_program_account<T: AccountSerialize>(info: &AccountInfo, value: &T) -> Result<()> {
    require_keys_eq!(*info.owner, crate::ID, GridError::Unauthorized);

    let mut data = info.try_borrow_mut_data()?;
    let mut dst: &mut [u8] = &mut data[..];
    value.try_serialize(&mut dst)?;
    Ok(())
}

/// Coin state of an initialized coin. A missing account and an uninited one
/// are the same to callers: `NotInitialized`.
pub fn load_inited_coin(info: &AccountInfo) -> Result<CoinState> {
    let coin_state: Option<CoinState> = load_program_account(info)?;
    coin_state
        .filter(|state| state.inited)
        .ok_or_else(|| error!(GridError::NotInitialized))
}
