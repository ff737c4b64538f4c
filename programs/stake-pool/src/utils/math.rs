//! Checked Arithmetic
//!
//! Every balance change goes through these helpers. They never wrap or
//! saturate; the caller picks the error so an underflow can surface as
//! `InsufficientStake` in one place and `VaultUnderfunded` in another.

use num_traits::{CheckedAdd, CheckedSub};

/// `a + b`, or `err` on overflow.
///
/// # Example
///
/// ```ignore
/// mint.supply = checked_add(mint.supply, amount, StakePoolError::SupplyOverflow)?;
/// ```
pub fn checked_add<T: CheckedAdd, E>(a: T, b: T, err: E) -> Result<T, E> {
    a.checked_add(&b).ok_or(err)
}

/// `a - b`, or `err` on underflow.
///
/// # Example
///
/// ```ignore
/// stake.staked_amount = checked_sub(stake.staked_amount, amount, StakePoolError::InsufficientStake)?;
/// ```
pub fn checked_sub<T: CheckedSub, E>(a: T, b: T, err: E) -> Result<T, E> {
    a.checked_sub(&b).ok_or(err)
}
