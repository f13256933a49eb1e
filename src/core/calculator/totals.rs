use crate::errors::{AppError, AppResult};
use rust_decimal::Decimal;

/// Exact sum of monetary amounts (zero for an empty list).
///
/// Fails instead of panicking when the sum leaves the `Decimal` range.
pub fn sum_amounts(amounts: &[Decimal]) -> AppResult<Decimal> {
    amounts.iter().try_fold(Decimal::ZERO, |acc, a| {
        acc.checked_add(*a)
            .ok_or_else(|| AppError::InvalidAmount("total overflows".into()))
    })
}
