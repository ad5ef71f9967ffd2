//! Overflow-safe arithmetic helpers.
//!
//! `Decimal` operators panic on overflow. Every metric formula goes through
//! these helpers instead, which saturate at `Decimal::MAX`/`MIN` and log a
//! warning. Callers handle zero denominators before dividing.

use rust_decimal::Decimal;

/// `a + b`, saturating on overflow.
pub(crate) fn saturating_add(a: Decimal, b: Decimal) -> Decimal {
    a.checked_add(b).unwrap_or_else(|| {
        log::warn!("sum {a} + {b} overflows Decimal; saturating");
        bound(a.is_sign_negative())
    })
}

/// `a - b`, saturating on overflow.
pub(crate) fn saturating_sub(a: Decimal, b: Decimal) -> Decimal {
    a.checked_sub(b).unwrap_or_else(|| {
        log::warn!("difference {a} - {b} overflows Decimal; saturating");
        bound(a.is_sign_negative())
    })
}

/// `a * b`, saturating on overflow.
pub(crate) fn saturating_mul(a: Decimal, b: Decimal) -> Decimal {
    a.checked_mul(b).unwrap_or_else(|| {
        log::warn!("product {a} * {b} overflows Decimal; saturating");
        bound(a.is_sign_negative() != b.is_sign_negative())
    })
}

/// Sum of `values`, saturating each partial sum.
pub(crate) fn saturating_sum(values: impl IntoIterator<Item = Decimal>) -> Decimal {
    values.into_iter().fold(Decimal::ZERO, saturating_add)
}

/// `numerator / denominator`, saturating on overflow.
pub(crate) fn saturating_div(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .unwrap_or_else(|| saturate_ratio(numerator, denominator))
}

/// `numerator / denominator * 100`, saturating on overflow.
pub(crate) fn percent(numerator: Decimal, denominator: Decimal) -> Decimal {
    numerator
        .checked_div(denominator)
        .and_then(|q| q.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or_else(|| saturate_ratio(numerator, denominator))
}

fn saturate_ratio(numerator: Decimal, denominator: Decimal) -> Decimal {
    log::warn!("ratio {numerator} / {denominator} overflows Decimal; saturating");
    bound(numerator.is_sign_negative() != denominator.is_sign_negative())
}

fn bound(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}
