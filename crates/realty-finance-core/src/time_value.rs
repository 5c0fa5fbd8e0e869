use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::RealtyFinanceError;
use crate::types::{Money, Percent, Rate};
use crate::RealtyFinanceResult;

/// Annual percentage (12 = 12%) to a fractional monthly rate (0.01).
///
/// Every calculator calls this exactly once per computation.
pub fn monthly_rate(annual_percent: Percent) -> Rate {
    annual_percent / dec!(1200)
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
pub fn compound(rate: Rate, n: u32) -> RealtyFinanceResult<Decimal> {
    let factor = Decimal::ONE + rate;
    let mut result = Decimal::ONE;
    for _ in 0..n {
        result = result
            .checked_mul(factor)
            .ok_or_else(|| RealtyFinanceError::Overflow {
                context: format!("compounding {rate} over {n} periods"),
            })?;
    }
    Ok(result)
}

/// Multiply two quantities, reporting overflow instead of panicking.
pub(crate) fn checked_product(a: Decimal, b: Decimal, context: &str) -> RealtyFinanceResult<Decimal> {
    a.checked_mul(b).ok_or_else(|| RealtyFinanceError::Overflow {
        context: context.into(),
    })
}

/// Add two quantities, reporting overflow instead of panicking.
pub(crate) fn checked_sum(a: Decimal, b: Decimal, context: &str) -> RealtyFinanceResult<Decimal> {
    a.checked_add(b).ok_or_else(|| RealtyFinanceError::Overflow {
        context: context.into(),
    })
}

/// Divide `a` by `b`; a zero divisor and an out-of-range quotient are errors.
pub(crate) fn checked_quotient(a: Decimal, b: Decimal, context: &str) -> RealtyFinanceResult<Decimal> {
    if b.is_zero() {
        return Err(RealtyFinanceError::DivisionByZero {
            context: context.into(),
        });
    }
    a.checked_div(b).ok_or_else(|| RealtyFinanceError::Overflow {
        context: context.into(),
    })
}

/// Level payment that retires `principal` over `nper` periods.
///
/// PMT = P * r / (1 - (1 + r)^-n); a zero rate degenerates to P / n.
pub fn level_payment(principal: Money, rate: Rate, nper: u32) -> RealtyFinanceResult<Money> {
    if nper == 0 {
        return Err(RealtyFinanceError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return Ok(principal / Decimal::from(nper));
    }

    let factor = compound(rate, nper)?;
    let denom = Decimal::ONE - Decimal::ONE / factor;
    if denom.is_zero() {
        return Err(RealtyFinanceError::DivisionByZero {
            context: "level payment annuity factor".into(),
        });
    }

    let interest = checked_product(principal, rate, "level payment interest")?;
    checked_quotient(interest, denom, "level payment annuity factor")
}

/// Principal a fixed `payment` can service over `nper` periods.
///
/// The inverse of [`level_payment`]: P = PMT * (1 - (1 + r)^-n) / r.
pub fn principal_from_payment(payment: Money, rate: Rate, nper: u32) -> RealtyFinanceResult<Money> {
    if nper == 0 {
        return Err(RealtyFinanceError::InvalidInput {
            field: "nper".into(),
            reason: "Number of periods must be > 0".into(),
        });
    }

    if rate.is_zero() {
        return checked_product(payment, Decimal::from(nper), "zero-rate borrowing capacity");
    }

    let factor = compound(rate, nper)?;
    let annuity_factor = checked_quotient(Decimal::ONE - Decimal::ONE / factor, rate, "annuity factor")?;
    checked_product(payment, annuity_factor, "borrowing capacity")
}
