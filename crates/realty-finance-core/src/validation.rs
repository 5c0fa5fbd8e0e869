use rust_decimal::Decimal;

use crate::error::RealtyFinanceError;
use crate::RealtyFinanceResult;

/// Longest term any calculator accepts (100 years).
pub(crate) const MAX_TERM_MONTHS: u32 = 1200;

/// Longest yearly projection any calculator accepts.
pub(crate) const MAX_PROJECTION_YEARS: u32 = 100;

pub(crate) fn positive(field: &str, value: Decimal) -> RealtyFinanceResult<()> {
    if value <= Decimal::ZERO {
        return Err(RealtyFinanceError::InvalidInput {
            field: field.into(),
            reason: format!("{field} must be greater than zero"),
        });
    }
    Ok(())
}

pub(crate) fn non_negative(field: &str, value: Decimal) -> RealtyFinanceResult<()> {
    if value < Decimal::ZERO {
        return Err(RealtyFinanceError::InvalidInput {
            field: field.into(),
            reason: format!("{field} cannot be negative"),
        });
    }
    Ok(())
}

pub(crate) fn months(field: &str, value: u32) -> RealtyFinanceResult<()> {
    if value == 0 || value > MAX_TERM_MONTHS {
        return Err(RealtyFinanceError::InvalidInput {
            field: field.into(),
            reason: format!("{field} must be between 1 and {MAX_TERM_MONTHS} months"),
        });
    }
    Ok(())
}

pub(crate) fn years(field: &str, value: u32) -> RealtyFinanceResult<()> {
    if value == 0 || value > MAX_PROJECTION_YEARS {
        return Err(RealtyFinanceError::InvalidInput {
            field: field.into(),
            reason: format!("{field} must be between 1 and {MAX_PROJECTION_YEARS} years"),
        });
    }
    Ok(())
}
