//! Field checks shared by the record drafts.

use rust_decimal::Decimal;

use crate::domain::foundation::ValidationError;

pub(crate) const MAX_AGE: u32 = 150;

/// Largest scholarship amount accepted, in rupees.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

pub(crate) fn required(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}

pub(crate) fn age_in_range(field: &str, age: u32, min: u32) -> Result<(), ValidationError> {
    if age < min || age > MAX_AGE {
        return Err(ValidationError::out_of_range(
            field,
            min as i64,
            MAX_AGE as i64,
            age as i64,
        ));
    }
    Ok(())
}

pub(crate) fn non_negative(field: &str, amount: Decimal) -> Result<(), ValidationError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::invalid_format(field, "must not be negative"));
    }
    Ok(())
}

pub(crate) fn amount_in_range(field: &str, amount: Decimal) -> Result<(), ValidationError> {
    if amount > MAX_AMOUNT {
        return Err(ValidationError::invalid_format(
            field,
            format!("must not exceed {}", MAX_AMOUNT),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_whitespace() {
        assert!(required("name", "  ").is_err());
        assert!(required("name", "A").is_ok());
    }

    #[test]
    fn age_bounds_are_inclusive() {
        assert!(age_in_range("age", 1, 1).is_ok());
        assert!(age_in_range("age", 150, 1).is_ok());
        assert!(age_in_range("age", 0, 1).is_err());
        assert!(age_in_range("age", 151, 0).is_err());
    }

    #[test]
    fn negative_amounts_are_rejected() {
        assert!(non_negative("amount", Decimal::new(-1, 0)).is_err());
        assert!(non_negative("amount", Decimal::ZERO).is_ok());
    }

    #[test]
    fn amount_cap_is_inclusive() {
        assert!(amount_in_range("amount", MAX_AMOUNT).is_ok());
        assert!(amount_in_range("amount", MAX_AMOUNT + Decimal::new(1, 2)).is_err());
        assert_eq!(MAX_AMOUNT, Decimal::new(1_000_000_000, 0));
    }
}
