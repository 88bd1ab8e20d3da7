//! Money calculation utilities using rust_decimal for precision.
//!
//! Prices and payment amounts are stored as `f64`, but every calculation
//! runs on `Decimal` and is converted back with [`to_f64`] at the storage
//! boundary.

use rust_decimal::prelude::*;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::OrderItem;

/// Rounding strategy for monetary values (2 decimal places, half-up)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Maximum allowed price per menu item ($1,000,000)
pub const MAX_PRICE: f64 = 1_000_000.0;
/// Maximum allowed quantity per order line
pub const MAX_QUANTITY: i32 = 9999;
/// Maximum allowed payment amount ($1,000,000)
pub const MAX_PAYMENT_AMOUNT: f64 = 1_000_000.0;

/// Validate that a f64 value is finite (not NaN, not Infinity)
#[inline]
fn require_finite(value: f64, field_name: &str) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field_name} must be a finite number, got {value}"),
        ));
    }
    Ok(())
}

/// Validate a menu price before storing it
pub fn validate_price(price: f64) -> AppResult<()> {
    require_finite(price, "price")?;
    if price <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::MenuItemInvalidPrice,
            format!("price must be positive, got {price}"),
        ));
    }
    if price > MAX_PRICE {
        return Err(AppError::with_message(
            ErrorCode::MenuItemInvalidPrice,
            format!("price exceeds maximum allowed ({MAX_PRICE}), got {price}"),
        ));
    }
    Ok(())
}

/// Validate an order line quantity
pub fn validate_quantity(quantity: i32) -> AppResult<()> {
    if quantity <= 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("quantity must be positive, got {quantity}"),
        ));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("quantity exceeds maximum allowed ({MAX_QUANTITY}), got {quantity}"),
        ));
    }
    Ok(())
}

/// Validate a tendered payment amount before processing
pub fn validate_payment_amount(amount: f64) -> AppResult<()> {
    require_finite(amount, "payment amount")?;
    if amount <= 0.0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("payment amount must be positive, got {amount}"),
        ));
    }
    if amount > MAX_PAYMENT_AMOUNT {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("payment amount exceeds maximum allowed ({MAX_PAYMENT_AMOUNT}), got {amount}"),
        ));
    }
    Ok(())
}

/// Convert f64 to Decimal for calculation
///
/// Input values should be pre-validated via `require_finite()` at the boundary.
/// If NaN/Infinity somehow reaches here, logs an error and returns ZERO
/// to avoid silent data corruption in financial calculations.
#[inline]
pub fn to_decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or_else(|| {
        tracing::error!(value = ?value, "Non-finite f64 in monetary calculation, defaulting to zero");
        Decimal::ZERO
    })
}

/// Convert Decimal back to f64 for storage, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    let rounded = value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.to_f64().unwrap_or_else(|| {
        tracing::error!(value = %rounded, "Decimal not representable as f64, defaulting to zero");
        0.0
    })
}

/// Calculate a line total (captured price × quantity) with precise arithmetic
pub fn line_total(price: f64, quantity: i32) -> Decimal {
    (to_decimal(price) * Decimal::from(quantity))
        .round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sum the line totals of an order
pub fn order_total(items: &[OrderItem]) -> Decimal {
    items
        .iter()
        .map(|item| line_total(item.price, item.quantity))
        .sum()
}

/// Check if a tendered amount covers the required total (within 0.01 tolerance)
pub fn is_payment_sufficient(paid: f64, required: Decimal) -> bool {
    to_decimal(paid) >= required - MONEY_TOLERANCE
}

/// Format a monetary value for display, always with two decimals
pub fn format_money(value: f64) -> String {
    format!("${value:.2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_price_bounds() {
        assert!(validate_price(0.01).is_ok());
        assert!(validate_price(12.5).is_ok());
        assert!(validate_price(MAX_PRICE).is_ok());
        assert!(validate_price(0.0).is_err());
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(MAX_PRICE + 1.0).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity_bounds() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(MAX_QUANTITY).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
        assert!(validate_quantity(MAX_QUANTITY + 1).is_err());
    }

    #[test]
    fn test_validate_payment_amount_bounds() {
        assert!(validate_payment_amount(0.01).is_ok());
        assert!(validate_payment_amount(MAX_PAYMENT_AMOUNT).is_ok());
        assert!(validate_payment_amount(0.0).is_err());
        assert!(validate_payment_amount(-5.0).is_err());
        assert!(validate_payment_amount(f64::NAN).is_err());
        assert!(validate_payment_amount(MAX_PAYMENT_AMOUNT * 2.0).is_err());
    }

    #[test]
    fn test_line_total_avoids_float_drift() {
        // 0.1 * 3 in f64 is 0.30000000000000004
        let total = line_total(0.1, 3);
        assert_eq!(total, Decimal::new(30, 2));
        assert_eq!(to_f64(total), 0.30);
    }

    #[test]
    fn test_order_total_sums_lines() {
        let items = vec![
            OrderItem {
                id: 1,
                order_id: 1,
                menu_item_id: 1,
                quantity: 3,
                price: 19.99,
            },
            OrderItem {
                id: 2,
                order_id: 1,
                menu_item_id: 2,
                quantity: 1,
                price: 4.50,
            },
        ];
        assert_eq!(order_total(&items), Decimal::new(6447, 2));
    }

    #[test]
    fn test_order_total_empty_is_zero() {
        assert_eq!(order_total(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_to_f64_rounds_midpoint_away_from_zero() {
        assert_eq!(to_f64(Decimal::new(2345, 3)), 2.35);
        assert_eq!(to_f64(Decimal::new(-2345, 3)), -2.35);
    }

    #[test]
    fn test_payment_sufficiency_tolerance() {
        let total = Decimal::new(5000, 2);
        assert!(is_payment_sufficient(50.00, total));
        assert!(is_payment_sufficient(60.00, total));
        // Within the 0.01 tolerance
        assert!(is_payment_sufficient(49.995, total));
        assert!(!is_payment_sufficient(49.90, total));
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(5.0), "$5.00");
        assert_eq!(format_money(12.349), "$12.35");
        assert_eq!(format_money(0.3), "$0.30");
    }
}
