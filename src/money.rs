//! Amount and quantity formatting.

/// `"<currency> <amount>"` with exactly two decimals and no grouping.
///
/// Missing or non-finite amounts print as zero, and so does negative zero.
pub fn format_money(amount: Option<f64>, currency: &str) -> String {
    let value = amount.filter(|v| v.is_finite()).unwrap_or(0.0);
    let mut digits = format!("{:.2}", value);
    if digits == "-0.00" {
        digits.remove(0);
    }
    format!("{} {}", currency.trim(), digits)
}

/// Whole quantities print without decimals, fractional ones with two.
pub fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return "0".to_string();
    }
    if quantity.fract() == 0.0 && quantity.abs() < 1e15 {
        format!("{}", quantity as i64)
    } else {
        format!("{:.2}", quantity)
    }
}
