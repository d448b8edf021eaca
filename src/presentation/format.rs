//! Currency display formatting
//!
//! Amounts are stored and transported as exact decimals; the display string
//! follows the Brazilian Real convention (`R$ 1.234,56`) and exists purely
//! for presentation.

use rust_decimal::Decimal;

/// Format an amount in the pt-BR currency convention
pub fn format_brl(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let mut digits = format!("{:.2}", rounded.abs());

    let frac = digits.split_off(digits.len() - 3);
    let frac = &frac[1..]; // drop the '.'

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    let bytes = digits.as_bytes();
    for (i, byte) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*byte as char);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{}R$ {},{}", sign, grouped, frac)
}
