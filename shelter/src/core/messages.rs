//! User-visible text for the interactive protocol.

use crate::core::error::ShelterError;

pub const BANNER: &str = "Welcome to the Pet Shelter System";
pub const FAREWELL: &str = "Goodbye!";
pub const INVALID_ACTION: &str = "Invalid action. Please choose 'add', 'fee', or 'exit'.";

pub const ACTION_PROMPT: &str = "Choose an action: 'add', 'fee', or 'exit': ";
pub const NAME_PROMPT: &str = "Enter the animal's name: ";
pub const FEE_PROMPT: &str = "Enter the adoption fee: ";
pub const LOOKUP_PROMPT: &str = "Enter the animal's name to find its adoption fee: ";

/// Render a fee with the currency symbol and exactly two decimals.
pub fn format_fee(currency_symbol: &str, fee: f64) -> String {
    format!("{currency_symbol}{}", two_decimals(fee))
}

/// Fixed two-decimal text where exact halves round away from zero.
///
/// `{:.2}` rounds exact binary ties (odd multiples of 1/8, e.g. `0.125`) to
/// even; those are re-rounded from whole cents instead. Non-finite values
/// print as `Infinity`/`-Infinity`/`NaN`, magnitudes from `1e21` up use
/// exponent form, and negative zero prints as `0.00`.
fn two_decimals(fee: f64) -> String {
    if fee.is_nan() {
        return "NaN".to_string();
    }
    if fee.is_infinite() {
        return if fee > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if fee.abs() >= 1e21 {
        return exponent_form(fee);
    }
    let fee = if fee == 0.0 { 0.0 } else { fee };
    let eighths = fee * 8.0;
    let is_tie = eighths.fract() == 0.0 && eighths % 2.0 != 0.0;
    if !is_tie {
        return format!("{fee:.2}");
    }
    // Odd eighths times 100 land exactly on a half cent.
    let cents = (fee * 100.0).round() as i128;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.unsigned_abs();
    format!("{sign}{}.{:02}", cents / 100, cents % 100)
}

/// `1e21` style with an explicit exponent sign, e.g. `1.5e+21`.
fn exponent_form(fee: f64) -> String {
    let text = format!("{fee:e}");
    match text.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => text,
    }
}

pub fn added(name: &str, currency_symbol: &str, fee: f64) -> String {
    format!(
        "{} added with a fee of {}.",
        name.trim(),
        format_fee(currency_symbol, fee)
    )
}

pub fn fee_found(name: &str, currency_symbol: &str, fee: f64) -> String {
    format!(
        "{}'s adoption fee is {}.",
        name.trim(),
        format_fee(currency_symbol, fee)
    )
}

pub fn add_failed(err: &ShelterError) -> String {
    format!("Error adding animal: {err}")
}

pub fn lookup_failed(err: &ShelterError) -> String {
    format!("Error retrieving fee: {err}")
}

pub fn unexpected(err: &ShelterError) -> String {
    format!("Unexpected error: {err}")
}
