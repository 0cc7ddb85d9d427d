//! Number/string conversion rules shared by every coercion

use crate::constants::{EXPONENT_LOWER_BOUND, EXPONENT_UPPER_BOUND};
use once_cell::sync::Lazy;
use regex::Regex;

static DECIMAL_LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("decimal literal pattern is valid")
});

/// Render a number the way string coercion does: shortest round-trip
/// digits, exponent notation outside `[1e-6, 1e21)`.
#[must_use]
pub fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let magnitude = n.abs();
    if (EXPONENT_LOWER_BOUND..EXPONENT_UPPER_BOUND).contains(&magnitude) {
        return format!("{n}");
    }

    // `{:e}` yields "1.5e21" / "1e-7"; positive exponents carry an explicit sign
    let formatted = format!("{n:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Parse a string the way numeric coercion does.
///
/// Surrounding whitespace is ignored and an empty string is zero. Accepts
/// decimal literals, `0x`/`0o`/`0b` integer literals and signed `Infinity`.
/// Anything else is NaN.
#[must_use]
pub fn parse_number(input: &str) -> f64 {
    let trimmed = input.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    if !DECIMAL_LITERAL.is_match(trimmed) {
        return f64::NAN;
    }

    normalize_decimal(trimmed).parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() {
        return Some(f64::NAN);
    }

    let mut value = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => value = value * f64::from(radix) + f64::from(d),
            None => return Some(f64::NAN),
        }
    }
    Some(value)
}

// Fill in the digits around a bare '.' so "5." and ".5" parse everywhere
fn normalize_decimal(text: &str) -> String {
    let (mantissa, exponent) = match text.find(['e', 'E']) {
        Some(idx) => text.split_at(idx),
        None => (text, ""),
    };
    let (sign, digits) = match mantissa.strip_prefix(['+', '-']) {
        Some(rest) => (&mantissa[..1], rest),
        None => ("", mantissa),
    };

    let mut normalized = String::with_capacity(text.len() + 2);
    normalized.push_str(sign);
    if digits.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(digits);
    if digits.ends_with('.') {
        normalized.push('0');
    }
    normalized.push_str(exponent);
    normalized
}
