//! Spanish amount-to-words conversion for printed vouchers.
//!
//! Follows Peruvian voucher conventions: uppercase words, the irregular
//! `"CIEN"`/`"CIENTO"` hundred, the `"VEINTE Y UNO"` conjunction for tens,
//! `"MIL"`/`"UN MILLÓN"`/`"MILLONES"` scaling and cents rendered as
//! `"CON NN/100"`.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use arqueo_shared::types::Currency;

/// Amounts at or above this ceiling fall back to a numeric rendering.
const MAGNITUDE_CEILING: u64 = 1_000_000_000;

const UNITS: [&str; 10] = [
    "", "UNO", "DOS", "TRES", "CUATRO", "CINCO", "SEIS", "SIETE", "OCHO", "NUEVE",
];
const TEENS: [&str; 10] = [
    "DIEZ",
    "ONCE",
    "DOCE",
    "TRECE",
    "CATORCE",
    "QUINCE",
    "DIECISÉIS",
    "DIECISIETE",
    "DIECIOCHO",
    "DIECINUEVE",
];
const TENS: [&str; 10] = [
    "", "", "VEINTE", "TREINTA", "CUARENTA", "CINCUENTA", "SESENTA", "SETENTA", "OCHENTA",
    "NOVENTA",
];
const HUNDREDS: [&str; 10] = [
    "",
    "CIENTO",
    "DOSCIENTOS",
    "TRESCIENTOS",
    "CUATROCIENTOS",
    "QUINIENTOS",
    "SEISCIENTOS",
    "SETECIENTOS",
    "OCHOCIENTOS",
    "NOVECIENTOS",
];

/// Converts `amount` to its spoken Spanish form in the currency's unit,
/// e.g. `amount_to_words(dec!(21.50), Currency::Pen)` yields
/// `"VEINTE Y UNO SOLES CON 50/100"`.
///
/// Total for every non-negative amount below one thousand million; negative
/// or out-of-range amounts fall back to the numeric `"MONTO: X.XX"` form.
#[must_use]
pub fn amount_to_words(amount: Decimal, currency: Currency) -> String {
    let unit = currency.spoken_unit();
    let Some((units, cents)) = split_units_cents(amount) else {
        return numeric_fallback(amount, unit);
    };
    if units >= MAGNITUDE_CEILING {
        return numeric_fallback(amount, unit);
    }

    let words = integer_words(units);
    if cents > 0 {
        format!("{words} {unit} CON {cents:02}/100")
    } else {
        format!("{words} {unit}")
    }
}

/// Splits an amount into whole units and cents, rounding to two decimals.
/// Returns `None` for negative amounts or amounts too large for `u64`.
fn split_units_cents(amount: Decimal) -> Option<(u64, u32)> {
    if amount.is_sign_negative() {
        return None;
    }
    let rounded = amount.round_dp(2);
    let units = rounded.trunc().to_u64()?;
    let cents = (rounded.fract() * Decimal::from(100)).to_u32()?;
    Some((units, cents))
}

fn numeric_fallback(amount: Decimal, unit: &str) -> String {
    format!("MONTO: {:.2} {unit}", amount.round_dp(2))
}

fn integer_words(n: u64) -> String {
    if n == 0 {
        return "CERO".to_string();
    }
    if n < 1_000 {
        return under_thousand(n);
    }
    if n < 1_000_000 {
        return thousands(n);
    }

    let millions = n / 1_000_000;
    let rest = n % 1_000_000;
    let mut words = if millions == 1 {
        "UN MILLÓN".to_string()
    } else {
        format!("{} MILLONES", under_thousand(millions))
    };
    if rest >= 1_000 {
        words.push(' ');
        words.push_str(&thousands(rest));
    } else if rest > 0 {
        words.push(' ');
        words.push_str(&under_thousand(rest));
    }
    words
}

fn thousands(n: u64) -> String {
    let thousands = n / 1_000;
    let rest = n % 1_000;
    let mut words = if thousands == 1 {
        "MIL".to_string()
    } else {
        format!("{} MIL", under_thousand(thousands))
    };
    if rest > 0 {
        words.push(' ');
        words.push_str(&under_thousand(rest));
    }
    words
}

#[allow(clippy::cast_possible_truncation)]
fn under_thousand(n: u64) -> String {
    debug_assert!(n < 1_000);
    if n == 100 {
        return "CIEN".to_string();
    }

    let hundreds = (n / 100) as usize;
    let rest = n % 100;
    let tail = match rest {
        0 => String::new(),
        1..=9 => UNITS[rest as usize].to_string(),
        10..=19 => TEENS[(rest - 10) as usize].to_string(),
        _ => {
            let tens = (rest / 10) as usize;
            let units = (rest % 10) as usize;
            if units == 0 {
                TENS[tens].to_string()
            } else {
                format!("{} Y {}", TENS[tens], UNITS[units])
            }
        }
    };

    match (hundreds, tail.is_empty()) {
        (0, _) => tail,
        (_, true) => HUNDREDS[hundreds].to_string(),
        (_, false) => format!("{} {}", HUNDREDS[hundreds], tail),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    fn soles(amount: Decimal) -> String {
        amount_to_words(amount, Currency::Pen)
    }

    #[test]
    fn test_zero() {
        assert_eq!(soles(dec!(0)), "CERO SOLES");
    }

    #[test]
    fn test_exact_hundred() {
        assert_eq!(soles(dec!(100)), "CIEN SOLES");
    }

    #[test]
    fn test_exact_thousand() {
        assert_eq!(soles(dec!(1000)), "MIL SOLES");
    }

    #[test]
    fn test_twenty_one_fifty() {
        assert_eq!(soles(dec!(21.50)), "VEINTE Y UNO SOLES CON 50/100");
    }

    #[rstest]
    #[case(dec!(1), "UNO SOLES")]
    #[case(dec!(9), "NUEVE SOLES")]
    #[case(dec!(10), "DIEZ SOLES")]
    #[case(dec!(15), "QUINCE SOLES")]
    #[case(dec!(16), "DIECISÉIS SOLES")]
    #[case(dec!(19), "DIECINUEVE SOLES")]
    #[case(dec!(20), "VEINTE SOLES")]
    #[case(dec!(47), "CUARENTA Y SIETE SOLES")]
    #[case(dec!(90), "NOVENTA SOLES")]
    #[case(dec!(99), "NOVENTA Y NUEVE SOLES")]
    #[case(dec!(101), "CIENTO UNO SOLES")]
    #[case(dec!(115), "CIENTO QUINCE SOLES")]
    #[case(dec!(121), "CIENTO VEINTE Y UNO SOLES")]
    #[case(dec!(500), "QUINIENTOS SOLES")]
    #[case(dec!(999), "NOVECIENTOS NOVENTA Y NUEVE SOLES")]
    fn test_under_one_thousand(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(soles(amount), expected);
    }

    #[rstest]
    #[case(dec!(1001), "MIL UNO SOLES")]
    #[case(dec!(2500), "DOS MIL QUINIENTOS SOLES")]
    #[case(dec!(15230), "QUINCE MIL DOSCIENTOS TREINTA SOLES")]
    #[case(dec!(100000), "CIEN MIL SOLES")]
    #[case(dec!(1000000), "UN MILLÓN SOLES")]
    #[case(dec!(2000000), "DOS MILLONES SOLES")]
    #[case(dec!(2000001), "DOS MILLONES UNO SOLES")]
    #[case(dec!(1250300), "UN MILLÓN DOSCIENTOS CINCUENTA MIL TRESCIENTOS SOLES")]
    fn test_thousands_and_millions(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(soles(amount), expected);
    }

    #[test]
    fn test_cents_rendering() {
        assert_eq!(soles(dec!(0.05)), "CERO SOLES CON 05/100");
        assert_eq!(soles(dec!(100.99)), "CIEN SOLES CON 99/100");
        assert_eq!(soles(dec!(3.10)), "TRES SOLES CON 10/100");
    }

    #[test]
    fn test_other_currency_unit() {
        assert_eq!(
            amount_to_words(dec!(21.50), Currency::Usd),
            "VEINTE Y UNO DÓLARES CON 50/100"
        );
    }

    #[test]
    fn test_fallback_for_negative_amount() {
        assert_eq!(soles(dec!(-3.5)), "MONTO: -3.50 SOLES");
    }

    #[test]
    fn test_fallback_above_magnitude_ceiling() {
        assert_eq!(
            soles(dec!(1000000000)),
            "MONTO: 1000000000.00 SOLES"
        );
    }
}
