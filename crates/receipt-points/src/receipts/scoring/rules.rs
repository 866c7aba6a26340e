//! The seven receipt scoring rules.
//!
//! Every rule is total: malformed text never raises an error, it simply earns nothing. Amounts are
//! handled as exact decimals so that rounding never shifts an award.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::super::domain::Item;

pub const ROUND_DOLLAR_POINTS: u32 = 50;
pub const QUARTER_MULTIPLE_POINTS: u32 = 25;
pub const POINTS_PER_ITEM_PAIR: u32 = 5;
pub const ODD_DAY_POINTS: u32 = 6;
pub const AFTERNOON_POINTS: u32 = 10;

const QUARTER: Decimal = Decimal::from_parts(25, 0, 0, false, 2);
const PRICE_MULTIPLIER: Decimal = Decimal::from_parts(2, 0, 0, false, 1);
const AFTERNOON_OPENS: u32 = 14 * 60;
const AFTERNOON_CLOSES: u32 = 16 * 60;

/// Feeds `raw` through a fallible `parse` step and scores the parsed value with `award`.
/// A failed parse scores zero.
fn parse_or_zero<T>(
    raw: &str,
    parse: impl FnOnce(&str) -> Option<T>,
    award: impl FnOnce(T) -> u32,
) -> u32 {
    parse(raw).map(award).unwrap_or(0)
}

/// Plain or scientific decimal notation. Padding and digit separators are rejected, and so is
/// any mantissa that `Decimal` could only hold by rounding it.
pub(crate) fn parse_amount(raw: &str) -> Option<Decimal> {
    if raw.is_empty() || raw.trim() != raw || raw.contains('_') {
        return None;
    }

    let is_scientific = |c: char| c == 'e' || c == 'E';
    let mantissa = raw.split(is_scientific).next().unwrap_or(raw);
    if !fits_decimal_precision(mantissa) {
        return None;
    }

    if raw.contains(is_scientific) {
        Decimal::from_scientific(raw).ok()
    } else {
        Decimal::from_str(raw).ok()
    }
}

/// `Decimal` keeps at most 28 significant digits and 28 fractional digits.
const MAX_DECIMAL_DIGITS: usize = 28;

fn fits_decimal_precision(mantissa: &str) -> bool {
    let unsigned = mantissa.trim_start_matches(|c: char| c == '+' || c == '-');
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let whole = whole.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');

    fraction.len() <= MAX_DECIMAL_DIGITS && whole.len() + fraction.len() <= MAX_DECIMAL_DIGITS
}

/// True when `raw` has exactly the layout of `shape`, where `d` stands for one ASCII digit and
/// every other byte must match literally.
fn has_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw
            .bytes()
            .zip(shape.bytes())
            .all(|(actual, expected)| match expected {
                b'd' => actual.is_ascii_digit(),
                literal => actual == literal,
            })
}

/// Strict `YYYY-MM-DD`. chrono alone would also take unpadded or signed fields.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !has_shape(raw, "dddd-dd-dd") {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Strict 24-hour `HH:MM`.
fn parse_time(raw: &str) -> Option<NaiveTime> {
    if !has_shape(raw, "dd:dd") {
        return None;
    }
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

/// One point per ASCII letter or digit in the retailer name.
pub fn retailer_name_points(retailer: &str) -> u32 {
    let count = retailer
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

pub fn round_dollar_points(total: &str) -> u32 {
    parse_or_zero(total, parse_amount, |amount| {
        if amount.fract().is_zero() {
            ROUND_DOLLAR_POINTS
        } else {
            0
        }
    })
}

pub fn quarter_multiple_points(total: &str) -> u32 {
    parse_or_zero(total, parse_amount, |amount| {
        match amount.checked_rem(QUARTER) {
            Some(remainder) if remainder.is_zero() => QUARTER_MULTIPLE_POINTS,
            _ => 0,
        }
    })
}

/// Five points for every two items.
pub fn item_pair_points(item_count: usize) -> u32 {
    let pairs = u32::try_from(item_count / 2).unwrap_or(u32::MAX);
    pairs.saturating_mul(POINTS_PER_ITEM_PAIR)
}

/// Sum of the per-item description awards.
pub fn item_description_points(items: &[Item]) -> u32 {
    items
        .iter()
        .filter_map(description_award)
        .fold(0, u32::saturating_add)
}

/// `price * 0.2`, rounded up away from zero, for items whose trimmed description length is a
/// positive multiple of three. Items that cannot produce a non-negative award are skipped.
///
/// Trimming strips ASCII spaces and control characters only, so a leading no-break space still
/// counts. Length is measured in Unicode scalar values.
fn description_award(item: &Item) -> Option<u32> {
    let length = item
        .short_description
        .as_deref()?
        .trim_matches(|c: char| c <= ' ')
        .chars()
        .count();
    if length == 0 || length % 3 != 0 {
        return None;
    }

    let price = parse_amount(item.price.as_deref()?)?;
    price
        .checked_mul(PRICE_MULTIPLIER)?
        .round_dp_with_strategy(0, RoundingStrategy::AwayFromZero)
        .to_u32()
}

pub fn odd_day_points(purchase_date: &str) -> u32 {
    parse_or_zero(purchase_date, parse_date, |date| {
        if date.day() % 2 == 1 {
            ODD_DAY_POINTS
        } else {
            0
        }
    })
}

/// Ten points for purchases strictly between 14:00 and 16:00.
pub fn afternoon_points(purchase_time: &str) -> u32 {
    parse_or_zero(purchase_time, parse_time, |time| {
        let minute_of_day = time.hour() * 60 + time.minute();
        if minute_of_day > AFTERNOON_OPENS && minute_of_day < AFTERNOON_CLOSES {
            AFTERNOON_POINTS
        } else {
            0
        }
    })
}
