use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeSet;
use std::fmt;

/// Rejected date input. Handlers translate this into a 400; nothing is
/// retried or clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    BirthDateInFuture,
    UnparseableDate(String),
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidInput::BirthDateInFuture => write!(f, "birth date cannot be in the future"),
            InvalidInput::UnparseableDate(value) => {
                write!(f, "unrecognized date '{value}', expected YYYY-MM-DD")
            }
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Calendar-accurate age: whole years, months in 0..=11, leftover days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgeBreakdown {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

pub fn parse_date(value: &str) -> Result<NaiveDate, InvalidInput> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| InvalidInput::UnparseableDate(value.to_string()))
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_date_set(keys: &BTreeSet<String>) -> Result<BTreeSet<NaiveDate>, InvalidInput> {
    keys.iter().map(|key| parse_date(key)).collect()
}

/// Signed whole-day delta between two calendar days.
pub fn days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (to - from).num_days()
}

/// Componentwise date difference with calendar borrowing. Requires
/// `birth <= reference`; every component of the result is non-negative and
/// adding the components back onto the birth date lands on the reference
/// date.
pub fn age_breakdown(birth: NaiveDate, reference: NaiveDate) -> Result<AgeBreakdown, InvalidInput> {
    if birth > reference {
        return Err(InvalidInput::BirthDateInFuture);
    }

    let mut years = reference.year() - birth.year();
    let mut months = reference.month() as i32 - birth.month() as i32;
    let mut days = reference.day() as i32 - birth.day() as i32;

    // Borrow from the month preceding the reference. A borrowed February can
    // be shorter than the deficit (day-31 births seen in early March), so
    // keep borrowing until the day count is whole.
    let (mut year, mut month) = (reference.year(), reference.month());
    while days < 0 {
        let (prev_year, prev_month) = previous_month(year, month);
        days += days_in_month(prev_year, prev_month) as i32;
        months -= 1;
        year = prev_year;
        month = prev_month;
    }

    if months < 0 {
        years -= 1;
        months += 12;
    }

    Ok(AgeBreakdown {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    })
}

/// Whole days until the next anniversary of `birth`, counted from
/// `reference`. An anniversary falling on the reference date itself counts
/// as 0 days away, not a year.
pub fn days_until_anniversary(birth: NaiveDate, reference: NaiveDate) -> Result<u32, InvalidInput> {
    if birth > reference {
        return Err(InvalidInput::BirthDateInFuture);
    }

    let this_year = anniversary_in_year(birth, reference.year()).unwrap_or(reference);
    let anniversary = if this_year < reference {
        anniversary_in_year(birth, reference.year() + 1).unwrap_or(reference)
    } else {
        this_year
    };

    Ok((anniversary - reference).num_days() as u32)
}

// Feb 29 anniversaries land on Mar 1 in common years.
fn anniversary_in_year(birth: NaiveDate, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, birth.month(), birth.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
}

/// Consecutive completed days ending at `today`, or at yesterday when today
/// is still pending. The count is always re-derived from the full set, so
/// toggling any date off and back on recounts correctly.
pub fn current_streak(completed: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    let yesterday = today - Duration::days(1);
    let anchor = if completed.contains(&today) {
        today
    } else if completed.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut day = anchor;
    while completed.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}

fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
