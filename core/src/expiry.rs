use anyhow::{anyhow, Result};
use chrono::{DateTime, Duration, Local, NaiveDate, TimeZone, Utc};

/// Pin a calendar date to its final local instant (23:59:59.999), so that
/// "expires on day X" always means "valid through the end of day X".
pub fn day_end(date: NaiveDate) -> DateTime<Utc> {
    let naive = date.and_hms_milli_opt(23, 59, 59, 999).unwrap();
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        .unwrap_or_else(|| Utc.from_utc_datetime(&naive))
}

/// Parse a raw expiry code into its day-end instant.
///
/// Six shapes are accepted, tried in this order. Each requires a full-string
/// match with exact digit-group widths:
///
/// 1. `YYYY-MM-DD`
/// 2. `DD/MM/YYYY`
/// 3. `DD-MM-YYYY` (told apart from shape 1 by group widths alone)
/// 4. `YYYYMMDD`
/// 5. `MM/YYYY` (last day of that month)
/// 6. `MM/YY`   (year read as 20YY, last day of that month)
pub fn parse_expiry_code(raw: &str) -> Result<DateTime<Utc>> {
    let input = raw.trim();
    if input.is_empty() {
        return Err(anyhow!("Empty expiry code"));
    }

    if let Some([year, month, day]) = digit_groups(input, '-', [4, 2, 2]) {
        return literal_date(year, month, day);
    }
    if let Some([day, month, year]) = digit_groups(input, '/', [2, 2, 4]) {
        return literal_date(year, month, day);
    }
    if let Some([day, month, year]) = digit_groups(input, '-', [2, 2, 4]) {
        return literal_date(year, month, day);
    }
    if input.len() == 8 && is_digits(input) {
        return literal_date(&input[..4], &input[4..6], &input[6..8]);
    }
    if let Some([month, year]) = digit_groups(input, '/', [2, 4]) {
        return month_end_date(year.parse()?, month.parse()?);
    }
    if let Some([month, year]) = digit_groups(input, '/', [2, 2]) {
        return month_end_date(2000 + year.parse::<i32>()?, month.parse()?);
    }

    Err(anyhow!("Could not parse expiry code: {}", input))
}

/// Split `input` on `sep` and return the pieces only when their count,
/// widths, and digits-only content all line up.
fn digit_groups<const N: usize>(input: &str, sep: char, widths: [usize; N]) -> Option<[&str; N]> {
    let parts: Vec<&str> = input.split(sep).collect();
    if parts.len() != N {
        return None;
    }
    for (part, width) in parts.iter().zip(widths) {
        if part.len() != width || !is_digits(part) {
            return None;
        }
    }
    parts.try_into().ok()
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn literal_date(year: &str, month: &str, day: &str) -> Result<DateTime<Utc>> {
    let year: i32 = year.parse()?;
    let month: u32 = month.parse()?;
    let day: u32 = day.parse()?;
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month {} out of range", month));
    }
    // from_ymd_opt refuses combinations that do not land on a real calendar
    // day (Feb 30, day 31 in a 30-day month), so no per-month day table.
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("No such calendar day: {:04}-{:02}-{:02}", year, month, day))?;
    Ok(day_end(date))
}

fn month_end_date(year: i32, month: u32) -> Result<DateTime<Utc>> {
    if !(1..=12).contains(&month) {
        return Err(anyhow!("Month {} out of range", month));
    }
    // One day before the first of the following month, i.e. the last day of
    // the target month.
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| anyhow!("Date out of range: {:04}-{:02}", year, month))?;
    Ok(day_end(next_first - Duration::days(1)))
}
