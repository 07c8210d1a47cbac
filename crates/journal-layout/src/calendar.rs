//! Calendar arithmetic for journal layout
//!
//! Pure date helpers: leap years, day-of-week, and the floating
//! holiday machinery (nth weekday of a month, Easter, US Election
//! Day). Invalid dates resolve to `None` rather than panicking, so a
//! Feb 29 cell in a non-leap year renders as a skip instead of
//! aborting the page.

/// Days of the week, Monday-first to match holiday rule strings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Three-letter abbreviation ("Mon".."Sun")
    pub fn abbrev(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }

    /// Two-letter abbreviation used in the month-summary grid
    pub fn abbrev2(self) -> &'static str {
        &self.abbrev()[..2]
    }

    /// Localized single-character day glyph (Japanese weekday kanji)
    pub fn glyph(self) -> &'static str {
        match self {
            Weekday::Monday => "月",
            Weekday::Tuesday => "火",
            Weekday::Wednesday => "水",
            Weekday::Thursday => "木",
            Weekday::Friday => "金",
            Weekday::Saturday => "土",
            Weekday::Sunday => "日",
        }
    }

    /// Parse a weekday from the first three letters of a rule token
    pub fn from_abbrev(s: &str) -> Option<Weekday> {
        let token: String = s.chars().take(3).collect::<String>().to_ascii_lowercase();
        match token.as_str() {
            "mon" => Some(Weekday::Monday),
            "tue" => Some(Weekday::Tuesday),
            "wed" => Some(Weekday::Wednesday),
            "thu" => Some(Weekday::Thursday),
            "fri" => Some(Weekday::Friday),
            "sat" => Some(Weekday::Saturday),
            "sun" => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Monday = 0 .. Sunday = 6
    fn index0(self) -> u32 {
        match self {
            Weekday::Monday => 0,
            Weekday::Tuesday => 1,
            Weekday::Wednesday => 2,
            Weekday::Thursday => 3,
            Weekday::Friday => 4,
            Weekday::Saturday => 5,
            Weekday::Sunday => 6,
        }
    }
}

pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// First leap year at or after `start_year`.
///
/// Day iteration runs over a leap reference year so Feb 29 exists in
/// the page sequence.
pub fn leap_reference_year(start_year: i32) -> i32 {
    let mut year = start_year;
    while !is_leap_year(year) {
        year += 1;
    }
    year
}

/// Number of days in the given month, 0 for an invalid month
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Day of the week for a calendar date, `None` for invalid dates
/// (e.g. Feb 29 in a non-leap year)
pub fn day_of_week(year: i32, month: u8, day: u8) -> Option<Weekday> {
    if !(1..=12).contains(&month) || day == 0 || day > days_in_month(year, month) {
        return None;
    }

    // Sakamoto's method; yields 0 = Sunday
    const T: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 { year - 1 } else { year };
    let dow = (y + y / 4 - y / 100 + y / 400 + T[(month - 1) as usize] + day as i32).rem_euclid(7);

    Some(match dow {
        0 => Weekday::Sunday,
        1 => Weekday::Monday,
        2 => Weekday::Tuesday,
        3 => Weekday::Wednesday,
        4 => Weekday::Thursday,
        5 => Weekday::Friday,
        _ => Weekday::Saturday,
    })
}

/// Day of the month for the nth occurrence of a weekday.
///
/// Positive `n` counts from the start of the month (1 = first);
/// negative `n` counts from the end (-1 = last). Returns `None` when
/// the occurrence does not exist.
pub fn nth_weekday_of_month(year: i32, month: u8, weekday: Weekday, n: i8) -> Option<u8> {
    if n == 0 {
        return None;
    }
    let first = day_of_week(year, month, 1)?;
    let first_day = 1 + (weekday.index0() + 7 - first.index0()) % 7;
    let last = days_in_month(year, month) as u32;
    let count = (last - first_day) / 7 + 1;

    let occurrence = if n > 0 {
        let k = n as u32;
        if k > count {
            return None;
        }
        k - 1
    } else {
        let back = n.unsigned_abs() as u32;
        if back > count {
            return None;
        }
        count - back
    };

    Some((first_day + occurrence * 7) as u8)
}

/// Western (Gregorian) Easter date as (month, day).
///
/// Anonymous Gregorian algorithm; closed form, exact for all years in
/// the Gregorian calendar.
pub fn easter(year: i32) -> (u8, u8) {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    (month as u8, day as u8)
}

/// US Election Day: the Tuesday after the first Monday in November
pub fn election_day(year: i32) -> (u8, u8) {
    // The first Monday of November always exists
    let first_monday = nth_weekday_of_month(year, 11, Weekday::Monday, 1).unwrap_or(1);
    (11, first_monday + 1)
}

pub fn month_name(month: u8) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

pub fn month_abbrev(month: u8) -> &'static str {
    match month {
        1..=12 => &month_name(month)[..3],
        _ => "",
    }
}

/// Parse a month from the first three letters of a rule token
pub fn month_from_abbrev(s: &str) -> Option<u8> {
    let token: String = s.chars().take(3).collect::<String>().to_ascii_lowercase();
    (1..=12).find(|&m| month_abbrev(m).to_ascii_lowercase() == token)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2026));
        assert!(!is_leap_year(2100));
        assert!(is_leap_year(2000));
        assert_eq!(leap_reference_year(2026), 2028);
        assert_eq!(leap_reference_year(2024), 2024);
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2026, 1), 31);
        assert_eq!(days_in_month(2026, 2), 28);
        assert_eq!(days_in_month(2028, 2), 29);
        assert_eq!(days_in_month(2026, 4), 30);
        assert_eq!(days_in_month(2026, 13), 0);
    }

    #[test]
    fn test_day_of_week() {
        // 2026-01-01 is a Thursday
        assert_eq!(day_of_week(2026, 1, 1), Some(Weekday::Thursday));
        // 2024-02-29 exists
        assert_eq!(day_of_week(2024, 2, 29), Some(Weekday::Thursday));
        // 2000-01-01 was a Saturday
        assert_eq!(day_of_week(2000, 1, 1), Some(Weekday::Saturday));
    }

    #[test]
    fn test_day_of_week_invalid_dates() {
        // Feb 29 in a non-leap year is a sentinel, not a panic
        assert_eq!(day_of_week(2027, 2, 29), None);
        assert_eq!(day_of_week(2026, 0, 1), None);
        assert_eq!(day_of_week(2026, 4, 31), None);
        assert_eq!(day_of_week(2026, 1, 0), None);
    }

    #[test]
    fn test_nth_weekday() {
        // MLK Day 2026: 3rd Monday of January = Jan 19
        assert_eq!(
            nth_weekday_of_month(2026, 1, Weekday::Monday, 3),
            Some(19)
        );
        // Memorial Day 2026: last Monday of May = May 25
        assert_eq!(
            nth_weekday_of_month(2026, 5, Weekday::Monday, -1),
            Some(25)
        );
        // Thanksgiving 2026: 4th Thursday of November = Nov 26
        assert_eq!(
            nth_weekday_of_month(2026, 11, Weekday::Thursday, 4),
            Some(26)
        );
        // February 2026 has only four Mondays
        assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Monday, 5), None);
        assert_eq!(
            nth_weekday_of_month(2026, 2, Weekday::Monday, -1),
            Some(23)
        );
        assert_eq!(nth_weekday_of_month(2026, 2, Weekday::Monday, 0), None);
    }

    #[test]
    fn test_easter_reference_dates() {
        assert_eq!(easter(2024), (3, 31));
        assert_eq!(easter(2025), (4, 20));
        assert_eq!(easter(2026), (4, 5));
    }

    #[test]
    fn test_election_day() {
        // First Tuesday after the first Monday
        assert_eq!(election_day(2024), (11, 5));
        assert_eq!(election_day(2026), (11, 3));
        // 2026-11-03 really is a Tuesday
        assert_eq!(day_of_week(2026, 11, 3), Some(Weekday::Tuesday));
    }

    #[test]
    fn test_abbrev_parsing() {
        assert_eq!(Weekday::from_abbrev("Mon"), Some(Weekday::Monday));
        assert_eq!(Weekday::from_abbrev("Thursday"), Some(Weekday::Thursday));
        assert_eq!(Weekday::from_abbrev("xyz"), None);
        assert_eq!(month_from_abbrev("Feb"), Some(2));
        assert_eq!(month_from_abbrev("December"), Some(12));
        assert_eq!(month_from_abbrev("smarch"), None);
        assert_eq!(Weekday::Sunday.abbrev2(), "Su");
        assert_eq!(Weekday::Sunday.glyph(), "日");
    }
}
