//! Special-day rules and per-date event resolution
//!
//! Annual holidays carry either a fixed (month, day) or a floating
//! rule string ("3rd Mon Jan", "last Mon May", "easter", "election").
//! Dated events (birthdays, anniversaries, other) recur every year
//! from their start date onward and report the years elapsed.

use crate::calendar::{self, Weekday};

/// A named annual event: fixed (month, day) or a floating rule string
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnualRule {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub month: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub day: Option<u8>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub rule: Option<String>,
}

impl AnnualRule {
    pub fn fixed(name: impl Into<String>, month: u8, day: u8) -> Self {
        Self {
            name: name.into(),
            month: Some(month),
            day: Some(day),
            rule: None,
        }
    }

    pub fn floating(name: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            month: None,
            day: None,
            rule: Some(rule.into()),
        }
    }

    /// The (month, day) this rule lands on in `year`, if any
    pub fn resolve(&self, year: i32) -> Option<(u8, u8)> {
        if let (Some(month), Some(day)) = (self.month, self.day) {
            return Some((month, day));
        }
        self.rule.as_deref().and_then(|r| parse_rule(r, year))
    }

    /// Rule or date string for the title-page summary table
    pub fn display_when(&self) -> String {
        if let Some(rule) = &self.rule {
            return rule.clone();
        }
        match (self.month, self.day) {
            (Some(month), Some(day)) => format!("{} {}", calendar::month_abbrev(month), day),
            _ => String::new(),
        }
    }
}

/// A recurring dated event with an ISO 8601 start date
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DatedEvent {
    pub name: String,
    /// "YYYY-MM-DD"
    pub date: String,
}

impl DatedEvent {
    pub fn new(name: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
        }
    }

    /// Parse the ISO date into (year, month, day); `None` when malformed
    pub fn parse_date(&self) -> Option<(i32, u8, u8)> {
        let mut parts = self.date.split('-');
        let year: i32 = parts.next()?.parse().ok()?;
        let month: u8 = parts.next()?.parse().ok()?;
        let day: u8 = parts.next()?.parse().ok()?;
        if parts.next().is_some() {
            return None;
        }
        if !(1..=12).contains(&month) || day == 0 || day > calendar::days_in_month(year, month) {
            return None;
        }
        Some((year, month, day))
    }
}

/// Category of a dated event, in resolution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventCategory {
    Birthday,
    Anniversary,
    Other,
}

impl EventCategory {
    pub fn label(self) -> &'static str {
        match self {
            EventCategory::Birthday => "Birthday",
            EventCategory::Anniversary => "Anniversary",
            EventCategory::Other => "Other",
        }
    }
}

/// The full configured set of special days
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpecialDays {
    pub annual: Vec<AnnualRule>,
    pub birthdays: Vec<DatedEvent>,
    pub anniversaries: Vec<DatedEvent>,
    pub other: Vec<DatedEvent>,
}

impl SpecialDays {
    /// The standard US holiday set; dated categories start empty
    pub fn us_defaults() -> Self {
        Self {
            annual: vec![
                AnnualRule::fixed("New Year's Day", 1, 1),
                AnnualRule::floating("MLK Day", "3rd Mon Jan"),
                AnnualRule::fixed("Valentine's Day", 2, 14),
                AnnualRule::floating("President's Day", "3rd Mon Feb"),
                AnnualRule::fixed("St. Patrick's Day", 3, 17),
                AnnualRule::floating("Easter", "easter"),
                AnnualRule::floating("Mother's Day", "2nd Sun May"),
                AnnualRule::floating("Memorial Day", "last Mon May"),
                AnnualRule::floating("Father's Day", "3rd Sun Jun"),
                AnnualRule::fixed("Juneteenth", 6, 19),
                AnnualRule::fixed("Independence Day", 7, 4),
                AnnualRule::floating("Labor Day", "1st Mon Sep"),
                AnnualRule::floating("Columbus Day", "2nd Mon Oct"),
                AnnualRule::fixed("Halloween", 10, 31),
                AnnualRule::floating("Election Day", "election"),
                AnnualRule::fixed("Veterans Day", 11, 11),
                AnnualRule::floating("Thanksgiving", "4th Thu Nov"),
                AnnualRule::fixed("Christmas", 12, 25),
            ],
            birthdays: Vec::new(),
            anniversaries: Vec::new(),
            other: Vec::new(),
        }
    }

    /// Dated categories in resolution order
    pub fn dated_categories(&self) -> [(EventCategory, &[DatedEvent]); 3] {
        [
            (EventCategory::Birthday, self.birthdays.as_slice()),
            (EventCategory::Anniversary, self.anniversaries.as_slice()),
            (EventCategory::Other, self.other.as_slice()),
        ]
    }
}

/// Icon + color decoration applied in whimsy mode.
///
/// The icon is a Font Awesome glyph name; the color is a named color
/// understood by the serializer. Styling never affects matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventStyle {
    pub icon: &'static str,
    pub color: &'static str,
}

/// Decoration for a named annual holiday, if one is defined
pub fn whimsy_style(name: &str) -> Option<EventStyle> {
    let (icon, color) = match name {
        "New Year's Day" => ("faGlassCheers", "purple"),
        "MLK Day" => ("faHandsHelping", "black"),
        "Valentine's Day" => ("faHeart", "magenta"),
        "President's Day" => ("faFlagUsa", "blue"),
        "St. Patrick's Day" => ("faLeaf", "green"),
        "Easter" => ("faEgg", "violet"),
        "Mother's Day" => ("faHeart", "pink"),
        "Memorial Day" => ("faFlagUsa", "blue"),
        "Father's Day" => ("faUserTie", "blue"),
        "Juneteenth" => ("faStar", "black"),
        "Independence Day" => ("faStar", "blue"),
        "Labor Day" => ("faHammer", "brown"),
        "Columbus Day" => ("faShip", "blue"),
        "Halloween" => ("faGhost", "orange"),
        "Election Day" => ("faVoteYea", "blue"),
        "Veterans Day" => ("faMedal", "olive"),
        "Thanksgiving" => ("faUtensils", "brown"),
        "Christmas" => ("faTree", "red"),
        _ => return None,
    };
    Some(EventStyle { icon, color })
}

/// Decoration for a dated-event category
pub fn category_style(category: EventCategory) -> Option<EventStyle> {
    match category {
        EventCategory::Birthday => Some(EventStyle {
            icon: "faBirthdayCake",
            color: "teal",
        }),
        EventCategory::Anniversary => Some(EventStyle {
            icon: "faRing",
            color: "orange",
        }),
        EventCategory::Other => None,
    }
}

/// One event matched on a particular date
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedEvent {
    pub label: String,
    pub style: Option<EventStyle>,
}

/// Parse a floating rule string into (month, day) for a given year.
///
/// Accepts "easter", "election", or exactly three whitespace tokens:
/// ordinal ("1st".."4th" or "last"), weekday abbreviation, month
/// abbreviation. Malformed rules resolve to `None`, never panic.
pub fn parse_rule(rule: &str, year: i32) -> Option<(u8, u8)> {
    let rule = rule.trim();
    if rule.eq_ignore_ascii_case("easter") {
        return Some(calendar::easter(year));
    }
    if rule.eq_ignore_ascii_case("election") {
        return Some(calendar::election_day(year));
    }

    let parts: Vec<&str> = rule.split_whitespace().collect();
    if parts.len() != 3 {
        return None;
    }
    let [ordinal, weekday_str, month_str] = [parts[0], parts[1], parts[2]];

    let n: i8 = if ordinal.eq_ignore_ascii_case("last") {
        -1
    } else {
        let digit = ordinal.chars().next()?.to_digit(10)?;
        if digit == 0 {
            return None;
        }
        digit as i8
    };

    let weekday = Weekday::from_abbrev(weekday_str)?;
    let month = calendar::month_from_abbrev(month_str)?;
    let day = calendar::nth_weekday_of_month(year, month, weekday, n)?;
    Some((month, day))
}

/// All events landing on (year, month, day), in configuration order:
/// annual rules first, then birthdays, anniversaries, other.
pub fn resolve_events(
    days: &SpecialDays,
    year: i32,
    month: u8,
    day: u8,
    whimsy: bool,
) -> Vec<ResolvedEvent> {
    let mut events = Vec::new();

    for item in &days.annual {
        if item.resolve(year) == Some((month, day)) {
            events.push(ResolvedEvent {
                label: item.name.clone(),
                style: if whimsy { whimsy_style(&item.name) } else { None },
            });
        }
    }

    for (category, entries) in days.dated_categories() {
        for item in entries {
            let Some((event_year, event_month, event_day)) = item.parse_date() else {
                continue;
            };
            if event_month != month || event_day != day {
                continue;
            }
            let years_elapsed = year - event_year;
            if years_elapsed < 0 {
                continue;
            }
            events.push(ResolvedEvent {
                label: format!("{} ({}y)", item.name, years_elapsed),
                style: if whimsy { category_style(category) } else { None },
            });
        }
    }

    events
}
