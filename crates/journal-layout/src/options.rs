use crate::events::SpecialDays;
use crate::geometry::Geometry;
use crate::types::*;

/// Comprehensive journal configuration
///
/// Constructed once per run and threaded immutably through every
/// component; there is no ambient configuration state.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct JournalOptions {
    /// Title shown on the cover page
    pub title: String,

    // Tracked range
    pub start_year: i32,
    pub num_years: u32,
    pub num_writing_lines: u32,

    // Physical layout
    pub paper: PaperSize,
    pub margins: PageMargins,
    pub spread: SpreadMode,
    pub align: AlignMode,

    /// Side each month-summary page is forced onto. The source
    /// history disagrees between revisions, so this is a named
    /// option rather than a constant.
    pub month_summary_side: PageSide,

    // Feature flags
    pub sundays_red: bool,
    pub whimsy: bool,
    /// Append the localized day glyph to daily weekday labels
    /// (requires a Unicode-capable compiler setup)
    pub day_glyphs: bool,
    pub toc: bool,
    /// Render parity fillers as event-list pages; blank fillers
    /// otherwise
    pub event_lists: bool,
    pub include_source: bool,

    /// Minimum number of lined extra pages before the appendix
    pub min_extra_pages: u32,

    /// Reduced generation: suppress most page content while keeping
    /// the full document's pagination scheme
    pub test_mode: bool,

    pub special_days: SpecialDays,
}

impl Default for JournalOptions {
    fn default() -> Self {
        Self {
            title: "Forever Journal".to_string(),
            start_year: 2026,
            num_years: 10,
            num_writing_lines: 5,
            paper: PaperSize::A4,
            margins: PageMargins::default(),
            spread: SpreadMode::TwoUp,
            align: AlignMode::Mirrored,
            month_summary_side: PageSide::Recto,
            sundays_red: true,
            whimsy: false,
            day_glyphs: false,
            toc: false,
            event_lists: true,
            include_source: false,
            min_extra_pages: 10,
            test_mode: false,
            special_days: SpecialDays::us_defaults(),
        }
    }
}

impl JournalOptions {
    /// Last tracked year, inclusive
    pub fn end_year(&self) -> i32 {
        self.start_year + self.num_years as i32 - 1
    }

    /// Base name for generated output files
    pub fn output_base(&self) -> String {
        let base = format!("forever_journal_{}_{}", self.start_year, self.end_year());
        if self.test_mode {
            format!("test_{base}")
        } else {
            base
        }
    }

    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| JournalError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| JournalError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options.
    ///
    /// Everything that could fail mid-generation is checked here so a
    /// run that starts is a run that finishes.
    pub fn validate(&self) -> Result<()> {
        // Gregorian Easter is only defined from 1583
        if !(1583..=9999).contains(&self.start_year) {
            return Err(JournalError::Config(format!(
                "start year {} outside the supported range 1583..=9999",
                self.start_year
            )));
        }
        if self.num_years == 0 || self.num_years > 100 {
            return Err(JournalError::Config(format!(
                "number of tracked years must be 1..=100, got {}",
                self.num_years
            )));
        }
        if self.num_writing_lines == 0 {
            return Err(JournalError::Config(
                "number of writing lines must be at least 1".to_string(),
            ));
        }

        // Derived geometry must be strictly positive before any page
        // content is emitted
        Geometry::derive(self)?;

        for rule in &self.special_days.annual {
            let has_fixed = rule.month.is_some() && rule.day.is_some();
            let has_rule = rule.rule.is_some();
            if has_fixed == has_rule {
                return Err(JournalError::Config(format!(
                    "special day '{}' needs either a fixed month/day or a rule",
                    rule.name
                )));
            }
            if has_fixed {
                let (month, day) = (rule.month.unwrap_or(0), rule.day.unwrap_or(0));
                if !(1..=12).contains(&month) || day == 0 || day > 31 {
                    return Err(JournalError::Config(format!(
                        "special day '{}' has an invalid date {month}-{day}",
                        rule.name
                    )));
                }
            } else if rule.resolve(self.start_year).is_none() {
                return Err(JournalError::Config(format!(
                    "special day '{}' has an unparseable rule {:?}",
                    rule.name, rule.rule
                )));
            }
        }

        for (category, entries) in self.special_days.dated_categories() {
            for event in entries {
                if event.parse_date().is_none() {
                    return Err(JournalError::Config(format!(
                        "{} '{}' has a malformed date '{}' (expected YYYY-MM-DD)",
                        category.label(),
                        event.name,
                        event.date
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{AnnualRule, DatedEvent};

    #[test]
    fn test_default_options_validate() {
        let options = JournalOptions::default();
        assert!(options.validate().is_ok());
        assert_eq!(options.end_year(), 2035);
        assert_eq!(options.output_base(), "forever_journal_2026_2035");
    }

    #[test]
    fn test_test_mode_output_base() {
        let options = JournalOptions {
            test_mode: true,
            ..JournalOptions::default()
        };
        assert_eq!(options.output_base(), "test_forever_journal_2026_2035");
    }

    #[test]
    fn test_validation_rejects_bad_counts() {
        let mut options = JournalOptions::default();
        options.num_years = 0;
        assert!(options.validate().is_err());

        let mut options = JournalOptions::default();
        options.num_writing_lines = 0;
        assert!(options.validate().is_err());

        let mut options = JournalOptions::default();
        options.start_year = 1500;
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_impossible_margins() {
        let options = JournalOptions {
            margins: PageMargins::uniform(150.0),
            ..JournalOptions::default()
        };
        let err = options.validate().unwrap_err();
        match err {
            JournalError::Config(msg) => assert!(msg.contains("usable text width")),
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_rejects_malformed_special_days() {
        let mut options = JournalOptions::default();
        options
            .special_days
            .annual
            .push(AnnualRule::floating("Broken", "not a rule"));
        assert!(options.validate().is_err());

        let mut options = JournalOptions::default();
        options.special_days.annual.push(AnnualRule {
            name: "Nothing".to_string(),
            month: None,
            day: None,
            rule: None,
        });
        assert!(options.validate().is_err());

        let mut options = JournalOptions::default();
        options
            .special_days
            .birthdays
            .push(DatedEvent::new("Bad", "1995/08/18"));
        assert!(options.validate().is_err());
    }
}
