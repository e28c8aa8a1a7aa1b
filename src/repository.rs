//! In-memory store of public holidays with simple queries.
//!
//! The repository is filled once per process from a [`HolidayProvider`]
//! and is read-only afterwards. All queries return records sorted by date.

use log::{info, warn};

use crate::holiday::Holiday;
use crate::provider::{FetchError, HolidayProvider};

/// Result of fetching the holidays of a single year
#[derive(Debug)]
pub struct YearOutcome {
    pub year: i32,
    /// Number of records loaded, or the reason the year was skipped
    pub result: Result<usize, FetchError>,
}

/// Summary of a load phase
#[derive(Debug, Default)]
pub struct LoadReport {
    pub outcomes: Vec<YearOutcome>,
}

impl LoadReport {
    pub fn loaded(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .sum()
    }

    pub fn failures(&self) -> impl Iterator<Item = (i32, &FetchError)> + '_ {
        self.outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().err().map(|e| (o.year, e)))
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures().next().is_none()
    }
}

/// Container of all loaded holidays
#[derive(Debug, Default)]
pub struct HolidayRepository {
    holidays: Vec<Holiday>,
}

impl HolidayRepository {
    pub fn new() -> HolidayRepository {
        HolidayRepository {
            holidays: Vec::new(),
        }
    }

    pub fn from_holidays(holidays: Vec<Holiday>) -> HolidayRepository {
        HolidayRepository { holidays }
    }

    /// Replace the content of the repository by the holidays of the given years.
    /// Years are fetched one after another; a failing year is reported and
    /// skipped, it never aborts loading of the remaining years.
    pub async fn load_years(
        &mut self,
        provider: &dyn HolidayProvider,
        years: &[i32],
    ) -> LoadReport {
        self.holidays.clear();
        let mut report = LoadReport::default();
        for &year in years {
            let result = match provider.fetch_holidays(year).await {
                Ok(mut holidays) => {
                    let count = holidays.len();
                    info!("loaded {} public holidays for {}", count, year);
                    self.holidays.append(&mut holidays);
                    Ok(count)
                }
                Err(err) => {
                    warn!("skipping public holidays for {}: {}", year, err);
                    Err(err)
                }
            };
            report.outcomes.push(YearOutcome { year, result });
        }
        report
    }

    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    fn sorted_by_date<'a, F>(&'a self, filter: F) -> Vec<&'a Holiday>
    where
        F: Fn(&Holiday) -> bool,
    {
        let mut found: Vec<&Holiday> = self.holidays.iter().filter(|h| filter(*h)).collect();
        found.sort_by(|a, b| a.date.cmp(&b.date));
        found
    }

    /// All holidays whose date lies in the given year
    pub fn by_year(&self, year: i32) -> Vec<&Holiday> {
        let prefix = year.to_string();
        self.sorted_by_date(|h| h.date.get(..4) == Some(prefix.as_str()))
    }

    /// All holidays on the given day and month, in any loaded year.
    /// No calendar check is done, an impossible date just matches nothing.
    pub fn by_day_month(&self, day: u32, month: u32) -> Vec<&Holiday> {
        let suffix = format!("-{:02}-{:02}", month, day);
        self.sorted_by_date(|h| h.date.ends_with(&suffix))
    }

    /// All holidays whose local or English name contains `needle`, ignoring case
    pub fn by_substring(&self, needle: &str) -> Vec<&Holiday> {
        self.sorted_by_date(|h| h.name_contains(needle))
    }

    pub fn all(&self) -> Vec<&Holiday> {
        self.sorted_by_date(|_| true)
    }
}
