//! Interactive console menu on top of a loaded [`HolidayRepository`]

use std::fmt;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::config::TrackerConfig;
use crate::holiday::Holiday;
use crate::repository::HolidayRepository;

const RULE: &str = "----------------------------------------";

/// Menu actions
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum MenuChoice {
    ListByYear,
    SearchByDayMonth,
    SearchByName,
    ListAll,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" => Ok(Self::ListByYear),
            "2" => Ok(Self::SearchByDayMonth),
            "3" => Ok(Self::SearchByName),
            "4" => Ok(Self::ListAll),
            "5" => Ok(Self::Exit),
            _ => Err(()),
        }
    }
}

/// Day and month as entered in `DD-MM` form.
/// Only the shape is checked; the two fields are kept as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct DayMonth {
    day: String,
    month: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParseDayMonthError {}

impl fmt::Display for ParseDayMonthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected day and month in DD-MM format")
    }
}

impl FromStr for DayMonth {
    type Err = ParseDayMonthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if s.trim().is_empty() || chars.len() != 5 || chars[2] != '-' {
            return Err(ParseDayMonthError {});
        }
        Ok(DayMonth {
            day: chars[0..2].iter().collect(),
            month: chars[3..5].iter().collect(),
        })
    }
}

fn two_digits(field: &str) -> Option<u32> {
    if field.chars().all(|c| c.is_ascii_digit()) {
        field.parse().ok()
    } else {
        None
    }
}

impl DayMonth {
    /// Day and month as numbers, `None` unless both fields are plain digits.
    /// Values like `31-02` or `01-13` are not range checked.
    pub fn numeric(&self) -> Option<(u32, u32)> {
        Some((two_digits(&self.day)?, two_digits(&self.month)?))
    }
}

/// Menu loop reading user choices from `input` and writing results to `output`
pub struct Session<'a, R, W> {
    repository: &'a HolidayRepository,
    config: &'a TrackerConfig,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(
        repository: &'a HolidayRepository,
        config: &'a TrackerConfig,
        input: R,
        output: W,
    ) -> Self {
        Session {
            repository,
            config,
            input,
            output,
        }
    }

    /// Run until the exit action is chosen or input is exhausted
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.display_menu()?;
            let line = match self.read_line()? {
                Some(line) => line,
                None => return Ok(()),
            };
            debug!("menu choice '{}'", line);
            match line.trim().parse::<MenuChoice>() {
                Ok(MenuChoice::ListByYear) => self.list_by_year()?,
                Ok(MenuChoice::SearchByDayMonth) => self.search_by_day_month()?,
                Ok(MenuChoice::SearchByName) => self.search_by_name()?,
                Ok(MenuChoice::ListAll) => self.list_all()?,
                Ok(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting the application. Goodbye!")?;
                    return Ok(());
                }
                Err(_) => writeln!(
                    self.output,
                    "Invalid choice. Please enter a number between 1 and 5."
                )?,
            }
        }
    }

    fn display_menu(&mut self) -> io::Result<()> {
        let span = self.config.year_span();
        writeln!(self.output, "\n===== PublicHolidayTracker =====")?;
        writeln!(self.output, "1. List holidays of a year")?;
        writeln!(self.output, "2. Search holidays by date (DD-MM)")?;
        writeln!(self.output, "3. Search holidays by name")?;
        writeln!(self.output, "4. List all holidays ({})", span)?;
        writeln!(self.output, "5. Exit")?;
        write!(self.output, "Your choice: ")?;
        self.output.flush()
    }

    // Line without its terminator, `None` at end of input
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let len = line.trim_end_matches(&['\r', '\n'][..]).len();
        line.truncate(len);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn print_block(&mut self, header: &str, holidays: &[&Holiday]) -> io::Result<()> {
        writeln!(self.output, "\n--- {} ---", header)?;
        for holiday in holidays {
            writeln!(self.output, "{}", holiday)?;
        }
        writeln!(self.output, "{}", RULE)
    }

    fn list_by_year(&mut self) -> io::Result<()> {
        let input = self
            .prompt("Which year would you like to see? (e.g. 2023): ")?
            .unwrap_or_default();
        let year = match input.trim().parse::<i32>() {
            Ok(year) if self.config.is_supported_year(year) => year,
            _ => return writeln!(self.output, "Invalid or unsupported year."),
        };
        let repository = self.repository;
        let holidays = repository.by_year(year);
        if holidays.is_empty() {
            writeln!(self.output, "\nNo holidays found for {}.", year)
        } else {
            self.print_block(&format!("Public holidays {}", year), &holidays)
        }
    }

    fn search_by_day_month(&mut self) -> io::Result<()> {
        let input = self
            .prompt("Enter day and month (DD-MM, e.g. 01-05): ")?
            .unwrap_or_default();
        let day_month = match input.parse::<DayMonth>() {
            Ok(day_month) => day_month,
            Err(_) => {
                return writeln!(
                    self.output,
                    "Invalid date format. Please use the DD-MM format."
                )
            }
        };
        let repository = self.repository;
        // Fields other than digits can never match a stored date
        let holidays = match day_month.numeric() {
            Some((day, month)) => repository.by_day_month(day, month),
            None => Vec::new(),
        };
        if holidays.is_empty() {
            writeln!(self.output, "\nNo public holiday found on {}.", input)
        } else {
            let span = self.config.year_span();
            self.print_block(&format!("Holidays on {} ({})", input, span), &holidays)
        }
    }

    fn search_by_name(&mut self) -> io::Result<()> {
        let input = self
            .prompt("Enter part of the holiday name: ")?
            .unwrap_or_default();
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return writeln!(self.output, "Please enter a search term.");
        }
        let repository = self.repository;
        let holidays = repository.by_substring(&needle);
        if holidays.is_empty() {
            writeln!(self.output, "\nNo public holiday matches '{}'.", needle)
        } else {
            let span = self.config.year_span();
            self.print_block(
                &format!("Holidays containing '{}' ({})", needle, span),
                &holidays,
            )
        }
    }

    fn list_all(&mut self) -> io::Result<()> {
        let repository = self.repository;
        if repository.is_empty() {
            return writeln!(self.output, "No holiday data loaded.");
        }
        let span = self.config.year_span();
        self.print_block(&format!("All public holidays {}", span), &repository.all())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::tests::turkish_holidays;
    use std::io::Cursor;

    fn repository() -> HolidayRepository {
        let mut all = Vec::new();
        for (_, mut holidays) in turkish_holidays() {
            all.append(&mut holidays);
        }
        HolidayRepository::from_holidays(all)
    }

    fn run_script(repository: &HolidayRepository, script: &str) -> String {
        let config = TrackerConfig::default();
        let mut output = Vec::new();
        Session::new(repository, &config, Cursor::new(script), &mut output)
            .run()
            .unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn parse_day_month() {
        let day_month = "01-05".parse::<DayMonth>().unwrap();
        assert_eq!(day_month.numeric(), Some((1, 5)));
        let day_month = "31-13".parse::<DayMonth>().unwrap();
        assert_eq!(day_month.numeric(), Some((31, 13)));
        assert!("1-05".parse::<DayMonth>().is_err());
        assert!("01_05".parse::<DayMonth>().is_err());
        assert!("     ".parse::<DayMonth>().is_err());
        assert!("".parse::<DayMonth>().is_err());
        assert!("01-05-2024".parse::<DayMonth>().is_err());
    }

    #[test]
    fn non_digit_day_month_fields() {
        for input in &["+1-05", "ab-cd", " 1-05", "01-+5"] {
            let day_month = input.parse::<DayMonth>().unwrap();
            assert_eq!(day_month.numeric(), None, "{}", input);
        }
    }

    #[test]
    fn parse_menu_choice() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::ListByYear));
        assert_eq!("5".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("6".parse::<MenuChoice>().is_err());
        assert!("exit".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn list_year() {
        let repo = repository();
        let out = run_script(&repo, "1\n2024\n5\n");
        assert!(out.contains("--- Public holidays 2024 ---"));
        let first = out.find("2024-01-01 - Yılbaşı (New Year's Day)").unwrap();
        let second = out.find("2024-05-01 - Emek ve Dayanışma Günü (Labour Day)").unwrap();
        let third = out.find("2024-10-29 - Cumhuriyet Bayramı (Republic Day)").unwrap();
        assert!(first < second && second < third);
        assert!(!out.contains("2023-01-01"));
        assert!(out.ends_with("Exiting the application. Goodbye!\n"));
    }

    #[test]
    fn reject_unsupported_year() {
        let repo = repository();
        let out = run_script(&repo, "1\n2099\n1\nabc\n5\n");
        assert_eq!(out.matches("Invalid or unsupported year.").count(), 2);
        assert!(!out.contains("No holidays found"));
    }

    #[test]
    fn configured_year_without_data() {
        let repo = HolidayRepository::new();
        let out = run_script(&repo, "1\n2025\n5\n");
        assert!(out.contains("No holidays found for 2025."));
    }

    #[test]
    fn search_day_month() {
        let repo = repository();
        let out = run_script(&repo, "2\n29-10\n5\n");
        assert!(out.contains("--- Holidays on 29-10 (2023-2025) ---"));
        assert!(out.contains("2024-10-29 - Cumhuriyet Bayramı (Republic Day)"));
        assert!(out.contains("2025-10-29 - Cumhuriyet Bayramı (Republic Day)"));
    }

    #[test]
    fn reject_malformed_day_month() {
        let repo = repository();
        let out = run_script(&repo, "2\n1-05\n2\n01_05\n5\n");
        assert_eq!(
            out.matches("Invalid date format. Please use the DD-MM format.")
                .count(),
            2
        );
        assert!(!out.contains("Emek"));
    }

    #[test]
    fn non_digit_day_month_finds_nothing() {
        let repo = repository();
        let out = run_script(&repo, "2\n+1-05\n2\nab-cd\n5\n");
        assert!(out.contains("No public holiday found on +1-05."));
        assert!(out.contains("No public holiday found on ab-cd."));
        assert!(!out.contains("Invalid date format"));
        assert!(!out.contains("2023-05-01"));
    }

    #[test]
    fn day_month_without_match() {
        let repo = repository();
        let out = run_script(&repo, "2\n01-13\n5\n");
        assert!(out.contains("No public holiday found on 01-13."));
    }

    #[test]
    fn search_name() {
        let repo = repository();
        let out = run_script(&repo, "3\n  REPUB \n5\n");
        assert!(out.contains("Holidays containing 'repub'"));
        assert!(out.contains("2024-10-29 - Cumhuriyet Bayramı (Republic Day)"));
        assert!(!out.contains("Labour Day"));
        let out = run_script(&repo, "3\nchristmas\n5\n");
        assert!(out.contains("No public holiday matches 'christmas'."));
    }

    #[test]
    fn blank_search_term() {
        let repo = repository();
        let out = run_script(&repo, "3\n   \n5\n");
        assert!(out.contains("Please enter a search term."));
        assert!(!out.contains("Holidays containing"));
    }

    #[test]
    fn list_everything() {
        let repo = repository();
        let out = run_script(&repo, "4\n5\n");
        assert!(out.contains("--- All public holidays 2023-2025 ---"));
        let lines: Vec<&str> = out
            .lines()
            .filter(|l| l.starts_with("202"))
            .collect();
        assert_eq!(lines.len(), 6);
        assert!(lines[0].starts_with("2023-01-01"));
        assert!(lines[5].starts_with("2025-10-29"));
    }

    #[test]
    fn list_without_data() {
        let repo = HolidayRepository::new();
        let out = run_script(&repo, "4\n5\n");
        assert!(out.contains("No holiday data loaded."));
    }

    #[test]
    fn invalid_choice_continues() {
        let repo = repository();
        let out = run_script(&repo, "9\n\n5\n");
        assert_eq!(
            out.matches("Invalid choice. Please enter a number between 1 and 5.")
                .count(),
            2
        );
        assert_eq!(out.matches("===== PublicHolidayTracker =====").count(), 3);
    }

    #[test]
    fn end_of_input_terminates() {
        let repo = repository();
        let out = run_script(&repo, "4\n");
        assert!(!out.contains("Goodbye"));
        let out = run_script(&repo, "1\n");
        assert!(out.contains("Invalid or unsupported year."));
    }

    #[test]
    fn windows_line_endings() {
        let repo = repository();
        let out = run_script(&repo, "2\r\n01-05\r\n5\r\n");
        assert!(out.contains("2023-05-01 - Emek ve Dayanışma Günü (Labour Day)"));
        assert!(out.contains("Goodbye"));
    }
}
