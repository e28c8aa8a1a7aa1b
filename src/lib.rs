//! # holiday_tracker
//!
//! Small toolbox to look up public holidays. Holidays of a configured set of
//! years are fetched once from a REST service (by default the public
//! Nager.Date API), kept in memory for the lifetime of the process and can
//! then be listed by year, searched by day and month or by a part of their
//! name. The binary wraps this in an interactive console menu.

pub mod config;
pub mod holiday;
pub mod provider;
pub mod repository;
pub mod session;

pub use config::{ConfigError, TrackerConfig};
pub use holiday::Holiday;
pub use provider::{FetchError, HolidayProvider, NagerDate};
pub use repository::{HolidayRepository, LoadReport};
pub use session::Session;
