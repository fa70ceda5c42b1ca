//! Statutory configuration for the payroll engine.
//!
//! This module owns the two versioned tables every calculation depends on:
//! the date-indexed [`RateTable`] and the [`HolidayCalendar`]. Both ship with
//! built-in Kenyan defaults and can be loaded from YAML by [`ConfigLoader`].
//!
//! # Example
//!
//! ```no_run
//! use kenya_payroll::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/kenya").unwrap();
//! println!("Loaded {} rate regimes", loader.config().rates.regimes().len());
//! ```

mod holidays;
mod loader;
mod rates;
mod types;

pub use holidays::HolidayCalendar;
pub use loader::ConfigLoader;
pub use rates::RateTable;
pub use types::{
    DatedHoliday, FixedHoliday, HolidayTable, PayrollConfig, RateRegime, StatutoryRateSnapshot,
    TaxBand,
};
