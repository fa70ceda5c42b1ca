//! Public holiday calendar.

use chrono::{Datelike, Days, NaiveDate, Weekday};
use std::collections::BTreeSet;

use super::types::{DatedHoliday, FixedHoliday, HolidayTable};

/// Public holidays by year, with Sunday holidays moved to the next free day.
///
/// # Example
///
/// ```
/// use kenya_payroll::config::HolidayCalendar;
/// use chrono::NaiveDate;
///
/// let calendar = HolidayCalendar::kenya();
/// // Madaraka Day 2025 fell on a Sunday and was observed on Monday.
/// assert!(calendar.is_holiday(NaiveDate::from_ymd_opt(2025, 6, 2).unwrap()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayCalendar {
    table: HolidayTable,
}

impl HolidayCalendar {
    /// Wraps a holiday table.
    pub fn new(table: HolidayTable) -> Self {
        Self { table }
    }

    /// The built-in Kenyan calendar with floating holidays for 2025-2027.
    pub fn kenya() -> Self {
        let fixed = [
            ("New Year's Day", 1, 1),
            ("Labour Day", 5, 1),
            ("Madaraka Day", 6, 1),
            ("Mazingira Day", 10, 10),
            ("Mashujaa Day", 10, 20),
            ("Jamhuri Day", 12, 12),
            ("Christmas Day", 12, 25),
            ("Boxing Day", 12, 26),
        ]
        .into_iter()
        .map(|(name, month, day)| FixedHoliday {
            name: name.to_string(),
            month,
            day,
        })
        .collect();

        let floating = [
            (2025, [(4, 18), (4, 21), (3, 31)]),
            (2026, [(4, 3), (4, 6), (3, 20)]),
            (2027, [(3, 26), (3, 29), (3, 10)]),
        ];
        let names = ["Good Friday", "Easter Monday", "Idd-ul-Fitr"];

        let variable = floating
            .into_iter()
            .map(|(year, dates)| {
                let holidays = names
                    .iter()
                    .zip(dates)
                    .filter_map(|(name, (month, day))| {
                        NaiveDate::from_ymd_opt(year, month, day).map(|date| DatedHoliday {
                            name: name.to_string(),
                            date,
                        })
                    })
                    .collect();
                (year, holidays)
            })
            .collect();

        Self::new(HolidayTable { fixed, variable })
    }

    /// Returns the underlying table.
    pub fn table(&self) -> &HolidayTable {
        &self.table
    }

    /// Returns true if floating holidays are known for `year`.
    pub fn covers_year(&self, year: i32) -> bool {
        self.table.variable.contains_key(&year)
    }

    /// Returns every holiday date observed in `year`.
    ///
    /// A holiday on a Sunday is also observed on the next day that is
    /// neither a holiday nor already an observed day.
    pub fn holidays_in(&self, year: i32) -> BTreeSet<NaiveDate> {
        let mut gazetted: BTreeSet<NaiveDate> = self
            .table
            .fixed
            .iter()
            .filter_map(|h| NaiveDate::from_ymd_opt(year, h.month, h.day))
            .collect();
        if let Some(floating) = self.table.variable.get(&year) {
            gazetted.extend(floating.iter().map(|h| h.date));
        }

        let mut observed = BTreeSet::new();
        for holiday in gazetted.iter().filter(|d| d.weekday() == Weekday::Sun) {
            let mut day = *holiday;
            while let Some(next) = day.checked_add_days(Days::new(1)) {
                day = next;
                if !gazetted.contains(&day) && !observed.contains(&day) {
                    observed.insert(day);
                    break;
                }
            }
        }

        gazetted.append(&mut observed);
        gazetted
    }

    /// Returns true if `date` is a gazetted or observed holiday.
    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays_in(date.year()).contains(&date)
    }
}

impl Default for HolidayCalendar {
    fn default() -> Self {
        Self::kenya()
    }
}
