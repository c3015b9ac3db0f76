//! Calendar month grid
//!
//! Pure date math for rendering a month view and matching reminders to days.
//! A reminder belongs to a grid cell iff its stored `reminder_date` string
//! equals the zero-padded `YYYY-MM-DD` key of that cell. Navigation produces
//! new views; stored reminder dates are never touched.

use crate::resources::types::Reminder;
use chrono::{Datelike, NaiveDate};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The (year, month) pair a calendar screen is looking at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthView {
    year: i32,
    month: u32,
}

impl MonthView {
    /// Create a view for `month` (1-12) of `year`. Returns `None` for an
    /// out-of-range month.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { year, month })
    }

    /// The view containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// English month name, for the grid header.
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// The following month, rolling into the next year after December.
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The preceding month, rolling into the prior year before January.
    pub fn prev(&self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// Number of days in the viewed month.
    pub fn days_in_month(&self) -> u32 {
        self.next()
            .first_day()
            .pred_opt()
            .expect("month start has a predecessor")
            .day()
    }

    /// Number of empty leading cells in a Sunday-first grid (0-6).
    pub fn leading_blanks(&self) -> u32 {
        self.first_day().weekday().num_days_from_sunday()
    }

    /// Zero-padded `YYYY-MM-DD` key for a day of this month.
    pub fn day_key(&self, day: u32) -> String {
        format!("{:04}-{:02}-{:02}", self.year, self.month, day)
    }

    /// Whether `date` falls inside the viewed month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Reminders whose stored date equals this view's key for `day`.
    pub fn reminders_on_day<'a>(&self, reminders: &'a [Reminder], day: u32) -> Vec<&'a Reminder> {
        let key = self.day_key(day);
        reminders
            .iter()
            .filter(|reminder| reminder.reminder_date == key)
            .collect()
    }

    fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
            .expect("month is validated at construction")
    }
}
