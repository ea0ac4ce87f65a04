use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A named calendar window used to scope statistics.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Week,
    Month,
    Quarter,
    Year,
}

impl Period {
    pub fn window(self, reference: NaiveDate) -> DateWindow {
        match self {
            Self::Week => week_window(reference),
            Self::Month => month_window(reference),
            Self::Quarter => quarter_window(reference),
            Self::Year => year_window(reference),
        }
    }

    /// Display label the dashboard passes to the statistics aggregator.
    pub fn label(self) -> &'static str {
        match self {
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::Quarter => "This Quarter",
            Self::Year => "This Year",
        }
    }
}

/// Every calendar day of a period, in order, plus its inclusive bounds.
#[derive(Debug, Clone, Serialize)]
pub struct DateWindow {
    pub dates: Vec<NaiveDate>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn span(start: NaiveDate, end: NaiveDate) -> DateWindow {
    let dates = start.iter_days().take_while(|d| *d <= end).collect();
    DateWindow { dates, start, end }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn last_of_month(date: NaiveDate) -> NaiveDate {
    // Day 1 plus 31 days always lands in the following month.
    let into_next = first_of_month(date) + Duration::days(31);
    into_next - Duration::days(i64::from(into_next.day()))
}

/// Monday through Sunday of the week containing `reference`.
pub fn week_window(reference: NaiveDate) -> DateWindow {
    let start = reference - Duration::days(i64::from(reference.weekday().num_days_from_monday()));
    span(start, start + Duration::days(6))
}

/// First through last day of `reference`'s month (28-31 days).
pub fn month_window(reference: NaiveDate) -> DateWindow {
    span(first_of_month(reference), last_of_month(reference))
}

/// Every day of the three-month quarter containing `reference`
/// (Jan-Mar, Apr-Jun, Jul-Sep, Oct-Dec).
pub fn quarter_window(reference: NaiveDate) -> DateWindow {
    let mut start = first_of_month(reference);
    while start.month0() % 3 != 0 {
        start = first_of_month(start - Duration::days(1));
    }
    // Day 1 of the quarter plus 62 days lands in its third month.
    span(start, last_of_month(start + Duration::days(62)))
}

/// Jan 1 through Dec 31 of `reference`'s year (365 or 366 days).
pub fn year_window(reference: NaiveDate) -> DateWindow {
    let start = reference - Duration::days(i64::from(reference.ordinal0()));
    let days = if start.leap_year() { 366 } else { 365 };
    span(start, start + Duration::days(days - 1))
}

/// Navigation heading for a period, e.g. "Feb 2 - Feb 8, 2026",
/// "February 2026", "Q1 2026", "2026".
pub fn period_heading(period: Period, window: &DateWindow) -> String {
    match period {
        Period::Week => format!(
            "{} - {}",
            window.start.format("%b %-d"),
            window.end.format("%b %-d, %Y")
        ),
        Period::Month => window.start.format("%B %Y").to_string(),
        Period::Quarter => format!("Q{} {}", window.start.month0() / 3 + 1, window.start.year()),
        Period::Year => window.start.year().to_string(),
    }
}

/// Chart label for a weekly view: abbreviated weekday name ("Mon").
pub fn weekday_label(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Chart label for a monthly view: day of month without padding ("5").
pub fn day_of_month_label(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}
