//! Contract entity
//!
//! A contract belongs to exactly one client and carries its identifier
//! rather than a live reference, so ownership is one-directional and a
//! contract can be loaded and mutated without rehydrating its client.
//!
//! Activity is evaluated at read time: an open-ended contract is active,
//! and a dated one stays active while its end date lies in the future.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::{ClientId, ContractId, CoreError, Money};

/// A contract between the company and a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub id: ContractId,
    pub client_id: ClientId,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub cost: Money,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Contract {
    /// Creates an open-ended contract starting today
    pub fn new(client_id: ClientId, cost: Money) -> Self {
        let now = Utc::now();
        Self {
            id: ContractId::new_v7(),
            client_id,
            start_date: now.date_naive(),
            end_date: None,
            cost,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a contract with an explicit validity window
    ///
    /// The start date defaults to today when absent. An end date, when
    /// given, must not precede the start date.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the end date precedes the
    /// start date.
    pub fn with_dates(
        client_id: ClientId,
        cost: Money,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, CoreError> {
        let now = Utc::now();
        let start = start_date.unwrap_or_else(|| now.date_naive());
        if let Some(end) = end_date {
            if end < start {
                return Err(CoreError::validation(format!(
                    "End date {end} cannot be before start date {start}"
                )));
            }
        }
        Ok(Self {
            id: ContractId::new_v7(),
            client_id,
            start_date: start,
            end_date,
            cost,
            created_at: now,
            updated_at: now,
        })
    }

    /// Returns true while the contract has no end date or the end date is
    /// still in the future
    pub fn is_active(&self) -> bool {
        match self.end_date {
            None => true,
            Some(end) => end > Utc::now().date_naive(),
        }
    }

    /// Terminates the contract effective today and returns the
    /// termination date
    pub fn terminate(&mut self) -> NaiveDate {
        let today = Utc::now().date_naive();
        self.end_date = Some(today);
        self.updated_at = Utc::now();
        today
    }

    /// Replaces the cost if the new value differs
    ///
    /// Returns the refreshed `updated_at` timestamp, or `None` when the
    /// cost already had that value and nothing changed.
    pub fn update_cost(&mut self, new_cost: Money) -> Option<DateTime<Utc>> {
        if self.cost == new_cost {
            return None;
        }
        self.cost = new_cost;
        self.updated_at = Utc::now();
        Some(self.updated_at)
    }

    /// Sets the end date, validating it against the start date
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when the date precedes the start
    /// date.
    pub fn set_end_date(&mut self, end_date: NaiveDate) -> Result<DateTime<Utc>, CoreError> {
        if end_date < self.start_date {
            return Err(CoreError::validation(format!(
                "End date {end_date} cannot be before start date {}",
                self.start_date
            )));
        }
        self.end_date = Some(end_date);
        self.updated_at = Utc::now();
        Ok(self.updated_at)
    }

    /// Calendar duration from the start date to the end date, or to today
    /// for an open-ended contract
    pub fn duration(&self) -> ContractDuration {
        let until = self.end_date.unwrap_or_else(|| Utc::now().date_naive());
        ContractDuration::between(self.start_date, until)
    }

    /// Whole days from the start date to the end date, or to today for an
    /// open-ended contract
    pub fn duration_in_days(&self) -> i64 {
        let until = self.end_date.unwrap_or_else(|| Utc::now().date_naive());
        (until - self.start_date).num_days()
    }
}

/// A calendar period between two dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDuration {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl ContractDuration {
    /// Calendar difference between two dates, borrowing from months and
    /// years the way humans count anniversaries
    pub fn between(from: NaiveDate, to: NaiveDate) -> Self {
        if to <= from {
            return Self {
                years: 0,
                months: 0,
                days: 0,
            };
        }
        let mut years = to.year() - from.year();
        let mut months = to.month() as i32 - from.month() as i32;
        let mut days = to.day() as i32 - from.day() as i32;
        if days < 0 {
            months -= 1;
            let first_of_month = to.with_day(1).unwrap_or(to);
            let last_of_previous = first_of_month - Duration::days(1);
            days += last_of_previous.day() as i32;
        }
        if months < 0 {
            years -= 1;
            months += 12;
        }
        Self {
            years: years as u32,
            months: months as u32,
            days: days as u32,
        }
    }
}
