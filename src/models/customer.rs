//! Customer (client) types.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// The authenticated account holder, as returned by `/customers/me`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: i64,
    pub email: String,
    pub full_name: String,
}

/// Whole months elapsed between a client's start date and `today`.
///
/// Calendar arithmetic (years * 12 + month delta), matching how the clients
/// table displays "time as client"; days within the month are ignored.
pub fn months_as_client(since: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - since.year();
    let months = today.month() as i32 - since.month() as i32;
    years * 12 + months
}
