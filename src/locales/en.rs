// SPDX-License-Identifier: PMPL-1.0-or-later

//! English, the host library's built-in base locale.
//!
//! The dictionary is empty: English phrases are the dictionary keys, so every
//! lookup falls through to the phrase itself.

use super::StaticFormat;

pub(super) const CODE: &str = "en";

pub(super) const DICTIONARY: &[(&str, &str)] = &[];

pub(super) const FORMAT: StaticFormat = StaticFormat {
    days: ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"],
    short_days: ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"],
    months: [
        "January", "February", "March", "April", "May", "June", "July", "August",
        "September", "October", "November", "December",
    ],
    short_months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
    date: "%-m/%-d/%Y",
    decimal: ".",
    thousands: ",",
    periods: Some(["AM", "PM"]),
    date_time: Some("%x, %X"),
    time: Some("%-I:%M:%S %p"),
    grouping: Some(&[3]),
    currency: Some(["$", ""]),
};
