//! Age bands used to select contribution and allocation rates

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Age bracket that selects the applicable rate tuples
///
/// Upper bounds are inclusive: a member aged exactly 35 is in `UpTo35`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AgeBand {
    #[serde(rename = "35 years and below")]
    UpTo35,
    #[serde(rename = "Above 35 to 45 years")]
    Above35To45,
    #[serde(rename = "Above 45 to 50 years")]
    Above45To50,
    #[serde(rename = "Above 50 to 55 years")]
    Above50To55,
    #[serde(rename = "Above 55 to 60 years")]
    Above55To60,
    #[serde(rename = "Above 60 to 65 years")]
    Above60To65,
    #[serde(rename = "Above 65 years")]
    Above65,
}

impl AgeBand {
    /// All bands in ascending age order
    pub const ALL: [AgeBand; 7] = [
        AgeBand::UpTo35,
        AgeBand::Above35To45,
        AgeBand::Above45To50,
        AgeBand::Above50To55,
        AgeBand::Above55To60,
        AgeBand::Above60To65,
        AgeBand::Above65,
    ];

    /// Position of the band in [`AgeBand::ALL`], used to index rate tables
    pub fn index(self) -> usize {
        self as usize
    }

    /// Map an integer age to its band
    pub fn from_age(age: i32) -> Self {
        if age <= 35 {
            AgeBand::UpTo35
        } else if age <= 45 {
            AgeBand::Above35To45
        } else if age <= 50 {
            AgeBand::Above45To50
        } else if age <= 55 {
            AgeBand::Above50To55
        } else if age <= 60 {
            AgeBand::Above55To60
        } else if age <= 65 {
            AgeBand::Above60To65
        } else {
            AgeBand::Above65
        }
    }

    /// Classify a member by birth date as of `today`
    ///
    /// Future birth dates produce a negative age and land in `UpTo35`;
    /// callers should run [`validate_birth_date`] first.
    pub fn classify(birth_date: NaiveDate, today: NaiveDate) -> Self {
        Self::from_age(age_on(birth_date, today))
    }

    /// Classify a member against the local calendar date
    pub fn classify_today(birth_date: NaiveDate) -> Self {
        Self::classify(birth_date, Local::now().date_naive())
    }

    /// Published label, e.g. "Above 55 to 60 years"
    pub fn label(&self) -> &'static str {
        match self {
            AgeBand::UpTo35 => "35 years and below",
            AgeBand::Above35To45 => "Above 35 to 45 years",
            AgeBand::Above45To50 => "Above 45 to 50 years",
            AgeBand::Above50To55 => "Above 50 to 55 years",
            AgeBand::Above55To60 => "Above 55 to 60 years",
            AgeBand::Above60To65 => "Above 60 to 65 years",
            AgeBand::Above65 => "Above 65 years",
        }
    }

    /// Compact code accepted on the command line
    pub fn short_code(&self) -> &'static str {
        match self {
            AgeBand::UpTo35 => "<=35",
            AgeBand::Above35To45 => "35-45",
            AgeBand::Above45To50 => "45-50",
            AgeBand::Above50To55 => "50-55",
            AgeBand::Above55To60 => "55-60",
            AgeBand::Above60To65 => "60-65",
            AgeBand::Above65 => ">65",
        }
    }
}

impl fmt::Display for AgeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgeBand {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        AgeBand::ALL
            .iter()
            .copied()
            .find(|band| {
                band.label().eq_ignore_ascii_case(trimmed) || band.short_code() == trimmed
            })
            .ok_or_else(|| Error::InvalidInput(format!("unknown age band: {trimmed}")))
    }
}

/// Whole years of age on `today`
pub fn age_on(birth_date: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    age
}

/// Reject birth dates after the evaluation date
pub fn validate_birth_date(birth_date: NaiveDate, today: NaiveDate) -> Result<()> {
    if birth_date > today {
        return Err(Error::InvalidInput(format!(
            "birth date {birth_date} is after evaluation date {today}"
        )));
    }
    Ok(())
}
