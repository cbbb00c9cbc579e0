//! Load member records from CSV

use super::{AccountBalances, Member, WageInput};
use crate::error::Result;
use chrono::NaiveDate;
use csv::Reader;
use std::path::Path;

/// Default member file used by the batch binary
pub const DEFAULT_MEMBERS_PATH: &str = "data/members_sample.csv";

/// Raw CSV row matching the member file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "MemberID")]
    member_id: u32,
    #[serde(rename = "BirthDate")]
    birth_date: NaiveDate,
    #[serde(rename = "OrdinaryWages")]
    ordinary_wages: f64,
    #[serde(rename = "AdditionalWages")]
    additional_wages: f64,
    #[serde(rename = "YtdWages")]
    ytd_wages: f64,
    #[serde(rename = "OA")]
    oa: f64,
    #[serde(rename = "SA")]
    sa: f64,
    #[serde(rename = "MA")]
    ma: f64,
}

impl CsvRow {
    fn into_member(self) -> Result<Member> {
        Ok(Member {
            member_id: self.member_id,
            birth_date: self.birth_date,
            wages: WageInput::new(self.ordinary_wages, self.additional_wages, self.ytd_wages)?,
            balances: AccountBalances::new(self.oa, self.sa, self.ma)?,
        })
    }
}

/// Load all members from a CSV file
pub fn load_members<P: AsRef<Path>>(path: P) -> Result<Vec<Member>> {
    let reader = Reader::from_path(path)?;
    read_members(reader)
}

/// Load members from any reader (e.g., string buffer, stdin)
pub fn load_members_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Member>> {
    read_members(Reader::from_reader(reader))
}

fn read_members<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Member>> {
    let mut members = Vec::new();
    for result in reader.deserialize() {
        let row: CsvRow = result?;
        members.push(row.into_member()?);
    }
    log::info!("loaded {} member records", members.len());
    Ok(members)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    const SAMPLE: &str = "\
MemberID,BirthDate,OrdinaryWages,AdditionalWages,YtdWages,OA,SA,MA
1,1995-04-12,6000,0,0,25000,8000,6000
2,1966-11-30,4500,9000,54000,120000,180000,60000
";

    #[test]
    fn test_load_from_reader() {
        let members = load_members_from_reader(SAMPLE.as_bytes()).unwrap();
        assert_eq!(members.len(), 2);

        let m2 = &members[1];
        assert_eq!(m2.member_id, 2);
        assert_eq!(m2.birth_date, NaiveDate::from_ymd_opt(1966, 11, 30).unwrap());
        assert_eq!(m2.wages.additional_wages, 9000.0);
        assert_eq!(m2.balances.sa, 180000.0);
    }

    #[test]
    fn test_negative_wages_rejected() {
        let data = "\
MemberID,BirthDate,OrdinaryWages,AdditionalWages,YtdWages,OA,SA,MA
7,1990-01-01,-10,0,0,0,0,0
";
        let err = load_members_from_reader(data.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_load_sample_file() {
        let members = load_members(DEFAULT_MEMBERS_PATH).expect("Failed to load sample members");
        assert!(!members.is_empty());
        assert_eq!(members[0].member_id, 1);
    }
}
