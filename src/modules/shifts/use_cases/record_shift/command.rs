use crate::shared::core::validation::{
    ValidationError, parse_clock_time, parse_date, require_text,
};
use chrono::{NaiveDate, NaiveTime};

#[derive(Debug, Clone, PartialEq)]
pub struct RecordShift {
    pub driver_id: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

impl RecordShift {
    /// Parses the raw form values: date as YYYY-MM-DD, times as HH:MM.
    pub fn parse(
        driver_id: &str,
        date: &str,
        start_time: &str,
        end_time: &str,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            driver_id: require_text("driver_id", driver_id)?,
            date: parse_date(date)?,
            start_time: parse_clock_time(start_time)?,
            end_time: parse_clock_time(end_time)?,
        })
    }
}

#[cfg(test)]
mod record_shift_command_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_parse_form_values() {
        let command = RecordShift::parse("d1", "2024-03-10", "22:00", "06:00").unwrap();
        assert_eq!(command.date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
        assert_eq!(command.end_time, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    }

    #[rstest]
    #[case("", "2024-03-10", "08:00", "17:00", ValidationError::Empty { field: "driver_id" })]
    #[case("d1", "10/03/2024", "08:00", "17:00", ValidationError::InvalidDate("10/03/2024".into()))]
    #[case("d1", "2024-03-10", "8am", "17:00", ValidationError::InvalidTime("8am".into()))]
    #[case("d1", "2024-03-10", "08:00", "24:30", ValidationError::InvalidTime("24:30".into()))]
    fn it_should_reject_malformed_input(
        #[case] driver_id: &str,
        #[case] date: &str,
        #[case] start: &str,
        #[case] end: &str,
        #[case] expected: ValidationError,
    ) {
        assert_eq!(RecordShift::parse(driver_id, date, start, end), Err(expected));
    }
}
