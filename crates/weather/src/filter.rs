use chrono::NaiveDate;

use crate::record::WeatherRecord;

/// A date-range filter over weather records.
///
/// Missing bounds leave the corresponding side of the range open.
/// Records whose date does not parse are filtered out: they cannot be
/// positioned on any date-driven chart.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateFilter {
    pub(crate) start_date: Option<NaiveDate>,
    pub(crate) end_date: Option<NaiveDate>,
}

impl DateFilter {
    pub fn new(start_date: Option<NaiveDate>, end_date: Option<NaiveDate>) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    pub(crate) fn by_date(&self, date: NaiveDate) -> bool {
        match (self.start_date, self.end_date) {
            (None, None) => true,
            (None, Some(ref end)) => date.le(end),
            (Some(ref start), None) => date.ge(start),
            (Some(ref start), Some(ref end)) => date.ge(start) && date.le(end),
        }
    }

    pub(crate) fn matches(&self, record: &WeatherRecord) -> bool {
        match record.day() {
            Ok(date) => self.by_date(date),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_filter_matches_any_date() {
        let filter = DateFilter::default();

        assert!(filter.by_date(date(2018, 1, 5)));
        assert!(filter.by_date(date(1970, 1, 1)));
    }

    #[test]
    fn filter_bounds_are_inclusive() {
        let filter = DateFilter::new(Some(date(2018, 1, 1)), Some(date(2018, 12, 31)));

        assert!(filter.by_date(date(2018, 1, 1)));
        assert!(filter.by_date(date(2018, 12, 31)));
        assert!(!filter.by_date(date(2017, 12, 31)));
        assert!(!filter.by_date(date(2019, 1, 1)));
    }

    #[test]
    fn half_open_filter_checks_one_bound() {
        let from = DateFilter::new(Some(date(2018, 6, 1)), None);
        let until = DateFilter::new(None, Some(date(2018, 6, 1)));

        assert!(from.by_date(date(2019, 1, 1)));
        assert!(!from.by_date(date(2018, 5, 31)));
        assert!(until.by_date(date(2017, 1, 1)));
        assert!(!until.by_date(date(2018, 6, 2)));
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }
}
