use crate::types::date_key::DateKey;
use crate::types::series::{FilteredSubset, HistoricalSeries, YearValue};
use log::debug;

pub trait HistoricalFilterExt {
    /// Keeps the values recorded on the same month and day as `target`, in
    /// every year of the series.
    ///
    /// # Arguments
    /// * `target`: Only its month and day are used.
    ///
    /// # Returns
    /// A [`FilteredSubset`] in series order. Empty (not an error) when no
    /// entry matches.
    fn filter_by_day(&self, target: &DateKey) -> FilteredSubset;

    /// Keeps the values whose month and day lie within `[start, end]`
    /// (inclusive), in every year of the series.
    ///
    /// The years of `start` and `end` are ignored. The range never wraps
    /// around New Year: when `start` falls later in the calendar than `end`
    /// (e.g. Dec 20 to Jan 5) nothing matches.
    ///
    /// # Returns
    /// A [`FilteredSubset`] in series order, possibly empty.
    fn filter_by_range(&self, start: &DateKey, end: &DateKey) -> FilteredSubset;
}

impl HistoricalFilterExt for HistoricalSeries {
    fn filter_by_day(&self, target: &DateKey) -> FilteredSubset {
        let subset: FilteredSubset = self
            .iter()
            .filter(|(key, _)| key.matches_day_of_year(target))
            .map(|(key, value)| YearValue {
                year: key.year(),
                value,
            })
            .collect();
        debug!(
            "filter_by_day: {:02}-{:02} matched {} of {} entries",
            target.month(),
            target.day(),
            subset.len(),
            self.len()
        );
        subset
    }

    fn filter_by_range(&self, start: &DateKey, end: &DateKey) -> FilteredSubset {
        let subset: FilteredSubset = self
            .iter()
            .filter(|(key, _)| key.in_calendar_range(start, end))
            .map(|(key, value)| YearValue {
                year: key.year(),
                value,
            })
            .collect();
        debug!(
            "filter_by_range: {:02}-{:02}..={:02}-{:02} matched {} of {} entries",
            start.month(),
            start.day(),
            end.month(),
            end.day(),
            subset.len(),
            self.len()
        );
        subset
    }
}
