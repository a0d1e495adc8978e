//! In-memory daily series keyed by [`DateKey`], and the per-year subsets the
//! historical filter extracts from them.

use crate::types::date_key::DateKey;
use serde::Serialize;
use std::collections::HashMap;

/// A daily series mapping each [`DateKey`] to one value (°C or mm/day).
///
/// Iteration follows insertion order, which for NASA POWER responses is the
/// document order (chronological). Keys are unique: inserting an existing key
/// replaces the stored value without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalSeries {
    entries: Vec<(DateKey, f64)>,
    index: HashMap<DateKey, usize>,
}

impl HistoricalSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, returning the previous value if the key was present.
    pub fn insert(&mut self, key: DateKey, value: f64) -> Option<f64> {
        match self.index.get(&key) {
            Some(&position) => {
                let previous = self.entries[position].1;
                self.entries[position].1 = value;
                Some(previous)
            }
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &DateKey) -> Option<f64> {
        self.index.get(key).map(|&position| self.entries[position].1)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (DateKey, f64)> + '_ {
        self.entries.iter().copied()
    }

    pub fn first_key(&self) -> Option<DateKey> {
        self.entries.first().map(|(key, _)| *key)
    }

    pub fn last_key(&self) -> Option<DateKey> {
        self.entries.last().map(|(key, _)| *key)
    }
}

impl FromIterator<(DateKey, f64)> for HistoricalSeries {
    fn from_iter<T: IntoIterator<Item = (DateKey, f64)>>(iter: T) -> Self {
        let iter = iter.into_iter();
        let mut series = Self::with_capacity(iter.size_hint().0);
        for (key, value) in iter {
            series.insert(key, value);
        }
        series
    }
}

/// The two daily series one retrieval yields for a location.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoricalRecord {
    /// Daily maximum temperature at 2 m, °C (`T2M_MAX`).
    pub temperature: HistoricalSeries,
    /// Bias-corrected total precipitation, mm/day (`PRECTOTCORR`).
    pub precipitation: HistoricalSeries,
}

/// One filtered observation: the year it was recorded and its value.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct YearValue {
    pub year: i32,
    pub value: f64,
}

/// The values of a [`HistoricalSeries`] that fell on the requested calendar
/// day(s), in the series' order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FilteredSubset {
    entries: Vec<YearValue>,
}

impl FilteredSubset {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &YearValue> {
        self.entries.iter()
    }

    pub fn values(&self) -> Vec<f64> {
        self.entries.iter().map(|entry| entry.value).collect()
    }

    /// `(year, value)` pairs ready for a trend fit.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.entries
            .iter()
            .map(|entry| (entry.year as f64, entry.value))
            .collect()
    }

    /// Arithmetic mean of the values, `None` when empty.
    pub fn mean(&self) -> Option<f64> {
        if self.entries.is_empty() {
            return None;
        }
        Some(self.entries.iter().map(|entry| entry.value).sum::<f64>() / self.entries.len() as f64)
    }
}

impl FromIterator<YearValue> for FilteredSubset {
    fn from_iter<T: IntoIterator<Item = YearValue>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(raw: &str) -> DateKey {
        DateKey::parse(raw).unwrap()
    }

    #[test]
    fn test_insert_keeps_order_and_unique_keys() {
        let mut series = HistoricalSeries::new();
        assert_eq!(series.insert(key("20220101"), 1.0), None);
        assert_eq!(series.insert(key("20200101"), 2.0), None);
        assert_eq!(series.insert(key("20220101"), 3.0), Some(1.0));

        assert_eq!(series.len(), 2);
        let collected: Vec<_> = series.iter().collect();
        assert_eq!(collected, vec![(key("20220101"), 3.0), (key("20200101"), 2.0)]);
        assert_eq!(series.get(&key("20200101")), Some(2.0));
        assert_eq!(series.first_key(), Some(key("20220101")));
        assert_eq!(series.last_key(), Some(key("20200101")));
    }

    #[test]
    fn test_subset_mean_and_points() {
        let subset: FilteredSubset = [
            YearValue { year: 2020, value: 1.0 },
            YearValue { year: 2021, value: 3.0 },
        ]
        .into_iter()
        .collect();
        assert_eq!(subset.mean(), Some(2.0));
        assert_eq!(subset.points(), vec![(2020.0, 1.0), (2021.0, 3.0)]);
        assert_eq!(FilteredSubset::default().mean(), None);
    }
}
