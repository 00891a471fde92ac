use std::collections::HashMap;
use std::str::FromStr;

use chrono::Month;

use crate::modules::volunteer_log::core::collection::EntryCollection;
use crate::modules::volunteer_log::core::entry::Entry;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub key: String,
    pub entries: Vec<Entry>,
}

/// Month buckets in first-seen order. Entries inside a bucket keep collection order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyGroups {
    groups: Vec<MonthGroup>,
}

impl MonthlyGroups {
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MonthGroup> {
        self.groups.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|group| group.key.as_str())
    }

    pub fn get(&self, key: &str) -> Option<&[Entry]> {
        self.groups
            .iter()
            .find(|group| group.key == key)
            .map(|group| group.entries.as_slice())
    }

    /// Keys ordered by the year and month they encode. Keys that do not parse
    /// (including `"Unknown"`) follow, in first-seen order.
    pub fn chronological_keys(&self) -> Vec<&str> {
        let mut dated: Vec<(i32, u32, &str)> = Vec::new();
        let mut undated: Vec<&str> = Vec::new();
        for key in self.keys() {
            match parse_group_key(key) {
                Some((year, month)) => dated.push((year, month.number_from_month(), key)),
                None => undated.push(key),
            }
        }
        dated.sort_by_key(|(year, month, _)| (*year, *month));
        dated
            .into_iter()
            .map(|(_, _, key)| key)
            .chain(undated)
            .collect()
    }
}

impl<'a> IntoIterator for &'a MonthlyGroups {
    type Item = &'a MonthGroup;
    type IntoIter = std::slice::Iter<'a, MonthGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Partition the collection by derived month key. Never sorts.
pub fn group_by_month(collection: &EntryCollection) -> MonthlyGroups {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<MonthGroup> = Vec::new();

    for entry in collection {
        let key = entry.derived_group_key();
        match positions.get(&key) {
            Some(&position) => groups[position].entries.push(entry.clone()),
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push(MonthGroup {
                    key,
                    entries: vec![entry.clone()],
                });
            }
        }
    }

    MonthlyGroups { groups }
}

/// `"2024-March"` -> `(2024, March)`.
pub fn parse_group_key(key: &str) -> Option<(i32, Month)> {
    let (year, month) = key.split_once('-')?;
    let year = year.trim().parse::<i32>().ok()?;
    let month = Month::from_str(month.trim()).ok()?;
    Some((year, month))
}
