//! In-memory calorie reference table
//!
//! Built once at startup, then shared read-only between requests.

use std::collections::HashMap;

use crate::models::ReferenceRow;

/// Read access the analyzer needs from a reference table
pub trait CalorieLookup {
    /// Find the row whose name equals `name` ignoring case
    fn lookup_case_insensitive(&self, name: &str) -> Option<&ReferenceRow>;

    /// Every row, in table order
    fn all_rows(&self) -> &[ReferenceRow];

    fn is_empty(&self) -> bool {
        self.all_rows().is_empty()
    }
}

/// Rows in file order with a case-folded name index
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    rows: Vec<ReferenceRow>,
    index: HashMap<String, usize>,
}

impl ReferenceTable {
    /// A table with no rows (data not loaded)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a table, keeping the first row for each case-insensitive name
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = ReferenceRow>,
    {
        let mut table = Self::empty();
        for row in rows {
            table.insert(row);
        }
        table
    }

    /// Add a row unless its name is already present; returns whether it was added
    pub(crate) fn insert(&mut self, row: ReferenceRow) -> bool {
        let key = row.lookup_key();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.rows.len());
        self.rows.push(row);
        true
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Food names in table order, optionally filtered by a case-insensitive substring
    pub fn food_names(&self, query: Option<&str>, limit: usize) -> Vec<&str> {
        let needle = query
            .map(|q| q.trim().to_lowercase())
            .filter(|q| !q.is_empty());

        self.rows
            .iter()
            .filter(|row| match &needle {
                Some(needle) => row.lookup_key().contains(needle.as_str()),
                None => true,
            })
            .take(limit)
            .map(ReferenceRow::food_name)
            .collect()
    }
}

impl CalorieLookup for ReferenceTable {
    fn lookup_case_insensitive(&self, name: &str) -> Option<&ReferenceRow> {
        self.index
            .get(&name.to_lowercase())
            .and_then(|&i| self.rows.get(i))
    }

    fn all_rows(&self) -> &[ReferenceRow] {
        &self.rows
    }
}
