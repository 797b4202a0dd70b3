use super::component_record::{ComponentRecord, COLUMNS};
use super::identity::{ComponentKey, DependencyKey};
use std::collections::HashMap;

/// Insertion-ordered component records with hash indexes for identity lookup.
///
/// Rows are only ever appended, so a row index handed out by [`push`](Self::push)
/// stays valid for the lifetime of the table.
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    records: Vec<ComponentRecord>,
    /// Newest row for every (name, version), whatever its kind
    latest_by_component: HashMap<ComponentKey, usize>,
    /// Newest dependency row for every (name, version, parent)
    latest_by_dependency: HashMap<DependencyKey, usize>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the most recently added row with this name and version.
    ///
    /// Matches root and dependency rows alike.
    pub fn find_component(&self, key: &ComponentKey) -> Option<usize> {
        self.latest_by_component.get(key).copied()
    }

    pub fn find_dependency(&self, key: &DependencyKey) -> Option<usize> {
        self.latest_by_dependency.get(key).copied()
    }

    /// Appends a row and returns its index
    pub fn push(&mut self, record: ComponentRecord) -> usize {
        let index = self.records.len();
        if let Some(dependency_key) = record.dependency_key() {
            self.latest_by_dependency.insert(dependency_key, index);
        }
        self.latest_by_component.insert(record.component_key(), index);
        self.records.push(record);
        index
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ComponentRecord> {
        self.records.get_mut(index)
    }

    pub fn into_records(self) -> Vec<ComponentRecord> {
        self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn root_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_root()).count()
    }

    pub fn dependency_count(&self) -> usize {
        self.len() - self.root_count()
    }

    /// Column view by name, one entry per row
    pub fn column(&self, name: &str) -> Option<Vec<Option<&str>>> {
        let position = COLUMNS.iter().position(|c| *c == name)?;
        Some(self.records.iter().map(|r| r.cells()[position]).collect())
    }
}
