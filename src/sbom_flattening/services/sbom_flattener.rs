use crate::sbom_flattening::domain::{
    ComponentKey, ComponentRecord, DependencyKey, RecordTable, SbomDocument,
};

/// What a single [`SbomFlattener::process`] call did to the table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// The root matched an existing row and was merged into it
    pub root_merged: bool,
    pub dependencies_added: usize,
    /// Dependencies already recorded under the same root
    pub dependencies_skipped: usize,
    /// Components whose hash algorithm and content lists differ in length
    pub misaligned_hashes: usize,
}

/// SbomFlattener service turning a stream of SBOM documents into one table
///
/// Pure domain logic with no I/O. Documents must be fed in traversal order:
/// a later document's root overwrites the mutable fields of an earlier row
/// with the same name and version, while dependencies keep their first
/// occurrence under each root.
#[derive(Debug, Default)]
pub struct SbomFlattener {
    table: RecordTable,
}

impl SbomFlattener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one document into the table
    ///
    /// # Arguments
    /// * `document` - A parsed SBOM document; missing or oddly shaped sections read as empty
    ///
    /// # Returns
    /// A summary of the merges and inserts performed
    pub fn process(&mut self, document: &SbomDocument) -> ProcessOutcome {
        let mut outcome = ProcessOutcome::default();

        let root = document.root_component();
        if !root.hashes.is_aligned() {
            outcome.misaligned_hashes += 1;
        }
        let root_key = ComponentKey::new(&root.name, &root.version);
        match self.table.find_component(&root_key) {
            Some(index) => {
                if let Some(existing) = self.table.get_mut(index) {
                    existing.merge_root(&root);
                }
                outcome.root_merged = true;
            }
            None => {
                self.table.push(ComponentRecord::from_root(&root));
            }
        }

        for dependency in document.dependencies() {
            if !dependency.hashes.is_aligned() {
                outcome.misaligned_hashes += 1;
            }
            let key = DependencyKey::new(
                ComponentKey::new(&dependency.name, &dependency.version),
                &root.bom_ref,
            );
            if self.table.find_dependency(&key).is_some() {
                outcome.dependencies_skipped += 1;
                continue;
            }
            self.table
                .push(ComponentRecord::from_dependency(&dependency, &root.bom_ref));
            outcome.dependencies_added += 1;
        }

        outcome
    }

    pub fn table(&self) -> &RecordTable {
        &self.table
    }

    /// Hands over the accumulated records in insertion order
    pub fn finalize(self) -> Vec<ComponentRecord> {
        self.table.into_records()
    }
}
