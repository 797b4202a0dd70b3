use super::identity::{ComponentKey, DependencyKey};
use super::sbom_document::{DependencyComponent, RootComponent};
use serde::Serialize;

/// Output column names, in table order
pub const COLUMNS: [&str; 14] = [
    "bom_ref",
    "depended_by_ref",
    "component_name",
    "component_version",
    "component_description",
    "hash_algorithm",
    "hash_content",
    "component_supplier_name",
    "component_type",
    "component_archival_path",
    "component_author",
    "component_license_name",
    "external_reference_type",
    "external_reference_url",
];

/// One row of the flattened component table.
///
/// Root rows carry description, type, supplier, archival path and author;
/// dependency rows carry license and external reference columns instead.
/// The columns a kind does not carry are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRecord {
    pub bom_ref: String,
    pub depended_by_ref: Option<String>,
    pub component_name: String,
    pub component_version: String,
    pub component_description: Option<String>,
    pub hash_algorithm: String,
    pub hash_content: String,
    pub component_supplier_name: Option<String>,
    pub component_type: Option<String>,
    pub component_archival_path: Option<String>,
    pub component_author: Option<String>,
    pub component_license_name: Option<String>,
    pub external_reference_type: Option<String>,
    pub external_reference_url: Option<String>,
}

impl ComponentRecord {
    pub fn from_root(root: &RootComponent) -> Self {
        Self {
            bom_ref: root.bom_ref.clone(),
            depended_by_ref: None,
            component_name: root.name.clone(),
            component_version: root.version.clone(),
            component_description: Some(root.description.clone()),
            hash_algorithm: root.hashes.joined_algorithms(),
            hash_content: root.hashes.joined_contents(),
            component_supplier_name: Some(root.supplier_name.clone()),
            component_type: Some(root.component_type.clone()),
            component_archival_path: Some(root.archival_path.clone()),
            component_author: Some(root.author.clone()),
            component_license_name: None,
            external_reference_type: None,
            external_reference_url: None,
        }
    }

    pub fn from_dependency(dependency: &DependencyComponent, depended_by_ref: &str) -> Self {
        Self {
            bom_ref: dependency.bom_ref.clone(),
            depended_by_ref: Some(depended_by_ref.to_string()),
            component_name: dependency.name.clone(),
            component_version: dependency.version.clone(),
            component_description: None,
            hash_algorithm: dependency.hashes.joined_algorithms(),
            hash_content: dependency.hashes.joined_contents(),
            component_supplier_name: None,
            component_type: None,
            component_archival_path: None,
            component_author: None,
            component_license_name: Some(dependency.license_names.clone()),
            external_reference_type: Some(dependency.external_reference_types.clone()),
            external_reference_url: Some(dependency.external_reference_urls.clone()),
        }
    }

    /// Overwrites the mutable root fields with a newer document's values.
    /// Name, version, bom-ref and hashes are left as first recorded.
    pub fn merge_root(&mut self, root: &RootComponent) {
        self.component_description = Some(root.description.clone());
        self.component_type = Some(root.component_type.clone());
        self.component_supplier_name = Some(root.supplier_name.clone());
        self.component_archival_path = Some(root.archival_path.clone());
        self.component_author = Some(root.author.clone());
    }

    pub fn is_root(&self) -> bool {
        self.depended_by_ref.is_none()
    }

    pub fn component_key(&self) -> ComponentKey {
        ComponentKey::new(&self.component_name, &self.component_version)
    }

    /// Scoped identity of a dependency row; `None` for root rows
    pub fn dependency_key(&self) -> Option<DependencyKey> {
        self.depended_by_ref
            .as_deref()
            .map(|parent| DependencyKey::new(self.component_key(), parent))
    }

    /// Cell values in [`COLUMNS`] order; `None` is a null cell
    pub fn cells(&self) -> [Option<&str>; 14] {
        [
            Some(self.bom_ref.as_str()),
            self.depended_by_ref.as_deref(),
            Some(self.component_name.as_str()),
            Some(self.component_version.as_str()),
            self.component_description.as_deref(),
            Some(self.hash_algorithm.as_str()),
            Some(self.hash_content.as_str()),
            self.component_supplier_name.as_deref(),
            self.component_type.as_deref(),
            self.component_archival_path.as_deref(),
            self.component_author.as_deref(),
            self.component_license_name.as_deref(),
            self.external_reference_type.as_deref(),
            self.external_reference_url.as_deref(),
        ]
    }
}
