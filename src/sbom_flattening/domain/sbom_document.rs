use serde_json::Value;

/// Name of the custom property carrying a component's archival path
const ARCHIVAL_PATH_PROPERTY: &str = "componentArchivalPath";

/// Hash algorithms and digests of one component, in source order.
///
/// The two lists are filtered independently: an entry with an `alg` but no
/// `content` contributes only to `algorithms`, and vice versa. The lists can
/// therefore differ in length for partially populated hash entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HashList {
    pub algorithms: Vec<String>,
    pub contents: Vec<String>,
}

impl HashList {
    fn from_component(component: &Value) -> Self {
        let hashes = array_field(component, "hashes");
        Self {
            algorithms: non_empty(hashes.iter().map(|h| text_field(h, "alg"))),
            contents: non_empty(hashes.iter().map(|h| text_field(h, "content"))),
        }
    }

    /// Algorithms as one comma-joined cell
    pub fn joined_algorithms(&self) -> String {
        self.algorithms.join(",")
    }

    /// Digests as one comma-joined cell
    pub fn joined_contents(&self) -> String {
        self.contents.join(",")
    }

    /// Every algorithm has a digest at the same position
    pub fn is_aligned(&self) -> bool {
        self.algorithms.len() == self.contents.len()
    }
}

/// The artifact an SBOM document describes (`metadata.component`)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootComponent {
    pub bom_ref: String,
    pub name: String,
    pub version: String,
    pub description: String,
    pub component_type: String,
    pub supplier_name: String,
    pub archival_path: String,
    pub author: String,
    pub hashes: HashList,
}

/// One entry of a document's top-level `components` list
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyComponent {
    pub bom_ref: String,
    pub name: String,
    pub version: String,
    pub license_names: String,
    pub external_reference_types: String,
    pub external_reference_urls: String,
    pub hashes: HashList,
}

/// A parsed SBOM document.
///
/// Wraps the raw JSON tree; every accessor tolerates missing keys and values
/// of the wrong shape by falling back to empty strings and empty lists.
#[derive(Debug, Clone, PartialEq)]
pub struct SbomDocument {
    value: Value,
}

impl SbomDocument {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    pub fn root_component(&self) -> RootComponent {
        let empty = Value::Null;
        let component = self
            .value
            .get("metadata")
            .and_then(|m| m.get("component"))
            .unwrap_or(&empty);

        RootComponent {
            bom_ref: text_field(component, "bom-ref"),
            name: text_field(component, "name"),
            version: text_field(component, "version"),
            description: text_field(component, "description"),
            component_type: text_field(component, "type"),
            supplier_name: component
                .get("supplier")
                .map(|s| text_field(s, "name"))
                .unwrap_or_default(),
            archival_path: archival_path(component),
            author: text_field(component, "author"),
            hashes: HashList::from_component(component),
        }
    }

    pub fn dependencies(&self) -> Vec<DependencyComponent> {
        array_field(&self.value, "components")
            .iter()
            .map(|dependency| {
                let references = array_field(dependency, "externalReferences");
                DependencyComponent {
                    bom_ref: text_field(dependency, "bom-ref"),
                    name: text_field(dependency, "name"),
                    version: text_field(dependency, "version"),
                    license_names: join_non_empty(
                        array_field(dependency, "licenses")
                            .iter()
                            .map(|l| l.get("license").map(|x| text_field(x, "name")).unwrap_or_default()),
                    ),
                    external_reference_types: join_non_empty(
                        references.iter().map(|r| text_field(r, "type")),
                    ),
                    external_reference_urls: join_non_empty(
                        references.iter().map(|r| text_field(r, "url")),
                    ),
                    hashes: HashList::from_component(dependency),
                }
            })
            .collect()
    }
}

/// Value of the archival path property; the last matching property wins.
fn archival_path(component: &Value) -> String {
    array_field(component, "properties")
        .iter()
        .filter(|p| p.get("name").and_then(Value::as_str) == Some(ARCHIVAL_PATH_PROPERTY))
        .map(|p| text_field(p, "value"))
        .last()
        .unwrap_or_default()
}

/// Reads a scalar field as text. Numbers and booleans keep their JSON spelling;
/// anything else (absent, null, object, array) reads as empty.
fn text_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

fn non_empty(items: impl Iterator<Item = String>) -> Vec<String> {
    items.filter(|s| !s.is_empty()).collect()
}

fn join_non_empty(items: impl Iterator<Item = String>) -> String {
    non_empty(items).join(",")
}
