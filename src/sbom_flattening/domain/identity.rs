/// Identity of a component across all processed documents: (name, version)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentKey {
    name: String,
    version: String,
}

impl ComponentKey {
    pub fn new(name: &str, version: &str) -> Self {
        Self {
            name: name.to_string(),
            version: version.to_string(),
        }
    }
}

/// Identity of a dependency, scoped to the root that declares it.
///
/// The same library may appear once under every parent, never twice under one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DependencyKey {
    component: ComponentKey,
    depended_by_ref: String,
}

impl DependencyKey {
    pub fn new(component: ComponentKey, depended_by_ref: &str) -> Self {
        Self {
            component,
            depended_by_ref: depended_by_ref.to_string(),
        }
    }
}
