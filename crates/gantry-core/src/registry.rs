//! Typed resource registry.
//!
//! The backend exposes named resource collections. Rather than
//! string-matching resource names at every call site, callers resolve a
//! [`ResourceDef`] once at startup and consult its capabilities.

use crate::error::{Error, InvalidInputError};

/// What a resource supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    /// Records can be listed.
    pub listable: bool,
    /// Records can be created directly (as opposed to via ingestion).
    pub creatable: bool,
    /// Records can be partially updated.
    pub updatable: bool,
    /// Records can be deleted.
    pub deletable: bool,
    /// The collection has a CSV export endpoint.
    pub exportable: bool,
}

impl Capabilities {
    /// Listing only.
    pub const fn read_only() -> Self {
        Self {
            listable: true,
            creatable: false,
            updatable: false,
            deletable: false,
            exportable: false,
        }
    }

    /// Full create/update/delete support.
    pub const fn full() -> Self {
        Self {
            listable: true,
            creatable: true,
            updatable: true,
            deletable: true,
            exportable: false,
        }
    }
}

/// A named backend resource and its capabilities.
#[derive(Debug, Clone)]
pub struct ResourceDef {
    name: &'static str,
    capabilities: Capabilities,
}

impl ResourceDef {
    /// Create a resource definition.
    pub const fn new(name: &'static str, capabilities: Capabilities) -> Self {
        Self { name, capabilities }
    }

    /// The resource name as it appears in endpoint paths.
    pub fn name(&self) -> &str {
        self.name
    }

    /// What this resource supports.
    pub fn capabilities(&self) -> Capabilities {
        self.capabilities
    }
}

/// Registry of known resources, resolved once at startup.
#[derive(Debug, Clone)]
pub struct Registry {
    resources: Vec<ResourceDef>,
}

impl Registry {
    /// The resources served by the admin backend.
    ///
    /// Documents are created through ingestion rather than a direct
    /// create call, and logs are append-only on the backend side.
    pub fn builtin() -> Self {
        Self {
            resources: vec![
                ResourceDef::new(
                    "docs",
                    Capabilities {
                        listable: true,
                        creatable: false,
                        updatable: false,
                        deletable: true,
                        exportable: false,
                    },
                ),
                ResourceDef::new("users", Capabilities::full()),
                ResourceDef::new(
                    "logs",
                    Capabilities {
                        listable: true,
                        creatable: false,
                        updatable: false,
                        deletable: false,
                        exportable: true,
                    },
                ),
            ],
        }
    }

    /// Look up a resource by name.
    pub fn get(&self, name: &str) -> Option<&ResourceDef> {
        self.resources.iter().find(|def| def.name == name)
    }

    /// Resolve a resource name, failing for unknown names.
    pub fn resolve(&self, name: &str) -> Result<&ResourceDef, Error> {
        self.get(name).ok_or_else(|| {
            InvalidInputError::UnknownResource {
                name: name.to_string(),
            }
            .into()
        })
    }

    /// Iterate over all known resources.
    pub fn iter(&self) -> impl Iterator<Item = &ResourceDef> {
        self.resources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_resources_resolve() {
        let registry = Registry::builtin();
        assert!(registry.get("docs").is_some());
        assert!(registry.get("users").is_some());
        assert!(registry.get("logs").is_some());
    }

    #[test]
    fn unknown_resource_is_an_error() {
        let registry = Registry::builtin();
        assert!(registry.resolve("charts").is_err());
    }

    #[test]
    fn iter_lists_all_resources() {
        let registry = Registry::builtin();
        let names: Vec<&str> = registry.iter().map(|def| def.name()).collect();
        assert_eq!(names, ["docs", "users", "logs"]);
    }

    #[test]
    fn logs_are_read_only_but_exportable() {
        let registry = Registry::builtin();
        let caps = registry.get("logs").unwrap().capabilities();
        assert!(caps.listable);
        assert!(caps.exportable);
        assert!(!caps.deletable);
        assert!(!caps.updatable);
    }

    #[test]
    fn docs_are_deletable_but_not_directly_creatable() {
        let registry = Registry::builtin();
        let caps = registry.get("docs").unwrap().capabilities();
        assert!(caps.deletable);
        assert!(!caps.creatable);
    }
}
