//! Catalog Store
//!
//! Holds the ordered, read-only sequence of licenses and an id index for
//! constant-time lookups. The built-in catalog is created once per process
//! on first access and never mutated afterwards.

mod builtin;
pub mod license;

pub use license::{Category, License};

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::CatalogError;

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

/// Immutable, ordered license catalog
#[derive(Debug, Clone)]
pub struct Catalog {
    licenses: Vec<License>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, validating ids and freedom levels
    pub fn new(licenses: Vec<License>) -> Result<Self, CatalogError> {
        if licenses.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut index = HashMap::with_capacity(licenses.len());
        for (pos, license) in licenses.iter().enumerate() {
            if license.freedom_level > 100 {
                return Err(CatalogError::FreedomOutOfRange {
                    id: license.id.clone(),
                    level: license.freedom_level,
                });
            }
            if index.insert(license.id.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateId(license.id.clone()));
            }
        }

        Ok(Self { licenses, index })
    }

    /// The compiled-in catalog shared by the whole process
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| {
            let licenses = builtin::licenses();
            let index = licenses
                .iter()
                .enumerate()
                .map(|(pos, l)| (l.id.clone(), pos))
                .collect();
            Catalog { licenses, index }
        })
    }

    /// Every license in definition order
    pub fn all(&self) -> &[License] {
        &self.licenses
    }

    /// Look up a license by id. Unknown ids return `None`.
    pub fn by_id(&self, id: &str) -> Option<&License> {
        self.index.get(id).map(|&pos| &self.licenses[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.licenses.len()
    }

    /// Always false for a validated catalog; present for API completeness
    pub fn is_empty(&self) -> bool {
        self.licenses.is_empty()
    }

    /// Number of licenses in a category
    pub fn count(&self, category: Category) -> usize {
        self.licenses
            .iter()
            .filter(|l| l.category == category)
            .count()
    }
}
