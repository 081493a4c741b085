use std::path::Path;

use crate::domain::catalog::Catalog;
use crate::error::Result;
use crate::ports::catalog::CatalogSource;

/// In-memory catalog source. The stock content ships with the binary;
/// a YAML file can replace it wholesale for demos.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    catalog: Catalog,
}

impl StaticCatalog {
    pub fn seeded() -> Self {
        StaticCatalog { catalog: super::seed::seed_catalog() }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let catalog: Catalog = serde_yml::from_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            destinations = catalog.destinations.len(),
            stays = catalog.stays.len(),
            packages = catalog.packages.len(),
            "loaded catalog from file"
        );
        Ok(StaticCatalog { catalog })
    }
}

impl CatalogSource for StaticCatalog {
    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
