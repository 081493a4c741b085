use crate::domain::catalog::Catalog;

pub trait CatalogSource: Send + Sync {
    fn catalog(&self) -> &Catalog;
}
