//! Catalog inspection command

use crate::catalog::Catalog;

/// Word count for one length bucket
pub struct LengthCount {
    pub length: usize,
    pub count: usize,
}

/// Composition of the catalog by word length
pub struct CatalogReport {
    pub total: usize,
    pub buckets: Vec<LengthCount>,
}

/// Summarize the catalog's length buckets, shortest first
#[must_use]
pub fn catalog_report(catalog: &Catalog) -> CatalogReport {
    let buckets = catalog
        .lengths()
        .into_iter()
        .map(|length| LengthCount {
            length,
            count: catalog.words_of_length(length).len(),
        })
        .collect();

    CatalogReport {
        total: catalog.len(),
        buckets,
    }
}
