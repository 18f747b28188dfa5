use serde::{Deserialize, Serialize};

/// Complete census output: ranked per-archive product counts plus the
/// longest-product-string statistic. This is what `--json` serializes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CensusSummary {
    /// Archives ordered by product count descending; equal counts keep their
    /// first-seen order from the scan stream.
    pub archives: Vec<ArchiveProducts>,

    /// Byte length of the longest product string seen, 0 if none.
    pub max_product_len: usize,
}

/// Product count for one archive, keyed by the full identifier as it appeared
/// on the stream (usually a file path).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveProducts {
    pub archive: String,
    pub products: u64,
}
