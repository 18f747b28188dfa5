//! Per-archive frequency tally and ranking.

use std::cmp::Reverse;
use std::collections::HashMap;

use crate::census::extract::Record;
use crate::model::ArchiveProducts;

/// Running census state: product counts per archive plus the longest product
/// string seen so far. Owned exclusively by the aggregation step; no I/O.
#[derive(Debug, Default)]
pub struct ProductTally {
    counts: HashMap<String, ArchiveEntry>,
    next_seq: usize,
    max_product_len: usize,
}

#[derive(Debug)]
struct ArchiveEntry {
    count: u64,
    /// First-seen position in the stream, the ranking tie-break.
    seq: usize,
}

impl ProductTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one record into the tally. Absent fields contribute nothing;
    /// counts only ever increase.
    pub fn record(&mut self, record: Record) {
        if let Some(archive) = record.archive {
            let next_seq = &mut self.next_seq;
            let entry = self.counts.entry(archive).or_insert_with(|| {
                let seq = *next_seq;
                *next_seq += 1;
                ArchiveEntry { count: 0, seq }
            });
            entry.count += 1;
        }
        if let Some(product) = record.product {
            self.max_product_len = self.max_product_len.max(product.len());
        }
    }

    /// Byte length of the longest product string seen, 0 if none.
    pub fn max_product_len(&self) -> usize {
        self.max_product_len
    }

    /// Number of distinct archive identifiers seen.
    pub fn distinct_archives(&self) -> usize {
        self.counts.len()
    }

    /// Sum of all per-archive counts, which equals the number of raw lines
    /// that yielded a non-empty identifier.
    pub fn total_counted(&self) -> u64 {
        self.counts.values().map(|e| e.count).sum()
    }

    /// Archives ordered by product count descending; equal counts keep their
    /// first-seen order. The sequence index makes the sort key total, so the
    /// result never depends on map iteration order.
    pub fn ranked(&self) -> Vec<ArchiveProducts> {
        let mut entries: Vec<(&String, &ArchiveEntry)> = self.counts.iter().collect();
        entries.sort_unstable_by_key(|(_, e)| (Reverse(e.count), e.seq));
        entries
            .into_iter()
            .map(|(archive, e)| ArchiveProducts {
                archive: archive.clone(),
                products: e.count,
            })
            .collect()
    }
}
