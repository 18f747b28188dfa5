//! Grouped text report over the ranked census.
//!
//! Output format, line for line:
//!
//! ```text
//! <basename>  => <count> products
//! <groupSize> PPDs with <count> products.
//! ...
//! Maximum length of Product string: <N>
//! ```
//!
//! One header per distinct count value showing the first ranked archive at
//! that count (double space before `=>`), a trailing summary per group, and
//! the maximum-length statistic last.

use std::io::{self, Write};

use crate::model::ArchiveProducts;

/// Display name for an archive identifier: the final path segment. Ranking
/// and grouping key on the full identifier; this is display-only.
fn basename(identifier: &str) -> &str {
    identifier.rsplit('/').next().unwrap_or(identifier)
}

/// Writes the grouped report for an already-ranked list.
///
/// An empty list emits only the maximum-length line.
pub fn write_report<W: Write>(
    out: &mut W,
    ranked: &[ArchiveProducts],
    max_product_len: usize,
) -> io::Result<()> {
    // (count, size) of the group currently being walked.
    let mut open_group: Option<(u64, u64)> = None;

    for entry in ranked {
        match open_group {
            Some((count, size)) if count == entry.products => {
                open_group = Some((count, size + 1));
            }
            _ => {
                if let Some((count, size)) = open_group {
                    writeln!(out, "{} PPDs with {} products.", size, count)?;
                }
                writeln!(
                    out,
                    "{}  => {} products",
                    basename(&entry.archive),
                    entry.products
                )?;
                open_group = Some((entry.products, 1));
            }
        }
    }

    if let Some((count, size)) = open_group {
        writeln!(out, "{} PPDs with {} products.", size, count)?;
    }
    writeln!(out, "Maximum length of Product string: {}", max_product_len)?;
    Ok(())
}

/// Renders the grouped report to a `String`.
pub fn render_report(ranked: &[ArchiveProducts], max_product_len: usize) -> String {
    let mut buf = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = write_report(&mut buf, ranked, max_product_len);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(archive: &str, products: u64) -> ArchiveProducts {
        ArchiveProducts {
            archive: archive.to_string(),
            products,
        }
    }

    #[test]
    fn test_headers_summaries_and_statistic() {
        let ranked = vec![entry("a.gz", 2), entry("b.gz", 1)];
        assert_eq!(
            render_report(&ranked, 2),
            "a.gz  => 2 products\n\
             1 PPDs with 2 products.\n\
             b.gz  => 1 products\n\
             1 PPDs with 1 products.\n\
             Maximum length of Product string: 2\n"
        );
    }

    #[test]
    fn test_empty_ranking_emits_only_the_statistic() {
        assert_eq!(render_report(&[], 0), "Maximum length of Product string: 0\n");
    }

    #[test]
    fn test_group_header_shows_first_archive_of_the_run() {
        let ranked = vec![
            entry("first.gz", 3),
            entry("second.gz", 3),
            entry("third.gz", 3),
            entry("last.gz", 1),
        ];
        assert_eq!(
            render_report(&ranked, 7),
            "first.gz  => 3 products\n\
             3 PPDs with 3 products.\n\
             last.gz  => 1 products\n\
             1 PPDs with 1 products.\n\
             Maximum length of Product string: 7\n"
        );
    }

    #[test]
    fn test_basename_is_display_only() {
        let ranked = vec![
            entry("model/laser/a.ppd.gz", 2),
            entry("model/inkjet/a.ppd.gz", 2),
        ];
        // Same basename, distinct keys: both stay in one group of two.
        assert_eq!(
            render_report(&ranked, 4),
            "a.ppd.gz  => 2 products\n\
             2 PPDs with 2 products.\n\
             Maximum length of Product string: 4\n"
        );
    }

    #[test]
    fn test_group_sizes_sum_to_archive_count() {
        let ranked = vec![
            entry("a", 5),
            entry("b", 5),
            entry("c", 2),
            entry("d", 2),
            entry("e", 2),
            entry("f", 1),
        ];
        let report = render_report(&ranked, 0);
        let total: u64 = report
            .lines()
            .filter(|l| l.contains("PPDs with"))
            .map(|l| l.split_whitespace().next().unwrap().parse::<u64>().unwrap())
            .sum();
        assert_eq!(total, ranked.len() as u64);
    }
}
