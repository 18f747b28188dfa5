//! Field extraction from raw search-output lines.
//!
//! Each raw line carries up to two fields, extracted independently of each
//! other: the archive identifier before the first `:`, and the product string
//! between the first pair of `"` delimiters. Because the two extractions are
//! independent, a line may contribute to the per-archive count without
//! contributing to the length statistic, and vice versa.

/// Fields extracted from one raw line. Either may be absent on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Everything before the first `:`, kept verbatim (including any path).
    pub archive: Option<String>,

    /// The text between the first pair of `"` delimiters.
    pub product: Option<String>,
}

/// Returns the archive identifier: the substring before the first `:`.
///
/// A line with no `:` yields the whole line as the identifier — the search
/// tool normally prefixes every line with `<path>:`, but free-form
/// description text is expected noise, not an error. Only an empty result
/// is `None`.
pub fn archive_identifier(line: &str) -> Option<&str> {
    let id = match line.split_once(':') {
        Some((head, _)) => head,
        None => line,
    };
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// Returns the text between the first and second `"` on the line, if such a
/// pair exists.
pub fn product_string(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once('"')?;
    let (product, _) = rest.split_once('"')?;
    Some(product)
}

/// Extracts a [`Record`] from one raw line. Never fails: a missing delimiter
/// degrades to an absent field.
pub fn extract(line: &str) -> Record {
    Record {
        archive: archive_identifier(line).map(str::to_owned),
        product: product_string(line).map(str::to_owned),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_both_fields() {
        let record = extract("a.gz:*Product: \"XY\"");
        assert_eq!(record.archive.as_deref(), Some("a.gz"));
        assert_eq!(record.product.as_deref(), Some("XY"));
    }

    #[test]
    fn test_identifier_is_cut_at_first_colon_only() {
        assert_eq!(
            archive_identifier("model/a.ppd.gz:*Product: \"(X: 2)\""),
            Some("model/a.ppd.gz")
        );
    }

    #[test]
    fn test_line_without_colon_is_its_own_identifier() {
        let record = extract("justtext");
        assert_eq!(record.archive.as_deref(), Some("justtext"));
        assert_eq!(record.product, None);
    }

    #[test]
    fn test_empty_line_has_no_identifier() {
        assert_eq!(archive_identifier(""), None);
        // A leading colon means an empty identifier too.
        assert_eq!(archive_identifier(":rest"), None);
    }

    #[test]
    fn test_product_needs_a_closing_quote() {
        assert_eq!(product_string("a.gz:*Product: \"unterminated"), None);
        assert_eq!(product_string("a.gz:*Product: no quotes"), None);
    }

    #[test]
    fn test_product_is_first_quoted_span() {
        assert_eq!(product_string("a.gz:\"first\" and \"second\""), Some("first"));
        assert_eq!(product_string("a.gz:\"\""), Some(""));
    }

    #[test]
    fn test_fields_are_independent() {
        // Quoted field but empty identifier: length statistic only.
        let record = extract(":x \"deep\"");
        assert_eq!(record.archive, None);
        assert_eq!(record.product.as_deref(), Some("deep"));
    }
}
