//! Filters applied to blob collections before they are returned.
//!
//! Two flavours exist. [filter_by_category] matches a single field picked by
//! a [SearchCategory] and backs the search endpoint. [filter_free_text] ORs a
//! substring match over several fields and backs the paginated listings.

use {
    crate::error::ExplorerError,
    blob_explorer_types::Blob,
    strum_macros::{AsRefStr, EnumString},
};

/// Field a search query is matched against.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, AsRefStr)]
pub enum SearchCategory {
    /// Substring of the blob id.
    #[strum(serialize = "BlobID")]
    BlobId,
    /// Substring of the commitment.
    Commitment,
    /// Block number, compared as decimal text.
    BlockNum,
    /// Exact transaction hash.
    TxHash,
    /// Exact validator name.
    Validator,
}

impl SearchCategory {
    pub fn matches(self, blob: &Blob, query: &str) -> bool {
        match self {
            Self::BlobId => blob.id.contains(query),
            Self::Commitment => blob.commitment.contains(query),
            Self::BlockNum => blob.block.to_string() == query,
            Self::TxHash => blob.tx_hash == query,
            Self::Validator => blob.validator == query,
        }
    }
}

/// Validate raw search parameters. Both must be present and non-empty before
/// the category is looked at.
pub fn parse_search<'a>(
    query: Option<&'a str>,
    category: Option<&str>,
) -> Result<(SearchCategory, &'a str), ExplorerError> {
    let (query, category) = match (query, category) {
        (Some(query), Some(category)) if !query.is_empty() && !category.is_empty() => {
            (query, category)
        }
        _ => return Err(ExplorerError::MissingParameter("query or category")),
    };

    let category = category
        .parse::<SearchCategory>()
        .map_err(|_| ExplorerError::InvalidCategory)?;

    Ok((category, query))
}

/// Blobs whose `category` field matches `query`, in collection order.
pub fn filter_by_category<'a>(
    blobs: &'a [Blob],
    category: SearchCategory,
    query: &str,
) -> Vec<&'a Blob> {
    blobs
        .iter()
        .filter(|blob| category.matches(blob, query))
        .collect()
}

/// Blobs where any of id, commitment, status, validator or tx hash contains
/// `filter`. An empty filter keeps everything.
pub fn filter_free_text<'a>(blobs: &'a [Blob], filter: &str) -> Vec<&'a Blob> {
    blobs
        .iter()
        .filter(|blob| {
            filter.is_empty()
                || [
                    &blob.id,
                    &blob.commitment,
                    &blob.status,
                    &blob.validator,
                    &blob.tx_hash,
                ]
                .iter()
                .any(|field| field.contains(filter))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::fixtures,
        assert_matches::assert_matches,
        rstest::rstest,
    };

    fn ids(blobs: &[&Blob]) -> Vec<String> {
        blobs.iter().map(|b| b.id.clone()).collect()
    }

    #[rstest(
        raw,
        expected,
        case("BlobID", SearchCategory::BlobId),
        case("Commitment", SearchCategory::Commitment),
        case("BlockNum", SearchCategory::BlockNum),
        case("TxHash", SearchCategory::TxHash),
        case("Validator", SearchCategory::Validator)
    )]
    fn test_category_names(raw: &str, expected: SearchCategory) {
        assert_eq!(raw.parse::<SearchCategory>(), Ok(expected));
        assert_eq!(expected.as_ref(), raw);
    }

    #[rstest(
        query,
        category,
        case(None, Some("BlobID")),
        case(Some("1"), None),
        case(Some(""), Some("BlobID")),
        case(Some("1"), Some("")),
        case(None, Some("Nonsense"))
    )]
    fn test_missing_parameters_checked_first(query: Option<&str>, category: Option<&str>) {
        assert_matches!(
            parse_search(query, category),
            Err(ExplorerError::MissingParameter(_))
        );
    }

    #[rstest(category, case("blobid"), case("Block"), case("Status"), case("txhash"))]
    fn test_unknown_category(category: &str) {
        assert_matches!(
            parse_search(Some("1"), Some(category)),
            Err(ExplorerError::InvalidCategory)
        );
    }

    #[test]
    fn test_block_num_is_exact() {
        let blobs = fixtures::btc_blobs();

        let found = filter_by_category(&blobs, SearchCategory::BlockNum, "105");
        assert_eq!(ids(&found), vec!["6"]);

        assert!(filter_by_category(&blobs, SearchCategory::BlockNum, "10").is_empty());
        assert!(filter_by_category(&blobs, SearchCategory::BlockNum, "0105").is_empty());
    }

    #[test]
    fn test_blob_id_is_substring() {
        let blobs = fixtures::btc_blobs();
        let found = filter_by_category(&blobs, SearchCategory::BlobId, "1");

        assert_eq!(
            ids(&found),
            vec!["1", "10", "11", "12", "13", "14", "15", "16", "17", "18", "19"]
        );
    }

    #[test]
    fn test_commitment_is_case_sensitive_substring() {
        let blobs = fixtures::btc_blobs();

        assert_eq!(
            filter_by_category(&blobs, SearchCategory::Commitment, "Commit2").len(),
            2
        );
        assert!(filter_by_category(&blobs, SearchCategory::Commitment, "commit2").is_empty());
    }

    #[test]
    fn test_tx_hash_and_validator_are_exact() {
        let blobs = fixtures::btc_blobs();

        let found = filter_by_category(&blobs, SearchCategory::TxHash, "0x0000007");
        assert_eq!(ids(&found), vec!["7"]);
        assert!(filter_by_category(&blobs, SearchCategory::TxHash, "0x000000").is_empty());

        let found = filter_by_category(&blobs, SearchCategory::Validator, "Validator7");
        assert_eq!(ids(&found), vec!["14", "15", "16"]);
        assert!(filter_by_category(&blobs, SearchCategory::Validator, "Validator").is_empty());
    }

    #[test]
    fn test_free_text_empty_keeps_order() {
        let blobs = fixtures::btc_blobs();
        let found = filter_free_text(&blobs, "");

        assert_eq!(found.len(), blobs.len());
        assert!(found.iter().zip(blobs.iter()).all(|(a, b)| *a == b));
    }

    #[rstest(
        filter,
        expected,
        case("Pending", vec!["2"]),
        case("Failed", vec!["3"]),
        case("Validator5", vec!["6"]),
        case("0x0000004", vec!["4"]),
        case("Commit1", vec!["1"]),
        case("nothing", vec![])
    )]
    fn test_free_text_matches_any_field(filter: &str, expected: Vec<&str>) {
        let blobs = fixtures::eth_blobs();

        assert_eq!(ids(&filter_free_text(&blobs, filter)), expected);
    }

    #[test]
    fn test_free_text_ignores_block_and_state() {
        let blobs = fixtures::eth_blobs();

        assert!(filter_free_text(&blobs, "105").is_empty());
        assert!(filter_free_text(&blobs, "Valid ").is_empty());
    }
}
