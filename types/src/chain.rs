use {
    serde::{Deserialize, Serialize},
    strum_macros::{AsRefStr, Display, EnumString},
};

/// Chains the explorer keeps a blob collection for. Parsing is case-sensitive
/// so only the lowercase identifiers are accepted.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Chain {
    Btc,
    Eth,
}

#[cfg(test)]
mod tests {
    use {super::*, assert_matches::assert_matches, rstest::rstest};

    #[rstest(
        raw,
        expected,
        case("btc", Chain::Btc),
        case("eth", Chain::Eth)
    )]
    fn test_chain_parses_lowercase(raw: &str, expected: Chain) {
        assert_eq!(raw.parse::<Chain>(), Ok(expected));
        assert_eq!(expected.to_string(), raw);
        assert_eq!(expected.as_ref(), raw);
    }

    #[rstest(raw, case("BTC"), case("Eth"), case(""), case("xyz"), case(" btc"))]
    fn test_chain_rejects_everything_else(raw: &str) {
        assert_matches!(raw.parse::<Chain>(), Err(strum::ParseError::VariantNotFound));
    }

    #[test]
    fn test_chain_serde_is_lowercase() {
        assert_eq!(serde_json::to_string(&Chain::Btc).unwrap(), r#""btc""#);
        assert_eq!(
            serde_json::from_str::<Chain>(r#""eth""#).unwrap(),
            Chain::Eth
        );
    }
}
