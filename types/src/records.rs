use {
    crate::serde_parsers::{deserialize_decimal_string, serialize_trimmed_f64},
    serde::{Deserialize, Serialize},
};

/// A data-availability commitment posted to a chain.
///
/// Every field falls back to its zero value when missing from an incoming
/// payload, so a partial JSON object still decodes.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blob {
    #[serde(rename = "BlobID")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Commitment")]
    pub commitment: String,
    #[serde(rename = "Block")]
    pub block: u64,
    /// ISO-8601 timestamp, kept as received.
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Fee", serialize_with = "serialize_trimmed_f64")]
    pub fee: f64,
    #[serde(rename = "Validator")]
    pub validator: String,
    #[serde(rename = "TxHash")]
    pub tx_hash: String,
    #[serde(rename = "State")]
    pub state: String,
}

/// Full view of a single blob, looked up by [Blob::id].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BlobDetail {
    #[serde(rename = "BlobID")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Commitment")]
    pub commitment: String,
    #[serde(rename = "BlockNum")]
    pub block: u64,
    #[serde(rename = "Timestamp")]
    pub timestamp: String,
    #[serde(rename = "Fee", serialize_with = "serialize_trimmed_f64")]
    pub fee: f64,
    #[serde(rename = "Validator")]
    pub validator: String,
    /// Stored size in bytes.
    #[serde(rename = "Size", skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(rename = "StorageState", skip_serializing_if = "Option::is_none")]
    pub storage_state: Option<String>,
    #[serde(rename = "Commitment_xy", skip_serializing_if = "Option::is_none")]
    pub commitment_xy: Option<CommitmentPoint>,
    #[serde(rename = "Proof", skip_serializing_if = "Option::is_none")]
    pub proof: Option<String>,
    /// Reference to the blob payload, usually an image URL.
    #[serde(rename = "Data", skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
}

/// Curve point of a commitment. Coordinates are decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitmentPoint {
    #[serde(deserialize_with = "deserialize_decimal_string")]
    pub x: String,
    #[serde(deserialize_with = "deserialize_decimal_string")]
    pub y: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeRole {
    Broadcast,
    Storage,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    #[serde(rename = "node_string")]
    pub name: String,
    #[serde(rename = "node_address")]
    pub address: String,
    /// Chain identifier. Free text so that nodes of chains without a blob
    /// collection can still be listed.
    pub chain: String,
    #[serde(rename = "node_type")]
    pub role: NodeRole,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidatorStatus {
    Active,
    Inactive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Validator {
    #[serde(rename = "validator_name")]
    pub name: String,
    #[serde(rename = "validator_address")]
    pub address: String,
    #[serde(rename = "validator_status")]
    pub status: ValidatorStatus,
    #[serde(serialize_with = "serialize_trimmed_f64")]
    pub total_staked_amount: f64,
    #[serde(serialize_with = "serialize_trimmed_f64")]
    pub available_staked_amount: f64,
    #[serde(serialize_with = "serialize_trimmed_f64")]
    pub commission_rate: f64,
    #[serde(serialize_with = "serialize_trimmed_f64")]
    pub voting_power: f64,
}

#[cfg(test)]
mod tests {
    use {super::*, serde_json::json};

    fn sample_blob() -> Blob {
        Blob {
            id: "7".to_string(),
            status: "Confirmed".to_string(),
            commitment: "Commit7".to_string(),
            block: 106,
            timestamp: "2024-06-01T12:00:00Z".to_string(),
            fee: 0.01,
            validator: "Validator1".to_string(),
            tx_hash: "0x0000007".to_string(),
            state: "Valid".to_string(),
        }
    }

    #[test]
    fn test_blob_uses_wire_field_names() {
        let value = serde_json::to_value(sample_blob()).unwrap();

        assert_eq!(
            value,
            json!({
                "BlobID": "7",
                "Status": "Confirmed",
                "Commitment": "Commit7",
                "Block": 106,
                "Timestamp": "2024-06-01T12:00:00Z",
                "Fee": 0.01,
                "Validator": "Validator1",
                "TxHash": "0x0000007",
                "State": "Valid",
            })
        );
    }

    #[test]
    fn test_blob_missing_fields_zero_fill() {
        let blob: Blob = serde_json::from_str(r#"{"BlobID": "42", "Fee": 1.5}"#).unwrap();

        assert_eq!(blob.id, "42");
        assert_eq!(blob.fee, 1.5);
        assert_eq!(blob.block, 0);
        assert_eq!(blob.status, "");
        assert_eq!(blob.tx_hash, "");
    }

    #[test]
    fn test_blob_wrong_field_type_fails() {
        assert!(serde_json::from_str::<Blob>(r#"{"Block": "one hundred"}"#).is_err());
        assert!(serde_json::from_str::<Blob>(r#"{"Block": -1}"#).is_err());
    }

    #[test]
    fn test_blob_detail_omits_absent_optionals() {
        let detail = BlobDetail {
            id: "1".to_string(),
            fee: 0.02,
            ..Default::default()
        };
        let value = serde_json::to_value(&detail).unwrap();

        assert_eq!(value["BlobID"], "1");
        assert_eq!(value["BlockNum"], 0);
        assert!(value.get("Size").is_none());
        assert!(value.get("StorageState").is_none());
        assert!(value.get("Commitment_xy").is_none());
        assert!(value.get("Proof").is_none());
        assert!(value.get("Data").is_none());
    }

    #[test]
    fn test_blob_detail_commitment_point_round_trip() {
        let input = json!({
            "BlobID": "3",
            "BlockNum": 102,
            "Size": 1024,
            "Commitment_xy": { "x": "1325", "y": "1186" },
        });
        let detail: BlobDetail = serde_json::from_value(input).unwrap();

        assert_eq!(detail.size, Some(1024));
        assert_eq!(
            detail.commitment_xy,
            Some(CommitmentPoint {
                x: "1325".to_string(),
                y: "1186".to_string(),
            })
        );

        let bad = json!({ "Commitment_xy": { "x": "0xff", "y": "1" } });
        assert!(serde_json::from_value::<BlobDetail>(bad).is_err());
    }

    #[test]
    fn test_validator_amounts_are_trimmed() {
        let validator = Validator {
            name: "Validator1".to_string(),
            address: "0x1234567890abcdef1234567890abcdef".to_string(),
            status: ValidatorStatus::Active,
            total_staked_amount: 1000.0,
            available_staked_amount: 800.0,
            commission_rate: 0.1,
            voting_power: 50.0,
        };

        assert_eq!(
            serde_json::to_string(&validator).unwrap(),
            r#"{"validator_name":"Validator1","validator_address":"0x1234567890abcdef1234567890abcdef","validator_status":"Active","total_staked_amount":1000,"available_staked_amount":800,"commission_rate":0.1,"voting_power":50}"#
        );
    }

    #[test]
    fn test_node_wire_names() {
        let node = Node {
            name: "Node 4".to_string(),
            address: "0x123sdsfdcnvnk324fvf7v78v89buvbv812".to_string(),
            chain: "eth".to_string(),
            role: NodeRole::Broadcast,
        };

        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "node_string": "Node 4",
                "node_address": "0x123sdsfdcnvnk324fvf7v78v89buvbv812",
                "chain": "eth",
                "node_type": "Broadcast",
            })
        );
    }
}
