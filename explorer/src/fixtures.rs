//! Sample records the store is seeded with at startup.

use blob_explorer_types::{
    Blob,
    BlobDetail,
    CommitmentPoint,
    Node,
    NodeRole,
    Validator,
    ValidatorStatus,
};

const POINT_A: (&str, &str) = (
    "13258099556300711131786106409830610145994596628458885637226012245852998915913",
    "11868554521347503492532980178914472193409060128712507356093850651849176305797",
);

const POINT_B: (&str, &str) = (
    "0987654321098765432109876543210987654321098765432109876543210987654321",
    "1234567890123456789012345678901234567890123456789012345678901234567890",
);

#[allow(clippy::too_many_arguments)]
fn blob(
    id: &str,
    status: &str,
    commitment: &str,
    block: u64,
    timestamp: &str,
    fee: f64,
    validator: &str,
    tx_hash: &str,
    state: &str,
) -> Blob {
    Blob {
        id: id.to_string(),
        status: status.to_string(),
        commitment: commitment.to_string(),
        block,
        timestamp: timestamp.to_string(),
        fee,
        validator: validator.to_string(),
        tx_hash: tx_hash.to_string(),
        state: state.to_string(),
    }
}

pub(crate) fn eth_blobs() -> Vec<Blob> {
    vec![
        blob("1", "Confirmed", "Commit1", 100, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000001", "Valid"),
        blob("2", "Pending", "Commit2", 101, "2024-06-02T12:00:00Z", 0.02, "Validator2", "0x0000002", "Valid"),
        blob("3", "Failed", "Commit3", 102, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000003", "Valid"),
        blob("4", "Confirmed", "Commit4", 103, "2024-06-01T12:00:00Z", 0.01, "Validator3", "0x0000004", "Valid"),
        blob("5", "Confirmed", "Commit5", 104, "2024-06-01T12:00:00Z", 0.01, "Validator4", "0x0000005", "Valid"),
        blob("6", "Confirmed", "Commit6", 105, "2024-06-01T12:00:00Z", 0.01, "Validator5", "0x0000006", "Valid"),
    ]
}

pub(crate) fn btc_blobs() -> Vec<Blob> {
    vec![
        blob("1", "Confirmed", "Commit1", 100, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000001", "Valid"),
        blob("2", "Pending", "Commit2", 101, "2024-06-02T12:00:00Z", 0.02, "Validator2", "0x0000002", "Valid"),
        blob("3", "Failed", "Commit3", 102, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000003", "Valid"),
        blob("4", "Confirmed", "Commit4", 103, "2024-06-01T12:00:00Z", 0.01, "Validator3", "0x0000004", "Valid"),
        blob("5", "Confirmed", "Commit5", 104, "2024-06-01T12:00:00Z", 0.01, "Validator4", "0x0000005", "Valid"),
        blob("6", "Confirmed", "Commit6", 105, "2024-06-01T12:00:00Z", 0.01, "Validator5", "0x0000006", "Valid"),
        blob("7", "Confirmed", "Commit7", 106, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000007", "Valid"),
        blob("8", "Confirmed", "Commit8", 107, "2024-06-01T12:00:00Z", 0.01, "Validator5", "0x0000008", "Valid"),
        blob("9", "Confirmed", "Commit9", 108, "2024-06-01T12:00:00Z", 0.01, "Validator2", "0x0000009", "Valid"),
        blob("10", "Confirmed", "Commit10", 109, "2024-06-01T12:00:00Z", 0.01, "Validator6", "0x0000010", "Valid"),
        blob("11", "Confirmed", "Commit11", 110, "2024-06-01T12:00:00Z", 0.01, "Validator3", "0x0000011", "Valid"),
        blob("12", "Confirmed", "Commit12", 111, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000012", "Valid"),
        blob("13", "Confirmed", "Commit13", 112, "2024-06-01T12:00:00Z", 0.01, "Validator2", "0x0000013", "Valid"),
        blob("14", "Confirmed", "Commit14", 113, "2024-06-01T12:00:00Z", 0.01, "Validator7", "0x0000014", "Valid"),
        blob("15", "Confirmed", "Commit15", 114, "2024-06-01T12:00:00Z", 0.01, "Validator7", "0x0000015", "Valid"),
        blob("16", "Confirmed", "Commit16", 115, "2024-06-01T12:00:00Z", 0.01, "Validator7", "0x0000016", "Inalid"),
        blob("17", "Confirmed", "Commit17", 116, "2024-06-01T12:00:00Z", 0.01, "Validator5", "0x0000017", "Inalid"),
        blob("18", "Confirmed", "Commit18", 117, "2024-06-01T12:00:00Z", 0.01, "Validator2", "0x0000018", "Inalid"),
        blob("19", "Confirmed", "Commit19", 118, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000019", "Inalid"),
        blob("20", "Confirmed", "Commit20", 119, "2024-06-01T12:00:00Z", 0.01, "Validator1", "0x0000020", "Inalid"),
    ]
}

fn detail(id: &str, commitment: &str, block: u64, validator: &str, confirmed: bool) -> BlobDetail {
    let (status, timestamp, fee, size, point, proof, data) = if confirmed {
        (
            "Confirmed",
            "2024-06-01T12:00:00Z",
            0.01,
            1024,
            POINT_A,
            "0x1234567890abcdef",
            "https://example.com/image1.jpg",
        )
    } else {
        (
            "Pending",
            "2024-06-02T12:00:00Z",
            0.02,
            2048,
            POINT_B,
            "0xabcdef1234567890",
            "https://example.com/image2.jpg",
        )
    };

    BlobDetail {
        id: id.to_string(),
        status: status.to_string(),
        commitment: commitment.to_string(),
        block,
        timestamp: timestamp.to_string(),
        fee,
        validator: validator.to_string(),
        size: Some(size),
        storage_state: Some("valid".to_string()),
        commitment_xy: Some(CommitmentPoint {
            x: point.0.to_string(),
            y: point.1.to_string(),
        }),
        proof: Some(proof.to_string()),
        data: Some(data.to_string()),
    }
}

pub(crate) fn blob_details() -> Vec<BlobDetail> {
    vec![
        detail("1", "0x1234567890abcdef", 100, "Validator1", true),
        detail("2", "0xabcdef1234567891", 101, "Validator2", false),
        detail("3", "0x1234567891abcdef", 102, "Validator1", true),
        detail("4", "0xabcdef1234567892", 103, "Validator3", false),
        detail("5", "0x1234567892abcdef", 104, "Validator2", true),
        detail("6", "0xabcdef1234567893", 105, "Validator1", false),
        detail("7", "0x1234567893abcdef", 106, "Validator1", true),
        detail("8", "0xabcdef1234567894", 107, "Validator2", false),
    ]
}

fn node(name: &str, address: &str, chain: &str, role: NodeRole) -> Node {
    Node {
        name: name.to_string(),
        address: address.to_string(),
        chain: chain.to_string(),
        role,
    }
}

pub(crate) fn nodes() -> Vec<Node> {
    vec![
        node("Node 1", "0xdjshfdcnvnk324fvf7v78vb89bu98vbv8b", "btc", NodeRole::Broadcast),
        node("Node 2", "0xdjshfdcnvnk324fvf7v78vb89bu98vbv8b", "btc", NodeRole::Storage),
        node("Node 3", "0xdjshfdcnvnk324fvf7v78vb89bu98vbv11", "eth", NodeRole::Storage),
        node("Node 4", "0x123sdsfdcnvnk324fvf7v78v89buvbv812", "eth", NodeRole::Broadcast),
    ]
}

pub(crate) fn validators() -> Vec<Validator> {
    vec![
        Validator {
            name: "Validator1".to_string(),
            address: "0x1234567890abcdef1234567890abcdef".to_string(),
            status: ValidatorStatus::Active,
            total_staked_amount: 1000.0,
            available_staked_amount: 800.0,
            commission_rate: 0.1,
            voting_power: 50.0,
        },
        Validator {
            name: "Validator2".to_string(),
            address: "0xabcdef1234567890abcdef1234567890".to_string(),
            status: ValidatorStatus::Inactive,
            total_staked_amount: 500.0,
            available_staked_amount: 300.0,
            commission_rate: 0.2,
            voting_power: 20.0,
        },
    ]
}
