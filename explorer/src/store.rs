use {
    crate::fixtures,
    blob_explorer_types::{Blob, BlobDetail, Node, Validator},
    tokio::sync::{RwLock, RwLockReadGuard},
};

/// Builder for [Store]. Starts out empty; [Store::seeded] fills it with the
/// sample records.
#[derive(Default)]
pub struct StoreBuilder {
    eth_blobs: Vec<Blob>,
    btc_blobs: Vec<Blob>,
    blob_details: Vec<BlobDetail>,
    nodes: Vec<Node>,
    validators: Vec<Validator>,
}

impl StoreBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_eth_blobs(mut self, blobs: Vec<Blob>) -> Self {
        self.eth_blobs = blobs;
        self
    }

    pub fn with_btc_blobs(mut self, blobs: Vec<Blob>) -> Self {
        self.btc_blobs = blobs;
        self
    }

    pub fn with_blob_details(mut self, details: Vec<BlobDetail>) -> Self {
        self.blob_details = details;
        self
    }

    pub fn with_nodes(mut self, nodes: Vec<Node>) -> Self {
        self.nodes = nodes;
        self
    }

    pub fn with_validators(mut self, validators: Vec<Validator>) -> Self {
        self.validators = validators;
        self
    }

    pub fn build(self) -> Store {
        Store {
            eth_blobs: RwLock::new(self.eth_blobs),
            btc_blobs: self.btc_blobs,
            blob_details: self.blob_details,
            nodes: self.nodes,
            validators: self.validators,
        }
    }
}

/// In-memory record collections shared by all handlers.
///
/// Only the eth blob collection is mutable and it sits behind a single
/// [RwLock]. Everything else is fixed once the store is built.
pub struct Store {
    eth_blobs: RwLock<Vec<Blob>>,
    btc_blobs: Vec<Blob>,
    blob_details: Vec<BlobDetail>,
    nodes: Vec<Node>,
    validators: Vec<Validator>,
}

impl Store {
    pub fn builder() -> StoreBuilder {
        StoreBuilder::new()
    }

    /// Store holding the sample records served by a fresh process.
    pub fn seeded() -> Self {
        Self::builder()
            .with_eth_blobs(fixtures::eth_blobs())
            .with_btc_blobs(fixtures::btc_blobs())
            .with_blob_details(fixtures::blob_details())
            .with_nodes(fixtures::nodes())
            .with_validators(fixtures::validators())
            .build()
    }

    /// Read access to the eth collection. Writers wait until the guard drops.
    pub async fn eth_blobs(&self) -> RwLockReadGuard<'_, Vec<Blob>> {
        self.eth_blobs.read().await
    }

    pub fn btc_blobs(&self) -> &[Blob] {
        &self.btc_blobs
    }

    /// Append to the eth collection and return its new length.
    pub async fn append_eth_blob(&self, blob: Blob) -> usize {
        let mut blobs = self.eth_blobs.write().await;

        blobs.push(blob);
        blobs.len()
    }

    /// First detail record with the given id, if any.
    pub fn find_detail(&self, id: &str) -> Option<&BlobDetail> {
        self.blob_details.iter().find(|detail| detail.id == id)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Nodes whose chain identifier equals `chain` exactly.
    pub fn nodes_on(&self, chain: &str) -> Vec<&Node> {
        self.nodes.iter().filter(|node| node.chain == chain).collect()
    }

    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }
}

#[cfg(test)]
mod tests {
    use {super::*, std::sync::Arc};

    #[test]
    fn test_seeded_store_sizes() {
        let store = Store::seeded();

        assert_eq!(store.btc_blobs().len(), 20);
        assert_eq!(store.eth_blobs.try_read().unwrap().len(), 6);
        assert_eq!(store.blob_details.len(), 8);
        assert_eq!(store.nodes().len(), 4);
        assert_eq!(store.validators().len(), 2);
    }

    #[tokio::test]
    async fn test_append_only_touches_eth() {
        let store = Store::seeded();
        let blob = Blob {
            id: "99".to_string(),
            ..Default::default()
        };

        assert_eq!(store.append_eth_blob(blob.clone()).await, 7);

        let eth = store.eth_blobs().await;

        assert_eq!(eth.last(), Some(&blob));
        assert_eq!(store.btc_blobs().len(), 20);
    }

    #[tokio::test]
    async fn test_concurrent_appends_are_all_kept() {
        let store = Arc::new(Store::builder().build());

        let handles = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);

                tokio::spawn(async move {
                    store
                        .append_eth_blob(Blob {
                            id: i.to_string(),
                            ..Default::default()
                        })
                        .await
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.eth_blobs().await.len(), 32);
    }

    #[test]
    fn test_find_detail_returns_first_match() {
        let store = Store::seeded();

        assert_eq!(store.find_detail("3").map(|d| d.block), Some(102));
        assert!(store.find_detail("9").is_none());
        assert!(store.find_detail("").is_none());
    }

    #[test]
    fn test_nodes_on_chain() {
        let store = Store::seeded();

        let btc = store.nodes_on("btc");
        assert_eq!(btc.len(), 2);
        assert!(btc.iter().all(|n| n.chain == "btc"));

        assert!(store.nodes_on("sol").is_empty());
        assert!(store.nodes_on("BTC").is_empty());
    }
}
