//! # Blob Explorer
//!
//! HTTP service exposing blob, node and validator records of a
//! data-availability network. Records live in an in-memory [Store] seeded
//! with sample data at startup. The only mutation is appending blobs to the
//! eth collection.
//!
//! Routes:
//!
//! - `GET /api/home-data?chain=` returns a whole chain collection.
//! - `POST /api/create-blob` appends a blob.
//! - `GET /api/search?q=&category=` matches one field of the btc blobs.
//! - `GET /api/{btc,eth}-blobs?chain=&page=&filter=` pages through blobs.
//! - `GET /api/blob-detail/{chain}/{id}` returns a single detail record.
//! - `GET /api/nodes?chain=` and `GET /api/getValidator` list the rest.
//! - `GET /health` for liveness checks.

mod conf;
mod error;
mod fixtures;
mod pagination;
mod query;
mod routes;
mod server;
mod store;

pub use {
    anyhow::Result as AnyResult,
    conf::{expand_tilde, ServerConf, CONF_PATH},
    error::ExplorerError,
    pagination::{paginate, parse_page, Page, PageInfo, PER_PAGE},
    query::{filter_by_category, filter_free_text, parse_search, SearchCategory},
    routes::routes,
    server::{bind, serve},
    store::{Store, StoreBuilder},
};
