use {
    crate::{
        error::ExplorerError,
        pagination::{paginate, parse_page, PER_PAGE},
        query::{filter_by_category, filter_free_text, parse_search},
        store::Store,
    },
    blob_explorer_types::{Blob, Chain},
    futures_util::stream::{Stream, StreamExt},
    serde::Serialize,
    serde_json::Value,
    std::{convert::Infallible, sync::Arc},
    warp::{
        http::{header, HeaderValue, StatusCode},
        hyper::body::{Buf, Bytes},
        reject,
        reply::Response,
        Filter,
        Rejection,
        Reply,
    },
};

/// Query string parameters understood by the API. Absent and empty values
/// are treated the same. A repeated key keeps its first value.
#[derive(Debug, Default, PartialEq, Eq)]
struct Params {
    chain: Option<String>,
    page: Option<String>,
    filter: Option<String>,
    q: Option<String>,
    category: Option<String>,
}

impl FromIterator<(String, String)> for Params {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut params = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_str() {
                "chain" => &mut params.chain,
                "page" => &mut params.page,
                "filter" => &mut params.filter,
                "q" => &mut params.q,
                "category" => &mut params.category,
                _ => continue,
            };

            slot.get_or_insert(value);
        }

        params
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

/// Build every API route on top of the given [Store].
///
/// Paths are matched before methods so that a known path hit with the wrong
/// method is answered with 405 and an unknown path with 404. All rejections
/// are recovered into [ExplorerError] replies.
pub fn routes(
    store: Arc<Store>,
    max_body_bytes: u64,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    let home_data_route = warp::path!("api" / "home-data")
        .and(warp::get())
        .and(with_params())
        .and(with_store(&store))
        .and_then(home_data_handler);

    let create_blob_route = warp::path!("api" / "create-blob")
        .and(warp::post())
        .and(capped_body(max_body_bytes))
        .and(with_store(&store))
        .and_then(create_blob_handler);

    let search_route = warp::path!("api" / "search")
        .and(warp::get())
        .and(with_params())
        .and(with_store(&store))
        .and_then(search_handler);

    let btc_blobs_route = warp::path!("api" / "btc-blobs")
        .and(warp::get())
        .and(with_params())
        .and(with_store(&store))
        .and_then(|params: Params, store: Arc<Store>| {
            blob_listing_handler(Chain::Btc, params, store)
        });

    let eth_blobs_route = warp::path!("api" / "eth-blobs")
        .and(warp::get())
        .and(with_params())
        .and(with_store(&store))
        .and_then(|params: Params, store: Arc<Store>| {
            blob_listing_handler(Chain::Eth, params, store)
        });

    let blob_detail_route = warp::path!("api" / "blob-detail" / String / String)
        .and(warp::get())
        .and(with_store(&store))
        .and_then(blob_detail_handler);

    let nodes_route = warp::path!("api" / "nodes")
        .and(warp::get())
        .and(with_params())
        .and(with_store(&store))
        .and_then(nodes_handler);

    let validators_route = warp::path!("api" / "getValidator")
        .and(warp::get())
        .and(with_store(&store))
        .and_then(validators_handler);

    let health_route = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::with_status("", StatusCode::OK));

    home_data_route
        .or(create_blob_route)
        .or(search_route)
        .or(btc_blobs_route)
        .or(eth_blobs_route)
        .or(blob_detail_route)
        .or(nodes_route)
        .or(validators_route)
        .or(health_route)
        .recover(handle_rejection)
        .with(warp::log("blob_explorer::access"))
}

fn with_store(
    store: &Arc<Store>,
) -> impl Filter<Extract = (Arc<Store>,), Error = Infallible> + Clone {
    let store = Arc::clone(store);

    warp::any().map(move || Arc::clone(&store))
}

fn with_params() -> impl Filter<Extract = (Params,), Error = Rejection> + Clone {
    warp::query::<Vec<(String, String)>>()
        .map(|pairs: Vec<(String, String)>| pairs.into_iter().collect::<Params>())
}

/// The request body, at most `max_bytes` long. A declared `Content-Length`
/// over the limit is refused up front. Chunked bodies are counted as they
/// arrive.
fn capped_body(max_bytes: u64) -> impl Filter<Extract = (Bytes,), Error = Rejection> + Clone {
    warp::header::optional::<u64>("content-length")
        .and(warp::body::stream())
        .and_then(move |declared: Option<u64>, body| read_capped(declared, body, max_bytes))
}

async fn read_capped<S, B>(
    declared: Option<u64>,
    body: S,
    max_bytes: u64,
) -> Result<Bytes, Rejection>
where
    S: Stream<Item = Result<B, warp::Error>>,
    B: Buf,
{
    if declared.is_some_and(|len| len > max_bytes) {
        return Err(reject::custom(ExplorerError::PayloadTooLarge));
    }

    let mut body = std::pin::pin!(body);
    let mut buf = Vec::new();

    while let Some(chunk) = body.next().await {
        let mut chunk = chunk.map_err(|e| {
            log::warn!("Could not read request body: {e}");

            reject::custom(ExplorerError::UnreadableBody)
        })?;

        if (buf.len() + chunk.remaining()) as u64 > max_bytes {
            return Err(reject::custom(ExplorerError::PayloadTooLarge));
        }

        buf.extend_from_slice(&chunk.copy_to_bytes(chunk.remaining()));
    }

    Ok(Bytes::from(buf))
}

/// Encode `value` as a newline-terminated JSON response.
fn json_reply<T: Serialize + ?Sized>(value: &T, status: StatusCode) -> Response {
    let mut body = match serde_json::to_vec(value) {
        Ok(body) => body,
        Err(e) => {
            log::error!("Could not encode response: {e}");

            return StatusCode::INTERNAL_SERVER_ERROR.into_response();
        }
    };

    body.push(b'\n');

    let mut response = Response::new(body.into());

    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );

    response
}

/// Turn a handler outcome into a response. Failures never reject, they are
/// answered directly.
fn respond(result: Result<Response, ExplorerError>) -> Result<Response, Rejection> {
    Ok(result.unwrap_or_else(|e| {
        log::debug!("Request failed: {e}");

        e.into_response()
    }))
}

async fn home_data_handler(params: Params, store: Arc<Store>) -> Result<Response, Rejection> {
    respond(home_data(&params, &store).await)
}

async fn home_data(params: &Params, store: &Store) -> Result<Response, ExplorerError> {
    let chain = non_empty(&params.chain)
        .ok_or(ExplorerError::MissingParameter("chain"))?
        .parse::<Chain>()
        .map_err(|_| ExplorerError::InvalidParameter("chain"))?;

    let reply = match chain {
        Chain::Btc => json_reply(store.btc_blobs(), StatusCode::OK),
        Chain::Eth => json_reply(&*store.eth_blobs().await, StatusCode::OK),
    };

    Ok(reply)
}

async fn create_blob_handler(body: Bytes, store: Arc<Store>) -> Result<Response, Rejection> {
    respond(create_blob(&body, &store).await)
}

async fn create_blob(body: &[u8], store: &Store) -> Result<Response, ExplorerError> {
    let blob = decode_blob(body)?;
    let reply = json_reply(&blob, StatusCode::CREATED);
    let id = blob.id.clone();
    let len = store.append_eth_blob(blob).await;

    log::info!("Appended blob '{id}' to the eth collection, now {len} records");

    Ok(reply)
}

/// Decode a [Blob] from a JSON body. The body must be an object, or `null`
/// for an all-default blob. Missing fields zero-fill, but wrong types and
/// trailing data are rejected.
fn decode_blob(body: &[u8]) -> Result<Blob, ExplorerError> {
    let value = serde_json::from_slice::<Value>(body).map_err(|e| {
        log::warn!("Malformed blob payload: {e}");

        ExplorerError::MalformedBody
    })?;

    match value {
        Value::Null => Ok(Blob::default()),
        Value::Object(_) => serde_path_to_error::deserialize(value).map_err(|e| {
            log::warn!("Malformed blob payload at '{}': {}", e.path(), e.inner());

            ExplorerError::MalformedBody
        }),
        _ => {
            log::warn!("Blob payload is not a JSON object");

            Err(ExplorerError::MalformedBody)
        }
    }
}

async fn search_handler(params: Params, store: Arc<Store>) -> Result<Response, Rejection> {
    respond(search(&params, &store))
}

fn search(params: &Params, store: &Store) -> Result<Response, ExplorerError> {
    let (category, query) = parse_search(params.q.as_deref(), params.category.as_deref())?;
    let results = filter_by_category(store.btc_blobs(), category, query);

    log::debug!(
        "Search {}='{query}' matched {} blobs",
        category.as_ref(),
        results.len()
    );

    Ok(json_reply(&results, StatusCode::OK))
}

async fn blob_listing_handler(
    chain: Chain,
    params: Params,
    store: Arc<Store>,
) -> Result<Response, Rejection> {
    respond(blob_listing(chain, &params, &store).await)
}

/// Paginated, free-text filtered listing. `chain` is the value the `chain`
/// parameter must carry.
async fn blob_listing(
    chain: Chain,
    params: &Params,
    store: &Store,
) -> Result<Response, ExplorerError> {
    let requested = non_empty(&params.chain).and_then(|raw| raw.parse::<Chain>().ok());

    if requested != Some(chain) {
        return Err(ExplorerError::ChainMismatch);
    }

    let page = parse_page(params.page.as_deref())?;
    let filter = params.filter.as_deref().unwrap_or_default();

    // Both listings page through the eth collection.
    let blobs = store.eth_blobs().await;
    let filtered = filter_free_text(&blobs, filter);
    let page = paginate(&filtered, page, PER_PAGE)?;

    Ok(json_reply(&page, StatusCode::OK))
}

async fn blob_detail_handler(
    chain: String,
    blob_id: String,
    store: Arc<Store>,
) -> Result<Response, Rejection> {
    respond(blob_detail(&chain, &blob_id, &store))
}

fn blob_detail(chain: &str, blob_id: &str, store: &Store) -> Result<Response, ExplorerError> {
    // The chain is validated but details are shared across chains.
    chain
        .parse::<Chain>()
        .map_err(|_| ExplorerError::InvalidParameter("chain"))?;

    let detail = store
        .find_detail(blob_id)
        .ok_or(ExplorerError::BlobNotFound)?;

    Ok(json_reply(detail, StatusCode::OK))
}

async fn nodes_handler(params: Params, store: Arc<Store>) -> Result<Response, Rejection> {
    let reply = match non_empty(&params.chain) {
        Some(chain) => json_reply(&store.nodes_on(chain), StatusCode::OK),
        None => json_reply(store.nodes(), StatusCode::OK),
    };

    Ok(reply)
}

async fn validators_handler(store: Arc<Store>) -> Result<Response, Rejection> {
    respond(match store.validators() {
        [] => Err(ExplorerError::NoValidators),
        validators => Ok(json_reply(validators, StatusCode::OK)),
    })
}

/// Map rejections onto [ExplorerError].
async fn handle_rejection(err: Rejection) -> Result<Response, Infallible> {
    let error = if err.is_not_found() {
        ExplorerError::RouteNotFound
    } else if let Some(error) = err.find::<ExplorerError>() {
        error.clone()
    } else if err.find::<reject::MethodNotAllowed>().is_some() {
        ExplorerError::MethodNotAllowed
    } else if err.find::<reject::InvalidQuery>().is_some() {
        ExplorerError::InvalidParameter("query")
    } else {
        log::warn!("Could not read request: {err:?}");

        ExplorerError::UnreadableBody
    };

    Ok(error.into_response())
}
