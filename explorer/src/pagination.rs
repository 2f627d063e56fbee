use {crate::error::ExplorerError, serde::Serialize};

/// Items per page on every paginated endpoint.
pub const PER_PAGE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Size of the filtered collection, before windowing.
    pub total: usize,
    pub page: usize,
    #[serde(rename = "perPage")]
    pub per_page: usize,
}

/// One page of a collection together with its [PageInfo].
#[derive(Debug, Serialize)]
pub struct Page<'a, T> {
    pub data: &'a [T],
    pub pagination: PageInfo,
}

/// Parse a raw `page` parameter. It must be an integer of at least 1.
pub fn parse_page(raw: Option<&str>) -> Result<usize, ExplorerError> {
    let page = raw
        .and_then(|raw| raw.parse::<i64>().ok())
        .ok_or(ExplorerError::InvalidPage)?;

    if page < 1 {
        return Err(ExplorerError::InvalidPage);
    }

    usize::try_from(page).map_err(|_| ExplorerError::InvalidPage)
}

/// Cut the 1-indexed `page` out of `items`. Bounds are clamped to the
/// collection, so a page past the end is empty rather than an error.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> Result<Page<'_, T>, ExplorerError> {
    if page < 1 {
        return Err(ExplorerError::InvalidPage);
    }

    let total = items.len();
    let start = (page - 1).saturating_mul(per_page).min(total);
    let end = start.saturating_add(per_page).min(total);

    Ok(Page {
        data: &items[start..end],
        pagination: PageInfo {
            total,
            page,
            per_page,
        },
    })
}
