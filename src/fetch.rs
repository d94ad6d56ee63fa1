use crate::cleaner::{clean, CleanedDataset};
use crate::error::FetchError;
use crate::fetcher::fetch_raw;
use crate::request::FetchRequest;
use crate::resolver::resolve;
use crate::resource::Resource;
use crate::session::SessionContext;

/// Orchestration entry point: resolve the page identifiers, pull the
/// raw history table, clean it. Exactly one GET and one POST per call;
/// every fetch is a pure function of its three arguments modulo the
/// live network response.
pub async fn fetch(
    ctx: &SessionContext,
    resource: &Resource,
    request: &FetchRequest,
) -> Result<CleanedDataset, FetchError> {
    let (pair_id, sml_id) = resolve(ctx, resource).await?;
    let raw = fetch_raw(ctx, pair_id, sml_id, resource, request).await?;
    clean(&raw)
}
