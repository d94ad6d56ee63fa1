use std::time::Duration;

use scraper::{Html, Selector};

use crate::error::FetchError;
use crate::resource::Resource;
use crate::session::SessionContext;

const PAGE_TIMEOUT: Duration = Duration::from_secs(30);

/// Load the instrument page and pull out the two numeric identifiers
/// the AJAX endpoint is addressed with. Resolved on every fetch; the
/// site can renumber instruments when it restructures.
pub async fn resolve(
    ctx: &SessionContext,
    resource: &Resource,
) -> Result<(u64, u64), FetchError> {
    let response = ctx.get(resource.page_url(), PAGE_TIMEOUT).await?;
    if !response.is_success() {
        return Err(FetchError::http(format!(
            "status {} for {}",
            response.status,
            resource.page_url()
        )));
    }
    extract_identifiers(&response.body)
}

/// Find the marker element carrying `data-pair-id` and `data-sml-id`.
/// A missing marker or a non-numeric attribute is the site-breakage
/// failure mode and reports as a parse error, not a network one.
pub fn extract_identifiers(html: &str) -> Result<(u64, u64), FetchError> {
    let document = Html::parse_document(html);
    let marker = Selector::parse("[data-pair-id]")
        .map_err(|_| FetchError::parse("identifier selector error"))?;

    let element = document
        .select(&marker)
        .next()
        .ok_or_else(|| FetchError::parse("identifiers not found: no data-pair-id marker"))?;

    let pair_id = element
        .value()
        .attr("data-pair-id")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .ok_or_else(|| FetchError::parse("identifiers not found: data-pair-id not numeric"))?;

    let sml_id = element
        .value()
        .attr("data-sml-id")
        .and_then(|v| v.trim().parse::<u64>().ok())
        .ok_or_else(|| {
            FetchError::parse("identifiers not found: data-sml-id missing or not numeric")
        })?;

    Ok((pair_id, sml_id))
}
