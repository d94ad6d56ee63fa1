use std::time::Duration;

use crate::error::FetchError;
use crate::request::FetchRequest;
use crate::resource::Resource;
use crate::session::SessionContext;
use crate::table::{extract_first_table, RawTable};

// The AJAX call triggers server-side aggregation, so it gets a longer
// budget than the page GET.
const AJAX_TIMEOUT: Duration = Duration::from_secs(60);
const SITE_DATE_FORMAT: &str = "%m/%d/%Y";

/// POST the historical-data AJAX request and return the raw HTML table
/// from the response. No retries; failure propagates immediately.
pub async fn fetch_raw(
    ctx: &SessionContext,
    pair_id: u64,
    sml_id: u64,
    resource: &Resource,
    request: &FetchRequest,
) -> Result<RawTable, FetchError> {
    let body = form_body(pair_id, sml_id, resource.header_text(), request);

    let extra = [
        ("X-Requested-With", "XMLHttpRequest"),
        ("Content-Type", "application/x-www-form-urlencoded"),
        ("Referer", resource.page_url()),
    ];

    let response = ctx
        .post_form(resource.ajax_endpoint(), body, &extra, AJAX_TIMEOUT)
        .await?;
    if !response.is_success() {
        return Err(FetchError::http(format!(
            "status {} for {}",
            response.status,
            resource.ajax_endpoint()
        )));
    }

    extract_first_table(&response.body)
}

/// Urlencoded form fields the backend expects. `header` must match the
/// page's header text exactly; it is the backend's validation token.
fn form_body(pair_id: u64, sml_id: u64, header_text: &str, request: &FetchRequest) -> String {
    let curr_id = pair_id.to_string();
    let sml = sml_id.to_string();
    let st_date = request.start().format(SITE_DATE_FORMAT).to_string();
    let end_date = request.end().format(SITE_DATE_FORMAT).to_string();

    let fields: [(&str, &str); 6] = [
        ("curr_id", curr_id.as_str()),
        ("smlID", sml.as_str()),
        ("header", header_text),
        ("st_date", st_date.as_str()),
        ("end_date", end_date.as_str()),
        ("interval_sec", request.interval().granularity()),
    ];

    fields
        .iter()
        .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::Interval;
    use chrono::NaiveDate;

    fn request(interval: Interval) -> FetchRequest {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        FetchRequest::new(start, end, interval).unwrap()
    }

    #[test]
    fn form_body_encodes_all_fields() {
        let body = form_body(
            8860,
            115,
            "ARCA Gold Miners Historical Data",
            &request(Interval::Monthly),
        );

        assert!(body.contains("curr_id=8860"));
        assert!(body.contains("smlID=115"));
        assert!(body.contains("header=ARCA%20Gold%20Miners%20Historical%20Data"));
        assert!(body.contains("st_date=01%2F01%2F2024"));
        assert!(body.contains("end_date=02%2F29%2F2024"));
        assert!(body.contains("interval_sec=Monthly"));
    }

    #[test]
    fn form_body_tracks_interval_granularity() {
        for interval in Interval::ALL {
            let body = form_body(1, 1, "X", &request(interval));
            assert!(body.ends_with(&format!("interval_sec={}", interval.granularity())));
        }
    }
}
