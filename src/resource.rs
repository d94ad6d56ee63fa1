use crate::error::FetchError;

const AJAX_PATH: &str = "/instruments/HistoricalDataAjax";

/// A specific instrument's historical-data page plus the exact header
/// text the AJAX backend validates requests against.
#[derive(Debug, Clone)]
pub struct Resource {
    page_url: String,
    header_text: String,
    ajax_endpoint: String,
}

impl Resource {
    pub fn new(
        page_url: impl Into<String>,
        header_text: impl Into<String>,
    ) -> Result<Self, FetchError> {
        let page_url = page_url.into();
        let parsed = reqwest::Url::parse(&page_url)
            .map_err(|e| FetchError::config(format!("invalid page url '{}': {}", page_url, e)))?;
        if !parsed.has_host() {
            return Err(FetchError::config(format!(
                "page url '{}' has no host",
                page_url
            )));
        }

        let ajax_endpoint = format!("{}{}", parsed.origin().ascii_serialization(), AJAX_PATH);

        Ok(Self {
            page_url,
            header_text: header_text.into(),
            ajax_endpoint,
        })
    }

    pub fn page_url(&self) -> &str {
        &self.page_url
    }

    /// Must match the page's header text exactly or the backend
    /// rejects the AJAX call.
    pub fn header_text(&self) -> &str {
        &self.header_text
    }

    /// AJAX endpoint on the same origin as the page.
    pub fn ajax_endpoint(&self) -> &str {
        &self.ajax_endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derives_ajax_endpoint_from_page_origin() {
        let resource = Resource::new(
            "https://www.investing.com/indices/arca-gold-miners-historical-data",
            "ARCA Gold Miners Historical Data",
        )
        .expect("valid resource");

        assert_eq!(
            resource.ajax_endpoint(),
            "https://www.investing.com/instruments/HistoricalDataAjax"
        );
    }

    #[test]
    fn rejects_relative_url() {
        let err = Resource::new("/indices/foo", "Foo").expect_err("must fail");
        assert!(matches!(err, FetchError::Config { .. }));
    }
}
