//! Historical price-series fetcher for Investing.com-style pages.
//!
//! The site exposes its data only through an authenticated AJAX
//! endpoint; the pipeline here resolves the page-embedded identifiers,
//! issues the interval-specific request, parses the returned HTML
//! table and normalizes it into a sorted, deduplicated dataset.

pub mod cleaner;
pub mod config;
pub mod error;
pub mod fetch;
pub mod fetcher;
pub mod interval;
pub mod output;
pub mod request;
pub mod resolver;
pub mod resource;
pub mod session;
pub mod table;
pub mod transport;

pub use cleaner::{clean, CleanedDataset, HistoryRow};
pub use error::FetchError;
pub use fetch::fetch;
pub use fetcher::fetch_raw;
pub use interval::Interval;
pub use request::FetchRequest;
pub use resolver::resolve;
pub use resource::Resource;
pub use session::SessionContext;
pub use table::RawTable;
pub use transport::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
