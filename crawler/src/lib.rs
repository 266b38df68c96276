pub mod crawl;
pub mod extract;
pub mod fetch;
pub mod frontier;

pub use crawl::{crawl, CrawlStats};
pub use extract::{extract, Extraction};
pub use fetch::{FetchError, Fetcher, HttpFetcher};
pub use frontier::Frontier;
