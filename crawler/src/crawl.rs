use index::InvertedIndex;
use url::Url;

use crate::extract::extract;
use crate::fetch::Fetcher;
use crate::frontier::Frontier;

/// Counters reported when a crawl run finishes.
#[derive(Debug, Default, Clone, Copy)]
pub struct CrawlStats {
    /// Distinct URLs dequeued and attempted (successes and failures).
    pub visited: usize,
    /// Pages fetched, extracted and written into the index.
    pub indexed: usize,
    /// Fetches that failed; their URLs are abandoned, not retried.
    pub failed: usize,
    /// Frontier entries still pending when the run stopped.
    pub pending: usize,
}

/// Crawls breadth-first from `seed`, visiting at most `limit` distinct URLs
/// and indexing every page that fetches successfully.
///
/// One fetch is in flight at a time. A failed fetch is logged and skipped;
/// the URL stays in the frontier's seen set so it is not retried. The run
/// ends when the visit budget is spent or the frontier drains, whichever
/// comes first.
pub async fn crawl<F: Fetcher>(
    fetcher: &F,
    index: &mut InvertedIndex,
    seed: Url,
    limit: usize,
) -> CrawlStats {
    let mut frontier = Frontier::new();
    frontier.push(seed);

    let mut stats = CrawlStats::default();
    while stats.visited < limit {
        let Some(url) = frontier.pop() else { break };
        stats.visited += 1;

        let body = match fetcher.fetch(&url).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(%url, error = %err, "fetch failed, skipping page");
                stats.failed += 1;
                continue;
            }
        };

        let page = extract(&url, &body);
        tracing::debug!(%url, links = page.links.len(), words = page.words.len(), "indexing page");
        index.add_doc(url.as_str(), &page.words);
        stats.indexed += 1;
        for link in page.links {
            frontier.push(link);
        }
    }
    stats.pending = frontier.pending();
    stats
}
