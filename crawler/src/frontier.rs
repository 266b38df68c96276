use std::collections::{HashSet, VecDeque};
use url::Url;

/// FIFO queue of discovered-but-unvisited URLs.
///
/// Every URL ever pushed is remembered, so a URL enters the queue at most
/// once no matter how many pages link to it. Keys are fragment-free:
/// `page#a` and `page#b` are the same entry.
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<Url>,
    seen: HashSet<String>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `url` unless an equivalent URL was pushed before.
    /// Returns whether the URL was actually added.
    pub fn push(&mut self, mut url: Url) -> bool {
        url.set_fragment(None);
        if self.seen.insert(url.to_string()) {
            self.queue.push_back(url);
            true
        } else {
            false
        }
    }

    /// Dequeues the oldest pending URL, giving breadth-first order.
    pub fn pop(&mut self) -> Option<Url> {
        self.queue.pop_front()
    }

    /// Number of URLs waiting to be visited.
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Number of distinct URLs ever discovered.
    pub fn discovered(&self) -> usize {
        self.seen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
