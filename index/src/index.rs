use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::docset::DocSet;

pub type DocId = u32;

/// Inverted index over crawled pages.
///
/// `docs` is the document store: an append-only list of URLs whose positions
/// are the document ids. `words` maps each word seen in a page's visible text
/// to the set of documents containing it. Field names are renamed so the
/// serialized form matches the `{"Docs": [...], "Words": {...}}` index file.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvertedIndex {
    #[serde(rename = "Docs")]
    docs: Vec<String>,
    #[serde(rename = "Words")]
    words: HashMap<String, DocSet>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `url` to the document store and records every word in `words`
    /// against the new document. Returns the id assigned to the document,
    /// which is its position in the store. Ids are stable: documents are
    /// never removed or reordered.
    ///
    /// The index does not deduplicate URLs; feeding the same URL twice
    /// creates two documents. Callers that crawl are expected to dedup via
    /// their visited set.
    pub fn add_doc(&mut self, url: &str, words: &[String]) -> DocId {
        let doc_id = self.docs.len() as DocId;
        self.docs.push(url.to_string());
        for word in words {
            self.words.entry(word.clone()).or_default().insert(doc_id);
        }
        doc_id
    }

    /// Returns the URLs of every document containing `word`, in no
    /// particular order. Unknown words yield an empty vec.
    pub fn get_docs(&self, word: &str) -> Vec<String> {
        match self.words.get(word) {
            Some(set) => set.iter().map(|id| self.docs[id as usize].clone()).collect(),
            None => Vec::new(),
        }
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub(crate) fn words(&self) -> &HashMap<String, DocSet> {
        &self.words
    }
}
