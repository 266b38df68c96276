use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::index::{DocId, InvertedIndex};

/// Failure reading or writing a persisted index. Fatal to the `load`/`save`
/// call that hit it; an in-memory index already built is never affected.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read index at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write index at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed index at {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("index at {path} references document {doc_id} but only {num_docs} documents are stored")]
    DocIdOutOfRange {
        path: PathBuf,
        doc_id: DocId,
        num_docs: usize,
    },
}

impl InvertedIndex {
    /// Reads an index back from the JSON file at `path`.
    ///
    /// Fails if the file is missing, unreadable, not valid index JSON, or
    /// if any word references a document id outside the document store.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StorageError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StorageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let index: InvertedIndex =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| {
                StorageError::Malformed {
                    path: path.to_path_buf(),
                    source,
                }
            })?;
        index.check_doc_ids(path)?;
        tracing::debug!(
            path = %path.display(),
            docs = index.doc_count(),
            words = index.word_count(),
            "index loaded"
        );
        Ok(index)
    }

    /// Writes the full index as JSON to `path`, replacing any existing file.
    /// `load` reconstructs an equal index from the result.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StorageError> {
        let path = path.as_ref();
        let write_err = |source| StorageError::Write {
            path: path.to_path_buf(),
            source,
        };
        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        // to_writer on these types can only fail on I/O.
        serde_json::to_writer(&mut writer, self)
            .map_err(|e| write_err(std::io::Error::other(e)))?;
        writer.flush().map_err(write_err)?;
        tracing::debug!(
            path = %path.display(),
            docs = self.doc_count(),
            words = self.word_count(),
            "index saved"
        );
        Ok(())
    }

    fn check_doc_ids(&self, path: &Path) -> Result<(), StorageError> {
        let num_docs = self.doc_count();
        for set in self.words().values() {
            for doc_id in set.iter() {
                if doc_id as usize >= num_docs {
                    return Err(StorageError::DocIdOutOfRange {
                        path: path.to_path_buf(),
                        doc_id,
                        num_docs,
                    });
                }
            }
        }
        Ok(())
    }
}
