//! Output of a node assembly.

use std::collections::BTreeMap;

use serde::Serialize;

use super::ConfigDomain;

/// Generated documents of one node, keyed by file name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NodeDocuments {
    documents: BTreeMap<String, String>,
}

impl NodeDocuments {
    /// Document generated for `domain`.
    #[must_use]
    pub fn get(&self, domain: ConfigDomain) -> Option<&str> {
        self.get_file(domain.file_name())
    }

    /// Document stored under `file_name`.
    #[must_use]
    pub fn get_file(&self, file_name: &str) -> Option<&str> {
        self.documents.get(file_name).map(String::as_str)
    }

    /// Number of documents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether no documents were generated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Iterate over `(file name, document)` pairs in file-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.documents
            .iter()
            .map(|(name, text)| (name.as_str(), text.as_str()))
    }

    /// Consume the documents, returning the underlying map.
    #[must_use]
    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.documents
    }
}

impl FromIterator<(ConfigDomain, String)> for NodeDocuments {
    fn from_iter<I: IntoIterator<Item = (ConfigDomain, String)>>(iter: I) -> Self {
        Self {
            documents: iter
                .into_iter()
                .map(|(domain, text)| (domain.file_name().to_owned(), text))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a NodeDocuments {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.iter()
    }
}
