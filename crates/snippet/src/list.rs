//! Ordered attachment of shared snippets to a pipeline or layer.
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::hook::SnippetHook;
use crate::snippet::Snippet;

/// Snippets attached to one pipeline (or one layer), in attachment order.
#[derive(Debug, Clone, Default)]
pub struct SnippetList {
    entries: Vec<Arc<Snippet>>,
}

/// Identity of a [`SnippetList`], usable as a program cache key.
///
/// Two keys compare equal only when the lists hold the same snippet instances
/// in the same order. The key holds its snippets, so an address it compares
/// by cannot be reused while the key exists.
#[derive(Debug, Clone)]
pub struct SnippetListKey(Vec<Arc<Snippet>>);

impl PartialEq for SnippetListKey {
    fn eq(&self, other: &Self) -> bool {
        same_instances(&self.0, &other.0)
    }
}

impl Eq for SnippetListKey {}

impl Hash for SnippetListKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.len().hash(state);
        for snippet in &self.0 {
            Arc::as_ptr(snippet).hash(state);
        }
    }
}

fn same_instances(a: &[Arc<Snippet>], b: &[Arc<Snippet>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| Arc::ptr_eq(a, b))
}

impl SnippetList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a snippet, freezing it if it is still owned.
    ///
    /// Returns the shared handle so the same snippet can be attached to other
    /// pipelines.
    pub fn attach(&mut self, snippet: impl Into<Arc<Snippet>>) -> Arc<Snippet> {
        let snippet = snippet.into();
        tracing::debug!(
            hook = %snippet.hook(),
            position = self.entries.len(),
            replaces = snippet.replace().is_some(),
            "attached snippet"
        );
        self.entries.push(Arc::clone(&snippet));
        snippet
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Snippet>> {
        self.entries.iter()
    }

    /// Snippets targeting `hook`, in attachment order.
    pub fn for_hook(&self, hook: SnippetHook) -> impl Iterator<Item = &Arc<Snippet>> {
        self.entries
            .iter()
            .filter(move |snippet| snippet.hook() == hook)
    }

    pub fn has_hook(&self, hook: SnippetHook) -> bool {
        self.for_hook(hook).next().is_some()
    }

    /// Distinct hooks present in the list, in ascending numeric order.
    pub fn hooks(&self) -> Vec<SnippetHook> {
        SnippetHook::ALL
            .into_iter()
            .filter(|hook| self.has_hook(*hook))
            .collect()
    }

    pub fn cache_key(&self) -> SnippetListKey {
        SnippetListKey(self.entries.clone())
    }
}

impl PartialEq for SnippetList {
    fn eq(&self, other: &Self) -> bool {
        same_instances(&self.entries, &other.entries)
    }
}

impl Eq for SnippetList {}

impl FromIterator<Snippet> for SnippetList {
    fn from_iter<I: IntoIterator<Item = Snippet>>(iter: I) -> Self {
        let mut list = Self::new();
        for snippet in iter {
            list.attach(snippet);
        }
        list
    }
}

impl<'a> IntoIterator for &'a SnippetList {
    type Item = &'a Arc<Snippet>;
    type IntoIter = std::slice::Iter<'a, Arc<Snippet>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
