//! The snippet value: one hook plus up to four optional source fragments.
//!
//! A `Snippet` is freely mutable while it is owned. Attaching it moves it into
//! an `Arc<Snippet>`, after which only the `&self` accessors are reachable and
//! the text can no longer change.
use std::any::Any;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::hook::SnippetHook;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    hook: SnippetHook,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    declarations: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    replace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    post: Option<String>,
}

impl Snippet {
    /// Creates a snippet for `hook` with the two most commonly used sections.
    ///
    /// `pre` and `replace` start out unset; see [`Snippet::set_pre`] and
    /// [`Snippet::set_replace`].
    pub fn new(hook: SnippetHook, declarations: Option<&str>, post: Option<&str>) -> Self {
        Self {
            hook,
            declarations: declarations.map(str::to_owned),
            pre: None,
            replace: None,
            post: post.map(str::to_owned),
        }
    }

    /// The hook chosen at construction.
    pub fn hook(&self) -> SnippetHook {
        self.hook
    }

    /// Source inserted at global scope of the generated shader.
    pub fn declarations(&self) -> Option<&str> {
        self.declarations.as_deref()
    }

    pub fn set_declarations(&mut self, declarations: Option<&str>) {
        self.declarations = declarations.map(str::to_owned);
    }

    /// Source inserted before the hook's processing.
    pub fn pre(&self) -> Option<&str> {
        self.pre.as_deref()
    }

    pub fn set_pre(&mut self, pre: Option<&str>) {
        self.pre = pre.map(str::to_owned);
    }

    /// Source used instead of the generated code and any earlier snippets on
    /// the same hook.
    pub fn replace(&self) -> Option<&str> {
        self.replace.as_deref()
    }

    pub fn set_replace(&mut self, replace: Option<&str>) {
        self.replace = replace.map(str::to_owned);
    }

    /// Source inserted after the hook's (possibly replaced) processing.
    pub fn post(&self) -> Option<&str> {
        self.post.as_deref()
    }

    pub fn set_post(&mut self, post: Option<&str>) {
        self.post = post.map(str::to_owned);
    }

    /// Builder-style variant of [`Snippet::set_pre`].
    pub fn with_pre(mut self, pre: &str) -> Self {
        self.set_pre(Some(pre));
        self
    }

    /// Builder-style variant of [`Snippet::set_replace`].
    pub fn with_replace(mut self, replace: &str) -> Self {
        self.set_replace(Some(replace));
        self
    }

    /// True when none of the four sections carry text.
    pub fn is_empty(&self) -> bool {
        self.declarations.is_none()
            && self.pre.is_none()
            && self.replace.is_none()
            && self.post.is_none()
    }

    /// Each section's name paired with its text, in emission order.
    pub fn sections(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("declarations", self.declarations()),
            ("pre", self.pre()),
            ("replace", self.replace()),
            ("post", self.post()),
        ]
    }

    /// Freezes the snippet so it can be shared between pipelines.
    pub fn into_shared(self) -> Arc<Snippet> {
        Arc::new(self)
    }
}

/// Returns whether `value` is a snippet, either owned or shared.
pub fn is_snippet(value: &dyn Any) -> bool {
    value.is::<Snippet>() || value.is::<Arc<Snippet>>()
}
