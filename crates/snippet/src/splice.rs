//! Splices the snippets attached to one hook around that hook's default code.
//!
//! Rules applied for a single hook:
//!
//! 1. Declarations of every snippet on the hook go to global scope, in
//!    attachment order.
//! 2. The last snippet carrying a `replace` section takes the place of the
//!    default code and of every snippet attached before it. Those earlier
//!    snippets still contribute their declarations.
//! 3. Each remaining snippet wraps the code built so far in its own block:
//!    `pre`, then the inner code, then `post`.
use std::sync::Arc;

use crate::hook::SnippetHook;
use crate::list::SnippetList;
use crate::snippet::Snippet;

const INDENT: &str = "    ";

/// Source produced for one hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplicedHook {
    hook: SnippetHook,
    declarations: String,
    body: String,
    replaced: bool,
    snippet_count: usize,
    discarded: usize,
}

impl SplicedHook {
    pub fn hook(&self) -> SnippetHook {
        self.hook
    }

    /// Global-scope source gathered from every snippet on the hook.
    pub fn declarations(&self) -> &str {
        &self.declarations
    }

    /// Code to emit at the hook point.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Whether the default code was dropped in favour of a `replace` section.
    pub fn replaced(&self) -> bool {
        self.replaced
    }

    /// Number of snippets attached to the hook.
    pub fn snippet_count(&self) -> usize {
        self.snippet_count
    }

    /// Number of snippets whose body sections were discarded by a later
    /// `replace`.
    pub fn discarded(&self) -> usize {
        self.discarded
    }

    /// Declarations followed by the body, separated by a blank line.
    pub fn render(&self) -> String {
        if self.declarations.is_empty() {
            return self.body.clone();
        }
        let mut out = String::with_capacity(self.declarations.len() + self.body.len() + 1);
        out.push_str(&self.declarations);
        out.push('\n');
        out.push_str(&self.body);
        out
    }
}

pub fn splice_hook(list: &SnippetList, hook: SnippetHook, default_code: &str) -> SplicedHook {
    let snippets: Vec<&Arc<Snippet>> = list.for_hook(hook).collect();

    let mut declarations = String::new();
    for snippet in &snippets {
        if let Some(text) = snippet.declarations() {
            push_lines(&mut declarations, text, "");
        }
    }

    let replacer = snippets
        .iter()
        .rposition(|snippet| snippet.replace().is_some());
    let start = replacer.unwrap_or(0);
    if start > 0 {
        tracing::warn!(
            %hook,
            discarded = start,
            "replace section discards earlier snippets on this hook"
        );
    }

    let mut body = default_code.to_string();
    for snippet in &snippets[start..] {
        let inner = snippet.replace().unwrap_or(&body);
        body = wrap_snippet(snippet, inner);
    }

    tracing::debug!(
        %hook,
        snippets = snippets.len(),
        replaced = replacer.is_some(),
        "spliced hook source"
    );

    SplicedHook {
        hook,
        declarations,
        body,
        replaced: replacer.is_some(),
        snippet_count: snippets.len(),
        discarded: start,
    }
}

fn wrap_snippet(snippet: &Snippet, inner: &str) -> String {
    let mut block = String::from("{\n");
    if let Some(pre) = snippet.pre() {
        push_lines(&mut block, pre, INDENT);
    }
    push_lines(&mut block, inner, INDENT);
    if let Some(post) = snippet.post() {
        push_lines(&mut block, post, INDENT);
    }
    block.push_str("}\n");
    block
}

fn push_lines(out: &mut String, text: &str, indent: &str) {
    for line in text.lines() {
        if !line.trim().is_empty() {
            out.push_str(indent);
            out.push_str(line);
        }
        out.push('\n');
    }
}
