//! Shader snippets: small pieces of GLSL attached to fixed hook points of a
//! generated shader pipeline.
//!
//! A [`Snippet`] binds up to four optional source sections (declarations, pre,
//! replace, post) to one [`SnippetHook`]. Snippets are attached to a
//! [`SnippetList`], which freezes them, and [`splice_hook`] assembles the code
//! for a single hook around the generator's default code.
mod error;
mod hook;
mod list;
mod manifest;
mod snippet;
mod splice;

pub use error::SnippetError;
pub use hook::{HookBuiltin, HookTier, ShaderStage, SnippetHook, HOOK_TIER_SPAN};
pub use list::{SnippetList, SnippetListKey};
pub use manifest::{ManifestError, SnippetFile};
pub use snippet::{is_snippet, Snippet};
pub use splice::{splice_hook, SplicedHook};
