use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SnippetError {
    #[error("unknown snippet hook '{0}'")]
    UnknownHook(String),
    #[error("no snippet hook has the value {0}")]
    UnknownHookValue(u32),
}
