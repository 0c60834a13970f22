/// A runtime error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The command name is not known.
    #[error("unknown popup menu command: {0:?}")]
    UnknownCommand(String),
}
