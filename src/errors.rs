/// Failure surfaced by the connection collaborator.
///
/// The wire makes no distinction between a transport fault and an
/// application-level rejection; both arrive as a single displayable
/// message, carried here verbatim.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Connection(String),
}

impl Error {
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection(message.into())
    }
}
