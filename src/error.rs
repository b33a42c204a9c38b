use std::path::PathBuf;

/// Result type used throughout this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced while building or saving a [Mesh](crate::Mesh).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Mesh name must not be empty")]
    EmptyName,
    #[error("Mesh name {0:?} cannot be used as a file stem")]
    InvalidName(String),
    #[error("A triangle needs exactly 3 positions; got {0}")]
    PositionCount(usize),
    #[error("Expected {expected} vector components; got {got}")]
    ComponentCount { expected: usize, got: usize },
    #[error("A triangle takes either 0 or 3 texcoords; got {0}")]
    TexcoordCount(usize),
    #[error("Mesh {0:?} includes texcoords, but the triangle has none")]
    MissingTexcoords(String),
    #[error("Mesh {0:?} excludes texcoords, but the triangle has some")]
    UnexpectedTexcoords(String),
    #[error("Texture file name {0:?} must be a bare, non-empty file name")]
    InvalidTextureName(String),
    #[error("Attempted to normalize a zero-length vector")]
    ZeroMagnitude,
    #[error("Attribute pool is full: position {0} doesn't fit in its index type")]
    IndexOverflow(usize),
    #[error("Output directory {0:?} does not exist")]
    OutputDirNotFound(PathBuf),
    #[error("Texture directory {0:?} does not exist")]
    TextureDirNotFound(PathBuf),
    #[error("Texture image {0:?} does not exist")]
    TextureNotFound(PathBuf),
    #[error("I/O failure at {path:?}: {source}")]
    Io {
        /// The file or directory being accessed.
        path: PathBuf,
        /// The underlying failure.
        #[source]
        source: std::io::Error,
    },
}

/// Broad category of an [Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A parameter was malformed, or a triangle didn't match its mesh's channels.
    InvalidArgument,
    /// Wrong number of positions or vector components.
    InvalidArity,
    /// A directory or file that must exist doesn't.
    NotFound,
    /// The filesystem rejected a read, write, or copy.
    Io,
    /// Normalization of a zero-length vector.
    DivideByZero,
    /// An attribute pool ran out of indices.
    IndexOverflow,
}

impl Error {
    /// The broad category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::EmptyName
            | Error::InvalidName(_)
            | Error::TexcoordCount(_)
            | Error::MissingTexcoords(_)
            | Error::UnexpectedTexcoords(_)
            | Error::InvalidTextureName(_) => ErrorKind::InvalidArgument,
            Error::PositionCount(_) | Error::ComponentCount { .. } => ErrorKind::InvalidArity,
            Error::OutputDirNotFound(_)
            | Error::TextureDirNotFound(_)
            | Error::TextureNotFound(_) => ErrorKind::NotFound,
            Error::Io { .. } => ErrorKind::Io,
            Error::ZeroMagnitude => ErrorKind::DivideByZero,
            Error::IndexOverflow(_) => ErrorKind::IndexOverflow,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Error::Io { path, source }
    }
}
