use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors of the `info` command surface; `validate` reports its findings
/// through the diagnostic sink instead.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Could not open input file \"{path}\". {source}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Unexpected end of file reading \"{0}\".")]
    UnexpectedEof(PathBuf),
    #[error("{0} is not a KTX2 file.")]
    NotKtx2(PathBuf),
}
