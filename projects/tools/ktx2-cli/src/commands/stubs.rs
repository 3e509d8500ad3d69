//! Registered-but-unimplemented subcommands. Keeping them in the
//! dispatch table reserves the CLI surface and gives a consistent message
//! instead of an "unrecognized subcommand" usage error.

use argh::FromArgs;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Create a KTX2 file from image input (not implemented yet)
#[argh(subcommand, name = "create")]
pub struct CreateCmd {
    /// input files followed by the output file
    #[argh(positional)]
    pub files: Vec<PathBuf>,
}

#[derive(FromArgs, Debug)]
/// Encode a KTX2 file with BasisLZ or UASTC (not implemented yet)
#[argh(subcommand, name = "encode")]
pub struct EncodeCmd {
    /// input file followed by the output file
    #[argh(positional)]
    pub files: Vec<PathBuf>,
}

#[derive(FromArgs, Debug)]
/// Extract image data from a KTX2 file (not implemented yet)
#[argh(subcommand, name = "extract")]
pub struct ExtractCmd {
    /// input file followed by the output path
    #[argh(positional)]
    pub files: Vec<PathBuf>,
}

#[derive(FromArgs, Debug)]
/// Transcode a BasisLZ or UASTC KTX2 file (not implemented yet)
#[argh(subcommand, name = "transcode")]
pub struct TranscodeCmd {
    /// input file followed by the output file
    #[argh(positional)]
    pub files: Vec<PathBuf>,
}

pub fn handle_stub(name: &str) -> i32 {
    eprintln!("ktx {name}: not implemented yet");
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_commands_parse_and_fail_cleanly() {
        assert!(CreateCmd::from_args(&["create"], &["in.png", "out.ktx2"]).is_ok());
        assert!(EncodeCmd::from_args(&["encode"], &[]).is_ok());
        assert_eq!(handle_stub("create"), 1);
    }
}
