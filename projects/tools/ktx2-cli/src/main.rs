mod commands;
mod error;
mod output;

use argh::FromArgs;
use std::process::ExitCode;

#[derive(FromArgs, Debug)]
/// Tools for inspecting and validating KTX2 texture files
struct TopLevel {
    #[argh(subcommand)]
    command: Commands,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
enum Commands {
    Validate(commands::validate::ValidateCmd),
    Info(commands::info::InfoCmd),
    Create(commands::stubs::CreateCmd),
    Encode(commands::stubs::EncodeCmd),
    Extract(commands::stubs::ExtractCmd),
    Transcode(commands::stubs::TranscodeCmd),
}

fn main() -> ExitCode {
    // argh prints usage and exits 1 on its own for malformed command lines.
    let cli: TopLevel = argh::from_env();

    let code = match cli.command {
        Commands::Validate(cmd) => commands::validate::handle_validate_command(cmd),
        Commands::Info(cmd) => commands::info::handle_info_command(cmd),
        Commands::Create(_) => commands::stubs::handle_stub("create"),
        Commands::Encode(_) => commands::stubs::handle_stub("encode"),
        Commands::Extract(_) => commands::stubs::handle_stub("extract"),
        Commands::Transcode(_) => commands::stubs::handle_stub("transcode"),
    };
    ExitCode::from(code as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_level_parses_validate_invocation() {
        let cli = TopLevel::from_args(&["ktx"], &["validate", "--format", "json", "input.ktx2"])
            .unwrap();
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn top_level_rejects_unknown_subcommand() {
        assert!(TopLevel::from_args(&["ktx"], &["frobnicate", "x"]).is_err());
    }
}
