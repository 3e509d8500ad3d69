//! `ktx validate` - run the validator and print its findings as text or
//! as a JSON document.

use argh::FromArgs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ktx2_validate::{
    validate_file, validate_stream, JsonReporter, TextReporter, ValidationOptions, EXIT_SUCCESS,
};

use crate::output::OutputFormat;

#[derive(FromArgs, Debug)]
/// Validate a KTX2 file against the format specification
#[argh(subcommand, name = "validate")]
pub struct ValidateCmd {
    /// output format (text, json or mini-json) [default: text]
    #[argh(option)]
    pub format: Option<OutputFormat>,

    /// check compatibility with the KHR_texture_basisu glTF extension
    #[argh(switch, short = 'g')]
    pub gltf_basisu: bool,

    /// treat warnings as errors
    #[argh(switch, short = 'e')]
    pub warnings_as_errors: bool,

    /// input file; "-" reads from the standard input
    #[argh(positional)]
    pub input: PathBuf,
}

pub fn handle_validate_command(cmd: ValidateCmd) -> i32 {
    let format = cmd.format.unwrap_or_default();
    let options = ValidationOptions {
        warnings_as_errors: cmd.warnings_as_errors,
        check_gltf_basisu: cmd.gltf_basisu,
    };

    match format {
        OutputFormat::Text => {
            let stdout = io::stdout();
            let mut reporter = TextReporter::new(stdout.lock());
            run(&cmd.input, options, |report| {
                // A broken stdout cannot be reported anywhere better.
                let _ = reporter.report(report);
            })
        }
        OutputFormat::Json | OutputFormat::JsonMini => {
            let mut reporter = JsonReporter::new();
            let code = run(&cmd.input, options, |report| reporter.report(report));
            let document = reporter.finish(code == EXIT_SUCCESS, format.is_minified());
            let mut stdout = io::stdout();
            let _ = writeln!(stdout, "{document}");
            code
        }
    }
}

fn run(
    input: &Path,
    options: ValidationOptions,
    sink: impl FnMut(&ktx2_validate::ValidationReport),
) -> i32 {
    if input.as_os_str() == "-" {
        let stdin = io::stdin();
        validate_stream(&mut stdin.lock(), options, sink)
    } else {
        validate_file(input, options, sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_cli_contract() {
        let cmd = ValidateCmd::from_args(&["validate"], &["file.ktx2"]).unwrap();
        assert_eq!(cmd.format, None);
        assert!(!cmd.gltf_basisu);
        assert!(!cmd.warnings_as_errors);
        assert_eq!(cmd.input, PathBuf::from("file.ktx2"));
    }

    #[test]
    fn short_switches_parse() {
        let cmd = ValidateCmd::from_args(&["validate"], &["-g", "-e", "-"]).unwrap();
        assert!(cmd.gltf_basisu);
        assert!(cmd.warnings_as_errors);
        assert_eq!(cmd.input, PathBuf::from("-"));
    }

    #[test]
    fn rejects_missing_input() {
        assert!(ValidateCmd::from_args(&["validate"], &[]).is_err());
    }
}
