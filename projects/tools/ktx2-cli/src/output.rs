//! The `--format` option shared by `validate` and `info`.

use argh::FromArgValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    JsonMini,
}

impl OutputFormat {
    pub fn is_minified(self) -> bool {
        matches!(self, Self::JsonMini)
    }
}

impl FromArgValue for OutputFormat {
    fn from_arg_value(value: &str) -> Result<Self, String> {
        match value {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "mini-json" => Ok(Self::JsonMini),
            other => Err(format!(
                "unsupported format \"{other}\"; expected text, json or mini-json"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("text", OutputFormat::Text)]
    #[case("json", OutputFormat::Json)]
    #[case("mini-json", OutputFormat::JsonMini)]
    fn parses_known_formats(#[case] value: &str, #[case] expected: OutputFormat) {
        assert_eq!(OutputFormat::from_arg_value(value).unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_format() {
        assert!(OutputFormat::from_arg_value("yaml").is_err());
    }
}
