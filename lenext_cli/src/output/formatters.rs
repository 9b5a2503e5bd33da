use super::{ForgeryReport, OutputFormatter};
use anyhow::Result;
use colored::*;

/// Text formatter: the forged MAC and nothing else, so it pipes cleanly
pub struct TextFormatter {
    use_color: bool,
}

impl TextFormatter {
    pub fn new(use_color: bool) -> Self {
        Self { use_color }
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, report: &ForgeryReport) -> Result<String> {
        if self.use_color {
            Ok(report.mac.cyan().to_string())
        } else {
            Ok(report.mac.clone())
        }
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ForgeryReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn report() -> ForgeryReport {
        ForgeryReport {
            mac: "0123456789abcdeffedcba9876543210".to_string(),
            keylen: 11,
            message_hex: "6d79".to_string(),
            out: PathBuf::from("forged.bin"),
        }
    }

    #[test]
    fn test_text_formatter_plain() {
        let output = TextFormatter::new(false).format(&report()).unwrap();
        assert_eq!(output, "0123456789abcdeffedcba9876543210");
    }

    #[test]
    fn test_json_formatter_fields() {
        let output = JsonFormatter::new(false).format(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["mac"], "0123456789abcdeffedcba9876543210");
        assert_eq!(value["keylen"], 11);
        assert_eq!(value["message_hex"], "6d79");
        assert_eq!(value["out"], "forged.bin");
    }

    #[test]
    fn test_json_formatter_pretty_is_multiline() {
        let output = JsonFormatter::new(true).format(&report()).unwrap();
        assert!(output.contains('\n'));
    }
}
