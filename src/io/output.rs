use clap::ValueEnum;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::core::MethodKind;
use crate::render::MethodReport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
    Yaml,
}

pub trait OutputWriter {
    fn write_reports(&mut self, reports: &[MethodReport]) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_reports(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(reports)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

pub struct YamlWriter<W: Write> {
    writer: W,
}

impl<W: Write> YamlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for YamlWriter<W> {
    fn write_reports(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        let yaml = serde_yaml::to_string(reports)?;
        self.writer.write_all(yaml.as_bytes())?;
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_summary(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        let count = |kind| reports.iter().filter(|r| r.kind == kind).count();
        writeln!(
            self.writer,
            "{} {} methods: {} operation, {} get, {} paged",
            "callmeta".bold(),
            reports.len(),
            count(MethodKind::Operation).to_string().yellow(),
            count(MethodKind::Get).to_string().green(),
            count(MethodKind::Paged).to_string().cyan(),
        )?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_reports(&mut self, reports: &[MethodReport]) -> anyhow::Result<()> {
        self.write_summary(reports)?;
        if reports.is_empty() {
            return Ok(());
        }

        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Disabled)
            .set_header(vec!["Service", "Method", "Kind", "Returns", "Signature"]);
        for report in reports {
            let returns = match &report.item_type {
                Some(item) => format!("{} ([]*{})", report.return_type, item),
                None => report.return_type.clone(),
            };
            table.add_row(vec![
                Cell::new(format!("{}/{}", report.version, report.service)),
                Cell::new(&report.method),
                Cell::new(report.kind).fg(kind_color(report.kind)),
                Cell::new(returns),
                Cell::new(&report.fcn_args),
            ]);
        }
        writeln!(self.writer, "{table}")?;
        Ok(())
    }
}

fn kind_color(kind: MethodKind) -> Color {
    match kind {
        MethodKind::Operation => Color::Yellow,
        MethodKind::Get => Color::Green,
        MethodKind::Paged => Color::Cyan,
    }
}

pub fn create_writer<'w>(
    format: OutputFormat,
    writer: Box<dyn Write + 'w>,
) -> Box<dyn OutputWriter + 'w> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        OutputFormat::Yaml => Box::new(YamlWriter::new(writer)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KeyType;

    fn report(kind: MethodKind, item: Option<&str>) -> MethodReport {
        MethodReport {
            service: "Addresses".into(),
            method: "List".into(),
            version: "ga".into(),
            key_type: KeyType::Regional,
            kind,
            return_type: "AddressList".into(),
            item_type: item.map(str::to_string),
            call_args: String::new(),
            mock_hook: "ListHook func(...)".into(),
            fcn_args: "List(ctx context.Context, key *meta.Key, fl *filter.F) ([]*ga.Address, error)"
                .into(),
            interface_func: "List(...)".into(),
        }
    }

    #[test]
    fn test_json_round_trips_reports() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_reports(&[report(MethodKind::Paged, Some("Address"))])
            .unwrap();
        let parsed: Vec<MethodReport> = serde_json::from_slice(&buf).unwrap();
        assert_eq!(parsed[0].item_type.as_deref(), Some("Address"));
        assert_eq!(parsed[0].kind, MethodKind::Paged);
    }

    #[test]
    fn test_yaml_omits_missing_item_type() {
        let mut buf = Vec::new();
        YamlWriter::new(&mut buf)
            .write_reports(&[report(MethodKind::Get, None)])
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("kind: get"));
        assert!(!text.contains("item_type"));
    }

    #[test]
    fn test_terminal_lists_methods() {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        TerminalWriter::new(&mut buf)
            .write_reports(&[report(MethodKind::Paged, Some("Address"))])
            .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("1 methods: 0 operation, 0 get, 1 paged"));
        assert!(text.contains("ga/Addresses"));
        assert!(text.contains("AddressList ([]*Address)"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(serde_json::to_string(&OutputFormat::Yaml).unwrap(), "\"yaml\"");
        assert_eq!(OutputFormat::default(), OutputFormat::Terminal);
    }
}
