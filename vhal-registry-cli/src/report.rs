//! Report rendering
//!
//! Renders lookup results, listings and statistics as plain text tables or JSON.

use crate::config::OutputFormat;
use anyhow::Result;
use serde::Serialize;
use std::fmt::Write;
use vhal_registry::{ChangeMode, PropertyId, RegistryStats};

/// One property as shown in lookup and list output
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyRow {
    pub name: Option<String>,
    pub id: PropertyId,
    pub id_hex: String,
    /// `None` when the registry does not classify the property
    pub change_mode: Option<ChangeMode>,
}

impl PropertyRow {
    pub fn new(name: Option<String>, id: PropertyId, change_mode: Option<ChangeMode>) -> Self {
        Self {
            name,
            id,
            id_hex: id.to_string(),
            change_mode,
        }
    }
}

/// Decoded fields of a property id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescription {
    #[serde(flatten)]
    pub row: PropertyRow,
    pub group: Option<String>,
    pub area: Option<String>,
    pub value_type: Option<String>,
    pub index: u16,
    pub subscribable: Option<bool>,
    pub uses_sample_rate: Option<bool>,
}

impl PropertyDescription {
    pub fn new(row: PropertyRow) -> Self {
        let id = row.id;
        let mode = row.change_mode;
        Self {
            row,
            group: id.group().map(|g| format!("{:?}", g)),
            area: id.area().map(|a| format!("{:?}", a)),
            value_type: id.value_type().map(|t| format!("{:?}", t)),
            index: id.index(),
            subscribable: mode.map(ChangeMode::is_subscribable),
            uses_sample_rate: mode.map(ChangeMode::uses_sample_rate),
        }
    }
}

#[derive(Serialize)]
struct StatsReport {
    properties: usize,
    static_properties: usize,
    on_change_properties: usize,
    continuous_properties: usize,
}

fn mode_label(mode: Option<ChangeMode>) -> &'static str {
    mode.map(ChangeMode::name).unwrap_or("unknown")
}

/// Render property rows as a table or a JSON array
pub fn render_rows(rows: &[PropertyRow], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Txt => {
            let name_width = rows
                .iter()
                .filter_map(|r| r.name.as_ref().map(String::len))
                .max()
                .unwrap_or(0)
                .max("PROPERTY".len());

            let mut out = String::new();
            writeln!(out, "{:<name_width$}  {:<10}  CHANGE MODE", "PROPERTY", "ID")?;
            for row in rows {
                writeln!(
                    out,
                    "{:<name_width$}  {:<10}  {}",
                    row.name.as_deref().unwrap_or("-"),
                    row.id_hex,
                    mode_label(row.change_mode)
                )?;
            }
            Ok(out)
        }
    }
}

/// Render registry statistics
pub fn render_stats(stats: &RegistryStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&StatsReport {
            properties: stats.num_properties,
            static_properties: stats.num_static,
            on_change_properties: stats.num_on_change,
            continuous_properties: stats.num_continuous,
        })?),
        OutputFormat::Txt => {
            let mut out = String::new();
            writeln!(out, "Change-Mode Registry:")?;
            writeln!(out, "  Properties: {}", stats.num_properties)?;
            writeln!(out, "  STATIC:     {}", stats.num_static)?;
            writeln!(out, "  ON_CHANGE:  {}", stats.num_on_change)?;
            writeln!(out, "  CONTINUOUS: {}", stats.num_continuous)?;
            Ok(out)
        }
    }
}

/// Render the decoded fields of one property
pub fn render_description(desc: &PropertyDescription, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(desc)?),
        OutputFormat::Txt => {
            let unknown = "unknown";
            let yes_no = |v: Option<bool>| match v {
                Some(true) => "yes",
                Some(false) => "no",
                None => "-",
            };

            let mut out = String::new();
            writeln!(out, "Property:     {}", desc.row.name.as_deref().unwrap_or("-"))?;
            writeln!(out, "Id:           {} ({})", desc.row.id_hex, desc.row.id.raw())?;
            writeln!(out, "Group:        {}", desc.group.as_deref().unwrap_or(unknown))?;
            writeln!(out, "Area:         {}", desc.area.as_deref().unwrap_or(unknown))?;
            writeln!(out, "Value type:   {}", desc.value_type.as_deref().unwrap_or(unknown))?;
            writeln!(out, "Index:        {:#06x}", desc.index)?;
            writeln!(out, "Change mode:  {}", mode_label(desc.row.change_mode))?;
            writeln!(out, "Subscribable: {}", yes_no(desc.subscribable))?;
            writeln!(out, "Sample rate:  {}", yes_no(desc.uses_sample_rate))?;
            Ok(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vhal_registry::vehicle_property::{DOOR_LOCK, PERF_VEHICLE_SPEED};

    fn rows() -> Vec<PropertyRow> {
        vec![
            PropertyRow::new(Some("DOOR_LOCK".to_string()), DOOR_LOCK, Some(ChangeMode::OnChange)),
            PropertyRow::new(None, PropertyId::new(0x3120_0001), None),
        ]
    }

    #[test]
    fn test_render_rows_txt() {
        let out = render_rows(&rows(), OutputFormat::Txt).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("PROPERTY"));
        assert!(lines[1].contains("0x16200b02"));
        assert!(lines[1].ends_with("ON_CHANGE"));
        assert!(lines[2].starts_with("-"));
        assert!(lines[2].ends_with("unknown"));
    }

    #[test]
    fn test_render_rows_json() {
        let out = render_rows(&rows(), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(value[0]["name"], "DOOR_LOCK");
        assert_eq!(value[0]["id"], 0x1620_0B02);
        assert_eq!(value[0]["change_mode"], "ON_CHANGE");
        assert!(value[1]["change_mode"].is_null());
    }

    #[test]
    fn test_render_description() {
        let row = PropertyRow::new(
            Some("PERF_VEHICLE_SPEED".to_string()),
            PERF_VEHICLE_SPEED,
            Some(ChangeMode::Continuous),
        );
        let desc = PropertyDescription::new(row);

        assert_eq!(desc.group.as_deref(), Some("System"));
        assert_eq!(desc.area.as_deref(), Some("Global"));
        assert_eq!(desc.value_type.as_deref(), Some("Float"));
        assert_eq!(desc.uses_sample_rate, Some(true));

        let out = render_description(&desc, OutputFormat::Txt).unwrap();
        assert!(out.contains("Change mode:  CONTINUOUS"));
        assert!(out.contains("Index:        0x0207"));

        let json: serde_json::Value =
            serde_json::from_str(&render_description(&desc, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["name"], "PERF_VEHICLE_SPEED");
        assert_eq!(json["subscribable"], true);
    }

    #[test]
    fn test_render_stats() {
        let stats = RegistryStats {
            num_properties: 3,
            num_static: 1,
            num_on_change: 1,
            num_continuous: 1,
        };

        let txt = render_stats(&stats, OutputFormat::Txt).unwrap();
        assert!(txt.contains("Properties: 3"));

        let json: serde_json::Value =
            serde_json::from_str(&render_stats(&stats, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(json["continuous_properties"], 1);
    }
}
