//! Position table output.
//!
//! Web front ends use the sheet directly and need each sprite's size and
//! background offset. The table is emitted either as a TypeScript module or
//! as plain JSON, in first-seen key order.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use crate::error::{ChopError, Result};
use crate::types::PositionTable;

/// Output format of a position table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PositionFormat {
    TypeScript,
    Json,
}

impl PositionFormat {
    /// Pick a format from the output extension; TypeScript unless `.json`.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("json") => PositionFormat::Json,
            _ => PositionFormat::TypeScript,
        }
    }
}

fn quoted(s: &str) -> Result<String> {
    serde_json::to_string(s).map_err(|e| ChopError::Parse {
        message: format!("Failed to quote '{}': {}", s, e),
        help: None,
    })
}

/// Render a position table as a TypeScript module.
pub fn render_typescript(table: &PositionTable) -> Result<String> {
    let mut out = String::new();

    out.push_str("// Auto-generated from pokesprite.scss\n");
    out.push_str("// Do not edit manually\n");
    out.push('\n');
    out.push_str("import { SpritePosition } from './sprite-utils';\n");
    out.push('\n');
    out.push_str("/**\n");
    out.push_str(" * Map of sprite position data from the spritesheet\n");
    out.push_str(" */\n");
    out.push_str("export const spritePositions: Record<string, SpritePosition> = {\n");

    for (key, position) in table.iter() {
        let _ = writeln!(
            out,
            "  {}: {{ width: {}, height: {}, backgroundPosition: {} }},",
            quoted(key)?,
            position.width,
            position.height,
            quoted(&position.background_position)?
        );
    }

    out.push_str("};\n");
    Ok(out)
}

/// Render a position table as pretty-printed JSON.
pub fn render_json(table: &PositionTable) -> Result<String> {
    let mut json = serde_json::to_string_pretty(table).map_err(|e| ChopError::Parse {
        message: format!("Failed to serialize positions: {}", e),
        help: None,
    })?;
    json.push('\n');
    Ok(json)
}

/// Render and write a position table.
pub fn write_positions(path: &Path, table: &PositionTable, format: PositionFormat) -> Result<()> {
    let content = match format {
        PositionFormat::TypeScript => render_typescript(table)?,
        PositionFormat::Json => render_json(table)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ChopError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, content).map_err(|e| ChopError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write positions: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SpritePosition;
    use tempfile::tempdir;

    fn table() -> PositionTable {
        let mut table = PositionTable::new();
        table.insert(
            "pokemon-1",
            SpritePosition {
                width: 20,
                height: 19,
                background_position: "0px 0px".to_string(),
            },
        );
        table.insert(
            "pokemon-25-cap-shiny",
            SpritePosition {
                width: 21,
                height: 20,
                background_position: "-67px -56px".to_string(),
            },
        );
        table
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            PositionFormat::from_path(Path::new("out/positions.json")),
            PositionFormat::Json
        );
        assert_eq!(
            PositionFormat::from_path(Path::new("out/sprite-positions.ts")),
            PositionFormat::TypeScript
        );
    }

    #[test]
    fn test_render_typescript_entries() {
        let ts = render_typescript(&table()).unwrap();

        assert!(ts.starts_with("// Auto-generated from pokesprite.scss\n"));
        assert!(ts.contains(
            "  \"pokemon-1\": { width: 20, height: 19, backgroundPosition: \"0px 0px\" },\n"
        ));
        assert!(ts.ends_with("};\n"));

        let first = ts.find("pokemon-1").unwrap();
        let second = ts.find("pokemon-25-cap-shiny").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_render_typescript_empty() {
        let ts = render_typescript(&PositionTable::new()).unwrap();
        assert!(ts.ends_with("Record<string, SpritePosition> = {\n};\n"));
    }

    #[test]
    fn test_render_json() {
        let json = render_json(&table()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["pokemon-25-cap-shiny"]["width"], 21);
        assert_eq!(
            value["pokemon-25-cap-shiny"]["backgroundPosition"],
            "-67px -56px"
        );
        assert!(json.find("pokemon-1").unwrap() < json.find("pokemon-25").unwrap());
    }

    #[test]
    fn test_write_positions_creates_parent() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("output").join("sprite-positions.ts");

        write_positions(&path, &table(), PositionFormat::TypeScript).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("pokemon-25-cap-shiny"));
    }
}
