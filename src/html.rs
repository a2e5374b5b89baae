//! Static HTML page output, one colored `<span>` per cell.

use crate::sampler::{CellGrid, RenderedCell};
use crate::{AsciiHtmlError, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const HEADER: &str = r#"<!DOCTYPE html>
<html>
<head>
<style>
body {
    background-color: black;
    margin: 0;
    padding: 0;
    line-height: 0;
    overflow: hidden;
}
.pixel {
    display: inline-block;
    width: 8px;
    height: 8px;
    font-family: Consolas, 'Courier New', monospace;
    font-size: 7px;
    line-height: 8px;
    text-align: center;
}
</style>
</head>
<body>
"#;

const FOOTER: &str = "</body>\n</html>";

/// Write the full document for `grid` to `out`.
pub fn write_document<W: Write>(grid: &CellGrid, out: &mut W) -> io::Result<()> {
    out.write_all(HEADER.as_bytes())?;
    for row in grid.rows() {
        for cell in row {
            write_cell(cell, out)?;
        }
        out.write_all(b"<br>\n")?;
    }
    out.write_all(FOOTER.as_bytes())
}

fn write_cell<W: Write>(cell: &RenderedCell, out: &mut W) -> io::Result<()> {
    let [r, g, b] = cell.color.0;
    write!(out, "<span class=\"pixel\" style=\"color: rgb({},{},{});\">", r, g, b)?;
    match escape(cell.glyph) {
        Some(entity) => out.write_all(entity.as_bytes())?,
        None => write!(out, "{}", cell.glyph)?,
    }
    out.write_all(b"</span>")
}

/// Entity for HTML-reserved glyphs.
fn escape(glyph: char) -> Option<&'static str> {
    match glyph {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

pub fn render_to_string(grid: &CellGrid) -> String {
    let mut buf = Vec::new();
    write_document(grid, &mut buf).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buf).into_owned()
}

/// Create or truncate `path` and write the document into it.
pub fn render_to_file(grid: &CellGrid, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let write_err = |source| AsciiHtmlError::WriteOutput { path: path.to_path_buf(), source };

    let file = File::create(path).map_err(write_err)?;
    let mut out = BufWriter::new(file);
    write_document(grid, &mut out).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    log::info!("wrote {} ({}x{} cells)", path.display(), grid.width(), grid.height());
    Ok(())
}
