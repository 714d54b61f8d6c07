//! Spreadsheet export.
//!
//! Writes the full, unpaginated result set to an XLSX workbook with a
//! single `Words` sheet: header row `Word`, `Length`, then one row per
//! result in result-set order. An XLSX file is a ZIP archive of
//! SpreadsheetML parts; the fixed parts are embedded verbatim and the
//! worksheet is rendered row by row with inline strings, which keeps the
//! archive self-contained (no shared-strings part).

use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

use quick_xml::escape::escape;
use thiserror::Error;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::search::WordResult;

/// Default file name for exported workbooks.
pub const DEFAULT_EXPORT_FILE: &str = "scrabble_words.xlsx";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to assemble workbook archive: {0}")]
    Zip(#[from] zip::result::ZipError),
}

const CONTENT_TYPES: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
    r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
    r#"</Types>"#,
);

const ROOT_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>"#,
    r#"</Relationships>"#,
);

const WORKBOOK: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
    r#"<sheets><sheet name="Words" sheetId="1" r:id="rId1"/></sheets>"#,
    r#"</workbook>"#,
);

const WORKBOOK_RELS: &str = concat!(
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
    "\n",
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>"#,
    r#"</Relationships>"#,
);

/// Write `words` to an XLSX workbook at `path`.
///
/// No-op returning `Ok(false)` when the result set is empty. The caller's
/// in-memory state is never touched; failures only surface as `ExportError`.
pub fn write_xlsx(words: &[WordResult], path: &Path) -> Result<bool, ExportError> {
    if words.is_empty() {
        log::debug!("Nothing to export, skipping {}", path.display());
        return Ok(false);
    }

    let sheet = render_sheet(words);

    let file = File::create(path)?;
    let mut archive = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts: [(&str, &[u8]); 5] = [
        ("[Content_Types].xml", CONTENT_TYPES.as_bytes()),
        ("_rels/.rels", ROOT_RELS.as_bytes()),
        ("xl/workbook.xml", WORKBOOK.as_bytes()),
        ("xl/_rels/workbook.xml.rels", WORKBOOK_RELS.as_bytes()),
        ("xl/worksheets/sheet1.xml", sheet.as_bytes()),
    ];
    for (name, contents) in parts {
        archive.start_file(name, options.clone())?;
        archive.write_all(contents)?;
    }
    archive.finish()?;

    log::info!("Exported {} words to {}", words.len(), path.display());
    Ok(true)
}

fn render_sheet(words: &[WordResult]) -> String {
    let mut sheet = String::with_capacity(128 + 96 * words.len());
    sheet.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    sheet.push('\n');
    sheet.push_str(
        r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main"><sheetData>"#,
    );
    sheet.push_str(
        r#"<row r="1"><c r="A1" t="inlineStr"><is><t>Word</t></is></c><c r="B1" t="inlineStr"><is><t>Length</t></is></c></row>"#,
    );
    for (index, word) in words.iter().enumerate() {
        let row = index + 2;
        let _ = write!(
            sheet,
            r#"<row r="{row}"><c r="A{row}" t="inlineStr"><is><t>{}</t></is></c><c r="B{row}"><v>{}</v></c></row>"#,
            escape(word.value.as_str()),
            word.length,
        );
    }
    sheet.push_str("</sheetData></worksheet>");
    sheet
}
