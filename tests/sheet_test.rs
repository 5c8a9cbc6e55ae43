use email_sheet::*;

#[test]
fn test_build_workbook_produces_xlsx() {
    let rows = expand_rows(&["valid@ok.com", "not-an-email", "a@x.coma2@y.org"]);
    let mut workbook = build_workbook(&rows, DEFAULT_SHEET_NAME).unwrap();

    let buffer = workbook.save_to_buffer().unwrap();
    assert!(buffer.starts_with(b"PK"));
}

#[test]
fn test_build_workbook_empty_rows() {
    let mut workbook = build_workbook(&[], DEFAULT_SHEET_NAME).unwrap();
    assert!(!workbook.save_to_buffer().unwrap().is_empty());
}

#[test]
fn test_build_workbook_rejects_bad_sheet_name() {
    let err = build_workbook(&[], "Bad[Name]").err().unwrap();
    assert!(matches!(err, PipelineError::Write(_)));
}

#[test]
fn test_write_workbook_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("emails.xlsx");
    let rows = expand_rows(&["info@acme.org"]);

    write_workbook(&rows, DEFAULT_SHEET_NAME, &path).unwrap();

    let metadata = std::fs::metadata(&path).unwrap();
    assert!(metadata.len() > 0);
}

#[test]
fn test_write_workbook_to_missing_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("emails.xlsx");

    let err = write_workbook(&[], DEFAULT_SHEET_NAME, &path).unwrap_err();
    assert!(matches!(err, PipelineError::Write(_)));
}

// --- cell contents and fills ---

fn write_mixed(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("emails.xlsx");
    let rows = expand_rows(&["valid@ok.com", "not-an-email", "info@acme.org"]);
    write_workbook(&rows, DEFAULT_SHEET_NAME, &path).unwrap();
    path
}

fn read_part(path: &std::path::Path, name: &str) -> String {
    use std::io::Read;

    let file = std::fs::File::open(path).unwrap();
    let mut archive = zip::ZipArchive::new(file).unwrap();
    let mut xml = String::new();
    archive.by_name(name).unwrap().read_to_string(&mut xml).unwrap();
    xml
}

fn section<'a>(xml: &'a str, open: &str, close: &str) -> &'a str {
    let start = xml.find(open).unwrap();
    let end = start + xml[start..].find(close).unwrap();
    &xml[start..end]
}

fn attr(element: &str, name: &str) -> Option<usize> {
    let key = format!(" {name}=\"");
    let start = element.find(&key)? + key.len();
    let end = start + element[start..].find('"')?;
    element[start..end].parse().ok()
}

/// Fill color of the cell at `cell`, resolved through its style index.
fn cell_fill(sheet: &str, styles: &str, cell: &str) -> String {
    let open = format!("<c r=\"{cell}\"");
    let start = sheet.find(&open).unwrap();
    let end = start + sheet[start..].find('>').unwrap();
    let style = attr(&sheet[start..end], "s").unwrap_or(0);

    let xfs: Vec<&str> = section(styles, "<cellXfs", "</cellXfs>")
        .split("<xf ")
        .skip(1)
        .collect();
    let fill_id = attr(&format!(" {}", xfs[style]), "fillId").unwrap();

    let fills: Vec<&str> = section(styles, "<fills", "</fills>")
        .split("<fill>")
        .skip(1)
        .collect();
    fills[fill_id].to_string()
}

#[test]
fn test_cell_values_and_blank_enrichment() {
    use calamine::{Reader, Xlsx, open_workbook};

    let dir = tempfile::tempdir().unwrap();
    let path = write_mixed(dir.path());

    let mut workbook: Xlsx<_> = open_workbook(&path).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    let cells: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(ToString::to_string).collect())
        .collect();

    assert_eq!(cells.len(), 4);
    assert_eq!(cells[0], ["Email Address", "Company Name", "Website"]);
    assert_eq!(cells[1], ["valid@ok.com", "Ok", "https://ok.com"]);
    assert_eq!(cells[2], ["not-an-email", "", ""]);
    assert_eq!(cells[3], ["info@acme.org", "Acme", "https://acme.org"]);
}

#[test]
fn test_validity_fills() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_mixed(dir.path());

    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");
    let styles = read_part(&path, "xl/styles.xml");

    assert!(cell_fill(&sheet, &styles, "A1").contains("FFC0C0C0"));
    assert!(cell_fill(&sheet, &styles, "A2").contains("FFCCFFCC"));
    assert!(cell_fill(&sheet, &styles, "A3").contains("FFFF8080"));
    assert!(cell_fill(&sheet, &styles, "A4").contains("FFCCFFCC"));
}

#[test]
fn test_invalid_row_has_no_enrichment_cells() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_mixed(dir.path());

    let sheet = read_part(&path, "xl/worksheets/sheet1.xml");

    assert!(sheet.contains("<c r=\"A3\""));
    assert!(!sheet.contains("<c r=\"B3\""));
    assert!(!sheet.contains("<c r=\"C3\""));
    assert!(sheet.contains("<c r=\"B2\""));
}
