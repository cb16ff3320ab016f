use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ImportGenError;
use crate::error::Result;
use crate::record::Header;
use crate::synthesizer::Row;

pub fn write_csv<W: io::Write>(w: W, header: Header, rows: &[Row]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(w);
    wtr.write_record(header.names())?;
    for row in rows {
        wtr.write_record(row.record.values())?;
    }
    wtr.flush()?;

    Ok(())
}

/// Writes the whole file or nothing: rows go to a temp file next to `path`, which replaces
/// `path` only once everything is on disk. Returns the written size in bytes.
pub fn write_csv_file(path: &Path, header: Header, rows: &[Row]) -> Result<u64> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    if !dir.is_dir() {
        return Err(ImportGenError::OutputPath(format!(
            "output directory {dir:?} doesn't exist"
        )));
    }

    let mut tmp = NamedTempFile::new_in(dir)?;
    write_csv(tmp.as_file_mut(), header, rows)?;
    tmp.as_file().sync_all()?;
    let file = tmp.persist(path)?;

    Ok(file.metadata()?.len())
}

#[cfg(test)]
mod tests {
    use std::env::temp_dir;

    use super::*;
    use crate::record::Record;
    use crate::record::FIELD_NAMES;

    fn row(name: &str, description: &str) -> Row {
        Row {
            index: 1,
            fault: None,
            record: Record {
                product_name: name.to_string(),
                description: description.to_string(),
                ..Default::default()
            },
        }
    }

    #[test]
    fn test_quoting() {
        let mut buf = Vec::new();
        write_csv(
            &mut buf,
            Header::Standard,
            &[row("Hoodie, \"Classic\"", "line\nbreak")],
        )
        .unwrap();

        let out = String::from_utf8(buf).unwrap();
        let header = FIELD_NAMES.join(",");
        assert!(out.starts_with(&format!("{header}\r\n")));
        assert!(out.contains("\"Hoodie, \"\"Classic\"\"\""));
        assert!(out.contains("\"line\nbreak\""));
    }

    #[test]
    fn test_renamed_header() {
        let mut buf = Vec::new();
        write_csv(&mut buf, Header::Renamed, &[]).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.starts_with("ProductName,UPID,SKU,Description,Category,"));
        assert!(out.ends_with("EnvScore\r\n"));
    }

    #[test]
    fn test_missing_directory_leaves_nothing() {
        let path = temp_dir()
            .join("import-gen-does-not-exist")
            .join("nested")
            .join("out.csv");
        let res = write_csv_file(&path, Header::Standard, &[row("Vest", "")]);
        assert!(matches!(res, Err(ImportGenError::OutputPath(_))));
        assert!(!path.exists());
    }
}
