use contracts::shared::list::CsvExportable;

/// Renders rows as CSV with a `;` delimiter.
/// A UTF-8 BOM is written first so spreadsheet tools keep CJK text intact.
pub fn to_csv<T: CsvExportable>(items: &[T]) -> anyhow::Result<String> {
    let mut buf = Vec::new();
    buf.extend_from_slice("\u{FEFF}".as_bytes());

    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(buf);
    writer.write_record(T::headers())?;
    for item in items {
        writer.write_record(item.to_csv_row())?;
    }

    let buf = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("csv flush failed: {}", e))?;
    Ok(String::from_utf8(buf)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::fixtures::LOG_ENTRIES;

    #[test]
    fn test_csv_has_bom_header_and_rows() {
        let csv = to_csv(&LOG_ENTRIES[..2]).unwrap();
        assert!(csv.starts_with('\u{FEFF}'));

        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "ID;时间;级别;模块;内容");
        assert!(lines[1].starts_with("1;2024-01-16 10:30:00;信息;auth;"));
    }

    #[test]
    fn test_cells_with_delimiter_are_quoted() {
        struct Note(&'static str);
        impl CsvExportable for Note {
            fn headers() -> Vec<&'static str> {
                vec!["text"]
            }
            fn to_csv_row(&self) -> Vec<String> {
                vec![self.0.to_string()]
            }
        }

        let csv = to_csv(&[Note("a;b")]).unwrap();
        assert!(csv.ends_with("\"a;b\"\n"));
    }
}
