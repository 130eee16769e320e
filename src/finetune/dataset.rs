//! Training dataset records and the newline-delimited JSON reader.
//!
//! Uploads are parsed all-or-nothing: a single malformed line discards the
//! whole upload and the built-in fallback records are used instead. The reason
//! for a fallback is kept for logging only and never reaches the user.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

/// File extensions offered by the dataset picker.
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["json", "csv", "jsonl"];

/// One validation example: the input essay and its reference description.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DatasetRecord {
    pub essay: String,
    pub description: String,
}

impl DatasetRecord {
    pub fn new(essay: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            essay: essay.into(),
            description: description.into(),
        }
    }
}

/// The two records substituted when an upload yields nothing usable.
pub fn fallback_records() -> Vec<DatasetRecord> {
    vec![
        DatasetRecord::new(
            "The quick brown fox jumps over the lazy dog.",
            "A swift animal in action.",
        ),
        DatasetRecord::new(
            "A journey of a thousand miles begins with a single step.",
            "Emphasizes the importance of starting.",
        ),
    ]
}

/// Why an upload was replaced by the fallback records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackReason {
    /// No non-blank lines.
    Empty,
    /// Bytes were not valid UTF-8.
    InvalidUtf8,
    /// A line failed to parse; `line` is 1-based and counts blank lines.
    MalformedLine { line: usize },
}

/// Where the records of a [`ParsedDataset`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetSource {
    Uploaded,
    Fallback(FallbackReason),
}

/// Records ready for a run, never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedDataset {
    records: Vec<DatasetRecord>,
    source: DatasetSource,
}

impl ParsedDataset {
    fn fallback(reason: FallbackReason) -> Self {
        Self {
            records: fallback_records(),
            source: DatasetSource::Fallback(reason),
        }
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<DatasetRecord> {
        self.records
    }

    pub fn source(&self) -> DatasetSource {
        self.source
    }

    pub fn used_fallback(&self) -> bool {
        matches!(self.source, DatasetSource::Fallback(_))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Strict parse failure for a single line of an upload.
#[derive(Debug, Error)]
pub enum RecordParseError {
    #[error("Line {line} is not valid JSON: {source}")]
    Json {
        line: usize,
        source: serde_json::Error,
    },
    #[error("Line {line} is not a JSON object")]
    NotAnObject { line: usize },
    #[error("Line {line} lacks string fields `essay` and `description`: {source}")]
    Fields {
        line: usize,
        source: serde_json::Error,
    },
}

impl RecordParseError {
    pub fn line(&self) -> usize {
        match self {
            Self::Json { line, .. } | Self::NotAnObject { line } | Self::Fields { line, .. } => {
                *line
            }
        }
    }
}

fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r' | '\u{b}' | '\u{c}' | '\u{1c}' | '\u{1d}' | '\u{1e}' | '\u{85}'
            | '\u{2028}' | '\u{2029}'
    )
}

/// Split on every Unicode line boundary, treating `\r\n` as one break.
/// A trailing break does not produce an extra empty line.
fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((idx, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..idx]);
        start = idx + ch.len_utf8();
        if ch == '\r' && chars.next_if(|&(_, next)| next == '\n').is_some() {
            start += 1;
        }
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Parse every non-blank line of `text`, failing on the first bad line.
pub fn parse_records(text: &str) -> Result<Vec<DatasetRecord>, RecordParseError> {
    let mut records = Vec::new();
    for (index, raw) in split_lines(text).into_iter().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value: serde_json::Value = serde_json::from_str(trimmed)
            .map_err(|source| RecordParseError::Json { line, source })?;
        if !value.is_object() {
            return Err(RecordParseError::NotAnObject { line });
        }
        let record = serde_json::from_value(value)
            .map_err(|source| RecordParseError::Fields { line, source })?;
        records.push(record);
    }
    Ok(records)
}

/// Decode and parse an upload, substituting the fallback records when needed.
pub fn parse_dataset(bytes: &[u8]) -> ParsedDataset {
    let Ok(text) = std::str::from_utf8(bytes) else {
        tracing::debug!("Dataset is not valid UTF-8; using fallback records");
        return ParsedDataset::fallback(FallbackReason::InvalidUtf8);
    };
    match parse_records(text) {
        Ok(records) if records.is_empty() => {
            tracing::debug!("Dataset has no records; using fallback records");
            ParsedDataset::fallback(FallbackReason::Empty)
        }
        Ok(records) => ParsedDataset {
            records,
            source: DatasetSource::Uploaded,
        },
        Err(err) => {
            tracing::debug!("Discarding dataset upload: {err}");
            ParsedDataset::fallback(FallbackReason::MalformedLine { line: err.line() })
        }
    }
}

/// Extension label of an uploaded file. Advisory only: content is always
/// read as newline-delimited JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    Json,
    Csv,
    Jsonl,
}

impl DatasetFormat {
    pub fn from_file_name(name: &str) -> Option<Self> {
        let ext = Path::new(name).extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "jsonl" => Some(Self::Jsonl),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Csv => "CSV",
            Self::Jsonl => "JSONL",
        }
    }
}

/// Errors raised while accepting a dataset file from disk or drag-and-drop.
#[derive(Debug, Error)]
pub enum DatasetLoadError {
    #[error("Unsupported dataset file {name}; expected .json, .csv or .jsonl")]
    UnsupportedExtension { name: String },
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Dropped file {name} has no readable contents")]
    NoContents { name: String },
}

/// Raw upload as delivered by the file picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedDataset {
    file_name: String,
    format: DatasetFormat,
    bytes: Vec<u8>,
}

impl UploadedDataset {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DatasetLoadError> {
        let file_name = file_name.into();
        let format = DatasetFormat::from_file_name(&file_name).ok_or_else(|| {
            DatasetLoadError::UnsupportedExtension {
                name: file_name.clone(),
            }
        })?;
        Ok(Self {
            file_name,
            format,
            bytes,
        })
    }

    pub fn from_path(path: &Path) -> Result<Self, DatasetLoadError> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        if DatasetFormat::from_file_name(&file_name).is_none() {
            return Err(DatasetLoadError::UnsupportedExtension { name: file_name });
        }
        let bytes = std::fs::read(path).map_err(|source| DatasetLoadError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(file_name, bytes)
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn format(&self) -> DatasetFormat {
        self.format
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const TWO_RECORDS: &str = concat!(
        "{\"essay\": \"Stars burn hydrogen.\", \"description\": \"Fusion basics.\"}\n",
        "\n",
        "  {\"essay\": \"Tides follow the moon.\", \"description\": \"Gravity.\", \"id\": 7}  \n",
    );

    #[test]
    fn parses_each_non_blank_line() {
        let parsed = parse_dataset(TWO_RECORDS.as_bytes());
        assert_eq!(parsed.source(), DatasetSource::Uploaded);
        assert_eq!(
            parsed.records(),
            &[
                DatasetRecord::new("Stars burn hydrogen.", "Fusion basics."),
                DatasetRecord::new("Tides follow the moon.", "Gravity."),
            ]
        );
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let text = "{\"essay\":\"a\",\"description\":\"b\"}\r\n{\"essay\":\"c\",\"description\":\"d\"}\r\n";
        let parsed = parse_dataset(text.as_bytes());
        assert!(!parsed.used_fallback());
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn carriage_return_only_line_endings_are_accepted() {
        let text = "{\"essay\":\"a\",\"description\":\"b\"}\r{\"essay\":\"c\",\"description\":\"d\"}\r";
        let parsed = parse_dataset(text.as_bytes());
        assert!(!parsed.used_fallback());
        let essays: Vec<_> = parsed.records().iter().map(|r| r.essay.as_str()).collect();
        assert_eq!(essays, vec!["a", "c"]);
    }

    #[test]
    fn unicode_line_separators_split_records() {
        let record = "{\"essay\":\"x\",\"description\":\"y\"}";
        let text = format!("{record}\u{2028}{record}\u{85}{record}\u{c}{record}");
        assert_eq!(parse_dataset(text.as_bytes()).len(), 4);
    }

    #[test]
    fn line_numbers_count_crlf_as_one_break() {
        assert_eq!(split_lines("a\r\nb\rc\n\nd\n"), vec!["a", "b", "c", "", "d"]);
        let text = "{\"essay\":\"a\",\"description\":\"b\"}\r\n\r\noops\r\n";
        assert_eq!(
            parse_dataset(text.as_bytes()).source(),
            DatasetSource::Fallback(FallbackReason::MalformedLine { line: 3 })
        );
    }

    #[test]
    fn one_malformed_line_discards_the_whole_upload() {
        let text = format!("{TWO_RECORDS}not json\n");
        let parsed = parse_dataset(text.as_bytes());
        assert_eq!(
            parsed.source(),
            DatasetSource::Fallback(FallbackReason::MalformedLine { line: 4 })
        );
        assert_eq!(parsed.records(), fallback_records().as_slice());
    }

    #[test]
    fn blank_input_uses_fallback() {
        for text in ["", "\n\n", "   \n\t\n"] {
            let parsed = parse_dataset(text.as_bytes());
            assert_eq!(parsed.source(), DatasetSource::Fallback(FallbackReason::Empty));
            assert_eq!(parsed.len(), 2);
        }
    }

    #[test]
    fn undecodable_bytes_use_fallback() {
        let parsed = parse_dataset(&[0xff, 0xfe, 0x00, 0x7b]);
        assert_eq!(
            parsed.source(),
            DatasetSource::Fallback(FallbackReason::InvalidUtf8)
        );
        assert_eq!(parsed.records(), fallback_records().as_slice());
    }

    #[test]
    fn non_object_and_incomplete_lines_are_malformed() {
        assert!(matches!(
            parse_records("[\"essay\", \"description\"]"),
            Err(RecordParseError::NotAnObject { line: 1 })
        ));
        assert!(matches!(
            parse_records("{\"essay\": \"only\"}"),
            Err(RecordParseError::Fields { line: 1, .. })
        ));
        assert!(matches!(
            parse_records("{\"essay\": 3, \"description\": \"x\"}"),
            Err(RecordParseError::Fields { line: 1, .. })
        ));
    }

    #[test]
    fn fallback_has_two_fixed_records() {
        let records = fallback_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].essay, "The quick brown fox jumps over the lazy dog.");
        assert_eq!(records[1].description, "Emphasizes the importance of starting.");
    }

    #[test]
    fn format_is_taken_from_extension_label() {
        assert_eq!(DatasetFormat::from_file_name("val.JSONL"), Some(DatasetFormat::Jsonl));
        assert_eq!(DatasetFormat::from_file_name("val.csv"), Some(DatasetFormat::Csv));
        assert_eq!(DatasetFormat::from_file_name("val.json"), Some(DatasetFormat::Json));
        assert_eq!(DatasetFormat::from_file_name("val.txt"), None);
        assert_eq!(DatasetFormat::from_file_name("jsonl"), None);
    }

    #[test]
    fn upload_rejects_unknown_extension() {
        let err = UploadedDataset::new("notes.txt", b"{}".to_vec()).unwrap_err();
        assert!(matches!(err, DatasetLoadError::UnsupportedExtension { .. }));
    }

    #[test]
    fn upload_reads_file_from_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("val.csv");
        std::fs::write(&path, TWO_RECORDS).unwrap();
        let upload = UploadedDataset::from_path(&path).unwrap();
        assert_eq!(upload.file_name(), "val.csv");
        assert_eq!(upload.format(), DatasetFormat::Csv);
        assert_eq!(upload.bytes(), TWO_RECORDS.as_bytes());
    }

    #[test]
    fn upload_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = UploadedDataset::from_path(&dir.path().join("gone.json")).unwrap_err();
        assert!(matches!(err, DatasetLoadError::Read { .. }));
    }
}
