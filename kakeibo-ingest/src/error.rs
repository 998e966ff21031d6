use thiserror::Error;

/// Failures surfaced to the user as a single message. Malformed rows are
/// never reported here; the classifier drops them.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum IngestError {
    #[error("CSVファイルを選択してください。")]
    WrongFileType,

    #[error("ファイルの読み込みに失敗しました: {0}")]
    Read(String),

    #[error("CSVの解析に失敗しました: {0}")]
    Parse(String),
}
