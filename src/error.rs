use std::fmt;
use thiserror::Error;

/// 入力テーブルの種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Keypoint,
    Match,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableKind::Keypoint => write!(f, "キーポイントログ"),
            TableKind::Match => write!(f, "マッチログ"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{kind}が見つかりません: {path}")]
    MissingFile { kind: TableKind, path: String },

    #[error("行を解析できません ({path}): {detail}")]
    MalformedRow { path: String, detail: String },

    #[error("列名が重複しています ({path}): {column}")]
    DuplicateColumn { path: String, column: String },

    #[error("空のグループ: {0}")]
    EmptyGroup(String),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl ReportError {
    /// ユーザー向けの対処方法
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ReportError::MissingFile { .. } => {
                Some("先にトラッカーを実行してください: cd build && ./2D_feature_tracking")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ReportError>;
