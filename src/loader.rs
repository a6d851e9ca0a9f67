//! CSVテーブル読み込み
//!
//! 先頭行をヘッダーとして扱い、各行をserdeで型付きレコードに変換する。

use crate::error::{ReportError, Result, TableKind};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// CSVから読み込めるレコード型
pub trait TableRecord: DeserializeOwned {
    const KIND: TableKind;
}

/// ファイルを開き、ヘッダーを検証したリーダーを返す
pub fn open_table(path: &Path, kind: TableKind) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(ReportError::MissingFile {
            kind,
            path: path.display().to_string(),
        });
    }

    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().from_reader(file);

    let headers = reader.headers().map_err(|e| malformed(path, e))?;
    ensure_unique_columns(path, headers)?;

    Ok(reader)
}

fn ensure_unique_columns(path: &Path, headers: &csv::StringRecord) -> Result<()> {
    let mut seen = HashSet::new();
    for column in headers.iter() {
        if !seen.insert(column) {
            return Err(ReportError::DuplicateColumn {
                path: path.display().to_string(),
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

/// 行を遅延的に読み出すイテレータ
pub fn records<T: TableRecord>(path: &Path) -> Result<impl Iterator<Item = Result<T>>> {
    let reader = open_table(path, T::KIND)?;
    let path = path.to_path_buf();
    Ok(reader
        .into_deserialize::<T>()
        .map(move |row| row.map_err(|e| malformed(&path, e))))
}

/// 全行を読み込む。不正な行が1つでもあればエラー。
pub fn load_records<T: TableRecord>(path: &Path) -> Result<Vec<T>> {
    let rows = records::<T>(path)?.collect::<Result<Vec<T>>>()?;
    log::debug!("{}: {}行を読み込み ({})", T::KIND, rows.len(), path.display());
    Ok(rows)
}

fn malformed(path: &Path, err: csv::Error) -> ReportError {
    ReportError::MalformedRow {
        path: path.display().to_string(),
        detail: err.to_string(),
    }
}
