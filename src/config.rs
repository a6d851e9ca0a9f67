//! 実行設定の解決
//!
//! 優先順位: コマンドライン引数 > 設定ファイル > デフォルト値

use crate::cli::Cli;
use crate::error::{ReportError, Result, TableKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const KEYPOINT_LOG_NAME: &str = "keypoint_log.csv";
pub const MATCH_LOG_NAME: &str = "match_log.csv";
pub const DEFAULT_TOP: usize = 10;

/// デフォルトパスの基準ディレクトリを上書きする環境変数
pub const ROOT_ENV: &str = "FEATURE_REPORT_ROOT";

/// 設定ファイル（JSON）の内容。全項目省略可能。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub keypoints: Option<PathBuf>,
    pub matches: Option<PathBuf>,
    pub top: Option<usize>,
}

impl ConfigFile {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(ReportError::Config(format!(
                "設定ファイルが見つかりません: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let mut file: ConfigFile = serde_json::from_str(&content)?;

        // 相対パスは設定ファイルのディレクトリを基準に解決
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        file.keypoints = file.keypoints.map(|p| resolve_relative(base_dir, p));
        file.matches = file.matches.map(|p| resolve_relative(base_dir, p));

        Ok(file)
    }
}

fn resolve_relative(base_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_relative() {
        base_dir.join(path)
    } else {
        path
    }
}

/// 解決済みの実行設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    pub keypoints: PathBuf,
    pub matches: PathBuf,
    pub top: usize,
}

impl ReportConfig {
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let file = cli.config.as_deref().map(ConfigFile::load).transpose()?;
        Self::from_parts(
            cli.keypoints.clone(),
            cli.matches.clone(),
            cli.top,
            file.unwrap_or_default(),
            &project_root(),
        )
    }

    pub fn from_parts(
        keypoints: Option<PathBuf>,
        matches: Option<PathBuf>,
        top: Option<usize>,
        file: ConfigFile,
        root: &Path,
    ) -> Result<Self> {
        let top = top.or(file.top).unwrap_or(DEFAULT_TOP);
        if top == 0 {
            return Err(ReportError::Config("top は1以上を指定してください".into()));
        }

        Ok(Self {
            keypoints: keypoints
                .or(file.keypoints)
                .unwrap_or_else(|| root.join(KEYPOINT_LOG_NAME)),
            matches: matches
                .or(file.matches)
                .unwrap_or_else(|| root.join(MATCH_LOG_NAME)),
            top,
        })
    }

    /// 解析前に両方の入力ファイルの存在を確認する
    pub fn ensure_inputs_exist(&self) -> Result<()> {
        for (kind, path) in [
            (TableKind::Keypoint, &self.keypoints),
            (TableKind::Match, &self.matches),
        ] {
            if !path.exists() {
                return Err(ReportError::MissingFile {
                    kind,
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }
}

/// デフォルトのログファイルを探す基準ディレクトリ
pub fn project_root() -> PathBuf {
    // 環境変数を優先
    if let Some(root) = std::env::var_os(ROOT_ENV) {
        return PathBuf::from(root);
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}
