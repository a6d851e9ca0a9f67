use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "feature-report")]
#[command(about = "特徴点検出器・記述子の組み合わせを比較するレポートツール", long_about = None)]
pub struct Cli {
    /// キーポイントログ（デフォルト: <project_root>/keypoint_log.csv）
    #[arg(long)]
    pub keypoints: Option<PathBuf>,

    /// マッチログ（デフォルト: <project_root>/match_log.csv）
    #[arg(long)]
    pub matches: Option<PathBuf>,

    /// 上位/下位に表示する組み合わせ数（デフォルト: 10）
    #[arg(long, value_parser = parse_top)]
    pub top: Option<usize>,

    /// 設定ファイル（JSON）
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// 詳細ログを出力
    #[arg(short, long)]
    pub verbose: bool,
}

/// `--top` は1以上の整数のみ受け付ける
pub fn parse_top(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("Invalid top: {}. Use a positive integer", s))?;
    if n == 0 {
        return Err("top must be at least 1".to_string());
    }
    Ok(n)
}
