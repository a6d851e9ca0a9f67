//! 入力確認 → 読み込み → 集計 → 整形 の一括処理

use crate::analyzer::{self, KeypointRecord, MatchRecord};
use crate::config::ReportConfig;
use crate::error::Result;
use crate::loader;
use crate::report;
use std::collections::HashSet;

/// レポート全体を生成する。途中で失敗した場合は何も出力しない。
pub fn generate_report(config: &ReportConfig) -> Result<String> {
    // 解析前に両方のファイルを確認
    config.ensure_inputs_exist()?;
    log::debug!("キーポイントログ: {}", config.keypoints.display());
    log::debug!("マッチログ: {}", config.matches.display());

    let keypoint_rows: Vec<KeypointRecord> = loader::load_records(&config.keypoints)?;
    let match_rows: Vec<MatchRecord> = loader::load_records(&config.matches)?;

    let images: HashSet<&str> = keypoint_rows
        .iter()
        .filter_map(|r| r.image_index.as_deref())
        .collect();
    log::debug!("画像数: {}", images.len());

    let keypoint_stats = analyzer::rank_keypoints(&keypoint_rows)?;
    let match_stats = analyzer::rank_matches(&match_rows)?;

    if analyzer::ranked_views(&match_stats, config.top).overlaps(match_stats.len()) {
        log::warn!(
            "組み合わせ数({})が top の2倍未満のため、上位と下位の表に重複があります",
            match_stats.len()
        );
    }

    Ok(report::render_report(&keypoint_stats, &match_stats, config.top))
}
