//! レポート整形
//!
//! 集計済みの結果を標準出力向けの文字列に整形する。計算は行わない。

use crate::analyzer::{ranked_views, KeypointStat, MatchStat};

/// 検出器ごとの平均キーポイント数を番号付きリストで整形
pub fn render_keypoint_report(stats: &[KeypointStat]) -> String {
    let mut out = String::from("\n=== Keypoint counts per detector (avg over all images) ===\n");
    for (i, stat) in stats.iter().enumerate() {
        out.push_str(&format!(
            "  {:2}. {:<12}: {:7.1} keypoints/image\n",
            i + 1,
            stat.detector,
            stat.mean
        ));
    }
    out
}

/// 上位 `top` 件・下位 `top` 件の2つの表を整形
pub fn render_match_report(ranked: &[MatchStat], top: usize) -> String {
    let views = ranked_views(ranked, top);
    let mut out = String::new();
    push_match_table(&mut out, &format!("Top {}", top), views.best);
    push_match_table(&mut out, &format!("Bottom {}", top), views.worst);
    out
}

/// キーポイントとマッチのレポート全体
pub fn render_report(keypoints: &[KeypointStat], matches: &[MatchStat], top: usize) -> String {
    let mut out = render_keypoint_report(keypoints);
    out.push_str(&render_match_report(matches, top));
    out
}

fn push_match_table(out: &mut String, title: &str, rows: &[MatchStat]) {
    let header = format!(
        "  {:>3}  {:<22}  {:>6}  {:>5}  {:>5}",
        "#", "Detector/Descriptor", "Mean", "Min", "Max"
    );
    let rule = "-".repeat(header.chars().count() - 2);

    out.push_str(&format!("\n=== {} combinations by average match count ===\n", title));
    out.push_str(&header);
    out.push('\n');
    out.push_str(&format!("  {}\n", rule));
    for (i, stat) in rows.iter().enumerate() {
        out.push_str(&format!(
            "  {:3}  {:<22}  {:6.1}  {:5}  {:5}\n",
            i + 1,
            stat.combo,
            stat.mean,
            stat.min,
            stat.max
        ));
    }
}
