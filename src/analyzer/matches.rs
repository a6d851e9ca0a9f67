use super::types::{combo_key, MatchRecord, MatchStat, RankedViews};
use super::{group_first_seen, mean};
use crate::error::Result;

/// 検出器/記述子の組み合わせごとの統計を平均の降順で返す
pub fn rank_matches(records: &[MatchRecord]) -> Result<Vec<MatchStat>> {
    let groups = group_first_seen(records.iter().map(|r| {
        (
            (r.detector_type.as_str(), r.descriptor_type.as_str()),
            r.num_matches,
        )
    }));

    let mut ranked = Vec::with_capacity(groups.len());
    for ((detector, descriptor), counts) in groups {
        let combo = combo_key(detector, descriptor);
        let mean = mean(&combo, &counts)?;
        // meanが通っていれば空ではない
        let min = counts.iter().copied().min().unwrap_or_default();
        let max = counts.iter().copied().max().unwrap_or_default();
        ranked.push(MatchStat { combo, mean, min, max });
    }

    ranked.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    Ok(ranked)
}

/// 先頭 `top` 件と末尾 `top` 件を切り出す。重複は除去しない。
pub fn ranked_views(ranked: &[MatchStat], top: usize) -> RankedViews<'_> {
    let n = top.min(ranked.len());
    RankedViews {
        best: &ranked[..n],
        worst: &ranked[ranked.len() - n..],
    }
}
