use super::types::{KeypointRecord, KeypointStat};
use super::{group_first_seen, mean};
use crate::error::Result;

/// 検出器ごとの平均キーポイント数を降順で返す
pub fn rank_keypoints(records: &[KeypointRecord]) -> Result<Vec<KeypointStat>> {
    let groups = group_first_seen(
        records
            .iter()
            .map(|r| (r.detector_type.as_str(), r.num_keypoints)),
    );

    let mut ranked = groups
        .into_iter()
        .map(|(detector, counts)| -> Result<KeypointStat> {
            Ok(KeypointStat {
                detector: detector.to_string(),
                mean: mean(detector, &counts)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    // 安定ソートなので同値は初出順のまま
    ranked.sort_by(|a, b| b.mean.total_cmp(&a.mean));
    Ok(ranked)
}
