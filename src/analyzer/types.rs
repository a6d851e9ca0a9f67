use crate::error::TableKind;
use crate::loader::TableRecord;
use serde::Deserialize;

/// キーポイントログの1行
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeypointRecord {
    #[serde(rename = "ImageIndex", default)]
    pub image_index: Option<String>,
    #[serde(rename = "DetectorType")]
    pub detector_type: String,
    #[serde(rename = "NumKeypoints")]
    pub num_keypoints: u64,
}

impl TableRecord for KeypointRecord {
    const KIND: TableKind = TableKind::Keypoint;
}

/// マッチログの1行（画像ペアごと）
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "ImageIndex", default)]
    pub image_index: Option<String>,
    #[serde(rename = "DetectorType")]
    pub detector_type: String,
    #[serde(rename = "DescriptorType")]
    pub descriptor_type: String,
    #[serde(rename = "NumMatches")]
    pub num_matches: u64,
}

impl TableRecord for MatchRecord {
    const KIND: TableKind = TableKind::Match;
}

/// "検出器/記述子" 形式の組み合わせキー
pub fn combo_key(detector: &str, descriptor: &str) -> String {
    format!("{}/{}", detector, descriptor)
}

/// 検出器ごとの平均キーポイント数
#[derive(Debug, Clone, PartialEq)]
pub struct KeypointStat {
    pub detector: String,
    pub mean: f64,
}

/// 組み合わせごとのマッチ数統計
#[derive(Debug, Clone, PartialEq)]
pub struct MatchStat {
    pub combo: String,
    pub mean: f64,
    pub min: u64,
    pub max: u64,
}

/// ランキングの上位・下位ビュー。件数が少ないと重複しうる。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedViews<'a> {
    pub best: &'a [MatchStat],
    pub worst: &'a [MatchStat],
}

impl RankedViews<'_> {
    pub fn overlaps(&self, total: usize) -> bool {
        self.best.len() + self.worst.len() > total
    }
}
