//! 検出器・記述子ごとの集計モジュール
//!
//! ## 処理フロー
//! 1. 初出順を保ったままキーごとに値をまとめる
//! 2. グループごとに平均（マッチは最小・最大も）を計算
//! 3. 平均の降順で安定ソート（同値は初出順）

pub mod keypoints;
pub mod matches;
pub mod types;

pub use keypoints::rank_keypoints;
pub use matches::{rank_matches, ranked_views};
pub use types::{KeypointRecord, KeypointStat, MatchRecord, MatchStat, RankedViews};

use crate::error::{ReportError, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// キーごとに値をまとめる。グループの並びはキーの初出順。
pub(crate) fn group_first_seen<K, I>(items: I) -> Vec<(K, Vec<u64>)>
where
    K: Hash + Eq + Clone,
    I: IntoIterator<Item = (K, u64)>,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<u64>)> = Vec::new();

    for (key, value) in items {
        match index.get(&key) {
            Some(&i) => groups[i].1.push(value),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![value]));
            }
        }
    }

    groups
}

/// 算術平均。空のグループはエラー。
pub(crate) fn mean(key: &str, values: &[u64]) -> Result<f64> {
    if values.is_empty() {
        return Err(ReportError::EmptyGroup(key.to_string()));
    }
    let sum: u128 = values.iter().map(|&v| u128::from(v)).sum();
    Ok(sum as f64 / values.len() as f64)
}
