//! 読み込みから整形までの統合テスト

use feature_report::analyzer::{self, KeypointRecord, MatchRecord};
use feature_report::config::ReportConfig;
use feature_report::loader;
use feature_report::runner;
use std::collections::HashSet;
use std::path::Path;
use tempfile::tempdir;

const KEYPOINT_LOG: &str = "\
ImageIndex,DetectorType,NumKeypoints,MinSize,MaxSize,MeanSize
0,SHITOMASI,125,4,4,4
1,SHITOMASI,118,4,4,4
0,FAST,419,7,7,7
1,FAST,427,7,7,7
0,HARRIS,17,6,6,6
1,HARRIS,14,6,6,6
";

const MATCH_LOG: &str = "\
ImageIndex,DetectorType,DescriptorType,NumMatches
1,FAST,BRIEF,320
2,FAST,BRIEF,332
1,FAST,ORB,306
1,HARRIS,BRIEF,12
2,HARRIS,BRIEF,18
1,SHITOMASI,BRISK,95
1,AKAZE,AKAZE,140
";

fn write_logs(dir: &Path) -> ReportConfig {
    let keypoints = dir.join("keypoint_log.csv");
    let matches = dir.join("match_log.csv");
    std::fs::write(&keypoints, KEYPOINT_LOG).unwrap();
    std::fs::write(&matches, MATCH_LOG).unwrap();
    ReportConfig { keypoints, matches, top: 2 }
}

#[test]
fn test_row_count_and_group_keys() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_logs(dir.path());

    let keypoints: Vec<KeypointRecord> = loader::load_records(&config.keypoints).unwrap();
    let matches: Vec<MatchRecord> = loader::load_records(&config.matches).unwrap();
    assert_eq!(keypoints.len(), 6);
    assert_eq!(matches.len(), 7);
    assert_eq!(keypoints[0].image_index.as_deref(), Some("0"));

    let detectors: HashSet<String> = keypoints.iter().map(|r| r.detector_type.clone()).collect();
    let ranked = analyzer::rank_keypoints(&keypoints).unwrap();
    let keys: HashSet<String> = ranked.iter().map(|s| s.detector.clone()).collect();
    assert_eq!(keys, detectors);

    let combos: HashSet<String> = matches
        .iter()
        .map(|r| format!("{}/{}", r.detector_type, r.descriptor_type))
        .collect();
    let ranked = analyzer::rank_matches(&matches).unwrap();
    let keys: HashSet<String> = ranked.iter().map(|s| s.combo.clone()).collect();
    assert_eq!(keys, combos);
    assert_eq!(ranked.len(), combos.len());
}

#[test]
fn test_means_are_exact_and_sorted() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_logs(dir.path());
    let matches: Vec<MatchRecord> = loader::load_records(&config.matches).unwrap();

    let ranked = analyzer::rank_matches(&matches).unwrap();
    for pair in ranked.windows(2) {
        assert!(pair[0].mean >= pair[1].mean);
    }

    for stat in &ranked {
        let values: Vec<u64> = matches
            .iter()
            .filter(|r| format!("{}/{}", r.detector_type, r.descriptor_type) == stat.combo)
            .map(|r| r.num_matches)
            .collect();
        let expected = values.iter().sum::<u64>() as f64 / values.len() as f64;
        assert!((stat.mean - expected).abs() < 1e-9);
        assert!(stat.min as f64 <= stat.mean && stat.mean <= stat.max as f64);
    }
}

#[test]
fn test_generate_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_logs(dir.path());

    let report = runner::generate_report(&config).unwrap();
    let lines: Vec<&str> = report.lines().collect();

    assert_eq!(lines[2], "   1. FAST        :   423.0 keypoints/image");
    assert_eq!(lines[3], "   2. SHITOMASI   :   121.5 keypoints/image");
    assert_eq!(lines[4], "   3. HARRIS      :    15.5 keypoints/image");

    assert!(report.contains("=== Top 2 combinations by average match count ==="));
    assert!(report.contains("    1  FAST/BRIEF               326.0    320    332"));
    assert!(report.contains("    2  FAST/ORB                 306.0    306    306"));

    let bottom = report
        .split("=== Bottom 2 combinations by average match count ===")
        .nth(1)
        .expect("下位の表がない");
    assert!(bottom.contains("    1  SHITOMASI/BRISK           95.0     95     95"));
    assert!(bottom.contains("    2  HARRIS/BRIEF              15.0     12     18"));
    assert!(!bottom.contains("FAST/BRIEF"));
}

#[test]
fn test_report_is_idempotent() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_logs(dir.path());

    let first = runner::generate_report(&config).unwrap();
    let second = runner::generate_report(&config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_malformed_row_aborts_report() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_logs(dir.path());
    std::fs::write(
        &config.matches,
        "ImageIndex,DetectorType,DescriptorType,NumMatches\n1,FAST,BRIEF,lots\n",
    )
    .unwrap();

    let result = runner::generate_report(&config);
    assert!(matches!(
        result,
        Err(feature_report::error::ReportError::MalformedRow { .. })
    ));
}

#[test]
fn test_image_index_is_not_validated() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_logs(dir.path());
    std::fs::write(
        &config.matches,
        "ImageIndex,DetectorType,DescriptorType,NumMatches\n0-1,FAST,BRIEF,10\nimg_0002,FAST,BRIEF,20\n,ORB,ORB,5\n",
    )
    .unwrap();

    let matches: Vec<MatchRecord> = loader::load_records(&config.matches).unwrap();
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[0].image_index.as_deref(), Some("0-1"));
    assert_eq!(matches[2].image_index, None);

    let report = runner::generate_report(&config).unwrap();
    assert!(report.contains("    1  FAST/BRIEF                15.0     10     20"));
}

#[test]
fn test_image_index_column_is_optional() {
    let dir = tempdir().expect("Failed to create temp dir");
    let config = write_logs(dir.path());
    std::fs::write(&config.keypoints, "DetectorType,NumKeypoints\nORB,500\n").unwrap();

    let keypoints: Vec<KeypointRecord> = loader::load_records(&config.keypoints).unwrap();
    assert_eq!(keypoints[0].image_index, None);
}
