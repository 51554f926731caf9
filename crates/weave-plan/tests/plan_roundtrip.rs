use weave_plan::{expand_plan, from_json_slice, to_canonical_json_bytes, PlanReport, SamplePlan};

const PLAN_YAML: &str = r#"
matrix:
  type: product
  tag: cfg
  children:
    - type: mix
      tag: os
      children:
        - type: single
          item: jammy
        - type: single
          item: focal
    - type: mix
      tag: fs
      children:
        - type: single
          item: ext4
        - type: single
          item: btrfs
        - type: single
          item: xfs
"#;

fn plan() -> SamplePlan {
    serde_yaml::from_str(PLAN_YAML).unwrap()
}

#[test]
fn yaml_plan_roundtrips() {
    let parsed = plan();
    let yaml = serde_yaml::to_string(&parsed).unwrap();
    let reparsed: SamplePlan = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, reparsed);
}

#[test]
fn default_window_is_the_min_scan_len() {
    let report = expand_plan(&plan()).unwrap();
    assert_eq!(report.size, 6);
    assert_eq!(report.min_scan_len, 3);
    assert_eq!(report.cyclicity, 2);
    assert_eq!(report.entries.len(), 3);
    let indices: Vec<u64> = report.entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![0, 1, 2]);
}

#[test]
fn first_entry_renders_both_dimensions() {
    let report = expand_plan(&plan()).unwrap();
    let entry = &report.entries[0];
    assert_eq!(entry.description, "cfg/{fs/ext4 os/jammy}");
    assert_eq!(entry.paths, vec!["./cfg/fs/ext4", "./cfg/os/jammy"]);
}

#[test]
fn explicit_window_wraps_modulo_size() {
    let mut sample = plan();
    sample.samples = Some(8);
    sample.start = 4;
    let report = expand_plan(&sample).unwrap();
    let indices: Vec<u64> = report.entries.iter().map(|e| e.index).collect();
    assert_eq!(indices, vec![4, 5, 0, 1, 2, 3, 4, 5]);
}

#[test]
fn expansion_is_byte_stable() {
    let first = expand_plan(&plan()).unwrap();
    let second = expand_plan(&plan()).unwrap();
    assert_eq!(first, second);
    assert_eq!(
        to_canonical_json_bytes(&first).unwrap(),
        to_canonical_json_bytes(&second).unwrap()
    );
}

#[test]
fn report_roundtrips_through_canonical_json() {
    let report = expand_plan(&plan()).unwrap();
    let bytes = to_canonical_json_bytes(&report).unwrap();
    let restored: PlanReport = from_json_slice(&bytes).unwrap();
    assert_eq!(report, restored);
}

#[test]
fn plan_hash_tracks_the_plan() {
    let base = expand_plan(&plan()).unwrap();

    let mut wider = plan();
    wider.samples = Some(6);
    let wider_report = expand_plan(&wider).unwrap();
    assert_ne!(base.plan_hash, wider_report.plan_hash);

    let same = expand_plan(&plan()).unwrap();
    assert_eq!(base.plan_hash, same.plan_hash);
}
