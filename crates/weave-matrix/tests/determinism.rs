use weave_core::Sequence;
use weave_matrix::{describe, paths, Matrix};

fn bucket(tag: &str, prefix: &str, n: u64) -> Matrix<String> {
    let leaves = (0..n)
        .map(|i| Matrix::single(format!("{prefix}{i}")))
        .collect();
    Matrix::mix(tag.to_string(), leaves).unwrap()
}

fn suite() -> Matrix<String> {
    let pair = Matrix::product(
        "pair".to_string(),
        vec![bucket("os", "o", 4), bucket("fs", "f", 6)],
    )
    .unwrap();
    Matrix::mix(
        "suite".to_string(),
        vec![pair, bucket("extra", "x", 5)],
    )
    .unwrap()
}

fn join(a: &str, b: &str) -> String {
    format!("{a}/{b}")
}

#[test]
fn repeated_calls_agree() {
    let m = suite();
    for i in 0..m.size() {
        assert_eq!(m.index(i).unwrap(), m.index(i).unwrap());
    }
}

#[test]
fn independently_built_trees_agree() {
    let first = suite();
    let second = suite();
    assert_eq!(first.size(), second.size());
    assert_eq!(first.min_scan_len(), second.min_scan_len());
    for i in 0..first.size() {
        assert_eq!(first.index(i).unwrap(), second.index(i).unwrap());
    }
}

#[test]
fn clones_agree() {
    let m = suite();
    let cloned = m.clone();
    for i in 0..m.size() {
        assert_eq!(m.index(i).unwrap(), cloned.index(i).unwrap());
    }
}

#[test]
fn renderings_are_deterministic() {
    let first = suite();
    let second = suite();
    for i in 0..first.size() {
        let a = first.index(i).unwrap();
        let b = second.index(i).unwrap();
        assert_eq!(describe(&a, join), describe(&b, join));
        assert_eq!(paths(&a, ".", join), paths(&b, ".", join));
    }
}
