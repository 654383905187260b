use poolwise_core::errors::StoreError;
use poolwise_core::models::{ClassRole, ExampleId, Label};
use poolwise_core::traits::IExampleStore;
use poolwise_dataset::Dataset;

const POINTS: &str = "\
# id label features
1 1 1:0.5 2:1
2 -1 1:-0.5
3 -1 2:-1 3:0.25

4 1 1:1
";

#[test]
fn parses_points_skipping_comments_and_blanks() {
    let d = Dataset::from_points_str(POINTS).unwrap();
    assert_eq!(d.len(), 4);
    assert_eq!(d.count(ClassRole::Minority), 2);
    assert_eq!(
        d.ids(),
        vec![ExampleId(1), ExampleId(2), ExampleId(3), ExampleId(4)]
    );
}

#[test]
fn file_roundtrip_preserves_examples() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pool.txt");

    let d = Dataset::from_points_str(POINTS).unwrap();
    d.write(&path).unwrap();
    let back = Dataset::load(&path).unwrap();

    assert_eq!(back.examples(), d.examples());
}

#[test]
fn serialize_writes_current_label() {
    let mut d = Dataset::from_points_str("9 -1 1:1\n").unwrap();
    d.get_mut(ExampleId(9)).unwrap().assume_label(Label::POSITIVE);
    assert_eq!(d.serialize(), "9 1 1:1\n");
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Dataset::load(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn samples_and_labels_are_parallel() {
    let d = Dataset::from_points_str(POINTS).unwrap();
    let (samples, labels) = d.samples_and_labels();
    assert_eq!(samples.len(), 4);
    assert_eq!(labels, vec![Label(1), Label(-1), Label(-1), Label(1)]);
    assert_eq!(samples[2].get(3), 0.25);
}
