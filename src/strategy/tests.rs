// gitops-rs: GitOps Patch Utility - Rust Port
//
// SPDX-FileCopyrightText: 2026 Gitops-rs Contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Strategy;
use crate::error::TransformError;

// =============================================================================
// Replace
// =============================================================================

#[test]
fn replace_ignores_input_and_copies_local_file() {
    let temp = tempfile::tempdir().unwrap();
    let local = temp.path().join("replacement.yaml");
    std::fs::write(&local, "replicas: 9\n").unwrap();

    let strategy = Strategy::replace(&local);
    let output = strategy.transform(b"anything at all").unwrap();
    assert_eq!(output, b"replicas: 9\n");
}

#[test]
fn replace_missing_local_file_fails() {
    let strategy = Strategy::replace("/nonexistent/replacement.yaml");
    let err = strategy.transform(b"").unwrap_err();
    assert!(matches!(err, TransformError::ReplaceSource { .. }));
}

// =============================================================================
// StreamEdit
// =============================================================================

#[test]
fn stream_edit_applies_single_expression() {
    let strategy = Strategy::stream_edit("sed", vec!["s/foo/bar/".to_string()]);
    let output = strategy.transform(b"foo\n").unwrap();
    assert_eq!(output, b"bar\n");
}

#[test]
fn stream_edit_applies_expressions_in_order() {
    // The first expression's effects are visible to the second.
    let strategy = Strategy::stream_edit(
        "sed",
        vec!["s/foo/bar/".to_string(), "s/bar/baz/".to_string()],
    );
    let output = strategy.transform(b"foo\n").unwrap();
    assert_eq!(output, b"baz\n");
}

#[test]
fn stream_edit_empty_expression_list_is_configuration_error() {
    let strategy = Strategy::stream_edit("sed", Vec::new());
    let err = strategy.transform(b"foo\n").unwrap_err();
    assert!(matches!(err, TransformError::NoExpressions));
}

#[test]
fn stream_edit_bad_expression_carries_command_and_stderr() {
    let strategy = Strategy::stream_edit("sed", vec!["s/unterminated".to_string()]);
    let err = strategy.transform(b"foo\n").unwrap_err();
    match err {
        TransformError::Process(process) => {
            let text = process.to_string();
            assert!(text.contains("-e"), "command line missing: {text}");
        }
        other => panic!("expected process error, got {other:?}"),
    }
}

// =============================================================================
// JsonFilter
// =============================================================================

#[test]
fn json_filter_selects_field() {
    let strategy = Strategy::json_filter(".a");
    let output = strategy.transform(br#"{"a": 1, "b": 2}"#).unwrap();
    assert_eq!(output, b"1\n");
}

#[test]
fn json_filter_pretty_prints_with_four_space_indent() {
    let strategy = Strategy::json_filter(".a");
    let output = strategy
        .transform(br#"{"a": {"b": [1, 2]}, "c": 3}"#)
        .unwrap();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "{\n    \"b\": [\n        1,\n        2\n    ]\n}\n");
}

#[test]
fn json_filter_multiple_results_in_order() {
    let strategy = Strategy::json_filter(".a, .b");
    let output = strategy.transform(br#"{"a": 1, "b": 2}"#).unwrap();
    assert_eq!(output, b"1\n2\n");
}

#[test]
fn json_filter_empty_result_sequence_yields_empty_output() {
    let strategy = Strategy::json_filter("empty");
    let output = strategy.transform(br#"{"a": 1}"#).unwrap();
    assert!(output.is_empty());
}

#[test]
fn json_filter_invalid_input_fails_before_output() {
    let strategy = Strategy::json_filter(".a");
    let err = strategy.transform(b"not json").unwrap_err();
    assert!(matches!(err, TransformError::InvalidJson { .. }));
}

#[test]
fn json_filter_non_object_input_fails() {
    let strategy = Strategy::json_filter(".");
    let err = strategy.transform(b"[1, 2]").unwrap_err();
    assert!(matches!(err, TransformError::InvalidJson { .. }));
}

#[test]
fn json_filter_syntax_error_detected_before_input() {
    let strategy = Strategy::json_filter(".a |");
    // Input is invalid JSON too: the filter error must win.
    let err = strategy.transform(b"not json").unwrap_err();
    assert!(matches!(err, TransformError::FilterParse { .. }));
}

#[test]
fn json_filter_error_value_aborts_evaluation() {
    let strategy = Strategy::json_filter(".a, error(\"boom\")");
    let err = strategy.transform(br#"{"a": 1}"#).unwrap_err();
    assert!(matches!(err, TransformError::FilterEval { .. }));
}

// =============================================================================
// YamlFilter
// =============================================================================

#[test]
fn yaml_filter_two_documents_in_order() {
    let strategy = Strategy::yaml_filter(".a");
    let output = strategy.transform(b"---\na: 1\n---\na: 2\n").unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "1\n---\n2\n");
}

#[test]
fn yaml_filter_single_document_has_no_separator() {
    let strategy = Strategy::yaml_filter(".a");
    let output = strategy.transform(b"a: 1\nb: 2\n").unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), "1\n");
}

#[test]
fn yaml_filter_mapping_output_uses_two_space_indent() {
    let strategy = Strategy::yaml_filter(".spec");
    let output = strategy
        .transform(b"spec:\n  containers:\n    - name: app\n")
        .unwrap();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text, "containers:\n- name: app\n");
}

#[test]
fn yaml_filter_empty_stream_yields_empty_output() {
    let strategy = Strategy::yaml_filter(".a");
    let output = strategy.transform(b"").unwrap();
    assert!(output.is_empty());
}

#[test]
fn yaml_filter_bad_document_aborts_with_index() {
    let strategy = Strategy::yaml_filter(".a");
    let err = strategy.transform(b"---\na: 1\n---\na: [1, 2\n").unwrap_err();
    match err {
        TransformError::InvalidYaml { index, .. } => assert_eq!(index, 1),
        other => panic!("expected InvalidYaml, got {other:?}"),
    }
}

#[test]
fn yaml_filter_syntax_error_detected_before_input() {
    let strategy = Strategy::yaml_filter("|");
    let err = strategy.transform(b"a: [1, 2\n").unwrap_err();
    assert!(matches!(err, TransformError::FilterParse { .. }));
}
