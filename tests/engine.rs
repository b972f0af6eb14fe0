//! Transform engine behavior - toggles, cleanups, undo, edits

use casekit::engine::{ActiveToggle, EditOutcome, TransformEngine};
use casekit::transforms::{CaseKind, CleanupKind};

fn engine_with(text: &str) -> TransformEngine {
    let mut engine = TransformEngine::new();
    engine.edit_text(text);
    engine
}

const SAMPLES: &[&str] = &[
    "Hello World",
    "already lower",
    "ALREADY UPPER",
    "mixed Case\nacross LINES",
    "  padded  ",
    "snake_case_input",
    "straße ünïcödé",
    "42",
];

// ========================================================================
// Toggle pairs
// ========================================================================

#[test]
fn test_toggle_pair_restores_text_for_every_kind() {
    for sample in SAMPLES {
        for kind in CaseKind::all() {
            let mut engine = engine_with(sample);
            engine.apply_case(kind);
            engine.apply_case(kind);

            assert_eq!(engine.text(), *sample, "kind {} on {:?}", kind, sample);
            assert!(engine.active_toggle().is_none());
            assert_eq!(engine.history_len(), 1, "toggle-on pushes exactly once");
        }
    }
}

#[test]
fn test_toggle_asymmetry_over_repeated_presses() {
    let mut engine = engine_with("Hello World");
    for _ in 0..3 {
        engine.apply_case(CaseKind::Upper);
        engine.apply_case(CaseKind::Upper);
    }

    // Each toggle-on pushed, no toggle-off popped
    assert_eq!(engine.history_len(), 3);
    assert_eq!(engine.text(), "Hello World");
    assert!(engine.history().iter().all(|s| s == "Hello World"));
}

#[test]
fn test_toggle_on_even_when_transform_is_identity() {
    let mut engine = engine_with("HELLO");
    assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Applied);
    assert_eq!(engine.text(), "HELLO");
    assert_eq!(engine.history_len(), 1);
    assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Reverted);
}

#[test]
fn test_hello_world_scenario() {
    let mut engine = engine_with("Hello World");

    engine.apply_case(CaseKind::Upper);
    assert_eq!(engine.text(), "HELLO WORLD");
    assert_eq!(
        engine.active_toggle(),
        Some(&ActiveToggle {
            kind: CaseKind::Upper,
            pre_toggle_text: "Hello World".to_string()
        })
    );

    engine.apply_case(CaseKind::Upper);
    assert_eq!(engine.text(), "Hello World");
    assert_eq!(engine.active_toggle(), None);
    assert_eq!(engine.history().iter().collect::<Vec<_>>(), vec!["Hello World"]);
}

// ========================================================================
// Undo
// ========================================================================

#[test]
fn test_undo_inverts_each_push_producing_operation() {
    let mut engine = engine_with("b\na\nb\n  c  ");

    let steps: Vec<Box<dyn Fn(&mut TransformEngine) -> EditOutcome>> = vec![
        Box::new(|e: &mut TransformEngine| e.apply_case(CaseKind::Title)),
        Box::new(|e: &mut TransformEngine| e.apply_cleanup(CleanupKind::DedupeLines)),
        Box::new(|e: &mut TransformEngine| e.apply_case(CaseKind::Kebab)),
        Box::new(|e: &mut TransformEngine| e.apply_cleanup(CleanupKind::SortLines)),
        Box::new(|e: &mut TransformEngine| e.apply_cleanup(CleanupKind::NumberLines)),
        Box::new(|e: &mut TransformEngine| e.clear_workspace()),
    ];

    let mut texts = vec![engine.text().to_string()];
    for step in &steps {
        assert_eq!(step(&mut engine), EditOutcome::Applied);
        texts.push(engine.text().to_string());
    }

    // Walk back through every state
    texts.pop();
    while let Some(expected) = texts.pop() {
        assert_eq!(engine.undo(), EditOutcome::Applied);
        assert_eq!(engine.text(), expected);
        assert!(engine.active_toggle().is_none());
    }
    assert_eq!(engine.undo(), EditOutcome::Unchanged);
}

#[test]
fn test_undo_cannot_be_toggled_off() {
    let mut engine = engine_with("abc");
    engine.apply_case(CaseKind::Upper);
    engine.apply_case(CaseKind::Lower);
    engine.undo();

    // Back at "ABC" with no toggle; Upper applies fresh
    assert_eq!(engine.text(), "ABC");
    assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Applied);
    assert_eq!(engine.history_len(), 2);
}

// ========================================================================
// Manual edits
// ========================================================================

#[test]
fn test_manual_edit_clears_toggle_without_touching_history() {
    let mut engine = engine_with("hello");
    engine.apply_case(CaseKind::Upper);
    let before = engine.history_len();

    engine.edit_text("HELLO!");

    assert!(engine.active_toggle().is_none());
    assert_eq!(engine.history_len(), before);

    // Same button now toggles on again rather than reverting
    engine.apply_case(CaseKind::Upper);
    assert_eq!(engine.history_len(), before + 1);
    assert_eq!(engine.active_toggle().unwrap().pre_toggle_text, "HELLO!");
}

#[test]
fn test_edit_to_empty_disables_transforms() {
    let mut engine = engine_with("hello");
    engine.edit_text("");
    assert!(!engine.can_transform());
    assert_eq!(engine.apply_case(CaseKind::Upper), EditOutcome::Unchanged);
    assert_eq!(engine.apply_cleanup(CleanupKind::SortLines), EditOutcome::Unchanged);
}

// ========================================================================
// Cleanup properties
// ========================================================================

#[test]
fn test_cleanup_properties_from_examples() {
    let cases = [
        (CleanupKind::DedupeLines, "b\na\nb\na\nc", "b\na\nc"),
        (CleanupKind::SortLines, "banana\napple\ncherry", "apple\nbanana\ncherry"),
        (CleanupKind::NumberLines, "x\ny", "1. x\n2. y"),
    ];

    for (kind, input, expected) in cases {
        let mut engine = engine_with(input);
        engine.apply_cleanup(kind);
        assert_eq!(engine.text(), expected, "{}", kind);
        assert_eq!(engine.history().peek(), Some(input));
    }
}

#[test]
fn test_whitespace_only_text_is_not_empty() {
    let mut engine = engine_with("   ");
    assert_eq!(
        engine.apply_cleanup(CleanupKind::CollapseWhitespace),
        EditOutcome::Applied
    );
    assert_eq!(engine.text(), "");
    assert_eq!(engine.history_len(), 1);
}

#[test]
fn test_unbounded_history() {
    let mut engine = TransformEngine::with_history_limit(0);
    engine.edit_text("x");
    for _ in 0..120 {
        engine.apply_cleanup(CleanupKind::CollapseWhitespace);
    }
    assert_eq!(engine.history_len(), 120);
}

#[test]
fn test_default_history_is_capped_at_fifty() {
    let mut engine = engine_with("x");
    for _ in 0..80 {
        engine.apply_cleanup(CleanupKind::CollapseWhitespace);
    }
    assert_eq!(engine.history_len(), 50);
}
