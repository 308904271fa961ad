// End-to-end editing scenarios driven through key presses
//
// Start from a single quarter-note C4 at 120 bpm, select it, raise it a
// semitone, snap it to D and split it into eighths.

use std::rc::Rc;

use num_rational::Ratio;
use score_editor_wasm::bridge::{AudioRequest, Recorder};
use score_editor_wasm::{
    EditorConfig, EditorError, KeyInput, Music, NoteValue, PitchName, PitchTables, ScoreEditor,
    Selection,
};

fn start_editor(notes: &str) -> (ScoreEditor, Recorder) {
    let recorder = Recorder::new();
    let music = Music::from_notes_json(notes, 120.0).expect("notes should parse");
    let mut editor = ScoreEditor::new(
        music,
        Rc::new(PitchTables::new()),
        recorder.ports(),
        EditorConfig::default(),
    )
    .expect("default config is valid");
    editor.start().expect("initial sync should succeed");
    (editor, recorder)
}

fn press(editor: &mut ScoreEditor, code: &str) {
    editor
        .key_down(&KeyInput::new(code))
        .unwrap_or_else(|e| panic!("{} failed: {}", code, e));
}

#[test]
fn test_raise_snap_and_divide() {
    let (mut editor, recorder) = start_editor(r#"[[["C4"], 4]]"#);
    assert_eq!(recorder.last_submission().unwrap(), r#"[[["C4"],4]]"#);

    editor.click(0).unwrap();
    assert_eq!(editor.selection(), Selection::Active(0));

    press(&mut editor, "ArrowUp");
    assert_eq!(recorder.last_submission().unwrap(), r#"[[["C#4"],4]]"#);

    // C#4 = 61, D = 62: one semitone up is nearest
    press(&mut editor, "KeyD");
    assert_eq!(recorder.last_submission().unwrap(), r#"[[["D4"],4]]"#);
    assert_eq!(editor.selection(), Selection::Active(0));

    press(&mut editor, "Digit4");
    assert_eq!(
        recorder.last_submission().unwrap(),
        r#"[[["D4"],8],[["r","A4"],8]]"#
    );
    assert_eq!(editor.music().total_duration(), Ratio::new(1, 4));
    assert_eq!(editor.selection(), Selection::Active(0));

    let last_audio = recorder.audio().pop().unwrap();
    assert_eq!(
        last_audio,
        AudioRequest::PlaySingle {
            pitch: PitchName::parse("D4").unwrap(),
            unit: NoteValue::EIGHTH,
            tempo: 120.0,
        }
    );
}

#[test]
fn test_tritone_snap_goes_up_an_octave() {
    let (mut editor, _) = start_editor(r#"[[["F#4"], 4]]"#);
    editor.click(0).unwrap();
    press(&mut editor, "KeyC");

    let name = editor.music().event(0).unwrap().sounding_name().unwrap();
    assert_eq!(name.as_str(), "C5");
}

#[test]
fn test_divide_then_merge_restores_quarter() {
    let (mut editor, _) = start_editor(r#"[[["C4"], 4], [["G4"], 2]]"#);
    editor.click(0).unwrap();

    press(&mut editor, "Digit4");
    assert_eq!(editor.music().len(), 3);

    press(&mut editor, "Digit5");
    assert_eq!(editor.music().len(), 2);
    assert_eq!(editor.music().event(0).unwrap().value, NoteValue::QUARTER);
    assert_eq!(editor.music().event(1).unwrap().value, NoteValue::HALF);
}

#[test]
fn test_quarter_key_divides_a_half_note() {
    let (mut editor, recorder) = start_editor(r#"[[["E4"], 2]]"#);
    editor.click(0).unwrap();
    press(&mut editor, "Digit5");

    assert_eq!(
        recorder.last_submission().unwrap(),
        r#"[[["E4"],4],[["r","A4"],4]]"#
    );
}

#[test]
fn test_eighth_key_refuses_to_lengthen_sixteenth() {
    let (mut editor, _) = start_editor(r#"[[["E4"], 16], [["F4"], 16]]"#);
    editor.click(0).unwrap();

    assert_eq!(
        editor.key_down(&KeyInput::new("Digit4")),
        Err(EditorError::CannotLengthen { from: 16, to: 8 })
    );
    assert_eq!(editor.music().len(), 2);
}

#[test]
fn test_arrow_right_never_leaves_bounds() {
    let notes = r#"[[["C4"], 8], [["D4"], 8], [["r", "A4"], 8], [["F4"], 8]]"#;
    let (mut editor, _) = start_editor(notes);
    let len = editor.music().len();

    editor.click(0).unwrap();
    for _ in 0..len {
        press(&mut editor, "ArrowRight");
    }
    assert_eq!(editor.selection(), Selection::Active(len - 1));
}

#[test]
fn test_octave_up_then_down_is_identity() {
    let tables = PitchTables::new();
    for start in ["C3", "F#4", "Bb2", "A5"] {
        let notes = format!(r#"[[["{}"], 4]]"#, start);
        let (mut editor, _) = start_editor(&notes);
        let before = tables
            .number(editor.music().event(0).unwrap().sounding_name().unwrap())
            .unwrap();

        editor.click(0).unwrap();
        editor.key_down(&KeyInput::new("ArrowUp").with_ctrl()).unwrap();
        editor.key_down(&KeyInput::new("ArrowDown").with_ctrl()).unwrap();

        let after = tables
            .number(editor.music().event(0).unwrap().sounding_name().unwrap())
            .unwrap();
        assert_eq!(before, after, "octave round trip from {}", start);
    }
}

#[test]
fn test_unbound_key_does_nothing() {
    let (mut editor, recorder) = start_editor(r#"[[["C4"], 4]]"#);
    editor.click(0).unwrap();
    recorder.take();

    press(&mut editor, "Space");
    assert!(recorder.events().is_empty());
    assert!(editor.music().same_notes(&Music::from_notes_json(r#"[[["C4"], 4]]"#, 60.0).unwrap()));
}

#[test]
fn test_snap_from_bottom_of_range() {
    let (mut editor, recorder) = start_editor(r#"[[["C0"], 4]]"#);
    editor.click(0).unwrap();

    press(&mut editor, "KeyB");
    assert_eq!(recorder.last_submission().unwrap(), r#"[[["B0"],4]]"#);
}
