//! Rhythmic divide and merge
//!
//! `divide` shortens an event and fills the freed time with rests of
//! successively halving length, so total duration is preserved. `merge`
//! lengthens an event by absorbing the one after it. New events are only
//! ever inserted after the edited index, so that index stays valid.

use crate::errors::{EditorError, Result};
use crate::models::{Music, NoteEvent, NoteValue, PitchName};

/// Shorten the event at `index` to `target`, padding with rests.
///
/// For a 1/`prev` event this leaves the event at 1/`target` followed by
/// `log2(target / prev)` rests valued `target, target / 2, ...`. Returns the
/// number of rests inserted. A `target` longer than the current value is
/// refused; lengthening goes through [`merge`].
pub fn divide(
    music: &mut Music,
    index: usize,
    target: NoteValue,
    rest_placeholder: &PitchName,
) -> Result<usize> {
    let prev = music.event(index)?.value;
    if target < prev {
        return Err(EditorError::CannotLengthen {
            from: prev.get(),
            to: target.get(),
        });
    }

    let steps = (target.log2() - prev.log2()) as usize;
    for i in 0..steps {
        let value = NoteValue::new(target.get() >> i)?;
        music.insert(index + 1 + i, NoteEvent::rest(rest_placeholder.clone(), value))?;
    }
    music.set_value(index, target)?;

    log::debug!(
        "divide: event {} 1/{} -> 1/{} (+{} rests)",
        index,
        prev.get(),
        target.get(),
        steps
    );
    Ok(steps)
}

/// Set the event at `index` to `target` and drop the event after it.
///
/// Requires a following event; the musical validity of absorbing it is
/// left to the caller.
pub fn merge(music: &mut Music, index: usize, target: NoteValue) -> Result<NoteEvent> {
    music.event(index)?;
    if index + 1 >= music.len() {
        return Err(EditorError::MergePastEnd { index });
    }

    music.set_value(index, target)?;
    let absorbed = music.remove(index + 1)?;

    log::debug!("merge: event {} -> 1/{}, absorbed {:?}", index, target.get(), absorbed);
    Ok(absorbed)
}

/// Quarter-note key: divide when the event is longer than a quarter,
/// otherwise merge into a quarter
pub fn merge_or_divide(
    music: &mut Music,
    index: usize,
    target: NoteValue,
    rest_placeholder: &PitchName,
) -> Result<()> {
    let old = music.event(index)?.value;
    if target > old {
        divide(music, index, target, rest_placeholder).map(|_| ())
    } else {
        merge(music, index, target).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use num_rational::Ratio;

    fn placeholder() -> PitchName {
        PitchName::parse("A4").unwrap()
    }

    fn single(value: u32) -> Music {
        let event = NoteEvent::note(PitchName::parse("C4").unwrap(), NoteValue::new(value).unwrap());
        Music::new(vec![event], 120.0).unwrap()
    }

    fn values(music: &Music) -> Vec<u32> {
        music.events().iter().map(|e| e.value.get()).collect()
    }

    #[test]
    fn test_divide_quarter_into_eighths() {
        let mut music = single(4);
        let inserted = divide(&mut music, 0, NoteValue::EIGHTH, &placeholder()).unwrap();

        assert_eq!(inserted, 1);
        assert_eq!(values(&music), vec![8, 8]);
        assert!(!music.event(0).unwrap().is_rest());
        assert!(music.event(1).unwrap().is_rest());
    }

    #[test]
    fn test_divide_half_into_sixteenths() {
        let mut music = single(2);
        divide(&mut music, 0, NoteValue::SIXTEENTH, &placeholder()).unwrap();

        assert_eq!(values(&music), vec![16, 16, 8, 4]);
        assert_eq!(music.total_duration(), Ratio::new(1, 2));
    }

    #[test]
    fn test_divide_conserves_duration() {
        for prev in [1u32, 2, 4, 8] {
            for target in [1u32, 2, 4, 8, 16, 32] {
                if target < prev {
                    continue;
                }
                let mut music = single(prev);
                let target = NoteValue::new(target).unwrap();
                let inserted = divide(&mut music, 0, target, &placeholder()).unwrap();

                assert_eq!(music.len(), inserted + 1);
                assert_eq!(inserted as u32, target.log2() - prev.trailing_zeros());
                assert_eq!(music.total_duration(), Ratio::new(1, prev));
            }
        }
    }

    #[test]
    fn test_divide_same_value_is_noop() {
        let mut music = single(8);
        assert_eq!(divide(&mut music, 0, NoteValue::EIGHTH, &placeholder()), Ok(0));
        assert_eq!(values(&music), vec![8]);
    }

    #[test]
    fn test_divide_refuses_lengthening() {
        let mut music = single(16);
        assert_eq!(
            divide(&mut music, 0, NoteValue::EIGHTH, &placeholder()),
            Err(EditorError::CannotLengthen { from: 16, to: 8 })
        );
        assert_eq!(values(&music), vec![16]);
    }

    #[test]
    fn test_divide_keeps_later_events_after_rests() {
        let mut music = Music::from_notes_json(r#"[[["C4"], 4], [["E4"], 4]]"#, 120.0).unwrap();
        divide(&mut music, 0, NoteValue::SIXTEENTH, &placeholder()).unwrap();

        assert_eq!(values(&music), vec![16, 16, 8, 4]);
        assert_eq!(music.event(3).unwrap().sounding_name().unwrap().as_str(), "E4");
    }

    #[test]
    fn test_merge_restores_quarter() {
        let mut music = single(4);
        divide(&mut music, 0, NoteValue::EIGHTH, &placeholder()).unwrap();
        let absorbed = merge(&mut music, 0, NoteValue::QUARTER).unwrap();

        assert!(absorbed.is_rest());
        assert_eq!(values(&music), vec![4]);
        assert_eq!(music.event(0).unwrap().sounding_name().unwrap().as_str(), "C4");
    }

    #[test]
    fn test_merge_past_end() {
        let mut music = single(8);
        assert_eq!(
            merge(&mut music, 0, NoteValue::QUARTER),
            Err(EditorError::MergePastEnd { index: 0 })
        );
        assert_eq!(values(&music), vec![8]);
    }

    #[test]
    fn test_merge_bad_index() {
        let mut music = single(8);
        assert_eq!(
            merge(&mut music, 3, NoteValue::QUARTER),
            Err(EditorError::Model(ModelError::IndexOutOfRange { index: 3, len: 1 }))
        );
    }

    #[test]
    fn test_merge_or_divide_routes_by_length() {
        let mut music = single(2);
        merge_or_divide(&mut music, 0, NoteValue::QUARTER, &placeholder()).unwrap();
        assert_eq!(values(&music), vec![4, 4]);

        let mut music = single(4);
        divide(&mut music, 0, NoteValue::SIXTEENTH, &placeholder()).unwrap();
        merge_or_divide(&mut music, 0, NoteValue::QUARTER, &placeholder()).unwrap();
        assert_eq!(values(&music), vec![4, 8]);
    }
}
