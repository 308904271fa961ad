//! Selection state
//!
//! At most one event is active at a time. The selection holds a bare
//! position into `Music`; it is re-resolved after every edit rather than
//! cached across one.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Active(usize),
}

/// What a toggle did, so the caller can update the visual elements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Selected { previous: Option<usize>, index: usize },
    Cleared { previous: usize },
}

impl Selection {
    pub fn index(self) -> Option<usize> {
        match self {
            Selection::Idle => None,
            Selection::Active(index) => Some(index),
        }
    }

    pub fn is_active(self) -> bool {
        matches!(self, Selection::Active(_))
    }

    /// Activate `index`, or go idle if it is already the active one
    pub fn toggle(&mut self, index: usize) -> SelectionChange {
        match *self {
            Selection::Active(current) if current == index => {
                *self = Selection::Idle;
                SelectionChange::Cleared { previous: current }
            }
            previous => {
                *self = Selection::Active(index);
                SelectionChange::Selected {
                    previous: previous.index(),
                    index,
                }
            }
        }
    }

    /// Index one step back, clamped at 0
    pub fn previous_index(index: usize) -> usize {
        index.saturating_sub(1)
    }

    /// Index one step forward, clamped at the last event
    pub fn next_index(index: usize, len: usize) -> usize {
        (index + 1).min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_from_idle() {
        let mut selection = Selection::default();
        assert_eq!(
            selection.toggle(2),
            SelectionChange::Selected { previous: None, index: 2 }
        );
        assert_eq!(selection, Selection::Active(2));
    }

    #[test]
    fn test_toggle_other_moves() {
        let mut selection = Selection::Active(1);
        assert_eq!(
            selection.toggle(3),
            SelectionChange::Selected { previous: Some(1), index: 3 }
        );
        assert_eq!(selection.index(), Some(3));
    }

    #[test]
    fn test_toggle_same_clears() {
        let mut selection = Selection::Active(1);
        assert_eq!(selection.toggle(1), SelectionChange::Cleared { previous: 1 });
        assert!(!selection.is_active());
    }

    #[test]
    fn test_neighbour_clamping() {
        assert_eq!(Selection::previous_index(0), 0);
        assert_eq!(Selection::previous_index(3), 2);
        assert_eq!(Selection::next_index(3, 4), 3);
        assert_eq!(Selection::next_index(0, 4), 1);
        assert_eq!(Selection::next_index(0, 1), 0);
    }
}
