//! Selection Tracker
//!
//! Selected row ids, kept in selection order. Selection is independent of
//! the current filter, sort and page: a row stays selected while hidden.

use hashlink::LinkedHashSet;
use serde::{Deserialize, Serialize};

use super::column::RowId;

/// Tri-state of the "select all rows" header checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectAllState {
    Unchecked,
    Indeterminate,
    Checked,
}

/// Set of selected row ids
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selection {
    ids: LinkedHashSet<RowId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in selection order
    pub fn iter(&self) -> impl Iterator<Item = &RowId> {
        self.ids.iter()
    }

    /// Flip one row
    pub fn toggle(&mut self, id: RowId) {
        if !self.ids.remove(&id) {
            self.ids.insert(id);
        }
    }

    /// Toggle all of `visible`: deselect them when every one is already
    /// selected, otherwise select the missing ones. Rows outside `visible`
    /// are untouched.
    pub fn toggle_all(&mut self, visible: &[RowId]) {
        if visible.is_empty() {
            return;
        }
        if visible.iter().all(|id| self.ids.contains(id)) {
            for id in visible {
                self.ids.remove(id);
            }
        } else {
            for id in visible {
                if !self.ids.contains(id) {
                    self.ids.insert(id.clone());
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Header checkbox state for the visible rows
    pub fn select_all_state(&self, visible: &[RowId]) -> SelectAllState {
        let selected = visible.iter().filter(|id| self.ids.contains(*id)).count();
        if selected == 0 {
            SelectAllState::Unchecked
        } else if selected == visible.len() {
            SelectAllState::Checked
        } else {
            SelectAllState::Indeterminate
        }
    }

    /// Owned copy of the ids, in selection order
    pub fn to_vec(&self) -> Vec<RowId> {
        self.ids.iter().cloned().collect()
    }
}

impl FromIterator<RowId> for Selection {
    fn from_iter<I: IntoIterator<Item = RowId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(names: &[&str]) -> Vec<RowId> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_toggle_one() {
        let mut selection = Selection::new();
        selection.toggle("a".into());
        assert!(selection.contains("a"));
        selection.toggle("a".into());
        assert!(selection.is_empty());
    }

    #[test]
    fn test_toggle_all_visible_only() {
        let mut selection = Selection::new();
        selection.toggle("hidden".into());

        let page = ids(&["a", "b"]);
        selection.toggle_all(&page);
        assert_eq!(selection.to_vec(), ids(&["hidden", "a", "b"]));

        selection.toggle_all(&page);
        assert_eq!(selection.to_vec(), ids(&["hidden"]));
    }

    #[test]
    fn test_toggle_all_partial_selects_rest() {
        let mut selection: Selection = ids(&["b"]).into_iter().collect();
        selection.toggle_all(&ids(&["a", "b", "c"]));
        assert_eq!(selection.len(), 3);
        assert_eq!(selection.to_vec(), ids(&["b", "a", "c"]));
    }

    #[test]
    fn test_select_all_state() {
        let selection: Selection = ids(&["a"]).into_iter().collect();
        assert_eq!(selection.select_all_state(&[]), SelectAllState::Unchecked);
        assert_eq!(selection.select_all_state(&ids(&["b"])), SelectAllState::Unchecked);
        assert_eq!(
            selection.select_all_state(&ids(&["a", "b"])),
            SelectAllState::Indeterminate
        );
        assert_eq!(selection.select_all_state(&ids(&["a"])), SelectAllState::Checked);
    }

    #[test]
    fn test_serde_as_list() {
        let selection: Selection = ids(&["x", "y"]).into_iter().collect();
        let json = serde_json::to_string(&selection).expect("serialize");
        assert_eq!(json, r#"["x","y"]"#);
        let back: Selection = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, selection);
    }
}
