// ABOUTME: Saved and recent color lists.
// ABOUTME: Most-recently-used de-duplicating list, owned internally or by the caller.

use swatch_core::color::normalize_hex;

fn canonical(hex: &str) -> String {
    normalize_hex(hex).unwrap_or_else(|| hex.to_ascii_uppercase())
}

/// Most recent first, no duplicates, optionally capped
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MruList {
    colors: Vec<String>,
    capacity: Option<usize>,
}

impl MruList {
    pub fn new(capacity: Option<usize>) -> Self {
        Self {
            colors: Vec::new(),
            capacity,
        }
    }

    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Move `hex` to the front, dropping any earlier copy and anything past
    /// capacity
    pub fn add(&mut self, hex: &str) {
        let hex = canonical(hex);
        if let Some(pos) = self.colors.iter().position(|c| *c == hex) {
            self.colors.remove(pos);
        }
        self.colors.insert(0, hex);

        if let Some(capacity) = self.capacity {
            self.colors.truncate(capacity);
        }
    }

    pub fn clear(&mut self) {
        self.colors.clear();
    }

    pub fn as_slice(&self) -> &[String] {
        &self.colors
    }
}

/// Where the saved color list lives, decided at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SavedColors {
    /// The picker manages the list itself
    Owned(MruList),
    /// The caller owns the list; the picker only holds its latest snapshot
    Delegated(Vec<String>),
}

impl SavedColors {
    pub fn colors(&self) -> &[String] {
        match self {
            SavedColors::Owned(list) => list.as_slice(),
            SavedColors::Delegated(colors) => colors,
        }
    }

    pub fn is_delegated(&self) -> bool {
        matches!(self, SavedColors::Delegated(_))
    }

    pub fn is_empty(&self) -> bool {
        self.colors().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(colors: &[&str], capacity: Option<usize>) -> MruList {
        let mut list = MruList::new(capacity);
        for hex in colors.iter().rev() {
            list.add(hex);
        }
        list
    }

    #[test]
    fn add_moves_existing_to_front() {
        let mut list = seeded(&["#112233", "#AABBCC"], Some(5));
        list.add("#AABBCC");
        assert_eq!(list.as_slice(), ["#AABBCC", "#112233"]);
    }

    #[test]
    fn add_dedups_case_insensitively() {
        let mut list = MruList::unbounded();
        list.add("#aabbcc");
        list.add("AABBCC");
        assert_eq!(list.as_slice(), ["#AABBCC"]);
    }

    #[test]
    fn add_past_capacity_evicts_oldest() {
        let mut list = MruList::new(Some(3));
        for hex in ["#000001", "#000002", "#000003", "#000004"] {
            list.add(hex);
        }
        assert_eq!(list.as_slice(), ["#000004", "#000003", "#000002"]);
    }

    #[test]
    fn unbounded_list_grows() {
        let mut list = MruList::unbounded();
        for i in 0..50u32 {
            list.add(&format!("#{:06X}", i));
        }
        assert_eq!(list.as_slice().len(), 50);
        assert_eq!(list.as_slice()[0], "#000031");
    }

    #[test]
    fn clear_empties_list() {
        let mut list = seeded(&["#112233", "#445566"], None);
        list.clear();
        assert!(list.as_slice().is_empty());
    }

    #[test]
    fn saved_colors_reads_both_modes() {
        let owned = SavedColors::Owned(seeded(&["#112233"], None));
        let delegated = SavedColors::Delegated(vec!["#112233".to_string()]);
        assert_eq!(owned.colors(), delegated.colors());
        assert!(!owned.is_delegated());
        assert!(delegated.is_delegated());
        assert!(!owned.is_empty());
    }
}
