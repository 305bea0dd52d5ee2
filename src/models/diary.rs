use serde::{Deserialize, Serialize};

/// Locally buffered food-diary entries plus the in-progress draft.
///
/// Entries are free text, appended only when non-empty after trimming,
/// and cleared wholesale once a sync succeeds. Field names stay in
/// camelCase for compatibility with state blobs written by the web
/// client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryDraft {
    pub entries: Vec<String>,
    pub draft_text: String,
}

impl DiaryDraft {
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft_text = text.into();
    }

    /// Appends the trimmed entry and clears the draft. Empty or
    /// whitespace-only text is a no-op.
    pub fn add_entry(&mut self, entry: &str) -> bool {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            return false;
        }
        self.entries.push(trimmed.to_string());
        self.draft_text.clear();
        true
    }

    /// Removes the entry at `index`. Out-of-range indexes are a no-op.
    pub fn remove_entry(&mut self, index: usize) -> bool {
        if index >= self.entries.len() {
            return false;
        }
        self.entries.remove(index);
        true
    }

    pub fn clear_entries(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_entry_trims() {
        let mut diary = DiaryDraft::default();
        assert!(diary.add_entry("  ovo mexido com espinafre  "));
        assert_eq!(diary.entries, vec!["ovo mexido com espinafre"]);
    }

    #[test]
    fn test_add_entry_rejects_empty() {
        let mut diary = DiaryDraft::default();
        assert!(!diary.add_entry(""));
        assert!(!diary.add_entry("   "));
        assert!(diary.entries.is_empty());
    }

    #[test]
    fn test_add_entry_clears_draft() {
        let mut diary = DiaryDraft::default();
        diary.set_draft("iogurte com granola");
        assert!(diary.add_entry("iogurte com granola"));
        assert!(diary.draft_text.is_empty());
    }

    #[test]
    fn test_remove_entry_out_of_range() {
        let mut diary = DiaryDraft::default();
        diary.add_entry("almoço");
        assert!(!diary.remove_entry(1));
        assert!(!diary.remove_entry(100));
        assert_eq!(diary.entries.len(), 1);
    }

    #[test]
    fn test_remove_entry_by_position() {
        let mut diary = DiaryDraft::default();
        diary.add_entry("café");
        diary.add_entry("almoço");
        diary.add_entry("jantar");

        assert!(diary.remove_entry(1));
        assert_eq!(diary.entries, vec!["café", "jantar"]);
    }

    #[test]
    fn test_serde_uses_camel_case() {
        let mut diary = DiaryDraft::default();
        diary.set_draft("sopa");
        let json = serde_json::to_string(&diary).unwrap();
        assert!(json.contains("draftText"));

        let parsed: DiaryDraft = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, diary);
    }
}
