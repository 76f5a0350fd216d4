//! Constant string table.

use indexmap::IndexSet;

use crate::ids::StringId;

/// Interns literal runs so equal text shares one [`StringId`].
#[derive(Debug, Default)]
pub struct StringTableBuilder {
    strings: IndexSet<String>,
}

impl StringTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn intern(&mut self, text: &str) -> StringId {
        if let Some(index) = self.strings.get_index_of(text) {
            return StringId(index as u32);
        }
        let (index, _) = self.strings.insert_full(text.to_string());
        StringId(index as u32)
    }

    pub fn get(&self, id: StringId) -> Option<&str> {
        self.strings.get_index(id.index()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub(crate) fn into_strings(self) -> Vec<String> {
        self.strings.into_iter().collect()
    }
}
