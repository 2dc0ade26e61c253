use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The definition stored for one word. The word itself is the key and lives
/// outside the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub definition: String,
}

impl Entry {
    pub fn new(definition: impl Into<String>) -> Self {
        Self {
            definition: definition.into(),
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.definition)
    }
}

/// A parsed view of the whole dictionary file.
///
/// `words` keeps one element per well-formed line, in file order, so a word
/// written twice shows up twice. `entries` holds a single value per word: the
/// definition from the *last* line carrying it. Iterating resolves every
/// position through the map, which means all occurrences of a duplicated word
/// report the final definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub words: Vec<String>,
    pub entries: HashMap<String, Entry>,
}

impl Snapshot {
    pub fn push(&mut self, word: String, entry: Entry) {
        self.entries.insert(word.clone(), entry);
        self.words.push(word);
    }

    pub fn get(&self, word: &str) -> Option<&Entry> {
        self.entries.get(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.words
            .iter()
            .filter_map(move |word| self.entries.get(word).map(|entry| (word.as_str(), entry)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_displays_its_definition() {
        let entry = Entry::new("a small domesticated carnivorous mammal");
        assert_eq!(entry.to_string(), "a small domesticated carnivorous mammal");
    }

    #[test]
    fn duplicate_words_resolve_to_last_definition() {
        let mut snapshot = Snapshot::default();
        snapshot.push("cat".into(), Entry::new("v1"));
        snapshot.push("dog".into(), Entry::new("barks"));
        snapshot.push("cat".into(), Entry::new("v2"));

        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.entries.len(), 2);

        let listed: Vec<_> = snapshot
            .iter()
            .map(|(w, e)| (w.to_string(), e.definition.clone()))
            .collect();
        assert_eq!(
            listed,
            vec![
                ("cat".to_string(), "v2".to_string()),
                ("dog".to_string(), "barks".to_string()),
                ("cat".to_string(), "v2".to_string()),
            ]
        );
    }
}
