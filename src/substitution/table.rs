//! Insertion-ordered substitution table.

/// An ordered mapping from placeholder token to replacement value.
///
/// Entries keep the order they were first inserted in, which is the order
/// the template manifest declared them in. Ordering matters twice: prompts
/// are asked in table order, and [`apply`](Self::apply) replaces tokens in
/// table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubstitutionTable {
    entries: Vec<(String, String)>,
}

impl SubstitutionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or update a key.
    ///
    /// Updating an existing key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Look up the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a key is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterate keys in table order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterate entries in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace every occurrence of every key in `input` with its value.
    ///
    /// Replacement is literal substring replacement, performed one table
    /// entry at a time in table order. An earlier replacement's output is
    /// the next replacement's input, so a value that contains a later key
    /// gets rewritten again. Templates rely on this being deterministic,
    /// so the order is part of the contract.
    pub fn apply(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (key, value) in &self.entries {
            output = output.replace(key, value);
        }
        output
    }
}

impl FromIterator<(String, String)> for SubstitutionTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}
