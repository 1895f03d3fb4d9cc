use indexmap::IndexSet;

/// Insertion-ordered set of header or method names.
///
/// Membership is exact and case-sensitive. Joined header values follow the
/// order in which entries were first inserted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TokenList {
    values: IndexSet<String>,
}

impl TokenList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns `true` when the value was not present before.
    pub fn insert<S: Into<String>>(&mut self, value: S) -> bool {
        self.values.insert(value.into())
    }

    pub fn extend<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.values.extend(values.into_iter().map(Into::into));
    }

    /// Removes `value`, keeping the relative order of the remaining entries.
    pub fn remove(&mut self, value: &str) -> bool {
        self.values.shift_remove(value)
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.values.iter().map(String::as_str)
    }

    /// Joins the entries with `", "`. An empty list yields an empty string.
    pub fn header_value(&self) -> String {
        let mut value = String::with_capacity(self.values.iter().map(|v| v.len() + 2).sum());
        for (idx, entry) in self.values.iter().enumerate() {
            if idx > 0 {
                value.push_str(", ");
            }
            value.push_str(entry);
        }
        value
    }
}

impl<S: Into<String>> FromIterator<S> for TokenList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::list(iter)
    }
}

#[cfg(test)]
#[path = "token_list_test.rs"]
mod token_list_test;
