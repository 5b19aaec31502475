use std::collections::HashSet;

/// Message codes declared in the properties file.
///
/// Built once by the properties loader before any template is checked,
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownCodes {
    /// Properties file the codes were read from.
    pub file_path: String,
    codes: HashSet<String>,
}

impl KnownCodes {
    pub fn new(file_path: impl Into<String>) -> Self {
        Self {
            file_path: file_path.into(),
            codes: HashSet::new(),
        }
    }

    pub fn insert(&mut self, code: impl Into<String>) -> bool {
        self.codes.insert(code.into())
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(code)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<S: Into<String>> Extend<S> for KnownCodes {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.codes.extend(iter.into_iter().map(Into::into));
    }
}
