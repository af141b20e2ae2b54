//! Scalar substitution table.

use rustc_hash::FxHashMap;

/// Scalars known to an Amplify AppSync API and their TypeScript primitives.
pub const AMPLIFY_SCALARS: &[(&str, &str)] = &[
    ("ID", "string"),
    ("String", "string"),
    ("Boolean", "boolean"),
    ("Int", "number"),
    ("Float", "number"),
    ("AWSDateTime", "string"),
    ("AWSJSON", "string"),
    ("AWSURL", "string"),
];

/// Maps schema scalar names to TypeScript primitive type names.
///
/// The table is assembled before a run and only read while projecting.
#[derive(Debug, Clone)]
pub struct ScalarTable {
    map: FxHashMap<String, String>,
}

impl Default for ScalarTable {
    fn default() -> Self {
        Self::amplify()
    }
}

impl ScalarTable {
    /// Creates the table of Amplify scalars.
    #[must_use]
    pub fn amplify() -> Self {
        let mut table = Self::empty();
        table.extend(AMPLIFY_SCALARS.iter().copied());
        table
    }

    /// Creates a table without any scalars.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            map: FxHashMap::default(),
        }
    }

    /// Adds a scalar, replacing an existing mapping of the same name.
    #[must_use]
    pub fn with_scalar(mut self, name: impl Into<String>, ts_type: impl Into<String>) -> Self {
        self.map.insert(name.into(), ts_type.into());
        self
    }

    /// Adds several scalars.
    pub fn extend<I, K, V>(&mut self, scalars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.map
            .extend(scalars.into_iter().map(|(k, v)| (k.into(), v.into())));
    }

    /// Returns the TypeScript primitive for a scalar name.
    #[must_use]
    pub fn substitute(&self, name: &str) -> Option<&str> {
        self.map.get(name).map(String::as_str)
    }

    /// Returns true if `name` is a known scalar.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    /// Returns the number of scalars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns true if the table has no scalars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
