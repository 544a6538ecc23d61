use crate::docs::ParseOptions;

/// Options for a documentation collection pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectOptions {
    /// Culture passed to the documentation source (`None` = invariant).
    pub culture: Option<String>,
    pub parse: ParseOptions,
    /// Never emit constructor entries. Member-wise constructors of records
    /// are documented at the type level, so emitting them would duplicate it.
    pub skip_constructors: bool,
}

impl Default for CollectOptions {
    fn default() -> Self {
        Self {
            culture: None,
            parse: ParseOptions::default(),
            skip_constructors: true,
        }
    }
}

impl CollectOptions {
    pub fn with_culture(mut self, culture: impl Into<String>) -> Self {
        self.culture = Some(culture.into());
        self
    }
}
