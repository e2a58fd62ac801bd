#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CaseMatching {
    Sensitive,
    /// Lower-cases the keyword fully but folds only `A-Z` in recipe fields, so a
    /// non-ASCII uppercase letter in a field never matches.
    #[default]
    AsciiInsensitive,
}

#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub case_matching: CaseMatching,
    /// Maximum number of hits returned. `None` returns every match.
    pub result_limit: Option<usize>,
}
