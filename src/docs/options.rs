/// Options controlling how documentation text is normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Collapse whitespace runs and trim lines outside code blocks.
    pub normalize_whitespace: bool,
    /// Render cross-references by their last name segment only
    /// (`M:Ns.Type.Run(System.String)` becomes `Run(System.String)`).
    pub short_cref_names: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            normalize_whitespace: true,
            short_cref_names: false,
        }
    }
}
