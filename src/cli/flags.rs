#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub interactive: bool,
    pub clipboard: bool,
    pub no_upper: bool,
    pub no_lower: bool,
    pub no_digits: bool,
    pub no_special: bool,
    pub exclude_similar: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub output: Option<String>,
    pub rate: Option<String>,
}

impl CliFlags {
    /// True if any flag changes what gets generated.
    pub fn has_generation_args(&self) -> bool {
        self.length.is_some()
            || self.number.is_some()
            || self.no_upper
            || self.no_lower
            || self.no_digits
            || self.no_special
            || self.exclude_similar
    }
}
