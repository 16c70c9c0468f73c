/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Worksheet to read. The first sheet when `None`. Ignored for CSV.
    pub sheet: Option<String>,
    /// Treat NA sentinel text (`#N/A`, `NULL`, `nan`, ...) as empty cells.
    pub na_sentinels: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            sheet: None,
            na_sentinels: true,
        }
    }
}

impl LoadOptions {
    #[must_use]
    pub fn with_sheet(mut self, sheet: Option<String>) -> Self {
        self.sheet = sheet;
        self
    }

    #[must_use]
    pub fn with_na_sentinels(mut self, enable: bool) -> Self {
        self.na_sentinels = enable;
        self
    }
}
