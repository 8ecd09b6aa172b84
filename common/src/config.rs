#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Paints result messages with ANSI colours.
    ///
    /// Never changes the text itself, only the escape codes around it.
    pub color: bool,
    /// Diagnostic verbosity requested on the command line.
    pub verbose: u8,
}

impl Config {
    /// Plain text, no diagnostics. What tests and piped sessions want.
    pub fn plain() -> Self {
        Self::default()
    }
}
