use clap::ValueEnum;

/// Markdown report layout the extractor should assume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Dialect {
    /// Linter console output: `[ERROR]` blocks plus `####` file sections
    Console,
    /// `##` file headings with plain `Error:` / `Warning:` bullet lines
    Heading,
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Console => write!(f, "console"),
            Dialect::Heading => write!(f, "heading"),
        }
    }
}

impl std::str::FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "console" => Ok(Dialect::Console),
            "heading" | "header" => Ok(Dialect::Heading),
            _ => Err(format!("Unknown dialect: {}", s)),
        }
    }
}
