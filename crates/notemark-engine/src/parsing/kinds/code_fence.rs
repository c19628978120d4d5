pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Whether the line opens or closes a fence.
    pub fn is_delimiter(line: &str) -> bool {
        line.trim_start().starts_with(Self::BACKTICKS)
    }

    /// The language tag of an opening fence line: first word of the info string.
    pub fn info(line: &str) -> Option<&str> {
        let rest = line.trim_start().strip_prefix(Self::BACKTICKS)?;
        let rest = rest.trim_start_matches('`').trim();
        rest.split_whitespace().next()
    }
}
