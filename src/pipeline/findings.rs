/// Raw findings produced by the research step.
///
/// The content is free text. The research prompt asks for a single
/// bullet-point list of ten items, but nothing downstream depends on that
/// shape beyond feeding the text to the writing step; `bullets` exists for
/// logging coverage, not for enforcement.
#[derive(Debug, Clone)]
pub struct ResearchFindings {
    raw: String,
}

impl ResearchFindings {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Lines that look like bullet items.
    pub fn bullets(&self) -> Vec<&str> {
        self.raw
            .lines()
            .map(str::trim)
            .filter(|line| is_bullet(line))
            .collect()
    }
}

fn is_bullet(line: &str) -> bool {
    if line.starts_with("- ") || line.starts_with("* ") {
        return true;
    }
    // Numbered lists: "1. ...", "10. ..."
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    digits > 0 && line[digits..].starts_with('.')
}
