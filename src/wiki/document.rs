//! Header-keyed markdown document model.
//!
//! A wiki page is one `# ` title, one `## ` entity name and a sequence of
//! `### ` sections. The section header text is the contract between a type's
//! renderer and its parser, so both sides go through this module.
//!
//! ```text
//! # People
//!
//! ## Alice Smith
//!
//! ### Appearances
//! - [[2024-01-15]]: Coffee downtown
//!
//! ### Notes
//! Best friend from college.
//! ```

use chrono::NaiveDate;

/// One `### ` section and the raw lines below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub header: String,
    pub lines: Vec<String>,
}

/// A parsed wiki page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiDocument {
    pub title: Option<String>,
    pub name: Option<String>,
    pub sections: Vec<Section>,
}

impl WikiDocument {
    /// Split markdown into title, name and sections.
    ///
    /// Only the given `headers` open a section. Any other `### ` line stays in
    /// the body of the section above it, so sub-headings written into free
    /// text are kept. Title and name headings are only recognised before the
    /// first section; later `# ` / `## ` lines belong to the section body.
    pub fn parse(content: &str, headers: &[&str]) -> Self {
        let mut document = WikiDocument::default();

        for line in content.lines() {
            if let Some(header) = line.strip_prefix("### ").map(str::trim) {
                if headers.contains(&header) {
                    document.sections.push(Section {
                        header: header.to_string(),
                        lines: Vec::new(),
                    });
                    continue;
                }
            }

            match document.sections.last_mut() {
                Some(section) => section.lines.push(line.to_string()),
                None => {
                    if let Some(name) = line.strip_prefix("## ") {
                        document.name.get_or_insert_with(|| name.trim().to_string());
                    } else if let Some(title) = line.strip_prefix("# ") {
                        document.title.get_or_insert_with(|| title.trim().to_string());
                    }
                }
            }
        }

        document
    }

    pub fn section(&self, header: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.header == header)
    }

    /// Free text of a section with surrounding blank lines removed.
    ///
    /// Returns `None` when the section is missing or blank.
    pub fn text(&self, header: &str) -> Option<String> {
        let lines = &self.section(header)?.lines;
        let start = lines.iter().position(|l| !l.trim().is_empty())?;
        let end = lines.iter().rposition(|l| !l.trim().is_empty())?;
        Some(lines[start..=end].join("\n"))
    }
}

/// Builds the lines of a wiki page in render order.
pub struct WikiBuilder {
    lines: Vec<String>,
}

impl WikiBuilder {
    pub fn new(title: &str, name: &str) -> Self {
        Self {
            lines: vec![format!("# {}", title), String::new(), format!("## {}", name)],
        }
    }

    /// Append a section with the given body lines.
    pub fn section(mut self, header: &str, body: impl IntoIterator<Item = String>) -> Self {
        self.lines.push(String::new());
        self.lines.push(format!("### {}", header));
        self.lines.extend(body);
        self
    }

    /// Append a computed section, omitted entirely when it has no lines.
    pub fn section_if_any(self, header: &str, body: Vec<String>) -> Self {
        if body.is_empty() {
            self
        } else {
            self.section(header, body)
        }
    }

    /// Append an editable free-text section.
    ///
    /// The header is always emitted so there is a place to write into.
    pub fn text_section(self, header: &str, text: Option<&str>) -> Self {
        let body = text
            .map(|t| t.lines().map(str::to_string).collect::<Vec<_>>())
            .unwrap_or_default();
        self.section(header, body)
    }

    pub fn build(self) -> Vec<String> {
        self.lines
    }
}

/// Filesystem-safe identifier for a display name.
///
/// Lowercase, spaces become `_`, slashes become `-`.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "_").replace('/', "-")
}

/// `[[slug|Display]]` link to another page, or `[[slug]]` when they coincide.
pub fn wikilink(name: &str) -> String {
    let slug = slugify(name);
    if slug == name {
        format!("[[{}]]", slug)
    } else {
        format!("[[{}|{}]]", slug, name)
    }
}

/// Bullet list of links to named pages.
pub fn name_list(names: &[String]) -> Vec<String> {
    names.iter().map(|n| format!("- {}", wikilink(n))).collect()
}

/// Bullet list of links to entry pages.
pub fn date_list(dates: &[NaiveDate]) -> Vec<String> {
    dates.iter().map(|d| format!("- {}", date_link(d))).collect()
}

pub fn date_link(date: &NaiveDate) -> String {
    format!("[[{}]]", date.format("%Y-%m-%d"))
}
