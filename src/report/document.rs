//! Paginated plain-text document builder.

/// Character width of a rendered page.
const PAGE_WIDTH: usize = 72;

/// Content lines per page, excluding the footer.
const LINES_PER_PAGE: usize = 54;

/// Accumulates lines and serializes them into fixed-height pages.
///
/// Pages are separated by a form feed. Each page is padded to
/// [`LINES_PER_PAGE`] content lines and closed with a centered
/// `Page N` footer.
#[derive(Debug, Default)]
pub(crate) struct Document {
    lines: Vec<String>,
}

impl Document {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends one content line.
    pub(crate) fn line(&mut self, text: impl Into<String>) {
        self.lines.push(text.into());
    }

    /// Appends one line centered within the page width.
    pub(crate) fn centered(&mut self, text: &str) {
        let padding = PAGE_WIDTH.saturating_sub(text.chars().count()) / 2;
        self.lines.push(format!("{}{text}", " ".repeat(padding)));
    }

    /// Appends an empty line.
    pub(crate) fn blank(&mut self) {
        self.lines.push(String::new());
    }

    /// Appends free text, word-wrapped to the page width. Embedded
    /// newlines start new paragraphs.
    pub(crate) fn wrapped(&mut self, text: &str) {
        for paragraph in text.split('\n') {
            let mut current = String::new();
            for word in paragraph.split_whitespace() {
                if current.is_empty() {
                    current.push_str(word);
                } else if current.chars().count() + 1 + word.chars().count() <= PAGE_WIDTH {
                    current.push(' ');
                    current.push_str(word);
                } else {
                    self.lines.push(std::mem::take(&mut current));
                    current.push_str(word);
                }
            }
            self.lines.push(current);
        }
    }

    /// Serializes the accumulated lines into footered pages.
    pub(crate) fn into_bytes(self) -> Vec<u8> {
        let pages: Vec<&[String]> = if self.lines.is_empty() {
            vec![&[]]
        } else {
            self.lines.chunks(LINES_PER_PAGE).collect()
        };
        let page_count = pages.len();
        let mut rendered = String::new();

        for (page_index, page_lines) in pages.into_iter().enumerate() {
            if page_index > 0 {
                rendered.push('\u{c}');
            }
            for line in page_lines {
                rendered.push_str(line);
                rendered.push('\n');
            }
            for _ in page_lines.len()..LINES_PER_PAGE {
                rendered.push('\n');
            }

            let footer = format!("Page {} of {page_count}", page_index + 1);
            let padding = PAGE_WIDTH.saturating_sub(footer.chars().count()) / 2;
            rendered.push_str(&" ".repeat(padding));
            rendered.push_str(&footer);
            rendered.push('\n');
        }

        rendered.into_bytes()
    }
}
