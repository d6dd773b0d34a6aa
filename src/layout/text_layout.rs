use crate::scroll::LayoutProvider;

const TAB_WIDTH: usize = 4;

/// Text wrapped to a fixed column width, one terminal row per entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextLayout {
    rows: Vec<String>,
    width: u16,
    line_height: i32,
}

impl TextLayout {
    /// Wrap `text` at `width` columns. A width of 0 leaves lines unwrapped.
    pub fn new(text: &str, width: u16, line_height: i32) -> Self {
        Self {
            rows: wrap(text, usize::from(width)),
            width,
            line_height,
        }
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    pub fn width(&self) -> u16 {
        self.width
    }
}

impl LayoutProvider for TextLayout {
    fn line_count(&self) -> i32 {
        i32::try_from(self.rows.len()).unwrap_or(i32::MAX)
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    for line in text.lines() {
        let chars: Vec<char> = expand_tabs(line).chars().collect();
        if chars.is_empty() || width == 0 {
            rows.push(chars.into_iter().collect());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

fn expand_tabs(line: &str) -> String {
    if line.contains('\t') {
        line.replace('\t', &" ".repeat(TAB_WIDTH))
    } else {
        line.to_string()
    }
}
