//! Mapping horizontal pixel offsets to columns.
//!
//! Layout and fonts belong to the host. The host injects a [`TextMeasurer`] and the editor only
//! does the column search, so a mouse click can be turned into a caret column without the core
//! knowing anything about the UI toolkit.

use unicode_width::UnicodeWidthChar;

/// Host-provided text measurement.
pub trait TextMeasurer {
    /// Rendered width of `text` in pixels (or any unit consistent with the offsets passed in).
    fn text_width(&self, text: &str) -> f32;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str) -> f32,
{
    fn text_width(&self, text: &str) -> f32 {
        self(text)
    }
}

/// A measurer for monospace fonts: each terminal cell is `cell_width` wide.
///
/// Cell counts follow UAX #11 (CJK/emoji are two cells) and tabs advance to the next tab stop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Width of a single cell.
    pub cell_width: f32,
    /// Tab stop interval in cells.
    pub tab_width: usize,
}

impl MonospaceMeasurer {
    /// Create a measurer with the given cell width and a tab width of 4.
    pub fn new(cell_width: f32) -> Self {
        Self {
            cell_width,
            tab_width: 4,
        }
    }

    /// Override the tab width (in cells).
    pub fn with_tab_width(mut self, tab_width: usize) -> Self {
        self.tab_width = tab_width.max(1);
        self
    }

    /// Width of `text` in cells.
    pub fn cells(&self, text: &str) -> usize {
        let tab_width = self.tab_width.max(1);
        text.chars().fold(0usize, |x, ch| {
            if ch == '\t' {
                x + (tab_width - x % tab_width)
            } else {
                x + UnicodeWidthChar::width(ch).unwrap_or(1)
            }
        })
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn text_width(&self, text: &str) -> f32 {
        self.cells(text) as f32 * self.cell_width
    }
}

/// Column of `line` whose boundary is closest to `x_offset`.
///
/// Offsets at or left of the line start give column 0; offsets past the end give the line length.
/// When `x_offset` falls inside a character, the nearer of its two edges wins.
pub fn measure_column(line: &str, x_offset: f32, measurer: &dyn TextMeasurer) -> usize {
    if x_offset <= 0.0 {
        return 0;
    }

    let mut previous_width = 0.0f32;
    let mut column = 0usize;
    for (byte, ch) in line.char_indices() {
        let width = measurer.text_width(&line[..byte + ch.len_utf8()]);
        if width >= x_offset {
            return if x_offset - previous_width < width - x_offset {
                column
            } else {
                column + 1
            };
        }
        previous_width = width;
        column += 1;
    }
    column
}
