//! NoteField Widget
//!
//! A borderless, wrapping text area that keeps its last line in view.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use textwrap::wrap;

/// Wrap `content` to `width` columns, keeping explicit line breaks
pub fn wrap_lines(content: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return Vec::new();
    }
    content
        .split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                wrap(line, width)
                    .into_iter()
                    .map(|cow| cow.to_string())
                    .collect()
            }
        })
        .collect()
}

/// Editable note text with a placeholder and a trailing cursor
pub struct NoteField<'a> {
    text: &'a str,
    placeholder: &'a str,
    style: Style,
    placeholder_style: Style,
    cursor: bool,
}

impl<'a> NoteField<'a> {
    /// Field showing `text`, with the cursor on
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            placeholder: "",
            style: Style::default(),
            placeholder_style: Style::default(),
            cursor: true,
        }
    }

    /// Text drawn in `style` while the note is empty
    pub fn placeholder(mut self, placeholder: &'a str, style: Style) -> Self {
        self.placeholder = placeholder;
        self.placeholder_style = style;
        self
    }

    /// Style of the note text
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Show the `_` cursor after the text
    pub fn cursor(mut self, cursor: bool) -> Self {
        self.cursor = cursor;
        self
    }
}

impl Widget for NoteField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let width = area.width as usize;

        if self.text.is_empty() {
            let mut x = area.x;
            if self.cursor {
                buf.set_string(x, area.y, "_", self.style);
                x += 1;
            }
            let room = (area.x + area.width).saturating_sub(x) as usize;
            buf.set_stringn(x, area.y, self.placeholder, room, self.placeholder_style);
            return;
        }

        let content = if self.cursor {
            format!("{}_", self.text)
        } else {
            self.text.to_string()
        };
        let lines = wrap_lines(&content, width);

        // Follow the cursor: show the tail when the note outgrows the area
        let skip = lines.len().saturating_sub(area.height as usize);
        for (i, line) in lines.iter().skip(skip).enumerate() {
            let y = area.y + i as u16;
            buf.set_stringn(area.x, y, line, width, self.style);
        }
    }
}
