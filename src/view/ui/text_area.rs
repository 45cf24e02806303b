//! Buffer rendering: line-number gutter, visible text and the cursor

use crate::model::buffer::TextBuffer;
use crate::primitives::display_width::{byte_offset_at_visual_column, char_width};
use crate::view::theme::Theme;
use crate::view::viewport::{gutter_width, Viewport};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use std::ops::Range;

pub struct TextAreaRenderer;

impl TextAreaRenderer {
    /// Draw the buffer into `area`, scrolling `viewport` to keep the cursor
    /// visible. `highlight` is a byte range drawn with the search colors.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        buffer: &TextBuffer,
        viewport: &mut Viewport,
        highlight: Option<Range<usize>>,
        line_numbers: bool,
        theme: &Theme,
    ) {
        let _span = tracing::trace_span!("render_text_area").entered();

        let gutter = if line_numbers {
            gutter_width(buffer.line_count()).min(area.width)
        } else {
            0
        };
        viewport.resize(area.width - gutter, area.height);

        let (cursor_line, _) = buffer.cursor_line_col();
        let cursor_column = buffer.cursor_visual_column();
        viewport.ensure_visible(cursor_line, cursor_column);

        let text_style = Style::default().fg(theme.editor_fg).bg(theme.editor_bg);
        let gutter_style = Style::default()
            .fg(theme.line_number_fg)
            .bg(theme.line_number_bg);
        let match_style = Style::default()
            .fg(theme.search_match_fg)
            .bg(theme.search_match_bg);

        let mut lines = Vec::with_capacity(viewport.visible_line_count());
        let mut line_start = buffer.line_offset(viewport.top_line).unwrap_or(0);
        for (index, content) in buffer
            .lines()
            .skip(viewport.top_line)
            .take(viewport.visible_line_count())
            .enumerate()
        {
            let mut spans = Vec::new();
            if gutter > 0 {
                let number = viewport.top_line + index + 1;
                spans.push(Span::styled(
                    format!("{:>width$} ", number, width = gutter as usize - 1),
                    gutter_style,
                ));
            }

            let visible_start = byte_offset_at_visual_column(content, viewport.left_column);
            let mut used = 0;
            for (offset, ch) in content[visible_start..].char_indices() {
                let width = char_width(ch);
                if width == 0 {
                    continue;
                }
                if used + width > viewport.width as usize {
                    break;
                }
                used += width;
                let byte = line_start + visible_start + offset;
                let style = match &highlight {
                    Some(range) if range.contains(&byte) => match_style,
                    _ => text_style,
                };
                spans.push(Span::styled(ch.to_string(), style));
            }

            lines.push(Line::from(spans));
            line_start += content.len() + 1;
        }

        frame.render_widget(Paragraph::new(lines).style(text_style), area);

        let x = cursor_column.saturating_sub(viewport.left_column) as u16 + gutter;
        let y = (cursor_line - viewport.top_line) as u16;
        if x < area.width && y < area.height {
            frame.set_cursor_position((area.x + x, area.y + y));
        }
    }
}
