//! Status bar and prompt/minibuffer rendering

use crate::primitives::display_width::str_width;
use crate::session::EditorSession;
use crate::view::prompt::Prompt;
use crate::view::theme::Theme;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders the status bar and prompt/minibuffer
pub struct StatusBarRenderer;

impl StatusBarRenderer {
    /// Render the status bar: title, dirty marker, cursor position and the
    /// latest status message.
    pub fn render_status_bar(
        frame: &mut Frame,
        area: Rect,
        session: &EditorSession,
        status_message: Option<&str>,
        theme: &Theme,
    ) {
        let base_style = Style::default()
            .fg(theme.status_bar_fg)
            .bg(theme.status_bar_bg);

        let (line, column) = session.buffer().cursor_line_col();
        let mut spans = vec![Span::styled(
            format!(" {}", session.title()),
            base_style.add_modifier(Modifier::BOLD),
        )];
        if session.is_dirty() {
            spans.push(Span::styled(" [+]", base_style));
        }
        spans.push(Span::styled(
            format!(" | Ln {}, Col {}", line + 1, column + 1),
            base_style,
        ));
        if let Some(message) = status_message {
            spans.push(Span::styled(format!(" | {message}"), base_style));
        }

        let status_line = Paragraph::new(Line::from(spans)).style(base_style);
        frame.render_widget(status_line, area);
    }

    /// Render the prompt/minibuffer
    pub fn render_prompt(frame: &mut Frame, area: Rect, prompt: &Prompt, theme: &Theme) {
        let base_style = Style::default().fg(theme.prompt_fg).bg(theme.prompt_bg);

        let spans = vec![
            Span::styled(prompt.message.clone(), base_style),
            Span::styled(prompt.input.clone(), base_style),
        ];
        let prompt_line = Paragraph::new(Line::from(spans)).style(base_style);
        frame.render_widget(prompt_line, area);

        // Cursor sits after the message plus the input up to cursor_pos
        let cursor_x =
            str_width(&prompt.message) + str_width(&prompt.input[..prompt.cursor_pos]);
        if cursor_x < area.width as usize {
            frame.set_cursor_position((area.x + cursor_x as u16, area.y));
        }
    }
}
