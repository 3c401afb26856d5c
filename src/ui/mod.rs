//! Terminal interface rendering for the demo viewer.
//!
//! The layout has three areas:
//! - Text area (top): the active buffer's visible lines, cursor line
//!   highlighted
//! - Status line: buffer name, tab position, cursor position, and the
//!   history indicator `trail i/len`
//! - Message line (bottom): feedback from history commands

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::{Frame, Terminal};

use crate::history::NavigatorRegistry;
use crate::viewer::Workspace;

/// Main UI structure managing terminal rendering.
pub struct UI {
    show_line_numbers: bool,
    message: Option<String>,
}

impl UI {
    /// Creates a new UI.
    pub fn new(show_line_numbers: bool) -> Self {
        Self {
            show_line_numbers,
            message: None,
        }
    }

    /// Sets the message shown at the bottom of the screen.
    pub fn set_message(&mut self, message: Option<String>) {
        if message.is_some() {
            self.message = message;
        }
    }

    /// Clears the message line.
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Renders the full layout.
    pub fn render<B: Backend>(
        &self,
        terminal: &mut Terminal<B>,
        workspace: &mut Workspace,
        registry: &NavigatorRegistry,
    ) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(1),    // Text area
                    Constraint::Length(1), // Status line
                    Constraint::Length(1), // Message line
                ])
                .split(f.area());

            self.render_text_area(f, chunks[0], workspace);
            self.render_status_line(f, chunks[1], workspace, registry);
            self.render_message_line(f, chunks[2]);
        })?;

        Ok(())
    }

    fn render_text_area(&self, f: &mut Frame, area: Rect, workspace: &mut Workspace) {
        let height = area.height as usize;
        let Some(buffer) = workspace.active_buffer_mut() else {
            f.render_widget(Paragraph::new("[no buffers]"), area);
            return;
        };
        buffer.scroll_to_cursor(height);

        let scroll = buffer.scroll();
        let cursor_row = buffer.cursor().row;
        let number_width = if self.show_line_numbers {
            buffer.line_count().to_string().len().max(3)
        } else {
            0
        };

        let mut lines = Vec::with_capacity(height);
        for (offset, text) in buffer.lines().iter().skip(scroll).take(height).enumerate() {
            let row = scroll + offset;
            let style = if row == cursor_row {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            let mut spans = Vec::new();
            if self.show_line_numbers {
                spans.push(Span::styled(
                    format!("{:>width$} ", row + 1, width = number_width),
                    Style::default().add_modifier(Modifier::DIM),
                ));
            }
            spans.push(Span::styled(text.clone(), style));
            lines.push(Line::from(spans));
        }

        f.render_widget(Paragraph::new(lines), area);
    }

    fn render_status_line(
        &self,
        f: &mut Frame,
        area: Rect,
        workspace: &Workspace,
        registry: &NavigatorRegistry,
    ) {
        let status = match workspace.active_buffer() {
            Some(buffer) => {
                let cursor = buffer.cursor();
                let trail = workspace
                    .active_id()
                    .and_then(|id| registry.get(id))
                    .map(|navigator| {
                        let timeline = navigator.timeline();
                        match timeline.index() {
                            Some(index) => format!("trail {}/{}", index + 1, timeline.len()),
                            None => "trail -".to_string(),
                        }
                    })
                    .unwrap_or_else(|| "trail -".to_string());
                format!(
                    " {} [{}/{}] | {}:{} | {}",
                    buffer.name(),
                    workspace.active_index() + 1,
                    workspace.buffer_count(),
                    cursor.row + 1,
                    cursor.column + 1,
                    trail,
                )
            }
            None => " [no buffers]".to_string(),
        };

        let paragraph =
            Paragraph::new(status).style(Style::default().add_modifier(Modifier::REVERSED));
        f.render_widget(paragraph, area);
    }

    fn render_message_line(&self, f: &mut Frame, area: Rect) {
        let content = match &self.message {
            Some(message) => Line::from(message.as_str()),
            None => Line::from(""),
        };
        f.render_widget(Paragraph::new(content), area);
    }
}
