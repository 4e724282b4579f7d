use crate::constants::{DIALOG_TITLE_CONFIRM_DELETION, DIALOG_TITLE_HELP, DIALOG_TITLE_LOGS};
use crate::logger::Logger;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_instructions_paragraph, shortcuts};
use super::scroll_behavior::DialogScroll;

pub fn render_confirmation_dialog(f: &mut Frame, area: Rect, message: &str) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 7, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(DIALOG_TITLE_CONFIRM_DELETION, Color::Red);
    let inner_area = block.inner(dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner_area);

    let message_paragraph = Paragraph::new(message)
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    let instructions = create_instructions_paragraph(&[
        shortcuts::YES,
        shortcuts::SEPARATOR,
        shortcuts::NO,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(block, dialog_area);
    f.render_widget(message_paragraph, chunks[0]);
    f.render_widget(instructions, chunks[1]);
}

/// Warning, info and error dialogs: a titled, scrollable message
pub fn render_message_dialog(
    f: &mut Frame,
    area: Rect,
    title: &str,
    color: Color,
    message: &str,
    scroll: &mut DialogScroll,
) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 9, area);
    f.render_widget(Clear, dialog_area);

    let block = create_dialog_block(title, color);

    let content_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + 1,
        dialog_area.width.saturating_sub(2),
        dialog_area.height.saturating_sub(4),
    );

    let instructions_area = Rect::new(
        dialog_area.x + 1,
        dialog_area.y + dialog_area.height.saturating_sub(2),
        dialog_area.width.saturating_sub(2),
        1,
    );

    f.render_widget(block, dialog_area);
    render_scrolled_text(f, content_area, message, Alignment::Center, scroll);
    f.render_widget(
        create_instructions_paragraph(&[shortcuts::ANY_KEY, shortcuts::SEPARATOR, shortcuts::SCROLL]),
        instructions_area,
    );
}

pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll: &mut DialogScroll) {
    let help_content = r"
TAGDESK - Engineering Tag Manager
=================================

NAVIGATION
----------
j/k, ↑/↓    Move the selection down/up
Home/End    Jump to first/last tag
Click       Select a tag
Right-click Open the tag context menu
m           Open the context menu for the selected tag

DELETING TAGS
-------------
d           Delete Selected Tag (asks for confirmation)
D           Delete by Discipline (prompt, then confirmation)
Tab         Cycle disciplines in the discipline prompt
y / Enter   Confirm a deletion
n / Esc     Decline a deletion

GENERAL
-------
r           Reload tags and chart from the database
G           Show logs
?  h        Toggle this help
q  Ctrl+C   Quit

DISCIPLINES
-----------
Mechanical, Electrical, Instrumentation, Process

The chart on the right shows how many tags each discipline holds.
It is redrawn after every deletion.
";

    let help_area = LayoutManager::centered_rect(80, 80, area);
    f.render_widget(Clear, help_area);
    render_bordered_text(f, help_area, DIALOG_TITLE_HELP, help_content, scroll);
}

pub fn render_logs_dialog(f: &mut Frame, area: Rect, logger: &Logger, scroll: &mut DialogScroll) {
    let logs_area = LayoutManager::centered_rect(90, 90, area);
    f.render_widget(Clear, logs_area);

    let logs = logger.get_logs();
    let logs_content = if logs.is_empty() {
        "No logs available".to_string()
    } else {
        logs.join("\n")
    };

    render_bordered_text(f, logs_area, DIALOG_TITLE_LOGS, &logs_content, scroll);
}

fn render_bordered_text(f: &mut Frame, area: Rect, title: &str, text: &str, scroll: &mut DialogScroll) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::White));
    let inner_area = block.inner(area);

    f.render_widget(block, area);
    render_scrolled_text(f, inner_area, text, Alignment::Left, scroll);
}

fn render_scrolled_text(f: &mut Frame, area: Rect, text: &str, alignment: Alignment, scroll: &mut DialogScroll) {
    let lines: Vec<&str> = text.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height as usize;

    let offset = scroll.clamp_to(total_lines, visible_height);
    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    let paragraph = Paragraph::new(visible_text)
        .style(Style::default().fg(Color::White))
        .alignment(alignment)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);

    if total_lines > visible_height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("▐")
            .style(Style::default().fg(Color::Gray))
            .thumb_style(Style::default().fg(Color::White));

        f.render_stateful_widget(scrollbar, area, &mut scroll.scrollbar_state);
    }
}
