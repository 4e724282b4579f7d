use crate::constants::{DIALOG_TITLE_DELETE_TAGS, PROMPT_DISCIPLINE};
use crate::discipline::Discipline;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph},
    Frame,
};

use super::common::{create_dialog_block, create_input_paragraph, create_instructions_paragraph, shortcuts};

/// Free-text discipline prompt, pre-filled with a default discipline
pub fn render_discipline_prompt(f: &mut Frame, area: Rect, input_buffer: &str, cursor_position: usize) {
    let dialog_area = LayoutManager::centered_rect_lines(60, 11, area);
    f.render_widget(Clear, dialog_area);

    let main_block = create_dialog_block(DIALOG_TITLE_DELETE_TAGS, Color::Yellow);

    let inner_area = main_block.inner(dialog_area);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Choices
            Constraint::Length(3), // Input field
            Constraint::Length(1), // Instructions
        ])
        .split(inner_area);

    let choices = Discipline::ALL.iter().map(|d| d.as_str()).collect::<Vec<_>>().join(", ");

    let prompt_paragraph = Paragraph::new(PROMPT_DISCIPLINE).style(Style::default().fg(Color::White));
    let choices_paragraph = Paragraph::new(choices).style(Style::default().fg(Color::Gray));
    let input_paragraph = create_input_paragraph(input_buffer, cursor_position, "Discipline");
    let instructions = create_instructions_paragraph(&[
        shortcuts::ENTER_SUBMIT,
        shortcuts::SEPARATOR,
        shortcuts::TAB_CYCLE,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CANCEL,
    ]);

    f.render_widget(main_block, dialog_area);
    f.render_widget(prompt_paragraph, chunks[0]);
    f.render_widget(choices_paragraph, chunks[1]);
    f.render_widget(input_paragraph, chunks[2]);
    f.render_widget(instructions, chunks[3]);
}
