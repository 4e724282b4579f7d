use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

/// Creates a styled main dialog block
pub fn create_dialog_block<'a>(title: &'a str, theme_color: Color) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(title)
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(theme_color).add_modifier(Modifier::BOLD))
        .style(Style::default().fg(theme_color))
}

/// Creates an input field block with a visual cursor at `cursor_position` (in chars)
pub fn create_input_paragraph<'a>(input_buffer: &str, cursor_position: usize, field_title: &str) -> Paragraph<'a> {
    let cursor_char = "█";
    let byte_pos: usize = input_buffer
        .chars()
        .take(cursor_position)
        .map(|ch| ch.len_utf8())
        .sum();
    let (before, after) = input_buffer.split_at(byte_pos);
    let input_display = format!("{}{}{}", before, cursor_char, after);

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(format!(" {} ", field_title))
        .title_style(Style::default().fg(Color::White))
        .style(Style::default().fg(Color::Gray));

    Paragraph::new(input_display)
        .block(input_block)
        .style(Style::default().fg(Color::White))
}

/// Instruction shortcut definition: (key, color, description)
pub type InstructionShortcut = (&'static str, Color, &'static str);

/// Creates a paragraph with color-coded instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut]) -> Paragraph<'a> {
    let mut instruction_text = Vec::new();
    for (key, color, desc) in instructions {
        instruction_text.push(Span::styled(
            *key,
            Style::default().fg(*color).add_modifier(Modifier::BOLD),
        ));
        instruction_text.push(Span::styled(*desc, Style::default().fg(Color::Gray)));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts used across dialogs
pub mod shortcuts {
    use super::*;

    pub const SEPARATOR: InstructionShortcut = (" • ", Color::Gray, "");
    pub const ESC_CANCEL: InstructionShortcut = ("Esc", Color::Red, " Cancel");
    pub const TAB_CYCLE: InstructionShortcut = ("Tab", Color::Cyan, " Next discipline");
    pub const ENTER_SUBMIT: InstructionShortcut = ("Enter", Color::Green, " OK");
    pub const YES: InstructionShortcut = ("y", Color::Green, " Yes");
    pub const NO: InstructionShortcut = ("n", Color::Red, " No");
    pub const ANY_KEY: InstructionShortcut = ("Any key", Color::Cyan, " Dismiss");
    pub const SCROLL: InstructionShortcut = ("j/k", Color::Cyan, " Scroll");
}
