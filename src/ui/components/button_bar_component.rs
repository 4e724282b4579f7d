use crate::constants::{BUTTON_DELETE_BY_DISCIPLINE, BUTTON_DELETE_SELECTED};
use crate::ui::layout::LayoutManager;
use crate::ui::core::actions::Action;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

/// Clickable buttons under the tag list: (key, label, action)
const BUTTONS: [(&str, &str, Action); 2] = [
    ("d", BUTTON_DELETE_SELECTED, Action::DeleteSelectedTag),
    ("D", BUTTON_DELETE_BY_DISCIPLINE, Action::PromptDisciplineDeletion),
];

/// Button bar mirroring the keyboard shortcuts for the two delete operations
#[derive(Default)]
pub struct ButtonBarComponent {
    areas: Vec<Rect>,
}

impl ButtonBarComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }

        self.areas
            .iter()
            .zip(BUTTONS.iter())
            .find(|(area, _)| LayoutManager::contains(**area, mouse.column, mouse.row))
            .map(|(_, (_, _, action))| action.clone())
            .unwrap_or(Action::None)
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let constraints: Vec<Constraint> = BUTTONS
            .iter()
            .map(|(key, label, _)| Constraint::Length((key.len() + label.len() + 7) as u16))
            .chain(std::iter::once(Constraint::Min(0)))
            .collect();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .spacing(1)
            .constraints(constraints)
            .split(rect);

        self.areas = chunks.iter().take(BUTTONS.len()).copied().collect();

        for ((key, label, _), area) in BUTTONS.iter().zip(self.areas.iter()) {
            let content = Line::from(vec![
                Span::styled(
                    format!("[{}] ", key),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(*label, Style::default().fg(Color::White)),
            ]);
            let button = Paragraph::new(content).alignment(Alignment::Center).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Gray)),
            );
            f.render_widget(button, *area);
        }
    }
}
