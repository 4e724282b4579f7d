//! Right-click popup menu for the tag list.

use crate::constants::CONTEXT_MENU_DELETE_TAG;
use crate::ui::core::{actions::Action, Component};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const MENU_WIDTH: u16 = 16;
const MENU_HEIGHT: u16 = 3;

/// Popup menu with a single "Delete Tag" entry.
#[derive(Default)]
pub struct ContextMenuComponent {
    position: Option<(u16, u16)>,
    area: Rect,
}

impl ContextMenuComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.position.is_some()
    }

    pub fn open(&mut self, column: u16, row: u16) {
        self.position = Some((column, row));
        self.area = Rect::new(column, row, MENU_WIDTH, MENU_HEIGHT);
    }

    pub fn close(&mut self) {
        self.position = None;
    }

    /// Screen row of the "Delete Tag" entry
    fn entry_row(&self) -> u16 {
        self.area.y + 1
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Down(MouseButton::Right) => {
                let on_entry = LayoutManager::contains(self.area, mouse.column, mouse.row) && mouse.row == self.entry_row();
                self.close();
                if on_entry {
                    Action::DeleteSelectedTag
                } else {
                    Action::None
                }
            }
            _ => Action::None,
        }
    }
}

impl Component for ContextMenuComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char('d') => {
                self.close();
                Action::DeleteSelectedTag
            }
            KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => {
                self.close();
                Action::None
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::OpenContextMenu { column, row } => {
                self.open(column, row);
                Action::None
            }
            _ => action,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some((column, row)) = self.position else {
            return;
        };

        self.area = LayoutManager::popup_at(column, row, MENU_WIDTH, MENU_HEIGHT, rect);
        f.render_widget(Clear, self.area);

        let menu = Paragraph::new(format!(" {}", CONTEXT_MENU_DELETE_TAG))
            .style(Style::default().fg(Color::White).bg(Color::Red).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .style(Style::default().fg(Color::Gray)),
            );
        f.render_widget(menu, self.area);
    }
}
