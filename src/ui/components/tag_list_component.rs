use crate::constants::{LIST_COLUMN_DISCIPLINE, LIST_COLUMN_TAG};
use crate::entities::tag;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
    Frame,
};

/// Rows taken by the top border and the column header
const TABLE_HEADER_ROWS: u16 = 2;

/// Single-selection list of tags showing discipline and full tag.
pub struct TagListComponent {
    pub tags: Vec<tag::Model>,
    pub table_state: TableState,
    area: Rect,
}

impl Default for TagListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl TagListComponent {
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            table_state: TableState::default(),
            area: Rect::default(),
        }
    }

    /// Replace the displayed tags. Any previous selection is cleared.
    pub fn set_tags(&mut self, tags: Vec<tag::Model>) {
        self.tags = tags;
        self.table_state = TableState::default();
    }

    /// Full tag of the selected row
    pub fn selected_tag(&self) -> Option<String> {
        self.table_state
            .selected()
            .and_then(|index| self.tags.get(index))
            .map(|tag| tag.full_tag.clone())
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.table_state.selected().filter(|index| *index < self.tags.len())
    }

    /// Select a row by index; out-of-range indices clear the selection
    pub fn select(&mut self, index: Option<usize>) {
        self.table_state.select(index.filter(|i| *i < self.tags.len()));
    }

    /// Select the first row with this full tag. Returns whether one was found.
    pub fn select_full_tag(&mut self, full_tag: &str) -> bool {
        let index = self.tags.iter().position(|tag| tag.full_tag == full_tag);
        self.select(index);
        index.is_some()
    }

    fn next(&mut self) {
        if self.tags.is_empty() {
            return;
        }
        let next = match self.table_state.selected() {
            Some(index) => (index + 1).min(self.tags.len() - 1),
            None => 0,
        };
        self.table_state.select(Some(next));
    }

    fn previous(&mut self) {
        if self.tags.is_empty() {
            return;
        }
        let previous = match self.table_state.selected() {
            Some(index) => index.saturating_sub(1),
            None => 0,
        };
        self.table_state.select(Some(previous));
    }

    /// Index of the tag drawn on terminal row `row`, if any
    fn row_at(&self, row: u16) -> Option<usize> {
        let first_row = self.area.y + TABLE_HEADER_ROWS;
        let last_row = (self.area.y + self.area.height).saturating_sub(1);
        if row < first_row || row >= last_row {
            return None;
        }
        let index = self.table_state.offset() + (row - first_row) as usize;
        (index < self.tags.len()).then_some(index)
    }

    /// Screen position for a keyboard-opened context menu
    fn menu_anchor(&self) -> (u16, u16) {
        let visible = self
            .selected_index()
            .map(|index| index.saturating_sub(self.table_state.offset()) as u16)
            .unwrap_or(0);
        (self.area.x + 2, self.area.y + TABLE_HEADER_ROWS + visible)
    }

    /// Handle mouse events inside the list area
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !crate::ui::layout::LayoutManager::contains(self.area, mouse.column, mouse.row) {
            return Action::None;
        }

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = self.row_at(mouse.row) {
                    self.table_state.select(Some(index));
                }
                Action::None
            }
            MouseEventKind::Down(MouseButton::Right) => {
                // Right-clicking a row selects it before the menu opens
                if let Some(index) = self.row_at(mouse.row) {
                    self.table_state.select(Some(index));
                }
                Action::OpenContextMenu {
                    column: mouse.column,
                    row: mouse.row,
                }
            }
            MouseEventKind::ScrollDown => {
                self.next();
                Action::None
            }
            MouseEventKind::ScrollUp => {
                self.previous();
                Action::None
            }
            _ => Action::None,
        }
    }
}

impl Component for TagListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Home => {
                if !self.tags.is_empty() {
                    self.table_state.select(Some(0));
                }
                Action::None
            }
            KeyCode::End => {
                if !self.tags.is_empty() {
                    self.table_state.select(Some(self.tags.len() - 1));
                }
                Action::None
            }
            KeyCode::Char('m') => {
                let (column, row) = self.menu_anchor();
                Action::OpenContextMenu { column, row }
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.area = rect;

        let header = Row::new(vec![LIST_COLUMN_DISCIPLINE, LIST_COLUMN_TAG])
            .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD));

        let rows = self
            .tags
            .iter()
            .map(|tag| Row::new(vec![tag.discipline.clone(), tag.full_tag.clone()]));

        let title = format!("Tags ({})", self.tags.len());
        let table = Table::new(rows, [Constraint::Length(17), Constraint::Min(10)])
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(title))
            .row_highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD))
            .highlight_symbol("> ");

        f.render_stateful_widget(table, rect, &mut self.table_state);
    }
}
