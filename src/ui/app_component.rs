use crate::config::UiConfig;
use crate::constants::{
    APP_TITLE, ERROR_DISCIPLINE_DELETE_FAILED, ERROR_LOAD_FAILED, ERROR_TAG_DELETE_FAILED, WARNING_SELECT_TAG,
};
use crate::discipline::{Discipline, DisciplineCounts};
use crate::logger::Logger;
use crate::storage::{StoreError, TagStore};
use crate::ui::components::{
    ButtonBarComponent, ChartComponent, ContextMenuComponent, DialogComponent, TagListComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, PendingDeletion},
    event_handler::EventType,
    Component,
};
use crate::ui::layout::{AppLayout, LayoutManager};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sea_orm::DbErr;

/// Application state separate from UI concerns
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub tag_count: usize,
    pub counts: DisciplineCounts,
    pub error_message: Option<String>,
    pub info_message: Option<String>,
}

impl AppState {
    /// Clear any transient messages
    pub fn clear_messages(&mut self) {
        self.error_message = None;
        self.info_message = None;
    }
}

/// The tag manager: owns the store and every UI component, and runs the
/// delete workflows.
///
/// Each workflow moves `Idle -> prompt/selection -> confirmation -> delete ->
/// refresh -> Idle`. A failed precondition (no selection, unknown discipline,
/// declined confirmation) goes straight back to idle without touching the store.
pub struct AppComponent {
    // Component composition
    tag_list: TagListComponent,
    chart: ChartComponent,
    context_menu: ContextMenuComponent,
    button_bar: ButtonBarComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,

    // Services
    store: TagStore,
    logger: Logger,

    // Simple UI state
    ui_config: UiConfig,
    layout: AppLayout,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(store: TagStore, ui_config: UiConfig, logger: Logger) -> Self {
        Self {
            tag_list: TagListComponent::new(),
            chart: ChartComponent::new(),
            context_menu: ContextMenuComponent::new(),
            button_bar: ButtonBarComponent::new(),
            dialog: DialogComponent::new(logger.clone()),
            state: AppState::default(),
            store,
            logger,
            ui_config,
            layout: AppLayout::default(),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn store(&self) -> &TagStore {
        &self.store
    }

    pub fn tag_list(&self) -> &TagListComponent {
        &self.tag_list
    }

    pub fn tag_list_mut(&mut self) -> &mut TagListComponent {
        &mut self.tag_list
    }

    pub fn chart(&self) -> &ChartComponent {
        &self.chart
    }

    pub fn dialog(&self) -> &DialogComponent {
        &self.dialog
    }

    pub fn context_menu(&self) -> &ContextMenuComponent {
        &self.context_menu
    }

    /// Release the store. Call exactly once when the application exits.
    pub async fn shutdown(self) -> Result<()> {
        self.logger.log("AppComponent: Shutting down".to_string());
        self.store.close().await
    }

    /// Initial load of tags and chart; failures are reported in an error dialog
    pub async fn load(&mut self) {
        self.logger.log("AppComponent: Loading tags".to_string());
        self.dispatch(Action::RefreshTags).await;
    }

    /// Replace the list contents with the store's rows. Clears the selection.
    pub async fn load_tags(&mut self) -> Result<()> {
        let tags = self.store.get_all_tags().await?;
        self.logger.log(format!("Tags: Loaded {} tags", tags.len()));
        self.state.tag_count = tags.len();
        self.tag_list.set_tags(tags);
        Ok(())
    }

    /// Recompute the completeness chart from the store
    pub async fn recompute_chart(&mut self) -> Result<()> {
        let counts = self.store.discipline_counts().await?;
        self.logger.log(format!(
            "Chart: {} tags across {}/{} disciplines",
            counts.total(),
            counts.covered(),
            Discipline::ALL.len()
        ));
        self.state.counts = counts;
        self.chart.recompute(counts);
        Ok(())
    }

    async fn refresh(&mut self) -> Result<()> {
        self.load_tags().await?;
        self.recompute_chart().await
    }

    /// Run an action and every follow-up action it produces
    pub async fn dispatch(&mut self, action: Action) {
        let mut action = action;
        while action != Action::None {
            action = self.handle_app_action(action).await;
            action = self.update(action);
        }
    }

    /// Process an input event through the component hierarchy
    pub async fn handle_event(&mut self, event_type: EventType) {
        let action = match event_type {
            EventType::Key(key) => {
                if self.dialog.is_visible() {
                    // Dialog has priority when visible
                    self.dialog.handle_key_events(key)
                } else if self.context_menu.is_open() {
                    self.context_menu.handle_key_events(key)
                } else {
                    let list_action = self.tag_list.handle_key_events(key);
                    if list_action != Action::None {
                        list_action
                    } else {
                        self.handle_global_key(key)
                    }
                }
            }
            EventType::Mouse(mouse) => self.route_mouse(mouse),
            EventType::Resize(_, _) | EventType::Tick | EventType::Other => Action::None,
        };

        self.dispatch(action).await;
    }

    fn route_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !self.ui_config.mouse_enabled || self.dialog.is_visible() {
            return Action::None;
        }

        if self.context_menu.is_open() {
            self.context_menu.handle_mouse(mouse)
        } else if LayoutManager::contains(self.layout.buttons, mouse.column, mouse.row) {
            self.button_bar.handle_mouse(mouse)
        } else {
            self.tag_list.handle_mouse(mouse)
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('d') => Action::DeleteSelectedTag,
            KeyCode::Char('D') => Action::PromptDisciplineDeletion,
            KeyCode::Char('r') => Action::RefreshTags,
            KeyCode::Char('?') | KeyCode::Char('h') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            _ => Action::None,
        }
    }

    /// Handle app-level actions that require business logic
    pub async fn handle_app_action(&mut self, action: Action) -> Action {
        match action {
            Action::Quit => {
                self.should_quit = true;
                Action::None
            }
            Action::RefreshTags => match self.refresh().await {
                Ok(()) => {
                    self.state.clear_messages();
                    Action::None
                }
                Err(e) => self.error_dialog(ERROR_LOAD_FAILED, &e),
            },
            Action::DeleteSelectedTag => match self.tag_list.selected_tag() {
                None => {
                    self.logger.log("Delete tag: no tag selected".to_string());
                    Action::ShowDialog(DialogType::Warning(WARNING_SELECT_TAG.to_string()))
                }
                Some(full_tag) => {
                    self.logger.log(format!("Delete tag: asking to confirm '{}'", full_tag));
                    self.confirmation(PendingDeletion::Tag(full_tag))
                }
            },
            Action::PromptDisciplineDeletion => {
                self.logger.log("Delete by discipline: prompting for discipline".to_string());
                Action::ShowDialog(DialogType::DisciplinePrompt)
            }
            Action::SubmitDiscipline(input) => match input.parse::<Discipline>() {
                Ok(discipline) => {
                    self.logger
                        .log(format!("Delete by discipline: asking to confirm {}", discipline));
                    self.confirmation(PendingDeletion::Discipline(discipline))
                }
                Err(e) => {
                    // Unrecognized or empty input is a silent no-op
                    self.logger.log(format!("Delete by discipline: ignored. {}", e));
                    Action::None
                }
            },
            Action::ConfirmDeletion(pending) => self.execute_deletion(pending).await,
            Action::ShowDialog(ref dialog_type) => {
                self.logger.log(format!("Dialog: Showing dialog {:?}", dialog_type));
                action
            }
            Action::HideDialog | Action::OpenContextMenu { .. } => action,
            Action::None => Action::None,
        }
    }

    fn confirmation(&self, pending: PendingDeletion) -> Action {
        Action::ShowDialog(DialogType::Confirmation {
            message: pending.confirmation_message(),
            pending,
        })
    }

    /// Delete, then reload the list and chart, then report
    async fn execute_deletion(&mut self, pending: PendingDeletion) -> Action {
        self.logger.log(format!("Delete: confirmed {:?}", pending));

        let result = match &pending {
            PendingDeletion::Tag(full_tag) => self.store.delete_by_full_tag(full_tag).await,
            PendingDeletion::Discipline(discipline) => self.store.delete_by_discipline(*discipline).await,
        };

        let deleted = match result {
            Ok(deleted) => deleted,
            Err(e) => {
                let context = match pending {
                    PendingDeletion::Tag(_) => ERROR_TAG_DELETE_FAILED,
                    PendingDeletion::Discipline(_) => ERROR_DISCIPLINE_DELETE_FAILED,
                };
                return self.error_dialog(context, &e);
            }
        };

        if let Err(e) = self.refresh().await {
            return self.error_dialog(ERROR_LOAD_FAILED, &e);
        }

        let message = pending.success_message(deleted);
        self.logger.log(format!("Delete: {}", message));
        self.state.clear_messages();
        self.state.info_message = Some(message.clone());
        Action::ShowDialog(DialogType::Info {
            title: pending.title(),
            message,
        })
    }

    fn error_dialog(&mut self, context: &str, error: &anyhow::Error) -> Action {
        let message = format!("{}: {}", context, error_summary(error));
        log::error!("{}", message);
        self.logger.log(message.clone());
        self.state.error_message = Some(message.clone());
        Action::ShowDialog(DialogType::Error(message))
    }

    fn render_status_bar(&self, f: &mut Frame, rect: Rect) {
        let selected = self.tag_list.selected_tag().unwrap_or_else(|| "none".to_string());

        let mut spans = vec![
            Span::styled(
                format!(" {} ", APP_TITLE),
                Style::default().fg(Color::Black).bg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(" {} tags", self.state.tag_count)),
            Span::styled(" • ", Style::default().fg(Color::Gray)),
            Span::raw(format!("Selected: {}", selected)),
        ];

        if let Some(error) = &self.state.error_message {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
            spans.push(Span::styled(error.clone(), Style::default().fg(Color::Red)));
        } else if let Some(info) = &self.state.info_message {
            spans.push(Span::styled(" • ", Style::default().fg(Color::Gray)));
            spans.push(Span::styled(info.clone(), Style::default().fg(Color::Green)));
        }

        spans.push(Span::styled("  ? help  q quit", Style::default().fg(Color::DarkGray)));

        f.render_widget(Paragraph::new(Line::from(spans)), rect);
    }
}

/// The context chain of `error`, stopping at the first store error.
///
/// `DbErr` and `StoreError` already print their sources, so walking past them
/// repeats the driver message.
fn error_summary(error: &anyhow::Error) -> String {
    let mut parts = Vec::new();
    for cause in error.chain() {
        parts.push(cause.to_string());
        if cause.downcast_ref::<DbErr>().is_some() || cause.downcast_ref::<StoreError>().is_some() {
            break;
        }
    }
    parts.join(": ")
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        // Routing lives in handle_event; this only covers global shortcuts
        self.handle_global_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        // Process through component hierarchy
        let action = self.dialog.update(action);
        let action = self.context_menu.update(action);
        self.tag_list.update(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chart_width = self.ui_config.show_chart.then_some(self.ui_config.chart_width_percent);
        self.layout = LayoutManager::main_layout(rect, chart_width);

        self.tag_list.render(f, self.layout.tag_list);
        if let Some(chart_area) = self.layout.chart {
            self.chart.render(f, chart_area);
        }
        self.button_bar.render(f, self.layout.buttons);
        self.render_status_bar(f, self.layout.status);

        self.context_menu.render(f, rect);

        // Render dialog on top if visible
        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
