use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};
use tagdesk::config::UiConfig;
use sea_orm::{ConnectionTrait, Database};
use tagdesk::constants::{
    ERROR_DISCIPLINE_DELETE_FAILED, ERROR_LOAD_FAILED, ERROR_TAG_DELETE_FAILED, SUCCESS_TAG_DELETED, WARNING_SELECT_TAG,
};
use tagdesk::logger::Logger;
use tagdesk::storage::TagStore;
use tagdesk::ui::core::{Component, DialogType, EventType, PendingDeletion};
use tagdesk::ui::AppComponent;
use tagdesk::Discipline;

async fn seeded_app(ui_config: UiConfig) -> AppComponent {
    let store = TagStore::in_memory().await.unwrap();
    store.insert_tag(Discipline::Mechanical, "M-100").await.unwrap();
    store.insert_tag(Discipline::Electrical, "E-200").await.unwrap();
    store.insert_tag(Discipline::Electrical, "E-201").await.unwrap();

    let mut app = AppComponent::new(store, ui_config, Logger::new());
    app.load().await;
    app
}

async fn press(app: &mut AppComponent, code: KeyCode) {
    app.handle_event(EventType::Key(KeyEvent::new(code, KeyModifiers::NONE)))
        .await;
}

async fn type_text(app: &mut AppComponent, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c)).await;
    }
}

async fn click(app: &mut AppComponent, button: MouseButton, column: u16, row: u16) {
    app.handle_event(EventType::Mouse(MouseEvent {
        kind: MouseEventKind::Down(button),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
    .await;
}

fn draw(app: &mut AppComponent) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|f| app.render(f, f.area())).unwrap();
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn listed_tags(app: &AppComponent) -> Vec<String> {
    app.tag_list().tags.iter().map(|tag| tag.full_tag.clone()).collect()
}

#[tokio::test]
async fn test_load_fills_list_and_chart() {
    let app = seeded_app(UiConfig::default()).await;

    assert_eq!(listed_tags(&app), vec!["E-200", "E-201", "M-100"]);
    assert_eq!(app.tag_list().selected_tag(), None);
    assert_eq!(app.chart().counts().get(Discipline::Electrical), 2);
    assert_eq!(app.chart().counts().get(Discipline::Mechanical), 1);
    assert_eq!(app.state().tag_count, 3);
    assert!(!app.dialog().is_visible());
}

#[tokio::test]
async fn test_delete_without_selection_warns() {
    let mut app = seeded_app(UiConfig::default()).await;

    press(&mut app, KeyCode::Char('d')).await;
    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Warning(WARNING_SELECT_TAG.to_string()))
    );

    // Any key dismisses the warning; nothing was deleted
    press(&mut app, KeyCode::Enter).await;
    assert!(!app.dialog().is_visible());
    assert_eq!(app.store().count_tags().await.unwrap(), 3);
}

#[tokio::test]
async fn test_delete_selected_tag_confirmed() {
    let mut app = seeded_app(UiConfig::default()).await;

    press(&mut app, KeyCode::Char('j')).await;
    press(&mut app, KeyCode::Char('j')).await;
    assert_eq!(app.tag_list().selected_tag().as_deref(), Some("E-201"));

    press(&mut app, KeyCode::Char('d')).await;
    match &app.dialog().dialog_type {
        Some(DialogType::Confirmation { pending, .. }) => {
            assert_eq!(pending, &PendingDeletion::Tag("E-201".to_string()))
        }
        other => panic!("expected confirmation, got {:?}", other),
    }

    press(&mut app, KeyCode::Char('y')).await;
    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Info {
            title: "Delete Tag",
            message: SUCCESS_TAG_DELETED.to_string(),
        })
    );
    assert_eq!(listed_tags(&app), vec!["E-200", "M-100"]);
    assert_eq!(app.tag_list().selected_tag(), None);
    assert_eq!(app.chart().counts().get(Discipline::Electrical), 1);
}

#[tokio::test]
async fn test_declining_keeps_tag() {
    let mut app = seeded_app(UiConfig::default()).await;
    app.tag_list_mut().select(Some(0));

    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('n')).await;
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.dialog().is_visible());
    assert!(!app.should_quit());

    assert_eq!(app.store().count_tags().await.unwrap(), 3);
    assert_eq!(app.tag_list().selected_tag().as_deref(), Some("E-200"));
}

#[tokio::test]
async fn test_delete_by_discipline_confirmed() {
    let mut app = seeded_app(UiConfig::default()).await;

    press(&mut app, KeyCode::Char('D')).await;
    assert_eq!(app.dialog().dialog_type, Some(DialogType::DisciplinePrompt));
    assert_eq!(app.dialog().input_buffer, "Mechanical");

    for _ in 0.."Mechanical".len() {
        press(&mut app, KeyCode::Backspace).await;
    }
    type_text(&mut app, "Electrical").await;
    press(&mut app, KeyCode::Enter).await;

    match &app.dialog().dialog_type {
        Some(DialogType::Confirmation { message, pending }) => {
            assert_eq!(message, "Are you sure you want to delete ALL tags in Electrical discipline?");
            assert_eq!(pending, &PendingDeletion::Discipline(Discipline::Electrical));
        }
        other => panic!("expected confirmation, got {:?}", other),
    }

    press(&mut app, KeyCode::Enter).await;
    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Info {
            title: "Delete Tags",
            message: "Deleted 2 tags in Electrical discipline".to_string(),
        })
    );
    assert_eq!(listed_tags(&app), vec!["M-100"]);
    assert_eq!(app.chart().counts().get(Discipline::Electrical), 0);
    assert_eq!(app.chart().counts().covered(), 1);
}

#[tokio::test]
async fn test_empty_discipline_reports_zero() {
    let mut app = seeded_app(UiConfig::default()).await;

    press(&mut app, KeyCode::Char('D')).await;
    // Mechanical -> Electrical -> Instrumentation
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Tab).await;
    assert_eq!(app.dialog().input_buffer, "Instrumentation");

    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('y')).await;

    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Info {
            title: "Delete Tags",
            message: "Deleted 0 tags in Instrumentation discipline".to_string(),
        })
    );
    assert_eq!(app.store().count_tags().await.unwrap(), 3);
}

#[tokio::test]
async fn test_unknown_discipline_is_ignored() {
    let mut app = seeded_app(UiConfig::default()).await;

    press(&mut app, KeyCode::Char('D')).await;
    for _ in 0.."Mechanical".len() {
        press(&mut app, KeyCode::Backspace).await;
    }
    type_text(&mut app, "Civil").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(!app.dialog().is_visible());

    // Case matters
    press(&mut app, KeyCode::Char('D')).await;
    for _ in 0.."Mechanical".len() {
        press(&mut app, KeyCode::Backspace).await;
    }
    type_text(&mut app, "electrical").await;
    press(&mut app, KeyCode::Enter).await;
    assert!(!app.dialog().is_visible());

    assert_eq!(app.store().count_tags().await.unwrap(), 3);
}

#[tokio::test]
async fn test_cancelling_prompt_deletes_nothing() {
    let mut app = seeded_app(UiConfig::default()).await;

    press(&mut app, KeyCode::Char('D')).await;
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('D')).await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('n')).await;
    assert!(!app.dialog().is_visible());

    assert_eq!(app.store().count_tags().await.unwrap(), 3);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = seeded_app(UiConfig::default()).await;
    press(&mut app, KeyCode::Char('q')).await;
    assert!(app.should_quit());

    let mut app = seeded_app(UiConfig::default()).await;
    press(&mut app, KeyCode::Esc).await;
    assert!(app.should_quit());
    app.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_render_shows_tags_and_chart() {
    let mut app = seeded_app(UiConfig::default()).await;
    let screen = draw(&mut app);

    assert!(screen.contains("Tags (3)"));
    assert!(screen.contains("E-200"));
    assert!(screen.contains("M-100"));
    assert!(screen.contains("Completeness: 2/4 disciplines"));
    assert!(screen.contains("Delete Selected Tag"));
    assert!(screen.contains("Delete by Discipline"));
}

#[tokio::test]
async fn test_render_without_chart() {
    let ui_config = UiConfig {
        show_chart: false,
        ..UiConfig::default()
    };
    let mut app = seeded_app(ui_config).await;
    let screen = draw(&mut app);

    assert!(screen.contains("E-201"));
    assert!(!screen.contains("Completeness"));
}

#[tokio::test]
async fn test_right_click_context_menu_deletes_row() {
    let mut app = seeded_app(UiConfig::default()).await;
    draw(&mut app);

    // Rows start under the border and header: E-200 at y=2, E-201 at y=3
    click(&mut app, MouseButton::Right, 5, 3).await;
    assert_eq!(app.tag_list().selected_tag().as_deref(), Some("E-201"));
    assert!(app.context_menu().is_open());

    draw(&mut app);
    click(&mut app, MouseButton::Left, 8, 4).await;
    assert!(!app.context_menu().is_open());
    match &app.dialog().dialog_type {
        Some(DialogType::Confirmation { pending, .. }) => {
            assert_eq!(pending, &PendingDeletion::Tag("E-201".to_string()))
        }
        other => panic!("expected confirmation, got {:?}", other),
    }

    press(&mut app, KeyCode::Char('y')).await;
    assert_eq!(listed_tags(&app), vec!["E-200", "M-100"]);
}

#[tokio::test]
async fn test_clicking_outside_menu_closes_it() {
    let mut app = seeded_app(UiConfig::default()).await;
    draw(&mut app);

    click(&mut app, MouseButton::Right, 5, 2).await;
    draw(&mut app);
    click(&mut app, MouseButton::Left, 50, 15).await;

    assert!(!app.context_menu().is_open());
    assert!(!app.dialog().is_visible());
}

#[tokio::test]
async fn test_button_bar_click() {
    let mut app = seeded_app(UiConfig::default()).await;
    draw(&mut app);

    // The button bar sits above the status line: rows 26..29 on a 30-row screen
    click(&mut app, MouseButton::Left, 5, 27).await;
    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Warning(WARNING_SELECT_TAG.to_string()))
    );
    press(&mut app, KeyCode::Esc).await;

    click(&mut app, MouseButton::Left, 35, 27).await;
    assert_eq!(app.dialog().dialog_type, Some(DialogType::DisciplinePrompt));
}

#[tokio::test]
async fn test_mouse_ignored_when_disabled() {
    let ui_config = UiConfig {
        mouse_enabled: false,
        ..UiConfig::default()
    };
    let mut app = seeded_app(ui_config).await;
    draw(&mut app);

    click(&mut app, MouseButton::Right, 5, 3).await;
    assert!(!app.context_menu().is_open());
    assert_eq!(app.tag_list().selected_tag(), None);
}

#[tokio::test]
async fn test_refresh_picks_up_external_changes() {
    let mut app = seeded_app(UiConfig::default()).await;
    app.store().insert_tag(Discipline::Process, "P-400").await.unwrap();

    press(&mut app, KeyCode::Char('r')).await;
    assert_eq!(listed_tags(&app), vec!["E-200", "E-201", "M-100", "P-400"]);
    assert_eq!(app.chart().counts().covered(), 3);
}

#[tokio::test]
async fn test_delete_tag_then_whole_discipline() {
    let mut app = seeded_app(UiConfig::default()).await;

    assert!(app.tag_list_mut().select_full_tag("M-100"));
    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('y')).await;
    press(&mut app, KeyCode::Enter).await;
    assert_eq!(listed_tags(&app), vec!["E-200", "E-201"]);

    press(&mut app, KeyCode::Char('D')).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('y')).await;

    assert_eq!(
        app.dialog().dialog_type,
        Some(DialogType::Info {
            title: "Delete Tags",
            message: "Deleted 2 tags in Electrical discipline".to_string(),
        })
    );
    assert!(listed_tags(&app).is_empty());
    assert_eq!(app.store().count_tags().await.unwrap(), 0);
    assert_eq!(app.chart().counts().covered(), 0);
}

fn error_message(app: &AppComponent) -> String {
    match &app.dialog().dialog_type {
        Some(DialogType::Error(message)) => message.clone(),
        other => panic!("expected error dialog, got {:?}", other),
    }
}

#[tokio::test]
async fn test_store_failure_shows_error_and_recovers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tags_database.db");

    let store = TagStore::open(&path).await.unwrap();
    store.insert_tag(Discipline::Mechanical, "M-100").await.unwrap();
    store.insert_tag(Discipline::Electrical, "E-200").await.unwrap();
    let mut app = AppComponent::new(store, UiConfig::default(), Logger::new());
    app.load().await;

    // Break the table under the running app through a second connection
    let other = Database::connect(format!("sqlite://{}?mode=rwc", path.display()))
        .await
        .unwrap();
    other.execute_unprepared("DROP TABLE tags").await.unwrap();

    assert!(app.tag_list_mut().select_full_tag("M-100"));
    press(&mut app, KeyCode::Char('d')).await;
    press(&mut app, KeyCode::Char('y')).await;

    let message = error_message(&app);
    assert!(message.starts_with(ERROR_TAG_DELETE_FAILED), "{message}");
    assert_eq!(message.matches("no such table").count(), 1, "{message}");
    assert_eq!(app.state().error_message.as_deref(), Some(message.as_str()));
    assert_eq!(app.state().info_message, None);

    // Dismissing the error does not bring up a success message
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.dialog().is_visible());

    press(&mut app, KeyCode::Char('D')).await;
    press(&mut app, KeyCode::Tab).await;
    press(&mut app, KeyCode::Enter).await;
    press(&mut app, KeyCode::Char('y')).await;

    let message = error_message(&app);
    assert!(message.starts_with(ERROR_DISCIPLINE_DELETE_FAILED), "{message}");
    press(&mut app, KeyCode::Esc).await;
    assert!(!app.dialog().is_visible());

    // Reloading fails the same way while the table is missing
    press(&mut app, KeyCode::Char('r')).await;
    assert!(error_message(&app).starts_with(ERROR_LOAD_FAILED));
    press(&mut app, KeyCode::Esc).await;

    other
        .execute_unprepared(
            "CREATE TABLE tags (id INTEGER PRIMARY KEY AUTOINCREMENT, discipline TEXT NOT NULL, full_tag TEXT NOT NULL)",
        )
        .await
        .unwrap();
    other.close().await.unwrap();

    // A successful reload clears the stale status-bar error
    press(&mut app, KeyCode::Char('r')).await;
    assert!(!app.dialog().is_visible());
    assert_eq!(app.state().error_message, None);
    assert!(listed_tags(&app).is_empty());
    assert_eq!(app.chart().counts().total(), 0);

    app.shutdown().await.unwrap();
}
