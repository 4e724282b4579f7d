//! Reusable UI components

pub mod button_bar_component;
pub mod chart_component;
pub mod context_menu_component;
pub mod dialog_component;
pub mod dialogs;
pub mod tag_list_component;

pub use button_bar_component::ButtonBarComponent;
pub use chart_component::ChartComponent;
pub use context_menu_component::ContextMenuComponent;
pub use dialog_component::DialogComponent;
pub use tag_list_component::TagListComponent;
