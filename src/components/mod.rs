//! UI Components
//!
//! Pages, dialogs and the reusable pieces they are built from.

mod add_resource_dialog;
mod delete_confirm_button;
mod edit_task_dialog;
mod header;
mod log_panel;
mod nav_tab_bar;
mod project_managers;
mod resource_panel;
mod snackbar;
mod task_board;
mod task_detail_dialog;

pub use add_resource_dialog::AddResourceDialog;
pub use delete_confirm_button::DeleteConfirmButton;
pub use edit_task_dialog::EditTaskDialog;
pub use header::Header;
pub use log_panel::LogPanel;
pub use nav_tab_bar::NavTabBar;
pub use project_managers::ProjectManagersPage;
pub use resource_panel::ResourcePanel;
pub use snackbar::Snackbar;
pub use task_board::TaskBoard;
pub use task_detail_dialog::TaskDetailDialog;
