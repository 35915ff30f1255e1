//! UI Components
//!
//! Leptos adapters over the controller and view model.

mod delete_confirm_button;
mod employee_form;
mod employees_tab;
mod notification_toast;
mod record_list;
mod tab_bar;
mod task_form;
mod tasks_tab;

pub use delete_confirm_button::DeleteConfirmButton;
pub use employee_form::EmployeeForm;
pub use employees_tab::EmployeesTab;
pub use notification_toast::NotificationToast;
pub use record_list::RecordList;
pub use tab_bar::TabBar;
pub use task_form::TaskForm;
pub use tasks_tab::TasksTab;
