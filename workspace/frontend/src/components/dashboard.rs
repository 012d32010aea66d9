mod bank_modal;
mod bank_table;
mod user_modal;
mod user_table;
mod view;

pub use view::Dashboard;
