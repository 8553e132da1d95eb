pub mod edit_window;
pub mod rating;
pub mod store;
