pub mod dashboard;
pub mod login_view;
pub mod navbar;
pub mod register_view;
pub mod transactions;
