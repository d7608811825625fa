pub mod use_session;
pub mod use_summary;
pub mod use_transactions;
