use std::rc::Rc;

use shared::{Transaction, TransactionPage};
use yew::prelude::*;

/// Whether a completed fetch replaces the visible window or extends it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchMode {
    Replace,
    Append,
}

/// Events produced by the transaction list controller.
///
/// Every fetch carries a sequence number handed out by the controller in
/// issue order. The reducer uses it to discard completions that were
/// overtaken by a newer reset, so a slow page-1 refresh can never be
/// clobbered by an older in-flight append (or the other way round).
#[derive(Debug, Clone, PartialEq)]
pub enum ListAction {
    FetchStarted {
        seq: u64,
        mode: FetchMode,
    },
    FetchSucceeded {
        seq: u64,
        mode: FetchMode,
        page: u32,
        result: TransactionPage,
    },
    FetchFailed {
        seq: u64,
        message: String,
    },
    DeleteFailed {
        message: String,
    },
}

/// In-memory window of the transaction listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState {
    pub transactions: Vec<Transaction>,
    /// Total pages reported by the last applied fetch.
    pub total_pages: u32,
    /// Highest page loaded into the window.
    pub page: u32,
    pub loading: bool,
    pub error: Option<String>,
    /// Sequence number of the newest reset fetch; anything older is stale.
    reset_barrier: u64,
}

impl Default for ListState {
    fn default() -> Self {
        ListState {
            transactions: Vec::new(),
            total_pages: 1,
            page: 1,
            // The first fetch is issued right after mount; starting in the
            // loading state avoids a "no transactions" flash before it lands.
            loading: true,
            error: None,
            reset_barrier: 0,
        }
    }
}

impl ListState {
    /// "Load more" is offered only while further pages exist.
    pub fn can_load_more(&self) -> bool {
        !self.loading && self.page < self.total_pages
    }

    /// True when the empty indicator should be shown instead of the list.
    pub fn is_empty_idle(&self) -> bool {
        self.transactions.is_empty() && !self.loading
    }

    fn is_stale(&self, seq: u64) -> bool {
        seq < self.reset_barrier
    }
}

impl Reducible for ListState {
    type Action = ListAction;

    fn reduce(self: Rc<Self>, action: ListAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ListAction::FetchStarted { seq, mode } => {
                next.loading = true;
                next.error = None;
                if mode == FetchMode::Replace {
                    next.reset_barrier = seq;
                }
            }
            ListAction::FetchSucceeded {
                seq,
                mode,
                page,
                result,
            } => {
                if next.is_stale(seq) {
                    return self;
                }
                next.loading = false;
                next.error = None;
                next.total_pages = result.total_pages;
                match mode {
                    FetchMode::Replace => {
                        next.transactions = result.transactions;
                        next.page = 1;
                    }
                    FetchMode::Append => {
                        next.transactions.extend(result.transactions);
                        next.page = page;
                    }
                }
            }
            ListAction::FetchFailed { seq, message } => {
                if next.is_stale(seq) {
                    return self;
                }
                next.loading = false;
                next.error = Some(message);
            }
            ListAction::DeleteFailed { message } => {
                next.error = Some(message);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn reduce(state: ListState, action: ListAction) -> ListState {
        Rc::new(state).reduce(action).as_ref().clone()
    }

    fn transaction(id: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            title: format!("tx {}", id),
            amount: -5.0,
            category: Category::Food,
            date: "2025-03-14".to_string(),
            notes: None,
        }
    }

    fn page_of(ids: &[&str], total_pages: u32) -> TransactionPage {
        TransactionPage {
            transactions: ids.iter().map(|id| transaction(id)).collect(),
            total_pages,
        }
    }

    fn ids(state: &ListState) -> Vec<&str> {
        state.transactions.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn replace_swaps_the_window_and_append_extends_it() {
        let mut state = ListState::default();
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 1,
                mode: FetchMode::Replace,
            },
        );
        assert!(state.loading);

        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 1,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["a", "b"], 3),
            },
        );
        assert_eq!(ids(&state), vec!["a", "b"]);
        assert_eq!(state.page, 1);
        assert!(!state.loading);

        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 2,
                mode: FetchMode::Append,
            },
        );
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 2,
                mode: FetchMode::Append,
                page: 2,
                result: page_of(&["c", "d"], 3),
            },
        );
        assert_eq!(ids(&state), vec!["a", "b", "c", "d"]);
        assert_eq!(state.page, 2);
        assert!(state.can_load_more());
    }

    #[test]
    fn load_more_stops_at_the_last_page() {
        let mut state = ListState::default();
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 1,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["a"], 1),
            },
        );
        assert!(!state.can_load_more());
    }

    #[test]
    fn a_stale_append_never_overwrites_a_newer_reset() {
        let mut state = ListState::default();
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 1,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["a"], 2),
            },
        );

        // Append for page 2 goes out (seq 2), then a filter change issues a
        // reset (seq 3) which lands first.
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 2,
                mode: FetchMode::Append,
            },
        );
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 3,
                mode: FetchMode::Replace,
            },
        );
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 3,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["x"], 1),
            },
        );
        assert_eq!(ids(&state), vec!["x"]);

        // The slow append finally lands and must be dropped.
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 2,
                mode: FetchMode::Append,
                page: 2,
                result: page_of(&["b"], 2),
            },
        );
        assert_eq!(ids(&state), vec!["x"]);
        assert_eq!(state.page, 1);
    }

    #[test]
    fn a_stale_reset_does_not_overwrite_a_newer_one() {
        let mut state = ListState::default();
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 1,
                mode: FetchMode::Replace,
            },
        );
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 2,
                mode: FetchMode::Replace,
            },
        );
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 2,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["new"], 1),
            },
        );
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 1,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["old"], 5),
            },
        );
        assert_eq!(ids(&state), vec!["new"]);
        assert_eq!(state.total_pages, 1);
    }

    #[test]
    fn a_stale_completion_does_not_end_the_newer_fetch_loading_state() {
        let mut state = ListState::default();
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 1,
                mode: FetchMode::Append,
            },
        );
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 2,
                mode: FetchMode::Replace,
            },
        );
        state = reduce(
            state,
            ListAction::FetchFailed {
                seq: 1,
                message: "timeout".to_string(),
            },
        );
        // The reset (seq 2) is still in flight.
        assert!(state.loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn failures_keep_the_window_and_surface_the_message() {
        let mut state = ListState::default();
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 1,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["a"], 1),
            },
        );
        state = reduce(
            state,
            ListAction::FetchStarted {
                seq: 2,
                mode: FetchMode::Replace,
            },
        );
        state = reduce(
            state,
            ListAction::FetchFailed {
                seq: 2,
                message: "Network error: timeout".to_string(),
            },
        );
        assert_eq!(ids(&state), vec!["a"]);
        assert_eq!(state.error.as_deref(), Some("Network error: timeout"));
        assert!(!state.loading);
    }

    #[test]
    fn delete_failure_reports_without_touching_the_list() {
        let mut state = ListState::default();
        state = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 1,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&["a", "b"], 1),
            },
        );

        // Deleting an id that is already gone server-side fails cleanly.
        state = reduce(
            state,
            ListAction::DeleteFailed {
                message: "Transaction not found".to_string(),
            },
        );
        assert_eq!(ids(&state), vec!["a", "b"]);
        assert_eq!(state.error.as_deref(), Some("Transaction not found"));
    }

    #[test]
    fn the_initial_state_counts_as_loading_not_empty() {
        let state = ListState::default();
        assert!(!state.is_empty_idle());

        let settled = reduce(
            state,
            ListAction::FetchSucceeded {
                seq: 1,
                mode: FetchMode::Replace,
                page: 1,
                result: page_of(&[], 1),
            },
        );
        assert!(settled.is_empty_idle());
    }
}
