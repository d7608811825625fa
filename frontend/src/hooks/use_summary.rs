use shared::{SummaryResponse, Transaction};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;

/// How many recent transactions the dashboard shows.
const RECENT_LIMIT: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryState {
    pub summary: Option<SummaryResponse>,
    pub recent: Vec<Transaction>,
    pub loading: bool,
    pub error: Option<String>,
}

/// Dashboard data: summary totals plus the most recent transactions,
/// fetched once on mount. This view is static per page load; it does not
/// react to filter changes.
#[hook]
pub fn use_summary(session: &SessionHandle) -> SummaryState {
    let state = use_state(|| SummaryState {
        summary: None,
        recent: Vec::new(),
        loading: true,
        error: None,
    });

    {
        let state = state.clone();
        let api = session.api_client();
        let expire = session.expire.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let summary = api.summary().await;
                let recent = api.recent_transactions(RECENT_LIMIT).await;
                match (summary, recent) {
                    (Ok(summary), Ok(recent)) => state.set(SummaryState {
                        summary: Some(summary),
                        recent: recent.transactions,
                        loading: false,
                        error: None,
                    }),
                    (Err(err), _) | (_, Err(err)) => {
                        if err.is_unauthorized() {
                            expire.emit(());
                            return;
                        }
                        gloo::console::error!(
                            "Failed to fetch dashboard data:",
                            err.to_string()
                        );
                        state.set(SummaryState {
                            summary: None,
                            recent: Vec::new(),
                            loading: false,
                            error: Some(err.to_string()),
                        });
                    }
                }
            });
            || ()
        });
    }

    (*state).clone()
}
