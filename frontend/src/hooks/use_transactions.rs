use std::cell::RefCell;
use std::rc::Rc;

use gloo::timers::callback::Timeout;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;
use crate::services::api::ApiClient;
use crate::state::filters::{FilterPatch, FilterState};
use crate::state::list::{FetchMode, ListAction, ListState};

/// Quiescence window after the last filter edit before fetching.
const DEBOUNCE_MS: u32 = 500;

pub struct UseTransactionsResult {
    pub filters: FilterState,
    pub list: ListState,
    pub actions: TransactionsActions,
}

#[derive(Clone)]
pub struct TransactionsActions {
    pub update_filters: Callback<FilterPatch>,
    pub load_more: Callback<()>,
    pub delete: Callback<String>,
    /// Fresh page-1 refresh, used after a create or update lands.
    pub refresh: Callback<()>,
}

/// Issue one listing fetch and route its outcome through the reducer. The
/// sequence number lets the reducer drop this completion if a newer reset
/// overtakes it.
fn spawn_fetch(
    api: ApiClient,
    list: UseReducerDispatcher<ListState>,
    on_unauthorized: Callback<()>,
    filters: FilterState,
    page: u32,
    mode: FetchMode,
    seq: u64,
) {
    list.dispatch(ListAction::FetchStarted { seq, mode });
    spawn_local(async move {
        match api.list_transactions(&filters.with_page(page)).await {
            Ok(result) => list.dispatch(ListAction::FetchSucceeded {
                seq,
                mode,
                page,
                result,
            }),
            Err(err) if err.is_unauthorized() => on_unauthorized.emit(()),
            Err(err) => {
                gloo::console::error!("Failed to fetch transactions:", err.to_string());
                list.dispatch(ListAction::FetchFailed {
                    seq,
                    message: err.to_string(),
                });
            }
        }
    });
}

fn next_seq(counter: &Rc<RefCell<u64>>) -> u64 {
    let mut seq = counter.borrow_mut();
    *seq += 1;
    *seq
}

/// Transaction list controller: reconciles the filter store with the
/// fetched window.
///
/// Filter edits are debounced into a single page-1 reset fetch that
/// replaces the window; "load more" appends the next page. Each keystroke
/// cancels and reschedules the pending delayed fetch rather than stacking
/// timers.
#[hook]
pub fn use_transactions(session: &SessionHandle) -> UseTransactionsResult {
    let filters = use_state(FilterState::default);
    let list = use_reducer(ListState::default);
    let seq = use_mut_ref(|| 0u64);

    let api = session.api_client();
    let expire = session.expire.clone();

    // Debounced reset fetch on any filter change (including the first
    // render). The cleanup drops the pending timeout, cancelling it.
    {
        let api = api.clone();
        let dispatcher = list.dispatcher();
        let expire = expire.clone();
        let seq = seq.clone();
        use_effect_with((*filters).clone(), move |filters| {
            let filters = filters.clone();
            let timeout = Timeout::new(DEBOUNCE_MS, move || {
                let seq = next_seq(&seq);
                spawn_fetch(api, dispatcher, expire, filters, 1, FetchMode::Replace, seq);
            });
            move || drop(timeout)
        });
    }

    // Recreated every render so they always read the current filter and
    // window state.
    let update_filters = {
        let filters = filters.clone();
        Callback::from(move |patch: FilterPatch| {
            filters.set(filters.apply(patch));
        })
    };

    let load_more = {
        let api = api.clone();
        let list = list.clone();
        let expire = expire.clone();
        let filters = filters.clone();
        let seq = seq.clone();
        Callback::from(move |_| {
            if !list.can_load_more() {
                return;
            }
            let page = list.page + 1;
            spawn_fetch(
                api.clone(),
                list.dispatcher(),
                expire.clone(),
                (*filters).clone(),
                page,
                FetchMode::Append,
                next_seq(&seq),
            );
        })
    };

    let refresh = {
        let api = api.clone();
        let dispatcher = list.dispatcher();
        let expire = expire.clone();
        let filters = filters.clone();
        let seq = seq.clone();
        Callback::from(move |_| {
            spawn_fetch(
                api.clone(),
                dispatcher.clone(),
                expire.clone(),
                (*filters).clone(),
                1,
                FetchMode::Replace,
                next_seq(&seq),
            );
        })
    };

    let delete = {
        let api = api.clone();
        let dispatcher = list.dispatcher();
        let expire = expire.clone();
        let filters = filters.clone();
        let seq = seq.clone();
        Callback::from(move |id: String| {
            let confirmed = web_sys::window()
                .and_then(|window| {
                    window
                        .confirm_with_message("Are you sure you want to delete this transaction?")
                        .ok()
                })
                .unwrap_or(false);
            if !confirmed {
                return;
            }

            let api = api.clone();
            let dispatcher = dispatcher.clone();
            let expire = expire.clone();
            let filters = (*filters).clone();
            let seq = seq.clone();
            spawn_local(async move {
                match api.delete_transaction(&id).await {
                    // No local splice: re-fetch page 1 fresh.
                    Ok(()) => spawn_fetch(
                        api,
                        dispatcher,
                        expire,
                        filters,
                        1,
                        FetchMode::Replace,
                        next_seq(&seq),
                    ),
                    Err(err) if err.is_unauthorized() => expire.emit(()),
                    Err(err) => {
                        gloo::console::error!("Failed to delete transaction:", err.to_string());
                        dispatcher.dispatch(ListAction::DeleteFailed {
                            message: err.to_string(),
                        });
                    }
                }
            });
        })
    };

    UseTransactionsResult {
        filters: (*filters).clone(),
        list: (*list).clone(),
        actions: TransactionsActions {
            update_filters,
            load_more,
            delete,
            refresh,
        },
    }
}
