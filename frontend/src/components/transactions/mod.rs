pub mod filter_bar;
pub mod transaction_form_modal;
pub mod transaction_list;

use shared::Transaction;
use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;
use crate::hooks::use_transactions::use_transactions;
use self::filter_bar::FilterBar;
use self::transaction_form_modal::TransactionFormModal;
use self::transaction_list::TransactionList;

/// Transaction page container: owns the filter/list controller and the
/// create-or-edit form state. Children are presentational.
#[function_component(TransactionsView)]
pub fn transactions_view() -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let result = use_transactions(&session);
    let form_open = use_state(|| false);
    let editing = use_state(|| None::<Transaction>);

    let on_add = {
        let form_open = form_open.clone();
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| {
            editing.set(None);
            form_open.set(true);
        })
    };

    let on_edit = {
        let form_open = form_open.clone();
        let editing = editing.clone();
        Callback::from(move |transaction: Transaction| {
            editing.set(Some(transaction));
            form_open.set(true);
        })
    };

    let on_close = {
        let form_open = form_open.clone();
        let editing = editing.clone();
        Callback::from(move |_| {
            form_open.set(false);
            editing.set(None);
        })
    };

    // A saved create or update invalidates the window; re-fetch page 1.
    let on_saved = {
        let refresh = result.actions.refresh.clone();
        Callback::from(move |_| refresh.emit(()))
    };

    html! {
        <div class="transactions-page">
            <div class="page-header">
                <h1>{"Transactions"}</h1>
                <button class="btn btn-primary" onclick={on_add}>
                    {"+ Add New"}
                </button>
            </div>
            <FilterBar
                filters={result.filters.clone()}
                on_change={result.actions.update_filters.clone()}
            />
            if let Some(message) = result.list.error.clone() {
                <div class="alert alert-error">{message}</div>
            }
            <TransactionList
                list={result.list.clone()}
                on_edit={on_edit}
                on_delete={result.actions.delete.clone()}
                on_load_more={result.actions.load_more.clone()}
            />
            if *form_open {
                <TransactionFormModal
                    editing={(*editing).clone()}
                    on_close={on_close}
                    on_saved={on_saved}
                />
            }
        </div>
    }
}
