use shared::Transaction;
use yew::prelude::*;

use crate::components::dashboard::recent_list::{amount_class, signed_amount_label};
use crate::services::date_utils;
use crate::state::list::ListState;

#[derive(Properties, PartialEq)]
pub struct TransactionListProps {
    pub list: ListState,
    pub on_edit: Callback<Transaction>,
    pub on_delete: Callback<String>,
    pub on_load_more: Callback<()>,
}

#[function_component(TransactionList)]
pub fn transaction_list(props: &TransactionListProps) -> Html {
    let list = &props.list;

    if list.is_empty_idle() {
        return html! {
            <div class="list-empty">{"No transactions found."}</div>
        };
    }

    let on_load_more = {
        let on_load_more = props.on_load_more.clone();
        Callback::from(move |_: MouseEvent| on_load_more.emit(()))
    };

    html! {
        <div class="transaction-list">
            {for list.transactions.iter().map(|transaction| {
                let on_edit = {
                    let on_edit = props.on_edit.clone();
                    let transaction = transaction.clone();
                    Callback::from(move |_: MouseEvent| on_edit.emit(transaction.clone()))
                };
                let on_delete = {
                    let on_delete = props.on_delete.clone();
                    let id = transaction.id.clone();
                    Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
                };
                html! {
                    <div class="transaction-card" key={transaction.id.clone()}>
                        <div class="transaction-main">
                            <h3 class="transaction-title">{&transaction.title}</h3>
                            <span class="transaction-meta">
                                {format!(
                                    "{} \u{2022} {}",
                                    date_utils::format_date_for_display(&transaction.date),
                                    transaction.category.label(),
                                )}
                            </span>
                            if let Some(notes) = transaction.notes.as_ref() {
                                <p class="transaction-notes">{notes}</p>
                            }
                        </div>
                        <div class="transaction-side">
                            <span class={amount_class(transaction)}>
                                {signed_amount_label(transaction)}
                            </span>
                            <div class="transaction-actions">
                                <button class="btn btn-small" onclick={on_edit}>
                                    {"Edit"}
                                </button>
                                <button class="btn btn-small btn-danger" onclick={on_delete}>
                                    {"Delete"}
                                </button>
                            </div>
                        </div>
                    </div>
                }
            })}
            if list.loading {
                <div class="list-loading">{"Loading..."}</div>
            }
            if list.page < list.total_pages {
                <button
                    class="btn btn-secondary btn-block"
                    disabled={list.loading}
                    onclick={on_load_more}
                >
                    {"Load More"}
                </button>
            }
        </div>
    }
}
