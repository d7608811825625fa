pub mod category_chart;
pub mod recent_list;
pub mod summary_cards;

use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;
use crate::hooks::use_summary::use_summary;
use self::category_chart::CategoryChart;
use self::recent_list::RecentList;
use self::summary_cards::SummaryCards;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub on_view_transactions: Callback<()>,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let state = use_summary(&session);

    if state.loading {
        return html! {
            <div class="loading-screen">{"Loading Dashboard..."}</div>
        };
    }

    let on_add = {
        let on_view_transactions = props.on_view_transactions.clone();
        Callback::from(move |_: MouseEvent| on_view_transactions.emit(()))
    };

    html! {
        <div class="dashboard">
            <div class="page-header">
                <h1>{"Dashboard"}</h1>
                <button class="btn btn-primary" onclick={on_add}>
                    {"+ Add Transaction"}
                </button>
            </div>
            if let Some(message) = state.error.clone() {
                <div class="alert alert-error">{message}</div>
            }
            if let Some(summary) = state.summary.clone() {
                <SummaryCards totals={summary.summary.clone()} />
                <div class="dashboard-panels">
                    <div class="panel">
                        <h2>{"Expenses by Category"}</h2>
                        <CategoryChart slices={summary.expense_slices()} />
                    </div>
                    <div class="panel">
                        <h2>{"Recent Transactions"}</h2>
                        <RecentList
                            transactions={state.recent.clone()}
                            on_view_all={props.on_view_transactions.clone()}
                        />
                    </div>
                </div>
            }
        </div>
    }
}
