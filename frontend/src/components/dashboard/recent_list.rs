use shared::{Transaction, TransactionKind};
use yew::prelude::*;

use crate::services::date_utils;

#[derive(Properties, PartialEq)]
pub struct RecentListProps {
    pub transactions: Vec<Transaction>,
    pub on_view_all: Callback<()>,
}

/// Signed dollar label: `+$500.00` for income, `-$42.50` for expense.
pub fn signed_amount_label(transaction: &Transaction) -> String {
    match transaction.kind() {
        TransactionKind::Income => format!("+${:.2}", transaction.magnitude()),
        TransactionKind::Expense => format!("-${:.2}", transaction.magnitude()),
    }
}

pub fn amount_class(transaction: &Transaction) -> &'static str {
    match transaction.kind() {
        TransactionKind::Income => "amount positive",
        TransactionKind::Expense => "amount negative",
    }
}

#[function_component(RecentList)]
pub fn recent_list(props: &RecentListProps) -> Html {
    let on_view_all = {
        let on_view_all = props.on_view_all.clone();
        Callback::from(move |_: MouseEvent| on_view_all.emit(()))
    };

    if props.transactions.is_empty() {
        return html! {
            <div class="recent-empty">{"No recent transactions."}</div>
        };
    }

    html! {
        <div class="recent-list">
            <ul>
                {for props.transactions.iter().map(|transaction| html! {
                    <li class="recent-item" key={transaction.id.clone()}>
                        <div class="recent-item-main">
                            <span class="recent-title">{&transaction.title}</span>
                            <span class="recent-meta">
                                {format!(
                                    "{} \u{2022} {}",
                                    date_utils::format_date_for_display(&transaction.date),
                                    transaction.category.label(),
                                )}
                            </span>
                        </div>
                        <span class={amount_class(transaction)}>
                            {signed_amount_label(transaction)}
                        </span>
                    </li>
                })}
            </ul>
            <button class="btn btn-secondary btn-block" onclick={on_view_all}>
                {"View All"}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::Category;

    fn transaction(amount: f64) -> Transaction {
        Transaction {
            id: "t1".to_string(),
            title: "Groceries".to_string(),
            amount,
            category: Category::Food,
            date: "2026-08-01T00:00:00.000Z".to_string(),
            notes: None,
        }
    }

    #[test]
    fn expense_label_carries_minus_and_magnitude() {
        assert_eq!(signed_amount_label(&transaction(-42.5)), "-$42.50");
        assert_eq!(amount_class(&transaction(-42.5)), "amount negative");
    }

    #[test]
    fn income_label_carries_plus() {
        assert_eq!(signed_amount_label(&transaction(500.0)), "+$500.00");
        assert_eq!(amount_class(&transaction(500.0)), "amount positive");
    }
}
