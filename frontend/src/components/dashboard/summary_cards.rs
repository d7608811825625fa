use shared::SummaryTotals;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SummaryCardsProps {
    pub totals: SummaryTotals,
}

/// Signed dollar string for the balance card, e.g. `$-12.50`.
fn format_net(value: f64) -> String {
    format!("${:.2}", value)
}

/// Unsigned dollar string for the income and expense cards.
fn format_magnitude(value: f64) -> String {
    format!("${:.2}", value.abs())
}

#[function_component(SummaryCards)]
pub fn summary_cards(props: &SummaryCardsProps) -> Html {
    let balance = props.totals.net_balance();
    let balance_class = if balance >= 0.0 {
        "summary-value positive"
    } else {
        "summary-value negative"
    };

    html! {
        <div class="summary-cards">
            <div class="summary-card">
                <span class="summary-label">{"Balance"}</span>
                <span class={balance_class}>{format_net(balance)}</span>
            </div>
            <div class="summary-card">
                <span class="summary-label">{"Total Income"}</span>
                <span class="summary-value positive">
                    {format_magnitude(props.totals.total_income)}
                </span>
            </div>
            <div class="summary-card">
                <span class="summary-label">{"Total Expenses"}</span>
                <span class="summary-value negative">
                    {format_magnitude(props.totals.total_expense)}
                </span>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_values_from_signed_totals() {
        let totals = SummaryTotals {
            total_income: 500.0,
            total_expense: -200.0,
        };
        assert_eq!(format_net(totals.net_balance()), "$300.00");
        assert_eq!(format_magnitude(totals.total_income), "$500.00");
        assert_eq!(format_magnitude(totals.total_expense), "$200.00");
    }

    #[test]
    fn negative_balance_keeps_its_sign() {
        let totals = SummaryTotals {
            total_income: 100.0,
            total_expense: -112.5,
        };
        assert_eq!(format_net(totals.net_balance()), "$-12.50");
    }
}
