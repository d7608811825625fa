use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed set of transaction categories understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Utilities,
    Health,
    Salary,
    Investment,
    Other,
}

impl Category {
    /// All categories, in the order the filter dropdown lists them.
    pub const ALL: [Category; 9] = [
        Category::Food,
        Category::Transport,
        Category::Entertainment,
        Category::Shopping,
        Category::Utilities,
        Category::Health,
        Category::Salary,
        Category::Investment,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Utilities => "Utilities",
            Category::Health => "Health",
            Category::Salary => "Salary",
            Category::Investment => "Investment",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct CategoryParseError(pub String);

impl FromStr for Category {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| CategoryParseError(s.to_string()))
    }
}

/// Whether a transaction adds to or takes from the balance.
///
/// The wire format has no type field; the sign of `amount` is the
/// discriminator. The client keeps the kind explicit and applies the sign
/// only when serializing (see [`TransactionDraft::validate`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    /// Derive the kind from a signed wire amount.
    pub fn from_amount(amount: f64) -> Self {
        if amount < 0.0 {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        }
    }

    /// Apply this kind's sign convention to an unsigned magnitude.
    pub fn signed(&self, magnitude: f64) -> f64 {
        match self {
            TransactionKind::Income => magnitude.abs(),
            TransactionKind::Expense => -magnitude.abs(),
        }
    }
}

/// A transaction as the backend stores it. Amounts are signed: negative is
/// an expense, positive (or zero) is income.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub amount: f64,
    pub category: Category,
    /// Date string from the backend, either `YYYY-MM-DD` or RFC 3339.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        TransactionKind::from_amount(self.amount)
    }

    /// Unsigned amount, for display and for pre-populating the edit form.
    pub fn magnitude(&self) -> f64 {
        self.amount.abs()
    }
}

/// One page of the transaction listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPage {
    pub transactions: Vec<Transaction>,
    #[serde(rename = "totalPages")]
    pub total_pages: u32,
}

/// Body for `POST /api/transactions` and `PUT /api/transactions/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionPayload {
    pub title: String,
    pub amount: f64,
    pub category: Category,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Identity plus bearer token, returned by login and register.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub token: String,
}

/// Identity only, returned by `GET /api/auth/me`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

impl From<AuthResponse> for UserProfile {
    fn from(auth: AuthResponse) -> Self {
        UserProfile {
            id: auth.id,
            name: auth.name,
            email: auth.email,
        }
    }
}

/// Error body the backend sends with 4xx/5xx responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

/// Aggregate totals. `total_expense` is negative (sum of signed amounts).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryTotals {
    #[serde(rename = "totalIncome")]
    pub total_income: f64,
    #[serde(rename = "totalExpense")]
    pub total_expense: f64,
}

impl SummaryTotals {
    /// Net balance. Expense totals are already negative, so this is a sum.
    pub fn net_balance(&self) -> f64 {
        self.total_income + self.total_expense
    }
}

/// Server-aggregated per-category total of signed amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    #[serde(rename = "_id")]
    pub label: String,
    #[serde(rename = "totalAmount")]
    pub total_amount: f64,
}

/// Response of `GET /api/transactions/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: SummaryTotals,
    #[serde(rename = "categoryBreakdown")]
    pub category_breakdown: Vec<CategoryTotal>,
}

/// One pie slice of the expense chart: a category label and the unsigned
/// total spent on it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseSlice {
    pub label: String,
    pub amount: f64,
}

impl SummaryResponse {
    /// Chart input: expense entries only (strictly negative totals), as
    /// unsigned amounts, in the order the backend returned them.
    pub fn expense_slices(&self) -> Vec<ExpenseSlice> {
        self.category_breakdown
            .iter()
            .filter(|entry| entry.total_amount < 0.0)
            .map(|entry| ExpenseSlice {
                label: entry.label.clone(),
                amount: entry.total_amount.abs(),
            })
            .collect()
    }
}

/// Validation failures for the transaction form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DraftError {
    #[error("Title is required")]
    EmptyTitle,
    #[error("Date is required")]
    EmptyDate,
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Amount is required")]
    EmptyAmount,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount must not be negative")]
    NegativeAmount,
}

/// Working state of the create/edit transaction form.
///
/// The amount is held as the raw input string plus an explicit kind toggle;
/// the signed wire amount is produced only by [`validate`](Self::validate).
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionDraft {
    pub title: String,
    pub amount_input: String,
    pub kind: TransactionKind,
    pub category: Category,
    pub date: String,
    pub notes: String,
}

impl TransactionDraft {
    /// Empty draft for the create flow. `today` is `YYYY-MM-DD`.
    pub fn for_create(today: &str) -> Self {
        TransactionDraft {
            title: String::new(),
            amount_input: String::new(),
            kind: TransactionKind::Expense,
            category: Category::Food,
            date: today.to_string(),
            notes: String::new(),
        }
    }

    /// Draft pre-populated from an existing transaction: unsigned magnitude
    /// in the amount field, kind reconstructed from the sign.
    pub fn for_edit(transaction: &Transaction) -> Self {
        TransactionDraft {
            title: transaction.title.clone(),
            amount_input: format_magnitude(transaction.magnitude()),
            kind: transaction.kind(),
            category: transaction.category,
            date: date_part(&transaction.date).to_string(),
            notes: transaction.notes.clone().unwrap_or_default(),
        }
    }

    /// Check the draft and build the wire payload. The sign of `amount`
    /// comes from the kind toggle, never from the input string.
    pub fn validate(&self) -> Result<TransactionPayload, Vec<DraftError>> {
        let mut errors = Vec::new();

        let title = self.title.trim();
        if title.is_empty() {
            errors.push(DraftError::EmptyTitle);
        }

        let date = self.date.trim();
        if date.is_empty() {
            errors.push(DraftError::EmptyDate);
        } else if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
            errors.push(DraftError::InvalidDate(date.to_string()));
        }

        let amount_input = self.amount_input.trim();
        let mut magnitude = 0.0;
        if amount_input.is_empty() {
            errors.push(DraftError::EmptyAmount);
        } else {
            match amount_input.parse::<f64>() {
                Ok(value) if value < 0.0 => errors.push(DraftError::NegativeAmount),
                Ok(value) if !value.is_finite() => {
                    errors.push(DraftError::InvalidAmount(amount_input.to_string()))
                }
                Ok(value) => magnitude = value,
                Err(_) => errors.push(DraftError::InvalidAmount(amount_input.to_string())),
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        let notes = self.notes.trim();
        Ok(TransactionPayload {
            title: title.to_string(),
            amount: self.kind.signed(magnitude),
            category: self.category,
            date: date.to_string(),
            notes: if notes.is_empty() {
                None
            } else {
                Some(notes.to_string())
            },
        })
    }
}

/// `YYYY-MM-DD` part of a backend date string (RFC 3339 or already bare).
pub fn date_part(date: &str) -> &str {
    date.split('T').next().unwrap_or(date)
}

/// Render a magnitude the way the amount input expects it: cents when they
/// matter, no sign, no trailing ".00".
pub fn format_magnitude(magnitude: f64) -> String {
    let rendered = format!("{:.2}", magnitude.abs());
    match rendered.strip_suffix(".00") {
        Some(whole) => whole.to_string(),
        None => rendered,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(amount: f64) -> Transaction {
        Transaction {
            id: "64f0c0ffee".to_string(),
            title: "Groceries".to_string(),
            amount,
            category: Category::Food,
            date: "2025-03-14T00:00:00.000Z".to_string(),
            notes: None,
        }
    }

    #[test]
    fn kind_follows_sign() {
        assert_eq!(transaction(-12.5).kind(), TransactionKind::Expense);
        assert_eq!(transaction(12.5).kind(), TransactionKind::Income);
        // Zero counts as income, matching the backend's `amount < 0` check.
        assert_eq!(transaction(0.0).kind(), TransactionKind::Income);
    }

    #[test]
    fn signed_applies_the_toggle_not_the_input_sign() {
        assert_eq!(TransactionKind::Expense.signed(42.5), -42.5);
        assert_eq!(TransactionKind::Income.signed(42.5), 42.5);
        // Magnitude is treated as unsigned even if a sign sneaks in.
        assert_eq!(TransactionKind::Expense.signed(-42.5), -42.5);
        assert_eq!(TransactionKind::Income.signed(-42.5), 42.5);
    }

    #[test]
    fn expense_draft_round_trips_through_the_wire_amount() {
        let mut draft = TransactionDraft::for_create("2025-03-14");
        draft.title = "Dinner".to_string();
        draft.amount_input = "42.50".to_string();
        draft.kind = TransactionKind::Expense;

        let payload = draft.validate().unwrap();
        assert_eq!(payload.amount, -42.5);

        let stored = Transaction {
            id: "abc".to_string(),
            title: payload.title,
            amount: payload.amount,
            category: payload.category,
            date: payload.date,
            notes: payload.notes,
        };
        let reopened = TransactionDraft::for_edit(&stored);
        assert_eq!(reopened.amount_input, "42.50");
        assert_eq!(reopened.kind, TransactionKind::Expense);
    }

    #[test]
    fn for_edit_strips_the_time_part_of_rfc3339_dates() {
        let draft = TransactionDraft::for_edit(&transaction(-3.0));
        assert_eq!(draft.date, "2025-03-14");
    }

    #[test]
    fn validate_collects_every_missing_field() {
        let draft = TransactionDraft {
            title: "  ".to_string(),
            amount_input: String::new(),
            kind: TransactionKind::Income,
            category: Category::Other,
            date: String::new(),
            notes: String::new(),
        };
        let errors = draft.validate().unwrap_err();
        assert!(errors.contains(&DraftError::EmptyTitle));
        assert!(errors.contains(&DraftError::EmptyDate));
        assert!(errors.contains(&DraftError::EmptyAmount));
    }

    #[test]
    fn validate_rejects_bad_amounts_and_dates() {
        let mut draft = TransactionDraft::for_create("2025-03-14");
        draft.title = "Test".to_string();
        draft.amount_input = "12,50".to_string();
        assert!(matches!(
            draft.validate().unwrap_err().as_slice(),
            [DraftError::InvalidAmount(_)]
        ));

        draft.amount_input = "-5".to_string();
        assert!(matches!(
            draft.validate().unwrap_err().as_slice(),
            [DraftError::NegativeAmount]
        ));

        draft.amount_input = "5".to_string();
        draft.date = "14/03/2025".to_string();
        assert!(matches!(
            draft.validate().unwrap_err().as_slice(),
            [DraftError::InvalidDate(_)]
        ));
    }

    #[test]
    fn validate_drops_empty_notes() {
        let mut draft = TransactionDraft::for_create("2025-03-14");
        draft.title = "Test".to_string();
        draft.amount_input = "1".to_string();
        draft.notes = "   ".to_string();
        assert_eq!(draft.validate().unwrap().notes, None);

        draft.notes = "paid in cash".to_string();
        assert_eq!(
            draft.validate().unwrap().notes.as_deref(),
            Some("paid in cash")
        );
    }

    #[test]
    fn category_parses_its_own_labels() {
        for category in Category::ALL {
            assert_eq!(category.label().parse::<Category>().unwrap(), category);
        }
        assert!("All".parse::<Category>().is_err());
        assert!("food".parse::<Category>().is_err());
    }

    #[test]
    fn net_balance_sums_signed_totals() {
        let totals = SummaryTotals {
            total_income: 500.0,
            total_expense: -200.0,
        };
        assert_eq!(totals.net_balance(), 300.0);
    }

    #[test]
    fn expense_slices_keep_only_negative_entries_as_magnitudes() {
        let summary = SummaryResponse {
            summary: SummaryTotals {
                total_income: 800.0,
                total_expense: -120.0,
            },
            category_breakdown: vec![
                CategoryTotal {
                    label: "Food".to_string(),
                    total_amount: -120.0,
                },
                CategoryTotal {
                    label: "Salary".to_string(),
                    total_amount: 800.0,
                },
            ],
        };
        let slices = summary.expense_slices();
        assert_eq!(slices.len(), 1);
        assert_eq!(slices[0].label, "Food");
        assert_eq!(slices[0].amount, 120.0);
    }

    #[test]
    fn transaction_page_deserializes_backend_field_names() {
        let json = r#"{
            "transactions": [
                {"_id": "a1", "title": "Lunch", "amount": -9.5,
                 "category": "Food", "date": "2025-03-14", "notes": "deli"}
            ],
            "totalPages": 4
        }"#;
        let page: TransactionPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.transactions[0].id, "a1");
        assert_eq!(page.transactions[0].category, Category::Food);
        assert_eq!(page.transactions[0].notes.as_deref(), Some("deli"));
    }

    #[test]
    fn summary_response_deserializes_backend_field_names() {
        let json = r#"{
            "summary": {"totalIncome": 500.0, "totalExpense": -200.0},
            "categoryBreakdown": [{"_id": "Food", "totalAmount": -120.0}]
        }"#;
        let summary: SummaryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(summary.summary.net_balance(), 300.0);
        assert_eq!(summary.category_breakdown[0].label, "Food");
    }

    #[test]
    fn payload_omits_absent_notes_when_serialized() {
        let payload = TransactionPayload {
            title: "Lunch".to_string(),
            amount: -9.5,
            category: Category::Food,
            date: "2025-03-14".to_string(),
            notes: None,
        };
        let json = serde_json::to_string(&payload).unwrap();
        assert!(!json.contains("notes"));
    }

    #[test]
    fn format_magnitude_keeps_cents_but_not_double_zeros() {
        assert_eq!(format_magnitude(42.5), "42.50");
        assert_eq!(format_magnitude(42.0), "42");
        assert_eq!(format_magnitude(-42.5), "42.50");
    }
}
