use shared::Category;

/// Page size is fixed for the session.
pub const PAGE_SIZE: u32 = 10;

/// Category filter for the transaction list: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    One(Category),
}

impl CategoryFilter {
    /// Value sent in the `category` query parameter. The backend treats the
    /// literal `All` as no filter.
    pub fn query_value(&self) -> String {
        match self {
            CategoryFilter::All => "All".to_string(),
            CategoryFilter::One(category) => category.label().to_string(),
        }
    }

    /// Parse the value of the category dropdown. Anything unknown falls
    /// back to `All`.
    pub fn from_select_value(value: &str) -> Self {
        value
            .parse::<Category>()
            .map(CategoryFilter::One)
            .unwrap_or(CategoryFilter::All)
    }
}

/// Filter and pagination state for the transaction list.
///
/// The page cursor lives here so that [`apply`](Self::apply) can enforce the
/// one rule of this store: any filter change resets the cursor to 1,
/// invalidating the accumulated page window.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: CategoryFilter,
    pub start_date: String,
    pub end_date: String,
    pub page: u32,
    pub page_size: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            search: String::new(),
            category: CategoryFilter::All,
            start_date: String::new(),
            end_date: String::new(),
            page: 1,
            page_size: PAGE_SIZE,
        }
    }
}

/// Partial update to the filter fields. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterPatch {
    pub search: Option<String>,
    pub category: Option<CategoryFilter>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

impl FilterPatch {
    pub fn search(value: String) -> Self {
        FilterPatch {
            search: Some(value),
            ..Default::default()
        }
    }

    pub fn category(value: CategoryFilter) -> Self {
        FilterPatch {
            category: Some(value),
            ..Default::default()
        }
    }

    pub fn start_date(value: String) -> Self {
        FilterPatch {
            start_date: Some(value),
            ..Default::default()
        }
    }

    pub fn end_date(value: String) -> Self {
        FilterPatch {
            end_date: Some(value),
            ..Default::default()
        }
    }
}

impl FilterState {
    /// Merge the patch and unconditionally reset the page cursor to 1.
    pub fn apply(&self, patch: FilterPatch) -> FilterState {
        FilterState {
            search: patch.search.unwrap_or_else(|| self.search.clone()),
            category: patch.category.unwrap_or(self.category),
            start_date: patch.start_date.unwrap_or_else(|| self.start_date.clone()),
            end_date: patch.end_date.unwrap_or_else(|| self.end_date.clone()),
            page: 1,
            page_size: self.page_size,
        }
    }

    /// Same filters, different page cursor. Used for "load more" fetches.
    pub fn with_page(&self, page: u32) -> FilterState {
        FilterState {
            page,
            ..self.clone()
        }
    }

    /// Query parameters for `GET /api/transactions`, in the order the
    /// backend documents them.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("page", self.page.to_string()),
            ("limit", self.page_size.to_string()),
            ("search", self.search.clone()),
            ("category", self.category.query_value()),
            ("startDate", self.start_date.clone()),
            ("endDate", self.end_date.clone()),
        ]
    }
}
