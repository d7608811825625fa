use shared::Category;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::state::filters::{CategoryFilter, FilterPatch, FilterState};

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub filters: FilterState,
    pub on_change: Callback<FilterPatch>,
}

/// Search, category, and date-range controls. Emits one [`FilterPatch`]
/// per edit; the controller debounces the resulting fetches.
#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_search = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(FilterPatch::search(input.value()));
        })
    };

    let on_category = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let select: HtmlSelectElement = event.target_unchecked_into();
            on_change.emit(FilterPatch::category(CategoryFilter::from_select_value(
                &select.value(),
            )));
        })
    };

    let on_start_date = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(FilterPatch::start_date(input.value()));
        })
    };

    let on_end_date = {
        let on_change = props.on_change.clone();
        Callback::from(move |event: Event| {
            let input: HtmlInputElement = event.target_unchecked_into();
            on_change.emit(FilterPatch::end_date(input.value()));
        })
    };

    html! {
        <div class="filter-bar">
            <input
                type="text"
                class="filter-search"
                placeholder="Search transactions..."
                value={props.filters.search.clone()}
                oninput={on_search}
            />
            <select class="filter-category" onchange={on_category}>
                <option
                    value="All"
                    selected={props.filters.category == CategoryFilter::All}
                >
                    {"All Categories"}
                </option>
                {for Category::ALL.iter().map(|category| html! {
                    <option
                        value={category.label()}
                        selected={props.filters.category == CategoryFilter::One(*category)}
                    >
                        {category.label()}
                    </option>
                })}
            </select>
            <label class="filter-date">
                {"From"}
                <input
                    type="date"
                    value={props.filters.start_date.clone()}
                    onchange={on_start_date}
                />
            </label>
            <label class="filter-date">
                {"To"}
                <input
                    type="date"
                    value={props.filters.end_date.clone()}
                    onchange={on_end_date}
                />
            </label>
        </div>
    }
}
