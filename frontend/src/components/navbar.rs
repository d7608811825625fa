use yew::prelude::*;

use crate::app::Page;
use crate::hooks::use_session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub active_page: Page,
    pub on_select: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");

    let select = |page: Page| {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(page))
    };

    let logout = {
        let logout = session.logout.clone();
        Callback::from(move |_: MouseEvent| logout.emit(()))
    };

    let link_class = |page: Page| {
        if props.active_page == page {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    let greeting = session
        .user
        .as_ref()
        .map(|user| format!("Hi, {}", user.name))
        .unwrap_or_default();

    html! {
        <nav class="navbar">
            <span class="navbar-brand">{"ExpenseTracker"}</span>
            <div class="navbar-links">
                <button class={link_class(Page::Dashboard)} onclick={select(Page::Dashboard)}>
                    {"Dashboard"}
                </button>
                <button class={link_class(Page::Transactions)} onclick={select(Page::Transactions)}>
                    {"Transactions"}
                </button>
            </div>
            <div class="navbar-session">
                <span class="navbar-user">{greeting}</span>
                <button class="btn btn-secondary" onclick={logout}>{"Logout"}</button>
            </div>
        </nav>
    }
}
