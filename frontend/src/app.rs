use yew::prelude::*;

use crate::components::dashboard::Dashboard;
use crate::components::login_view::LoginView;
use crate::components::navbar::Navbar;
use crate::components::register_view::RegisterView;
use crate::components::transactions::TransactionsView;
use crate::hooks::use_session::{use_session, AuthStatus, SessionHandle};

/// Protected pages behind the route gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Dashboard,
    Transactions,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AuthView {
    Login,
    Register,
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let active_page = use_state(|| Page::Dashboard);
    let auth_view = use_state(|| AuthView::Login);

    let on_select = {
        let active_page = active_page.clone();
        Callback::from(move |page: Page| active_page.set(page))
    };

    let body = match session.status {
        // Session check in flight: block route resolution.
        AuthStatus::Checking => html! {
            <div class="loading-screen">{"Loading..."}</div>
        },
        AuthStatus::Anonymous => {
            let to_register = {
                let auth_view = auth_view.clone();
                Callback::from(move |_| auth_view.set(AuthView::Register))
            };
            let to_login = {
                let auth_view = auth_view.clone();
                Callback::from(move |_| auth_view.set(AuthView::Login))
            };
            match *auth_view {
                AuthView::Login => html! { <LoginView on_switch={to_register} /> },
                AuthView::Register => html! { <RegisterView on_switch={to_login} /> },
            }
        }
        AuthStatus::Authenticated => {
            let go_to_transactions = {
                let on_select = on_select.clone();
                Callback::from(move |_| on_select.emit(Page::Transactions))
            };
            let content = match *active_page {
                Page::Dashboard => html! {
                    <Dashboard on_view_transactions={go_to_transactions} />
                },
                Page::Transactions => html! { <TransactionsView /> },
            };
            html! {
                <>
                    <Navbar active_page={*active_page} on_select={on_select} />
                    <div class="container">
                        {content}
                    </div>
                </>
            }
        }
    };

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {body}
        </ContextProvider<SessionHandle>>
    }
}
