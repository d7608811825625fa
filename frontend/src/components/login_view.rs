use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct LoginViewProps {
    /// Switch to the registration view.
    pub on_switch: Callback<()>,
}

#[function_component(LoginView)]
pub fn login_view(props: &LoginViewProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let email = use_state(String::new);
    let password = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    let on_email = {
        let email = email.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password = {
        let password = password.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let local_error = local_error.clone();
        let login = session.login.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if email.trim().is_empty() || password.is_empty() {
                local_error.set(Some("Please fill in all fields".to_string()));
                return;
            }
            local_error.set(None);
            login.emit((email.trim().to_string(), (*password).clone()));
        })
    };

    let on_switch = {
        let on_switch = props.on_switch.clone();
        Callback::from(move |_: MouseEvent| on_switch.emit(()))
    };

    // Local validation message wins over the last server rejection.
    let error = (*local_error).clone().or_else(|| session.error.clone());

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{"ExpenseTracker"}</h1>
                <h2>{"Sign In"}</h2>
                if let Some(message) = error {
                    <div class="alert alert-error">{message}</div>
                }
                <form {onsubmit}>
                    <div class="form-group">
                        <label for="login-email">{"Email"}</label>
                        <input
                            id="login-email"
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div class="form-group">
                        <label for="login-password">{"Password"}</label>
                        <input
                            id="login-password"
                            type="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">{"Sign In"}</button>
                </form>
                <p class="auth-switch">
                    {"Don't have an account? "}
                    <button class="link-button" onclick={on_switch}>{"Register"}</button>
                </p>
            </div>
        </div>
    }
}
