use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct RegisterViewProps {
    /// Switch back to the login view.
    pub on_switch: Callback<()>,
}

#[function_component(RegisterView)]
pub fn register_view(props: &RegisterViewProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let local_error = use_state(|| None::<String>);

    let bind = |state: UseStateHandle<String>| {
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            state.set(input.value());
        })
    };

    let on_name = bind(name.clone());
    let on_email = bind(email.clone());
    let on_password = bind(password.clone());
    let on_confirm = bind(confirm.clone());

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let local_error = local_error.clone();
        let register = session.register.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if name.trim().is_empty() || email.trim().is_empty() || password.is_empty() {
                local_error.set(Some("Please fill in all fields".to_string()));
                return;
            }
            if *password != *confirm {
                local_error.set(Some("Passwords do not match".to_string()));
                return;
            }
            local_error.set(None);
            register.emit((
                name.trim().to_string(),
                email.trim().to_string(),
                (*password).clone(),
            ));
        })
    };

    let on_switch = {
        let on_switch = props.on_switch.clone();
        Callback::from(move |_: MouseEvent| on_switch.emit(()))
    };

    let error = (*local_error).clone().or_else(|| session.error.clone());

    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{"ExpenseTracker"}</h1>
                <h2>{"Create Account"}</h2>
                if let Some(message) = error {
                    <div class="alert alert-error">{message}</div>
                }
                <form {onsubmit}>
                    <div class="form-group">
                        <label for="register-name">{"Name"}</label>
                        <input
                            id="register-name"
                            type="text"
                            placeholder="Your name"
                            value={(*name).clone()}
                            oninput={on_name}
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-email">{"Email"}</label>
                        <input
                            id="register-email"
                            type="email"
                            placeholder="you@example.com"
                            value={(*email).clone()}
                            oninput={on_email}
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-password">{"Password"}</label>
                        <input
                            id="register-password"
                            type="password"
                            placeholder="Password"
                            value={(*password).clone()}
                            oninput={on_password}
                        />
                    </div>
                    <div class="form-group">
                        <label for="register-confirm">{"Confirm Password"}</label>
                        <input
                            id="register-confirm"
                            type="password"
                            placeholder="Repeat password"
                            value={(*confirm).clone()}
                            oninput={on_confirm}
                        />
                    </div>
                    <button type="submit" class="btn btn-primary btn-block">{"Register"}</button>
                </form>
                <p class="auth-switch">
                    {"Already have an account? "}
                    <button class="link-button" onclick={on_switch}>{"Sign In"}</button>
                </p>
            </div>
        </div>
    }
}
