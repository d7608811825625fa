use shared::UserProfile;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::session;

/// Where the route gate stands with respect to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    /// Stored credential is being validated; block route resolution.
    Checking,
    Authenticated,
    Anonymous,
}

/// Session store handle shared through the component tree via context.
///
/// All session mutation goes through the callbacks on this handle; nothing
/// else writes the token or the identity.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    pub status: AuthStatus,
    pub user: Option<UserProfile>,
    pub error: Option<String>,
    token: Option<String>,
    pub login: Callback<(String, String)>,
    pub register: Callback<(String, String, String)>,
    pub logout: Callback<()>,
    /// Invoked when a protected call comes back 401: the credential is
    /// treated as expired and discarded.
    pub expire: Callback<()>,
}

impl SessionHandle {
    /// Client carrying the current bearer token.
    pub fn api_client(&self) -> ApiClient {
        ApiClient::with_token(self.token.clone())
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let user = use_state(|| None::<UserProfile>);
    let status = use_state(|| AuthStatus::Checking);
    let error = use_state(|| None::<String>);
    let token = use_state(session::load_token);

    // Validate any persisted credential once, on mount.
    {
        let user = user.clone();
        let status = status.clone();
        let error = error.clone();
        let token = token.clone();
        use_effect_with((), move |_| {
            match (*token).clone() {
                None => status.set(AuthStatus::Anonymous),
                Some(stored) => spawn_local(async move {
                    let client = ApiClient::with_token(Some(stored));
                    match client.me().await {
                        Ok(profile) => {
                            user.set(Some(profile));
                            status.set(AuthStatus::Authenticated);
                        }
                        Err(err) => {
                            gloo::console::warn!(
                                "Stored session rejected:",
                                err.to_string()
                            );
                            session::clear_token();
                            token.set(None);
                            user.set(None);
                            status.set(AuthStatus::Anonymous);
                            if err.is_unauthorized() {
                                error.set(Some("Session expired".to_string()));
                            }
                        }
                    }
                }),
            }
            || ()
        });
    }

    let login = {
        let user = user.clone();
        let status = status.clone();
        let error = error.clone();
        let token = token.clone();
        use_callback((), move |(email, password): (String, String), _| {
            let user = user.clone();
            let status = status.clone();
            let error = error.clone();
            let token = token.clone();
            spawn_local(async move {
                error.set(None);
                match ApiClient::new().login(&email, &password).await {
                    Ok(auth) => {
                        session::save_token(&auth.token);
                        token.set(Some(auth.token.clone()));
                        user.set(Some(auth.into()));
                        status.set(AuthStatus::Authenticated);
                    }
                    Err(err) => {
                        // Session stays empty; the view shows the message.
                        error.set(Some(err.to_string()));
                    }
                }
            });
        })
    };

    let register = {
        let user = user.clone();
        let status = status.clone();
        let error = error.clone();
        let token = token.clone();
        use_callback(
            (),
            move |(name, email, password): (String, String, String), _| {
                let user = user.clone();
                let status = status.clone();
                let error = error.clone();
                let token = token.clone();
                spawn_local(async move {
                    error.set(None);
                    match ApiClient::new().register(&name, &email, &password).await {
                        Ok(auth) => {
                            session::save_token(&auth.token);
                            token.set(Some(auth.token.clone()));
                            user.set(Some(auth.into()));
                            status.set(AuthStatus::Authenticated);
                        }
                        Err(err) => {
                            error.set(Some(err.to_string()));
                        }
                    }
                });
            },
        )
    };

    let logout = {
        let user = user.clone();
        let status = status.clone();
        let error = error.clone();
        let token = token.clone();
        use_callback((), move |_, _| {
            session::clear_token();
            token.set(None);
            user.set(None);
            error.set(None);
            status.set(AuthStatus::Anonymous);
        })
    };

    let expire = {
        let user = user.clone();
        let status = status.clone();
        let error = error.clone();
        let token = token.clone();
        use_callback((), move |_, _| {
            session::clear_token();
            token.set(None);
            user.set(None);
            error.set(Some("Session expired".to_string()));
            status.set(AuthStatus::Anonymous);
        })
    };

    SessionHandle {
        status: *status,
        user: (*user).clone(),
        error: (*error).clone(),
        token: (*token).clone(),
        login,
        register,
        logout,
        expire,
    }
}
