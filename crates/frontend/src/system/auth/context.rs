use contracts::system::auth::AdminInfo;
use leptos::prelude::*;

use super::{api, storage};
use crate::shared::request::spawn_cancellable;

/// Signed-in administrator and the bearer token every API call carries
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub admin: AdminInfo,
}

/// Auth context provider component
///
/// The session saved in localStorage is restored synchronously so guarded routes do
/// not bounce to `/login` on reload; the token is then re-checked in the background.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (session, set_session) = signal(storage::load_session());

    if let Some(restored) = session.get_untracked() {
        let token = restored.token.clone();
        spawn_cancellable(
            move |signal| async move { api::get_current_admin(&token, signal).await },
            move |result| match result {
                Ok(Some(admin)) => {
                    if admin != restored.admin {
                        let refreshed = Session {
                            token: restored.token,
                            admin,
                        };
                        storage::save_session(&refreshed);
                        set_session.set(Some(refreshed));
                    }
                }
                Ok(None) => {
                    log::info!("Stored session was rejected by the server, signing out");
                    storage::clear_session();
                    set_session.set(None);
                }
                // Server unreachable: keep the session, requests will report the failure.
                Err(e) => log::warn!("Could not verify stored session: {}", e),
            },
        );
    }

    provide_context(session);
    provide_context(set_session);

    children()
}

/// Hook to access the session
pub fn use_auth() -> (ReadSignal<Option<Session>>, WriteSignal<Option<Session>>) {
    (
        expect_context::<ReadSignal<Option<Session>>>(),
        expect_context::<WriteSignal<Option<Session>>>(),
    )
}

/// Bearer token of the current session, read without tracking.
/// Empty when signed out; the server then answers 401.
pub fn session_token() -> String {
    let (session, _) = use_auth();
    session
        .with_untracked(|s| s.as_ref().map(|s| s.token.clone()))
        .unwrap_or_default()
}

/// Store the session after a successful login. `remember` controls whether it
/// survives a reload.
pub fn sign_in(session: Session, remember: bool) {
    if remember {
        storage::save_session(&session);
    } else {
        storage::clear_session();
    }
    let (_, set_session) = use_auth();
    set_session.set(Some(session));
}

/// Forget the session everywhere
pub fn sign_out() {
    storage::clear_session();
    let (_, set_session) = use_auth();
    set_session.set(None);
}
