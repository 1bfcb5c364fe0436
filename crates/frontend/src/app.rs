use crate::routes::routes::{AppRoutes, Route};
use contracts::domain::profile::Profile;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// App-wide session state: the signed-in staff profile, `None` until the
/// lookup resolves (and forever on the public courier page).
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub profile: RwSignal<Option<Profile>>,
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found")
}

#[component]
pub fn App() -> impl IntoView {
    let profile = RwSignal::new(None::<Profile>);
    provide_context(SessionContext { profile });

    // The courier opens a tokenized link without signing in; only the
    // admin shell needs a profile.
    let path = web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default();
    if !matches!(Route::parse(&path), Route::Delivery { .. }) {
        spawn_local(async move {
            match crate::shared::api_utils::rpc::<_, Profile>(
                "get_my_profile",
                &serde_json::json!({}),
            )
            .await
            {
                Ok(p) => profile.set(Some(p)),
                Err(err) => log::error!("failed to load profile: {err}"),
            }
        });
    }

    view! {
        <AppRoutes />
    }
}
