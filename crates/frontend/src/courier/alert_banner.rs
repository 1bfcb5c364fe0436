use super::api;
use crate::shared::icons::icon;
use chrono::{DateTime, Utc};
use contracts::domain::delivery::AlertMessage;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const POLL_INTERVAL_MS: u32 = 15_000;
const AUTO_HIDE_MS: u32 = 10_000;

/// Polls for the latest admin broadcast and shows it as a dismissible
/// banner. Each broadcast is shown once; the banner hides itself after
/// ten seconds.
#[component]
pub fn AlertBanner(token: String) -> impl IntoView {
    let current = RwSignal::new(None::<AlertMessage>);
    let last_seen = RwSignal::new(None::<DateTime<Utc>>);

    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }

    spawn_local(async move {
        loop {
            if !alive.load(Ordering::Relaxed) {
                break;
            }
            match api::get_latest_alert(&token).await {
                Ok(Some(alert)) => {
                    let seen = last_seen.get_untracked();
                    if seen != Some(alert.sent_at) {
                        last_seen.set(Some(alert.sent_at));
                        let stamp = alert.sent_at;
                        current.set(Some(alert));
                        spawn_local(async move {
                            TimeoutFuture::new(AUTO_HIDE_MS).await;
                            if current.try_with_untracked(|c| {
                                c.as_ref().map(|a| a.sent_at) == Some(stamp)
                            }) == Some(true)
                            {
                                current.set(None);
                            }
                        });
                    }
                }
                Ok(None) => {}
                Err(err) => log::debug!("alert poll failed: {err}"),
            }
            TimeoutFuture::new(POLL_INTERVAL_MS).await;
        }
    });

    view! {
        {move || current.get().map(|alert| view! {
            <div style="display: flex; align-items: center; gap: 10px; background: #fef3c7; border: 1px solid #f59e0b; border-radius: 8px; padding: 10px 14px; margin-bottom: 12px;">
                {icon("alert-triangle")}
                <span style="flex: 1;">{alert.message.clone()}</span>
                <button
                    style="background: none; border: none; cursor: pointer; padding: 2px;"
                    title="Tutup"
                    on:click=move |_| current.set(None)
                >
                    {icon("x")}
                </button>
            </div>
        })}
    }
}
