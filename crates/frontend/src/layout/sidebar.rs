use crate::app::use_session;
use crate::routes::routes::{use_router, Route};
use crate::shared::icons::icon;
use contracts::domain::profile::is_visible;
use leptos::prelude::*;

struct MenuItem {
    label: &'static str,
    icon: &'static str,
    route: Route,
}

fn menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Dashboard",
            icon: "dashboard",
            route: Route::Dashboard,
        },
        MenuItem {
            label: "Pelanggan",
            icon: "customers",
            route: Route::Customers,
        },
        MenuItem {
            label: "Pesanan",
            icon: "orders",
            route: Route::Orders,
        },
        MenuItem {
            label: "Keuangan",
            icon: "finance",
            route: Route::Finance,
        },
        MenuItem {
            label: "Laporan",
            icon: "reports",
            route: Route::Reports,
        },
        MenuItem {
            label: "Pengaturan",
            icon: "settings",
            route: Route::Settings,
        },
    ]
}

/// Admin navigation. Entries the signed-in role cannot open are not
/// rendered at all; visibility is decided by capability-set intersection,
/// never by per-role if/else chains in the view.
#[component]
pub fn Sidebar() -> impl IntoView {
    let router = use_router();
    let session = use_session();

    let granted = move || {
        session
            .profile
            .get()
            .map(|p| vec![p.role])
            .unwrap_or_default()
    };

    view! {
        <nav style="width: 220px; background: #1f2937; color: #e5e7eb; padding: 16px 0; flex-shrink: 0;">
            <div style="padding: 0 16px 16px; font-weight: 700; font-size: 18px; color: white;">
                "Backoffice"
            </div>
            {move || {
                let granted = granted();
                let current = router.current();
                menu_items()
                    .into_iter()
                    .filter(|item| is_visible(item.route.required_roles(), &granted))
                    .map(|item| {
                        let active = item.route == current;
                        let route = item.route.clone();
                        view! {
                            <a
                                style=format!(
                                    "display: flex; align-items: center; gap: 10px; padding: 10px 16px; cursor: pointer; color: {}; background: {}; text-decoration: none;",
                                    if active { "white" } else { "#9ca3af" },
                                    if active { "#374151" } else { "transparent" },
                                )
                                on:click=move |_| router.navigate(route.clone())
                            >
                                {icon(item.icon)}
                                <span>{item.label}</span>
                            </a>
                        }
                    })
                    .collect_view()
            }}
            <div style="padding: 16px; margin-top: 24px; border-top: 1px solid #374151; font-size: 13px; color: #9ca3af;">
                {move || {
                    session.profile.get().map(|p| {
                        view! {
                            <div>
                                <div style="color: #e5e7eb;">{p.display_name.clone()}</div>
                                <div>{p.role.display_name()}</div>
                            </div>
                        }
                    })
                }}
            </div>
        </nav>
    }
}
