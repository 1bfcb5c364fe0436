use contracts::domain::profile::Role;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::admin::customers::page::CustomersPage;
use crate::admin::dashboard::page::DashboardPage;
use crate::admin::finance::page::FinancePage;
use crate::admin::orders::page::OrdersPage;
use crate::admin::reports::page::ReportsPage;
use crate::admin::settings::page::SettingsPage;
use crate::courier::page::DeliveryPage;
use crate::layout::shell::Shell;

/// Every addressable screen. The courier page is the only one reached by
/// a shared link; everything else lives behind the admin shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Customers,
    Orders,
    Finance,
    Reports,
    Settings,
    Delivery { token: String },
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim_end_matches('/');
        match trimmed {
            "" | "/dashboard" => Route::Dashboard,
            "/customers" => Route::Customers,
            "/orders" => Route::Orders,
            "/finance" => Route::Finance,
            "/reports" => Route::Reports,
            "/settings" => Route::Settings,
            _ => {
                if let Some(token) = trimmed.strip_prefix("/delivery/") {
                    if !token.is_empty() && !token.contains('/') {
                        return Route::Delivery {
                            token: token.to_string(),
                        };
                    }
                }
                Route::NotFound
            }
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::Customers => "/customers".to_string(),
            Route::Orders => "/orders".to_string(),
            Route::Finance => "/finance".to_string(),
            Route::Reports => "/reports".to_string(),
            Route::Settings => "/settings".to_string(),
            Route::Delivery { token } => format!("/delivery/{token}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    /// Roles that may open this screen. Empty means public.
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            Route::Finance | Route::Reports => &[Role::Owner, Role::Manager],
            Route::Settings => &[Role::Owner],
            Route::Delivery { .. } | Route::NotFound => &[],
            _ => &[Role::Owner, Role::Manager, Role::Cs],
        }
    }
}

#[derive(Clone, Copy)]
pub struct RouterContext {
    current: RwSignal<Route>,
}

impl RouterContext {
    pub fn current(&self) -> Route {
        self.current.get()
    }

    /// Push a new history entry and swap the rendered screen.
    pub fn navigate(&self, route: Route) {
        if let Some(window) = web_sys::window() {
            let history = window.history().ok();
            if let Some(history) = history {
                let _ = history.push_state_with_url(
                    &wasm_bindgen::JsValue::NULL,
                    "",
                    Some(&route.path()),
                );
            }
        }
        self.current.set(route);
    }
}

pub fn use_router() -> RouterContext {
    use_context::<RouterContext>().expect("RouterContext not found")
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let current = RwSignal::new(Route::parse(&current_path()));
    provide_context(RouterContext { current });

    // Back/forward buttons re-parse the location instead of going through
    // navigate(), which would push a duplicate entry.
    if let Some(window) = web_sys::window() {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            current.set(Route::parse(&current_path()));
        }) as Box<dyn Fn()>);
        let _ = window.add_event_listener_with_callback(
            "popstate",
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
        );
        closure.forget();
    }

    view! {
        {move || match current.get() {
            Route::Delivery { token } => view! { <DeliveryPage token=token /> }.into_any(),
            Route::NotFound => view! {
                <div style="padding: 40px; text-align: center;">
                    <h2>"404"</h2>
                    <p>"Halaman tidak ditemukan."</p>
                </div>
            }.into_any(),
            route => view! {
                <Shell>
                    {match route {
                        Route::Dashboard => view! { <DashboardPage /> }.into_any(),
                        Route::Customers => view! { <CustomersPage /> }.into_any(),
                        Route::Orders => view! { <OrdersPage /> }.into_any(),
                        Route::Finance => view! { <FinancePage /> }.into_any(),
                        Route::Reports => view! { <ReportsPage /> }.into_any(),
                        Route::Settings => view! { <SettingsPage /> }.into_any(),
                        _ => view! { <DashboardPage /> }.into_any(),
                    }}
                </Shell>
            }.into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_admin_paths() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/customers"), Route::Customers);
        assert_eq!(Route::parse("/finance/"), Route::Finance);
        assert_eq!(Route::parse("/nonsense"), Route::NotFound);
    }

    #[test]
    fn parses_delivery_token() {
        assert_eq!(
            Route::parse("/delivery/abc123"),
            Route::Delivery {
                token: "abc123".to_string()
            }
        );
        assert_eq!(Route::parse("/delivery/"), Route::NotFound);
        assert_eq!(Route::parse("/delivery/a/b"), Route::NotFound);
    }

    #[test]
    fn path_roundtrips() {
        for route in [
            Route::Dashboard,
            Route::Customers,
            Route::Orders,
            Route::Finance,
            Route::Reports,
            Route::Settings,
            Route::Delivery {
                token: "tok".to_string(),
            },
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn courier_route_is_public() {
        let route = Route::Delivery {
            token: "tok".to_string(),
        };
        assert!(route.required_roles().is_empty());
        assert!(!Route::Finance.required_roles().contains(&Role::Cs));
    }
}
