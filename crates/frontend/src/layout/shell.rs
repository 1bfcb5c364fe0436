use crate::layout::sidebar::Sidebar;
use leptos::prelude::*;

/// Admin shell: fixed sidebar on the left, page content on the right.
/// The courier page renders outside of this shell.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout" style="display: flex; min-height: 100vh;">
            <Sidebar />
            <div class="app-main" style="flex: 1; padding: 20px; overflow-x: auto;">
                {children()}
            </div>
        </div>
    }
}
