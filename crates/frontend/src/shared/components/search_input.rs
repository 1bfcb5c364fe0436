use crate::shared::debounce::Debounce;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

const DEBOUNCE_MS: i32 = 300;

/// Search box with trailing-edge debounce and a clear button.
///
/// Keystrokes only restart the timer; `on_change` runs once per quiet
/// period with the latest text. The clear button bypasses the timer and
/// emits the empty string immediately.
#[component]
pub fn SearchInput(
    /// Committed filter value (what the list is currently showing).
    #[prop(into)]
    value: Signal<String>,
    /// Fires with the settled search text.
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Cari...".to_string()
    } else {
        placeholder
    };

    // Local echo of the input (ahead of the debounced commit).
    let (input_value, set_input_value) = signal(String::new());

    let debounce = StoredValue::new(Debounce::new());
    let timeout_handle = StoredValue::new(None::<i32>);

    let clear_timer = move || {
        if let Some(id) = timeout_handle.get_value() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(id);
            }
            timeout_handle.set_value(None);
        }
    };

    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let generation = debounce.try_update_value(|d| d.input(new_value)).unwrap_or(0);
        clear_timer();

        let Some(window) = web_sys::window() else { return };
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
            timeout_handle.set_value(None);
            let settled = debounce.try_update_value(|d| d.fire(generation)).flatten();
            if let Some(text) = settled {
                on_change.run(text);
            }
        }) as Box<dyn Fn()>);

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref::<js_sys::Function>(),
            DEBOUNCE_MS,
        ) {
            Ok(id) => {
                closure.forget();
                timeout_handle.set_value(Some(id));
            }
            Err(_) => log::error!("setTimeout failed, search input will not settle"),
        }
    };

    let clear_filter = move |_| {
        debounce.update_value(|d| d.cancel());
        clear_timer();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    on_cleanup(move || {
        debounce.update_value(|d| d.cancel());
        clear_timer();
    });

    let is_filter_active = move || !value.get().trim().is_empty();

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Hapus"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
