use crate::shared::icons::icon;
use contracts::domain::delivery::{DeliveryItem, DeliveryStatus, PaymentMethod};
use leptos::prelude::*;
use thaw::*;

/// Normalize an Indonesian phone number for a wa.me link: strip
/// separators, turn the leading local `0` into `62`.
fn wa_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    if let Some(rest) = digits.strip_prefix('0') {
        format!("62{rest}")
    } else {
        digits
    }
}

fn wa_link(phone: &str, customer_name: &str) -> String {
    let greeting = format!(
        "Halo {customer_name}, saya kurir yang mengantar pesanan Anda hari ini."
    );
    format!(
        "https://wa.me/{}?text={}",
        wa_number(phone),
        urlencoding::encode(&greeting)
    )
}

fn maps_link(address: &str) -> String {
    format!("https://maps.google.com/?q={}", urlencoding::encode(address))
}

/// One stop card on the courier's list: customer info, contact links,
/// the product lines and the status toggle.
#[component]
pub fn DeliveryListItem(
    item: DeliveryItem,
    on_toggle: Callback<(i64, DeliveryStatus)>,
    /// True while a status update for this stop is awaiting the backend.
    #[prop(into)]
    in_flight: Signal<bool>,
) -> impl IntoView {
    let order_id = item.order_id;
    let completed = !item.is_pending();
    let phone = item.customer_phone.clone();
    let wa = wa_link(&item.customer_phone, &item.customer_name);
    let maps = maps_link(&item.customer_address);

    view! {
        <div
            class="delivery-card"
            style=format!(
                "background: white; border: 1px solid #e5e7eb; border-left: 4px solid {}; border-radius: 8px; padding: 14px; margin-bottom: 10px;",
                if completed { "#16a34a" } else { "#f59e0b" }
            )
        >
            <div style="display: flex; justify-content: space-between; align-items: flex-start;">
                <div>
                    <div style="font-weight: 700;">{item.customer_name.clone()}</div>
                    <div style="color: #4b5563; font-size: 14px;">{item.customer_address.clone()}</div>
                </div>
                {match item.payment_method {
                    PaymentMethod::Cod => view! {
                        <Badge appearance=BadgeAppearance::Filled color=BadgeColor::Warning>
                            <span>"COD"</span>
                        </Badge>
                    }.into_any(),
                    PaymentMethod::Transfer => view! {
                        <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                            <span>"Transfer"</span>
                        </Badge>
                    }.into_any(),
                }}
            </div>

            <ul style="margin: 10px 0; padding-left: 18px; font-size: 14px;">
                {item.order_details.iter().map(|line| {
                    let text = match &line.notes {
                        Some(notes) => format!("{} x{} ({notes})", line.product_name, line.quantity),
                        None => format!("{} x{}", line.product_name, line.quantity),
                    };
                    view! { <li>{text}</li> }
                }).collect_view()}
            </ul>

            {item.notes_for_courier.clone().map(|notes| view! {
                <div style="background: #fffbea; border-radius: 6px; padding: 8px; font-size: 13px; margin-bottom: 10px;">
                    "Catatan: " {notes}
                </div>
            })}

            <div style="display: flex; gap: 14px; font-size: 13px; margin-bottom: 10px;">
                <a href=format!("tel:{phone}") style="display: inline-flex; align-items: center; gap: 4px;">
                    {icon("phone")}
                    {item.customer_phone.clone()}
                </a>
                <a href=wa target="_blank" style="display: inline-flex; align-items: center; gap: 4px;">
                    {icon("message-circle")}
                    "WhatsApp"
                </a>
                <a href=maps target="_blank" style="display: inline-flex; align-items: center; gap: 4px;">
                    {icon("map-pin")}
                    "Maps"
                </a>
            </div>

            <div style="display: flex; gap: 16px; align-items: center;">
                <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer;">
                    <input
                        type="radio"
                        name=format!("status-{order_id}")
                        checked=!completed
                        disabled=move || in_flight.get()
                        on:change=move |_| on_toggle.run((order_id, DeliveryStatus::Pending))
                    />
                    "Belum diantar"
                </label>
                <label style="display: inline-flex; align-items: center; gap: 6px; cursor: pointer;">
                    <input
                        type="radio"
                        name=format!("status-{order_id}")
                        checked=completed
                        disabled=move || in_flight.get()
                        on:change=move |_| on_toggle.run((order_id, DeliveryStatus::Completed))
                    />
                    "Terkirim"
                </label>
                {move || in_flight.get().then(|| view! {
                    <span class="text-muted" style="font-size: 13px;">"Menyimpan..."</span>
                })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_numbers_get_country_prefix() {
        assert_eq!(wa_number("0812-3456-7890"), "6281234567890");
        assert_eq!(wa_number("6281234567890"), "6281234567890");
    }

    #[test]
    fn wa_link_encodes_the_greeting() {
        let link = wa_link("081234567890", "Bu Siti");
        assert!(link.starts_with("https://wa.me/6281234567890?text="));
        assert!(!link.contains(' '), "spaces must be percent-encoded");
        assert!(link.contains("Bu%20Siti"));
    }

    #[test]
    fn maps_link_encodes_the_address() {
        let link = maps_link("Jl. Merdeka No. 12, Bandung");
        assert!(link.starts_with("https://maps.google.com/?q="));
        assert!(!link.contains(' '), "spaces must be percent-encoded");
        assert!(link.contains("Jl.%20Merdeka"));
    }
}
