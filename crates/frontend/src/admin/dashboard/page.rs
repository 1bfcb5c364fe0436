use super::api;
use crate::shared::format::format_idr;
use crate::shared::icons::icon;
use contracts::domain::metrics::DashboardMetrics;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
fn MetricCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div style="background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; min-width: 180px;">
            <div style="font-size: 13px; color: #6b7280;">{label}</div>
            <div style="font-size: 26px; font-weight: 700;">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let metrics = RwSignal::new(DashboardMetrics::default());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_dashboard_metrics().await {
                Ok(m) => metrics.set(m),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };
    load();

    // Courier broadcast box.
    let alert_text = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);
    let send_alert = move |_| {
        let message = alert_text.get_untracked().trim().to_string();
        if message.is_empty() {
            return;
        }
        sending.set(true);
        sent.set(false);
        spawn_local(async move {
            match api::send_courier_alert(&message).await {
                Ok(()) => {
                    alert_text.set(String::new());
                    sent.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            sending.set(false);
        });
    };

    view! {
        <div class="page">
            <div class="page__header" style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    {icon("dashboard")}
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                    {move || if loading.get() { " Memuat..." } else { " Muat Ulang" }}
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div style="display: flex; flex-wrap: wrap; gap: 12px; margin-bottom: 24px;">
                <MetricCard label="Total Pelanggan" value=Signal::derive(move || metrics.get().customers_total.to_string()) />
                <MetricCard label="Total Pesanan" value=Signal::derive(move || metrics.get().orders_total.to_string()) />
                <MetricCard label="Pesanan Pending" value=Signal::derive(move || metrics.get().orders_pending.to_string()) />
                <MetricCard label="Antaran Hari Ini" value=Signal::derive(move || metrics.get().deliveries_today.to_string()) />
                <MetricCard label="Belum Diantar" value=Signal::derive(move || metrics.get().deliveries_pending_today.to_string()) />
                <MetricCard label="Omzet Bulan Ini" value=Signal::derive(move || format_idr(metrics.get().revenue_month)) />
            </div>

            <div style="background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; max-width: 560px;">
                <h3 style="margin-top: 0;">"Pesan untuk Kurir"</h3>
                <p style="color: #6b7280; font-size: 14px;">
                    "Pesan akan muncul di halaman antaran kurir yang sedang aktif."
                </p>
                <Flex gap=FlexGap::Small>
                    <Input value=alert_text placeholder="Tulis pengumuman..." />
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=send_alert
                        disabled=Signal::derive(move || sending.get())
                    >
                        {move || if sending.get() { "Mengirim..." } else { "Kirim" }}
                    </Button>
                </Flex>
                {move || sent.get().then(|| view! {
                    <div style="color: #16a34a; font-size: 13px; margin-top: 8px;">"Pesan terkirim."</div>
                })}
            </div>
        </div>
    }
}
