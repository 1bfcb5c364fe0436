use super::alert_banner::AlertBanner;
use super::api;
use super::board::{DeliveryBoard, TransitionOutcome};
use super::list_item::DeliveryListItem;
use super::report_modal::ReportModal;
use crate::shared::format::format_date_long;
use crate::shared::icons::icon;
use contracts::domain::delivery::{DailyReportInput, DeliveryItem, DeliveryStatus};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

/// Mobile-first page behind the tokenized courier link. No login: the
/// token in the URL is the whole credential.
#[component]
pub fn DeliveryPage(token: String) -> impl IntoView {
    let token = StoredValue::new(token);
    let board = RwSignal::new(DeliveryBoard::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let show_report = RwSignal::new(false);
    let report_submitting = RwSignal::new(false);
    let report_done = RwSignal::new(false);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::get_deliveries(&token.get_value()).await {
                Ok(items) => board.update(|b| b.load(items)),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };
    load();

    // Optimistic flip first, then the remote call; the board decides what
    // happens when the result comes back.
    let on_toggle = Callback::new(move |(order_id, target): (i64, DeliveryStatus)| {
        let Some(tx) = board
            .try_update(|b| b.begin_status(order_id, target))
            .flatten()
        else {
            return;
        };
        error.set(None);
        spawn_local(async move {
            let result =
                api::update_delivery_status(&token.get_value(), order_id, tx.target).await;
            let Some(settlement) = board.try_update(|b| b.resolve(order_id, result)) else {
                return;
            };
            if let TransitionOutcome::RolledBack(err) = settlement.outcome {
                error.set(Some(err.to_string()));
            }
            if settlement.batch_complete {
                show_report.set(true);
            }
        });
    });

    let complete_all = move |_| {
        error.set(None);
        spawn_local(async move {
            match api::batch_complete_today(&token.get_value()).await {
                Ok(result) => {
                    log::info!("batch update touched {} deliveries", result.updated_count);
                    if board.try_update(|b| b.complete_all_confirmed()) == Some(true) {
                        show_report.set(true);
                    }
                }
                Err(err) => error.set(Some(err.to_string())),
            }
        });
    };

    let submit_report = Callback::new(move |input: DailyReportInput| {
        report_submitting.set(true);
        spawn_local(async move {
            match api::submit_daily_report(&token.get_value(), &input).await {
                Ok(()) => {
                    show_report.set(false);
                    report_done.set(true);
                }
                Err(err) => error.set(Some(err.to_string())),
            }
            report_submitting.set(false);
        });
    });

    view! {
        <div style="max-width: 640px; margin: 0 auto; padding: 16px;">
            <div style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 4px;">
                <h2 style="margin: 0;">"Antaran Hari Ini"</h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| load()
                    disabled=Signal::derive(move || loading.get())
                >
                    {icon("refresh")}
                </Button>
            </div>
            <div style="color: #6b7280; margin-bottom: 12px;">
                {move || board.with(|b| {
                    b.items()
                        .first()
                        .map(|item: &DeliveryItem| format_date_long(item.delivery_date))
                        .unwrap_or_default()
                })}
            </div>

            <AlertBanner token=token.get_value() />

            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error" style="margin-bottom: 12px;">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                    <button class="btn-link" on:click=move |_| load()>"Coba Lagi"</button>
                </div>
            })}

            <div style="display: flex; gap: 10px; margin-bottom: 16px;">
                <div style="flex: 1; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 10px; text-align: center;">
                    <div style="font-size: 12px; color: #6b7280;">"Jumlah antaran"</div>
                    <div style="font-size: 20px; font-weight: 700;">
                        {move || board.with(|b| b.total().to_string())}
                    </div>
                </div>
                <div style="flex: 1; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 10px; text-align: center;">
                    <div style="font-size: 12px; color: #6b7280;">"Belum diantar"</div>
                    <div style="font-size: 20px; font-weight: 700; color: #f59e0b;">
                        {move || board.with(|b| b.pending_count().to_string())}
                    </div>
                </div>
                <div style="flex: 1; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 10px; text-align: center;">
                    <div style="font-size: 12px; color: #6b7280;">"Terkirim"</div>
                    <div style="font-size: 20px; font-weight: 700; color: #16a34a;">
                        {move || board.with(|b| b.completed_items().count().to_string())}
                    </div>
                </div>
            </div>

            {move || {
                let pending = board.with(|b| b.pending_count());
                (pending > 0).then(|| view! {
                    <div style="margin-bottom: 16px;">
                        <Button appearance=ButtonAppearance::Primary on_click=complete_all>
                            {format!("Tandai Semua Terkirim ({pending})")}
                        </Button>
                    </div>
                })
            }}

            {move || {
                // Stops still waiting come first; delivered ones sink below.
                let items = board.with(|b| b.items_pending_first());
                if items.is_empty() {
                    let message = if loading.get() {
                        "Memuat antaran..."
                    } else {
                        "Tidak ada antaran untuk hari ini."
                    };
                    return view! {
                        <div style="text-align: center; color: #6b7280; padding: 40px 0;">
                            {message}
                        </div>
                    }.into_any();
                }
                items.into_iter().map(|item| {
                    let order_id = item.order_id;
                    view! {
                        <DeliveryListItem
                            item=item
                            on_toggle=on_toggle
                            in_flight=Signal::derive(move || board.with(|b| b.in_flight(order_id)))
                        />
                    }
                }).collect_view().into_any()
            }}

            {move || report_done.get().then(|| view! {
                <div style="background: #dcfce7; border: 1px solid #16a34a; border-radius: 8px; padding: 12px; text-align: center; margin-top: 12px;">
                    "Laporan harian sudah dikirim. Terima kasih!"
                </div>
            })}

            <ReportModal
                show=Signal::derive(move || show_report.get())
                has_cod=Signal::derive(move || board.with(|b| b.has_cod_deliveries()))
                delivered_count=Signal::derive(move || board.with(|b| b.completed_items().count()))
                submitting=Signal::derive(move || report_submitting.get())
                on_submit=submit_report
                on_close=Callback::new(move |_| show_report.set(false))
            />
        </div>
    }
}
