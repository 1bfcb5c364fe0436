use contracts::domain::delivery::DailyReportInput;
use leptos::prelude::*;
use thaw::*;

/// End-of-day report form, shown once when the batch completes and
/// reachable again from the page header.
#[component]
pub fn ReportModal(
    #[prop(into)] show: Signal<bool>,
    /// The route had COD stops, so the collected total is mandatory.
    #[prop(into)]
    has_cod: Signal<bool>,
    #[prop(into)] delivered_count: Signal<usize>,
    #[prop(into)] submitting: Signal<bool>,
    on_submit: Callback<DailyReportInput>,
    on_close: Callback<()>,
) -> impl IntoView {
    let notes = RwSignal::new(String::new());
    let cod_amount = RwSignal::new(String::new());
    let form_error = RwSignal::new(None::<String>);

    let submit = move |_| {
        form_error.set(None);
        let total_cod_collected = if has_cod.get_untracked() {
            match cod_amount.get_untracked().trim().parse::<f64>() {
                Ok(v) if v >= 0.0 => Some(v),
                _ => {
                    form_error.set(Some("Isi total COD yang terkumpul".to_string()));
                    return;
                }
            }
        } else {
            None
        };
        let trimmed = notes.get_untracked().trim().to_string();
        on_submit.run(DailyReportInput {
            summary_notes: if trimmed.is_empty() { None } else { Some(trimmed) },
            total_cod_collected,
        });
    };

    view! {
        <Show when=move || show.get() fallback=|| view! {}>
            <div class="modal-overlay">
                <div class="modal-dialog">
                    <h3>"Laporan Harian"</h3>
                    <p style="color: #4b5563;">
                        "Semua antaran selesai! Total terkirim: "
                        <b>{move || delivered_count.get().to_string()}</b>
                    </p>
                    {move || form_error.get().map(|e| view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__text">{e}</span>
                        </div>
                    })}
                    <Show when=move || has_cod.get() fallback=|| view! {}>
                        <div class="form-group">
                            <Label>"Total COD terkumpul (Rp) *"</Label>
                            <Input value=cod_amount placeholder="0" />
                        </div>
                    </Show>
                    <div class="form-group">
                        <Label>"Catatan"</Label>
                        <Input value=notes placeholder="Kendala di jalan, alamat susah, dll." />
                    </div>
                    <div class="modal-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=submit
                            disabled=Signal::derive(move || submitting.get())
                        >
                            {move || if submitting.get() { "Mengirim..." } else { "Kirim Laporan" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_close.run(())
                        >
                            "Nanti"
                        </Button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
