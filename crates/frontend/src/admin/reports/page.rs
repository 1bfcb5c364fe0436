use super::api;
use crate::shared::format::{format_date, format_datetime, format_idr};
use crate::shared::icons::icon;
use contracts::domain::delivery::DailyReport;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

#[component]
pub fn ReportsPage() -> impl IntoView {
    let reports = RwSignal::new(Vec::<DailyReport>::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);

    let load = move || {
        loading.set(true);
        error.set(None);
        spawn_local(async move {
            match api::list_daily_reports().await {
                Ok(list) => reports.set(list),
                Err(err) => error.set(Some(err.to_string())),
            }
            loading.set(false);
        });
    };
    load();

    view! {
        <div class="page">
            <div class="page__header" style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    {icon("reports")}
                    <h1 class="page__title">"Laporan Harian Kurir"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || reports.get().len().to_string()}</span>
                    </Badge>
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

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=120.0>"Tanggal"</TableHeaderCell>
                        <TableHeaderCell min_width=160.0>"Kurir"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Terkirim"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"COD Terkumpul"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=260.0>"Catatan"</TableHeaderCell>
                        <TableHeaderCell min_width=150.0>"Dikirim"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows = reports.get();
                        if rows.is_empty() {
                            let message = if loading.get() { "Memuat..." } else { "Belum ada laporan" };
                            return vec![view! {
                                <TableRow>
                                    <TableCell attr:colspan="6">
                                        <TableCellLayout>
                                            <span class="text-muted">{message}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_view()];
                        }
                        rows.into_iter().map(|report| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{format_date(report.report_date)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{report.courier_name.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{report.delivered_count.to_string()}</TableCellLayout></TableCell>
                                <TableCell class="table__cell--right">
                                    <TableCellLayout>
                                        {report.total_cod_collected.map(format_idr).unwrap_or_else(|| "-".to_string())}
                                    </TableCellLayout>
                                </TableCell>
                                <TableCell><TableCellLayout truncate=true>{report.summary_notes.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_datetime(report.submitted_at)}</TableCellLayout></TableCell>
                            </TableRow>
                        }.into_view()).collect::<Vec<_>>()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
