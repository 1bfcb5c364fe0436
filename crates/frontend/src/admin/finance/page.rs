use super::api;
use crate::shared::components::{sort_indicator, PaginationControls, SearchInput};
use crate::shared::format::{format_date, format_idr};
use crate::shared::icons::icon;
use crate::shared::listing::{pump, ListController};
use crate::shared::prefs::{remember_query, restore_query, LocalStorageStore};
use contracts::domain::transaction::{FinanceTotals, Transaction, TransactionFilter, TransactionKind};
use contracts::shared::listing::{ListQuery, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const PREFS_KEY: &str = "list_prefs:finance";

#[component]
fn TotalCard(
    label: &'static str,
    #[prop(into)] value: Signal<f64>,
    color: &'static str,
) -> impl IntoView {
    view! {
        <div style="flex: 1; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;">
            <div style="font-size: 13px; color: #6b7280;">{label}</div>
            <div style=format!("font-size: 22px; font-weight: 700; color: {color};")>
                {move || format_idr(value.get())}
            </div>
        </div>
    }
}

#[component]
pub fn FinancePage() -> impl IntoView {
    let store = LocalStorageStore;
    let initial = restore_query(
        &store,
        PREFS_KEY,
        ListQuery::new("date", SortOrder::Desc, TransactionFilter::All),
    );
    let controller = RwSignal::new(ListController::<Transaction, TransactionFilter>::new(initial));

    let run = move || pump(controller, api::list_transactions);
    run();

    let totals = RwSignal::new(FinanceTotals::default());
    spawn_local(async move {
        match api::get_finance_totals().await {
            Ok(t) => totals.set(t),
            Err(err) => log::error!("failed to load finance totals: {err}"),
        }
    });

    let persist = move || {
        controller.with_untracked(|c| {
            remember_query(
                &LocalStorageStore,
                PREFS_KEY,
                c.sort_by(),
                c.sort_order(),
                c.limit(),
            );
        });
    };

    let toggle_sort = move |column: &'static str| {
        controller.update(|c| c.toggle_sort(column));
        persist();
        run();
    };

    view! {
        <div class="page">
            <div class="page__header" style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    {icon("finance")}
                    <h1 class="page__title">"Keuangan"</h1>
                </div>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| {
                        controller.update(|c| c.refresh());
                        run();
                    }
                    disabled=Signal::derive(move || controller.with(|c| c.loading()))
                >
                    {icon("refresh")}
                    " Muat Ulang"
                </Button>
            </div>

            <div style="display: flex; gap: 12px; margin-bottom: 16px;">
                <TotalCard label="Pemasukan" value=Signal::derive(move || totals.get().income) color="#16a34a" />
                <TotalCard label="Pengeluaran" value=Signal::derive(move || totals.get().expense) color="#dc2626" />
                <TotalCard label="Saldo" value=Signal::derive(move || totals.get().balance) color="#111827" />
            </div>

            {move || controller.with(|c| c.error().map(|e| e.to_string())).map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="filter-panel" style="display: flex; align-items: center; gap: 16px; margin-bottom: 12px;">
                <SearchInput
                    value=Signal::derive(move || controller.with(|c| c.search().to_string()))
                    on_change=Callback::new(move |text: String| {
                        controller.update(|c| c.search_settled(text));
                        run();
                    })
                    placeholder="Cari deskripsi atau kategori..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        if let Some(filter) = TransactionFilter::from_code(&event_target_value(&ev)) {
                            controller.update(|c| c.set_filter(filter));
                            run();
                        }
                    }
                    prop:value=move || controller.with(|c| c.filter().code().to_string())
                >
                    {TransactionFilter::all().iter().map(|&f| view! {
                        <option value=f.code()>{f.display_name()}</option>
                    }).collect_view()}
                </select>
                <PaginationControls
                    current_page=Signal::derive(move || controller.with(|c| c.page()))
                    total_pages=Signal::derive(move || controller.with(|c| c.total_pages()))
                    total_count=Signal::derive(move || controller.with(|c| c.total()))
                    page_size=Signal::derive(move || controller.with(|c| c.limit()))
                    on_page_change=Callback::new(move |page| {
                        controller.update(|c| c.go_to_page(page));
                        run();
                    })
                    on_page_size_change=Callback::new(move |size| {
                        controller.update(|c| c.set_page_size(size));
                        persist();
                        run();
                    })
                />
            </div>

            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell min_width=120.0>
                            "Tanggal"
                            <span on:click=move |_| toggle_sort("date") style="cursor: pointer;">
                                {move || controller.with(|c| sort_indicator("date", c.sort_by(), c.sort_order()))}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=260.0>"Deskripsi"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Kategori"</TableHeaderCell>
                        <TableHeaderCell min_width=100.0>"Jenis"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>
                            "Jumlah"
                            <span on:click=move |_| toggle_sort("amount") style="cursor: pointer;">
                                {move || controller.with(|c| sort_indicator("amount", c.sort_by(), c.sort_order()))}
                            </span>
                        </TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows: Vec<Transaction> = controller.with(|c| c.rows().to_vec());
                        if rows.is_empty() {
                            let message = if controller.with(|c| c.loading()) {
                                "Memuat..."
                            } else {
                                "Tidak ada data"
                            };
                            return vec![view! {
                                <TableRow>
                                    <TableCell attr:colspan="5">
                                        <TableCellLayout>
                                            <span class="text-muted">{message}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_view()];
                        }
                        rows.into_iter().map(|tx| {
                            let kind_badge = match tx.kind {
                                TransactionKind::Income => view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success><span>"Masuk"</span></Badge>
                                }.into_any(),
                                TransactionKind::Expense => view! {
                                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger><span>"Keluar"</span></Badge>
                                }.into_any(),
                            };
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout>{format_date(tx.date)}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{tx.description.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{tx.category.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{kind_badge}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right"><TableCellLayout>{format_idr(tx.amount)}</TableCellLayout></TableCell>
                                </TableRow>
                            }.into_view()
                        }).collect::<Vec<_>>()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
