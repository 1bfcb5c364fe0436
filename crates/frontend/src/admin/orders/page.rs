use super::api;
use crate::shared::components::{sort_indicator, PaginationControls, SearchInput};
use crate::shared::format::{format_date, format_idr};
use crate::shared::icons::icon;
use crate::shared::listing::{pump, ListController};
use crate::shared::prefs::{remember_query, restore_query, LocalStorageStore};
use contracts::domain::order::{OrderFilter, OrderStats, OrderStatus, OrderSummary};
use contracts::shared::listing::{ListQuery, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const PREFS_KEY: &str = "list_prefs:orders";

fn status_badge(status: OrderStatus) -> AnyView {
    let color = match status {
        OrderStatus::Pending => BadgeColor::Warning,
        OrderStatus::Processing => BadgeColor::Brand,
        OrderStatus::Completed => BadgeColor::Success,
        OrderStatus::Cancelled => BadgeColor::Danger,
    };
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            <span>{status.display_name()}</span>
        </Badge>
    }
    .into_any()
}

#[component]
fn StatCard(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="stat-card" style="flex: 1; background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 16px;">
            <div style="font-size: 13px; color: #6b7280;">{label}</div>
            <div style="font-size: 22px; font-weight: 700;">{move || value.get()}</div>
        </div>
    }
}

#[component]
pub fn OrdersPage() -> impl IntoView {
    let store = LocalStorageStore;
    let initial = restore_query(
        &store,
        PREFS_KEY,
        ListQuery::new("date", SortOrder::Desc, OrderFilter::All),
    );
    let controller = RwSignal::new(ListController::<OrderSummary, OrderFilter>::new(initial));

    let run = move || pump(controller, api::list_orders);
    run();

    let stats = RwSignal::new(OrderStats::default());
    spawn_local(async move {
        match api::get_order_stats().await {
            Ok(s) => stats.set(s),
            Err(err) => log::error!("failed to load order stats: {err}"),
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
                    {icon("orders")}
                    <h1 class="page__title">"Pesanan"</h1>
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
                <StatCard label="Total Pesanan" value=Signal::derive(move || stats.get().total_orders.to_string()) />
                <StatCard label="Pending" value=Signal::derive(move || stats.get().pending.to_string()) />
                <StatCard label="Diproses" value=Signal::derive(move || stats.get().processing.to_string()) />
                <StatCard label="Selesai" value=Signal::derive(move || stats.get().completed.to_string()) />
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
                    placeholder="Cari pelanggan atau nomor pesanan..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        if let Some(filter) = OrderFilter::from_code(&event_target_value(&ev)) {
                            controller.update(|c| c.set_filter(filter));
                            run();
                        }
                    }
                    prop:value=move || controller.with(|c| c.filter().code().to_string())
                >
                    {OrderFilter::all().iter().map(|&f| view! {
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
                        <TableHeaderCell min_width=120.0>"No. Pesanan"</TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=200.0>
                            "Pelanggan"
                            <span on:click=move |_| toggle_sort("customer") style="cursor: pointer;">
                                {move || controller.with(|c| sort_indicator("customer", c.sort_by(), c.sort_order()))}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=80.0>"Item"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>
                            "Total"
                            <span on:click=move |_| toggle_sort("total") style="cursor: pointer;">
                                {move || controller.with(|c| sort_indicator("total", c.sort_by(), c.sort_order()))}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=120.0>
                            "Tanggal"
                            <span on:click=move |_| toggle_sort("date") style="cursor: pointer;">
                                {move || controller.with(|c| sort_indicator("date", c.sort_by(), c.sort_order()))}
                            </span>
                        </TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows: Vec<OrderSummary> = controller.with(|c| c.rows().to_vec());
                        if rows.is_empty() {
                            let message = if controller.with(|c| c.loading()) {
                                "Memuat..."
                            } else {
                                "Tidak ada data"
                            };
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
                        rows.into_iter().map(|order| view! {
                            <TableRow>
                                <TableCell><TableCellLayout>{order.id.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout truncate=true>{order.customer.clone()}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{order.items.to_string()}</TableCellLayout></TableCell>
                                <TableCell class="table__cell--right"><TableCellLayout>{format_idr(order.total)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{status_badge(order.status)}</TableCellLayout></TableCell>
                                <TableCell><TableCellLayout>{format_date(order.date)}</TableCellLayout></TableCell>
                            </TableRow>
                        }.into_view()).collect::<Vec<_>>()
                    }}
                </TableBody>
            </Table>
        </div>
    }
}
