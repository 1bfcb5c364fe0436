use super::api;
use crate::shared::components::{sort_indicator, PaginationControls, SearchInput};
use crate::shared::format::{format_date, format_idr};
use crate::shared::icons::icon;
use crate::shared::listing::{pump, ListController};
use crate::shared::prefs::{remember_query, restore_query, LocalStorageStore};
use contracts::domain::customer::{ActivityFilter, Customer, CustomerInput};
use contracts::shared::listing::{ListQuery, SortOrder};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const PREFS_KEY: &str = "list_prefs:customers";

#[component]
pub fn CustomersPage() -> impl IntoView {
    let store = LocalStorageStore;
    let initial = restore_query(
        &store,
        PREFS_KEY,
        ListQuery::new("date_created", SortOrder::Desc, ActivityFilter::All),
    );
    let controller = RwSignal::new(ListController::<Customer, ActivityFilter>::new(initial));

    let run = move || pump(controller, api::list_customers);
    run();

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

    let on_search = Callback::new(move |text: String| {
        controller.update(|c| c.search_settled(text));
        run();
    });

    let toggle_sort = move |column: &'static str| {
        controller.update(|c| c.toggle_sort(column));
        persist();
        run();
    };

    // Form state (shared by create and edit).
    let show_form = RwSignal::new(false);
    let edit_id = RwSignal::new(None::<i64>);
    let form_error = RwSignal::new(None::<String>);
    let saving = RwSignal::new(false);
    let f_nama = RwSignal::new(String::new());
    let f_alamat = RwSignal::new(String::new());
    let f_telepon = RwSignal::new(String::new());
    let f_telepon_alt = RwSignal::new(String::new());
    let f_telepon_pemesan = RwSignal::new(String::new());
    let f_maps = RwSignal::new(String::new());
    let f_ongkir = RwSignal::new(String::new());

    let open_create = move |_| {
        edit_id.set(None);
        form_error.set(None);
        f_nama.set(String::new());
        f_alamat.set(String::new());
        f_telepon.set(String::new());
        f_telepon_alt.set(String::new());
        f_telepon_pemesan.set(String::new());
        f_maps.set(String::new());
        f_ongkir.set(String::new());
        show_form.set(true);
    };

    let open_edit = move |customer: Customer| {
        edit_id.set(Some(customer.id));
        form_error.set(None);
        f_nama.set(customer.nama);
        f_alamat.set(customer.alamat.unwrap_or_default());
        f_telepon.set(customer.telepon.unwrap_or_default());
        f_telepon_alt.set(customer.telepon_alt.unwrap_or_default());
        f_telepon_pemesan.set(customer.telepon_pemesan.unwrap_or_default());
        f_maps.set(customer.maps.unwrap_or_default());
        f_ongkir.set(
            customer
                .ongkir
                .map(|v| format!("{v}"))
                .unwrap_or_default(),
        );
        show_form.set(true);
    };

    let save = move |_| {
        let nama = f_nama.get_untracked().trim().to_string();
        if nama.is_empty() {
            form_error.set(Some("Nama wajib diisi".to_string()));
            return;
        }
        let opt = |s: String| {
            let s = s.trim().to_string();
            if s.is_empty() { None } else { Some(s) }
        };
        let ongkir = match f_ongkir.get_untracked().trim() {
            "" => None,
            raw => match raw.parse::<f64>() {
                Ok(v) => Some(v),
                Err(_) => {
                    form_error.set(Some("Ongkir harus berupa angka".to_string()));
                    return;
                }
            },
        };
        let input = CustomerInput {
            nama,
            alamat: opt(f_alamat.get_untracked()),
            telepon: opt(f_telepon.get_untracked()),
            telepon_alt: opt(f_telepon_alt.get_untracked()),
            telepon_pemesan: opt(f_telepon_pemesan.get_untracked()),
            maps: opt(f_maps.get_untracked()),
            ongkir,
        };
        saving.set(true);
        spawn_local(async move {
            let result = match edit_id.get_untracked() {
                Some(id) => api::update_customer(id, &input).await,
                None => api::create_customer(&input).await,
            };
            saving.set(false);
            match result {
                Ok(_) => {
                    show_form.set(false);
                    controller.update(|c| c.refresh());
                    run();
                }
                Err(err) => form_error.set(Some(err.to_string())),
            }
        });
    };

    let confirm_deactivate = RwSignal::new(None::<Customer>);
    let deactivate = move |_| {
        let Some(customer) = confirm_deactivate.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::set_customer_active(customer.id, false).await {
                Ok(()) => {
                    confirm_deactivate.set(None);
                    controller.update(|c| c.refresh());
                    run();
                }
                Err(err) => log::error!("failed to deactivate customer: {err}"),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page__header" style="display: flex; align-items: center; justify-content: space-between; margin-bottom: 16px;">
                <div style="display: flex; align-items: center; gap: 10px;">
                    {icon("customers")}
                    <h1 class="page__title">"Pelanggan"</h1>
                    <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                        <span>{move || controller.with(|c| c.total().to_string())}</span>
                    </Badge>
                </div>
                <div style="display: flex; gap: 8px;">
                    <Button appearance=ButtonAppearance::Primary on_click=open_create>
                        {icon("plus")}
                        " Tambah Pelanggan"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| {
                            controller.update(|c| c.refresh());
                            run();
                        }
                        disabled=Signal::derive(move || controller.with(|c| c.loading()))
                    >
                        {icon("refresh")}
                        {move || if controller.with(|c| c.loading()) { " Memuat..." } else { " Muat Ulang" }}
                    </Button>
                </div>
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
                    on_change=on_search
                    placeholder="Cari nama atau telepon..."
                />
                <select
                    class="filter-select"
                    on:change=move |ev| {
                        if let Some(filter) = ActivityFilter::from_code(&event_target_value(&ev)) {
                            controller.update(|c| c.set_filter(filter));
                            run();
                        }
                    }
                    prop:value=move || controller.with(|c| c.filter().code().to_string())
                >
                    {ActivityFilter::all().iter().map(|&f| view! {
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
                        <TableHeaderCell resizable=true min_width=200.0>
                            "Nama"
                            <span on:click=move |_| toggle_sort("nama") style="cursor: pointer;">
                                {move || controller.with(|c| sort_indicator("nama", c.sort_by(), c.sort_order()))}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell resizable=true min_width=240.0>"Alamat"</TableHeaderCell>
                        <TableHeaderCell min_width=140.0>"Telepon"</TableHeaderCell>
                        <TableHeaderCell min_width=110.0>"Ongkir"</TableHeaderCell>
                        <TableHeaderCell min_width=90.0>"Status"</TableHeaderCell>
                        <TableHeaderCell min_width=130.0>
                            "Terdaftar"
                            <span on:click=move |_| toggle_sort("date_created") style="cursor: pointer;">
                                {move || controller.with(|c| sort_indicator("date_created", c.sort_by(), c.sort_order()))}
                            </span>
                        </TableHeaderCell>
                        <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        let rows: Vec<Customer> = controller.with(|c| c.rows().to_vec());
                        if rows.is_empty() {
                            let message = if controller.with(|c| c.loading()) {
                                "Memuat..."
                            } else {
                                "Tidak ada data"
                            };
                            return vec![view! {
                                <TableRow>
                                    <TableCell attr:colspan="7">
                                        <TableCellLayout>
                                            <span class="text-muted">{message}</span>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_view()];
                        }
                        rows.into_iter().map(|customer| {
                            let edit_target = customer.clone();
                            let deactivate_target = customer.clone();
                            view! {
                                <TableRow>
                                    <TableCell><TableCellLayout truncate=true>{customer.nama.clone()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout truncate=true>{customer.alamat.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCell><TableCellLayout>{customer.telepon.clone().unwrap_or_default()}</TableCellLayout></TableCell>
                                    <TableCell class="table__cell--right">
                                        <TableCellLayout>
                                            {customer.ongkir.map(format_idr).unwrap_or_default()}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            {if customer.is_active {
                                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success><span>"Aktif"</span></Badge> }.into_any()
                                            } else {
                                                view! { <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger><span>"Nonaktif"</span></Badge> }.into_any()
                                            }}
                                        </TableCellLayout>
                                    </TableCell>
                                    <TableCell><TableCellLayout>{format_date(customer.date_created.date_naive())}</TableCellLayout></TableCell>
                                    <TableCell>
                                        <TableCellLayout>
                                            <button
                                                class="row-action"
                                                title="Ubah"
                                                on:click=move |_| open_edit(edit_target.clone())
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="row-action"
                                                title="Nonaktifkan"
                                                on:click=move |_| confirm_deactivate.set(Some(deactivate_target.clone()))
                                            >
                                                {icon("trash")}
                                            </button>
                                        </TableCellLayout>
                                    </TableCell>
                                </TableRow>
                            }.into_view()
                        }).collect::<Vec<_>>()
                    }}
                </TableBody>
            </Table>

            <Show when=move || show_form.get() fallback=|| view! {}>
                <div class="modal-overlay">
                    <div class="modal-dialog">
                        <h3>{move || if edit_id.get().is_some() { "Ubah Pelanggan" } else { "Tambah Pelanggan" }}</h3>
                        {move || form_error.get().map(|e| view! {
                            <div class="warning-box warning-box--error">
                                <span class="warning-box__text">{e}</span>
                            </div>
                        })}
                        <div class="form-group">
                            <Label>"Nama *"</Label>
                            <Input value=f_nama placeholder="Nama pelanggan" />
                        </div>
                        <div class="form-group">
                            <Label>"Alamat"</Label>
                            <Input value=f_alamat placeholder="Alamat lengkap" />
                        </div>
                        <div class="form-group">
                            <Label>"Telepon"</Label>
                            <Input value=f_telepon placeholder="08..." />
                        </div>
                        <div class="form-group">
                            <Label>"Telepon alternatif"</Label>
                            <Input value=f_telepon_alt />
                        </div>
                        <div class="form-group">
                            <Label>"Telepon pemesan"</Label>
                            <Input value=f_telepon_pemesan />
                        </div>
                        <div class="form-group">
                            <Label>"Link Maps"</Label>
                            <Input value=f_maps placeholder="https://maps.google.com/..." />
                        </div>
                        <div class="form-group">
                            <Label>"Ongkir (Rp)"</Label>
                            <Input value=f_ongkir placeholder="15000" />
                        </div>
                        <div class="modal-actions">
                            <Button
                                appearance=ButtonAppearance::Primary
                                on_click=save
                                disabled=Signal::derive(move || saving.get())
                            >
                                {move || if saving.get() { "Menyimpan..." } else { "Simpan" }}
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| show_form.set(false)
                            >
                                "Batal"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>

            <Show when=move || confirm_deactivate.get().is_some() fallback=|| view! {}>
                <div class="modal-overlay">
                    <div class="modal-dialog">
                        <h3>"Nonaktifkan pelanggan?"</h3>
                        <p>
                            {move || confirm_deactivate.get().map(|c| c.nama).unwrap_or_default()}
                            " tidak akan muncul lagi di daftar aktif."
                        </p>
                        <div class="modal-actions">
                            <Button appearance=ButtonAppearance::Primary on_click=deactivate>
                                "Nonaktifkan"
                            </Button>
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| confirm_deactivate.set(None)
                            >
                                "Batal"
                            </Button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
