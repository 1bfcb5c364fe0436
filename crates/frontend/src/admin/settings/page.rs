use crate::app::use_session;
use crate::shared::icons::icon;
use crate::shared::prefs::{load_list_prefs, LocalStorageStore, PreferenceStore};
use leptos::prelude::*;
use thaw::*;

const LIST_PREF_KEYS: [(&str, &str); 3] = [
    ("list_prefs:customers", "Pelanggan"),
    ("list_prefs:orders", "Pesanan"),
    ("list_prefs:finance", "Keuangan"),
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = use_session();

    // Bumped to re-read localStorage after a reset.
    let version = RwSignal::new(0u32);

    let reset_prefs = move |_| {
        let store = LocalStorageStore;
        for (key, _) in LIST_PREF_KEYS {
            store.remove(key);
        }
        version.update(|v| *v += 1);
    };

    view! {
        <div class="page">
            <div class="page__header" style="display: flex; align-items: center; gap: 10px; margin-bottom: 16px;">
                {icon("settings")}
                <h1 class="page__title">"Pengaturan"</h1>
            </div>

            <div style="background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; max-width: 560px; margin-bottom: 16px;">
                <h3 style="margin-top: 0;">"Profil"</h3>
                {move || match session.profile.get() {
                    Some(profile) => view! {
                        <div>
                            <div style="font-weight: 600;">{profile.display_name.clone()}</div>
                            <div style="color: #6b7280;">{profile.email.clone()}</div>
                            <div style="margin-top: 8px;">
                                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                    <span>{profile.role.display_name()}</span>
                                </Badge>
                            </div>
                        </div>
                    }.into_any(),
                    None => view! { <span class="text-muted">"Memuat profil..."</span> }.into_any(),
                }}
            </div>

            <div style="background: white; border: 1px solid #e5e7eb; border-radius: 8px; padding: 20px; max-width: 560px;">
                <h3 style="margin-top: 0;">"Preferensi Daftar"</h3>
                <p style="color: #6b7280; font-size: 14px;">
                    "Urutan kolom dan ukuran halaman yang tersimpan per daftar."
                </p>
                <table style="width: 100%; font-size: 14px; border-collapse: collapse;">
                    <thead>
                        <tr style="text-align: left; color: #6b7280;">
                            <th style="padding: 6px 0;">"Daftar"</th>
                            <th>"Kolom"</th>
                            <th>"Arah"</th>
                            <th>"Per halaman"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            version.get();
                            LIST_PREF_KEYS.iter().map(|&(key, label)| {
                                match load_list_prefs(&LocalStorageStore, key) {
                                    Some(prefs) => view! {
                                        <tr>
                                            <td style="padding: 6px 0;">{label}</td>
                                            <td>{prefs.sort_by.clone()}</td>
                                            <td>{prefs.sort_order.as_str()}</td>
                                            <td>{prefs.limit.to_string()}</td>
                                        </tr>
                                    }.into_any(),
                                    None => view! {
                                        <tr>
                                            <td style="padding: 6px 0;">{label}</td>
                                            <td colspan="3" class="text-muted">"bawaan"</td>
                                        </tr>
                                    }.into_any(),
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
                <div style="margin-top: 12px;">
                    <Button appearance=ButtonAppearance::Secondary on_click=reset_prefs>
                        "Kembalikan ke Bawaan"
                    </Button>
                </div>
            </div>
        </div>
    }
}
