//! Persisted price ledger table, hidden while empty

use leptos::prelude::*;
use wasm_bindgen::JsValue;

use crate::store::Store;

#[component]
pub fn PriceHistory() -> impl IntoView {
    let store = expect_context::<Store>();

    view! {
        <Show when=move || !store.saved_prices.get().is_empty()>
            <div class="panel price-history">
                <h3>"Saved Price History"</h3>
                <table>
                    <thead>
                        <tr>
                            <th>"Whisky"</th>
                            <th>"Price"</th>
                            <th>"Recorded"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || store.saved_prices.get()
                            key=|record| record.name.clone()
                            children=move |record| {
                                view! {
                                    <tr>
                                        <td>{record.name.clone()}</td>
                                        <td>{format!("${:.2}", record.price)}</td>
                                        <td>{format_timestamp(record.timestamp)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}

fn format_timestamp(ms: f64) -> String {
    let date = js_sys::Date::new(&JsValue::from_f64(ms));
    String::from(date.to_locale_string("en-US", &JsValue::UNDEFINED))
}
