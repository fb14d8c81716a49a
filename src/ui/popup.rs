/// Popup UI for the Extension Hub toolbar panel

use std::rc::Rc;

use patternfly_yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::actions::QUICK_ACTIONS;
use crate::panel::{PanelMsg, PanelState};
use crate::tab_data::TabInfo;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn queryActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn openTab(url: &str) -> Result<(), JsValue>;
}

/// Clock refresh period in milliseconds.
const CLOCK_PERIOD_MS: i32 = 1_000;

impl Reducible for PanelState {
    type Action = PanelMsg;

    fn reduce(self: Rc<Self>, msg: PanelMsg) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(msg);
        Rc::new(next)
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let panel = use_reducer(|| PanelState::new(js_sys::Date::now()));

    // Mount: start the clock and issue the one active-tab query.
    // Cleanup stops the clock and marks the panel closed so a query
    // completing afterwards cannot write into destroyed state.
    {
        let panel = panel.clone();
        use_effect_with((), move |_| {
            log::info!("Hello from the popup!");

            let tick = {
                let panel = panel.clone();
                Closure::wrap(Box::new(move || {
                    panel.dispatch(PanelMsg::Tick(js_sys::Date::now()));
                }) as Box<dyn FnMut()>)
            };
            let interval = web_sys::window().and_then(|window| {
                window
                    .set_interval_with_callback_and_timeout_and_arguments_0(
                        tick.as_ref().unchecked_ref(),
                        CLOCK_PERIOD_MS,
                    )
                    .ok()
            });

            {
                let panel = panel.clone();
                spawn_local(async move {
                    match query_active_tab().await {
                        Ok(tabs) => {
                            if let Some(tab) = tabs.first() {
                                log::debug!("Active tab url: {:?}", tab.url);
                            }
                            panel.dispatch(PanelMsg::ActiveTab(tabs));
                        }
                        Err(e) => {
                            // Degrade to the placeholder display, no retry
                            log::warn!("Active tab query failed: {}", e);
                        }
                    }
                });
            }

            move || {
                if let Some(id) = interval {
                    if let Some(window) = web_sys::window() {
                        window.clear_interval_with_handle(id);
                    }
                }
                drop(tick);
                panel.dispatch(PanelMsg::Closed);
            }
        });
    }

    html! {
        <div class="popup-root">
            <header class="popup-header">
                <div class="popup-brand">
                    <img src="/icon-with-shadow.svg" class="popup-icon" />
                    <div>
                        <h1 class="popup-title">{"Extension Hub"}</h1>
                        <p class="popup-tagline">{"Your productivity companion"}</p>
                    </div>
                </div>
                <div class="popup-clock">
                    <div class="clock-time">{format_time(panel.current_time)}</div>
                    <div class="clock-date">{format_date(panel.current_time)}</div>
                </div>
            </header>

            <section class="current-tab-section">
                <h3 class="section-title">{"Current Tab"}</h3>
                <div class="current-tab-card">
                    <span class="status-dot"></span>
                    <span class="current-tab-title">{panel.display_title()}</span>
                </div>
            </section>

            <section class="quick-actions-section">
                <h3 class="section-title">{"Quick Actions"}</h3>
                <div class="quick-actions-grid">
                    {for QUICK_ACTIONS.iter().map(|action| html! {
                        <Button onclick={open_tab_callback(action.url)} variant={ButtonVariant::Secondary}>
                            <div class="quick-action">
                                <div class="quick-action-icon">{action.icon}</div>
                                <div class="quick-action-name">{action.name}</div>
                            </div>
                        </Button>
                    })}
                </div>
            </section>

            <p class="footer-popup">
                {"Extension Hub v0.1.0"}
            </p>
        </div>
    }
}

// Helper functions

/// Fire-and-forget open of an internal browser page. Failures of the
/// host call are not observed by the UI.
fn open_tab_callback(url: &'static str) -> Callback<MouseEvent> {
    Callback::from(move |_| {
        spawn_local(async move {
            let _ = openTab(url).await;
        });
    })
}

async fn query_active_tab() -> Result<Vec<TabInfo>, String> {
    match queryActiveTab().await {
        Ok(tabs_js) => {
            let tabs: Vec<TabInfo> = serde_wasm_bindgen::from_value(tabs_js)
                .map_err(|e| format!("Failed to parse tabs: {:?}", e))?;
            Ok(tabs)
        }
        Err(e) => Err(format!("Failed to query active tab: {:?}", e)),
    }
}

fn format_time(timestamp_ms: f64) -> String {
    format_locale(timestamp_ms, &[("hour", "2-digit"), ("minute", "2-digit")])
}

fn format_date(timestamp_ms: f64) -> String {
    format_locale(
        timestamp_ms,
        &[("weekday", "short"), ("month", "short"), ("day", "numeric")],
    )
}

/// Format a timestamp through Intl.DateTimeFormat in the user's
/// default locale, rendering only the requested components.
fn format_locale(timestamp_ms: f64, parts: &[(&str, &str)]) -> String {
    let options = js_sys::Object::new();
    for (key, value) in parts {
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }

    let date = js_sys::Date::new(&JsValue::from_f64(timestamp_ms));
    js_sys::Intl::DateTimeFormat::new(&js_sys::Array::new(), &options)
        .format()
        .call1(&JsValue::NULL, &date)
        .ok()
        .and_then(|formatted| formatted.as_string())
        .unwrap_or_default()
}
