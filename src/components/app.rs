use super::{
    controls_panel::ControlsPanel, event_table::EventTable, legend::RegionLegend,
    touch_area::TouchArea,
};
use crate::model::{EventLog, LogAction};
use crate::state::ViewerSettings;
use crate::util::{clog, clog_json};
use yew::prelude::*;

fn max_touch_points() -> u32 {
    web_sys::window()
        .map(|w| w.navigator().max_touch_points())
        .unwrap_or(0)
        .max(0) as u32
}

#[function_component(App)]
pub fn app() -> Html {
    let log = use_reducer(EventLog::default);
    let settings = use_state(ViewerSettings::default);
    // Read once at load
    let max_points = use_state(max_touch_points);

    let on_clear = {
        let log = log.clone();
        Callback::from(move |_| log.dispatch(LogAction::Clear))
    };
    let on_dump = {
        let log = log.clone();
        Callback::from(move |_| {
            clog(&format!("event log: {} records", log.len()));
            clog_json("event log", &*log);
            if let Some(head) = log.head() {
                clog_json("newest", head);
            }
        })
    };
    let on_toggle_logging = {
        let settings = settings.clone();
        Callback::from(move |_| {
            settings.set(ViewerSettings {
                console_logging: !settings.console_logging,
            })
        })
    };

    html! {
        <div style="font-family:sans-serif; color:#e6edf3; background:#0e1116; min-height:100vh; padding:12px;">
            <div>{ format!("Max touch points: {}", *max_points) }</div>
            <RegionLegend />
            <TouchArea log={log.dispatcher()} console_logging={settings.console_logging} />
            <ControlsPanel
                record_count={log.len()}
                console_logging={settings.console_logging}
                on_clear={on_clear}
                on_dump={on_dump}
                on_toggle_logging={on_toggle_logging}
            />
            <div style="overflow-x:auto;">
                <EventTable log={log.clone()} max_touch_points={*max_points} />
            </div>
        </div>
    }
}
