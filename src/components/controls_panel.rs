use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub record_count: usize,
    pub console_logging: bool,
    pub on_clear: Callback<()>,
    pub on_dump: Callback<()>,
    pub on_toggle_logging: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let clear_cb = {
        let cb = props.on_clear.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let dump_cb = {
        let cb = props.on_dump.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let logging_cb = {
        let cb = props.on_toggle_logging.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="display:flex; align-items:center; gap:8px; margin:6px 0;">
        <button onclick={clear_cb}>{"Clear"}</button>
        <button onclick={dump_cb}>{"Dump log"}</button>
        <label style="font-size:12px; display:flex; align-items:center; gap:4px;">
            <input type="checkbox" checked={props.console_logging} onchange={logging_cb} />
            {"Console logging"}
        </label>
        <span style="font-size:11px; opacity:0.7;">{ format!("{} records", props.record_count) }</span>
    </div>}
}
