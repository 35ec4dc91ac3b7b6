use yew::prelude::*;

use crate::model::{header_groups, table_rows, EventLog, SourceTag, TouchPoint};

#[derive(Properties, PartialEq, Clone)]
pub struct EventTableProps {
    pub log: UseReducerHandle<EventLog>,
    pub max_touch_points: u32,
}

const CELL: &str = "padding:2px 6px; border:1px solid #30363d; text-align:right; font-variant-numeric:tabular-nums;";

fn indicator(color: Option<&'static str>) -> Html {
    let bg = color.unwrap_or("transparent");
    html! { <td style={CELL}><span style={format!("display:inline-block; width:14px; height:14px; background:{};", bg)}></span></td> }
}

#[function_component(EventTable)]
pub fn event_table(props: &EventTableProps) -> Html {
    let groups = header_groups(&props.log, props.max_touch_points);
    let rows = table_rows(&props.log);
    html! {
        <table style="border-collapse:collapse; font-size:12px;">
            <thead>
                <tr>
                    <th colspan="3" style={CELL}></th>
                    <th colspan="3" style={CELL}>{"Target"}</th>
                    if groups > 0 {
                        <th colspan={(groups * TouchPoint::COLUMNS.len()).to_string()} style={CELL}>{"TouchList"}</th>
                    }
                </tr>
                <tr>
                    <th style={CELL}>{"#"}</th>
                    <th style={CELL}>{"Event Type"}</th>
                    <th style={CELL}>{"Count"}</th>
                    { for SourceTag::ALL.iter().map(|t| html!{ <th style={CELL}>{ t.label() }</th> }) }
                    { for (0..groups).flat_map(|_| TouchPoint::COLUMNS.iter()).map(|c| html!{ <th style={CELL}>{ *c }</th> }) }
                </tr>
            </thead>
            <tbody>
                { for rows.into_iter().map(|row| html!{
                    <tr key={row.index}>
                        <td style={CELL}>{ row.index.to_string() }</td>
                        <td style={CELL}>{ row.event_type }</td>
                        <td style={CELL}>{ row.count }</td>
                        { for row.indicators.into_iter().map(indicator) }
                        { for row.groups.into_iter().flatten().map(|v| html!{ <td style={CELL}>{ v }</td> }) }
                    </tr>
                }) }
            </tbody>
        </table>
    }
}
