use yew::prelude::*;

use crate::model::SourceTag;

#[derive(Properties, PartialEq, Clone)]
pub struct LegendRowProps {
    pub tag: SourceTag,
}

#[function_component(LegendRow)]
pub fn legend_row(props: &LegendRowProps) -> Html {
    html! { <span style="display:inline-flex; align-items:center; gap:4px;"> <span style={format!("display:inline-block; width:12px; height:12px; background:{}; border:1px solid #30363d; border-radius:2px;", props.tag.color())}></span> <span>{ props.tag.label() }</span> </span> }
}

#[function_component(RegionLegend)]
pub fn region_legend() -> Html {
    html! { <div style="display:flex; gap:12px; font-size:12px;">{ for SourceTag::ALL.iter().map(|t| html!{ <LegendRow tag={*t} /> }) }</div> }
}
