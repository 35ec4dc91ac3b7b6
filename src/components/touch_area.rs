use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlElement, Node, Touch, TouchEvent};
use yew::prelude::*;

use crate::model::{EventKind, EventLog, EventRecord, LogAction, SourceTag, TouchPoint};
use crate::state::RegionRegistry;
use crate::util::clog_json;

#[derive(Properties, PartialEq, Clone)]
pub struct TouchAreaProps {
    pub log: UseReducerDispatcher<EventLog>,
    pub console_logging: bool,
}

// web-sys binds the coordinate and radius getters as i32; read the doubles directly
fn touch_f64(t: &Touch, name: &str) -> f64 {
    js_sys::Reflect::get(t, &JsValue::from_str(name))
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

fn snapshot(t: &Touch) -> TouchPoint {
    TouchPoint::from_dom_fields(|name| match name {
        "rotationAngle" => t.rotation_angle() as f64,
        _ => touch_f64(t, name),
    })
}

/// Log action for a native event, `None` for event types that are not recorded.
fn record_action(
    event_type: &str,
    tag: Option<SourceTag>,
    touch_points: Vec<TouchPoint>,
) -> Option<LogAction> {
    let kind = EventKind::from_dom_name(event_type)?;
    Some(LogAction::Record(EventRecord::new(kind, tag, touch_points)))
}

// Platform index order is kept as-is
fn touch_points(e: &TouchEvent) -> Vec<TouchPoint> {
    let list = e.touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| snapshot(&t))
        .collect()
}

fn region_style(tag: SourceTag, inset: u32) -> String {
    format!(
        "position:absolute; inset:{}px; border:2px solid {}; border-radius:6px; padding:6px; font-weight:600; color:#e6edf3; background:rgba(22,27,34,0.6); touch-action:none; user-select:none;",
        inset,
        tag.color()
    )
}

/// Three nested regions A > B > C with native touch listeners.
#[function_component(TouchArea)]
pub fn touch_area(props: &TouchAreaProps) -> Html {
    let ref_a = use_node_ref();
    let ref_b = use_node_ref();
    let ref_c = use_node_ref();
    let logging_flag = use_mut_ref(|| props.console_logging);

    // Listeners live for the whole mount; mirror the changing flag into a cell they read
    {
        let logging_flag = logging_flag.clone();
        let flag = props.console_logging;
        use_effect_with(flag, move |_| {
            *logging_flag.borrow_mut() = flag;
            || ()
        });
    }

    {
        let regions = [
            (ref_a.clone(), SourceTag::A),
            (ref_b.clone(), SourceTag::B),
            (ref_c.clone(), SourceTag::C),
        ];
        let dispatcher = props.log.clone();
        use_effect_with((), move |_| {
            let mut registry: RegionRegistry<HtmlElement> = RegionRegistry::default();
            for (node_ref, tag) in regions.iter() {
                if let Some(el) = node_ref.cast::<HtmlElement>() {
                    registry.register(el, *tag);
                }
            }
            let registry = std::rc::Rc::new(registry);

            let touch_cb = {
                let registry = registry.clone();
                Closure::wrap(Box::new(move |e: TouchEvent| {
                    e.prevent_default();
                    e.stop_propagation();
                    let tag = e
                        .target()
                        .and_then(|t| t.dyn_into::<Node>().ok())
                        .and_then(|node| registry.resolve(|el| el.contains(Some(&node))));
                    let Some(action) = record_action(&e.type_(), tag, touch_points(&e)) else {
                        return;
                    };
                    if *logging_flag.borrow() {
                        if let LogAction::Record(record) = &action {
                            clog_json(record.kind.dom_name(), record);
                        }
                    }
                    dispatcher.dispatch(action);
                }) as Box<dyn FnMut(_)>)
            };
            for el in registry.handles() {
                for kind in EventKind::ALL {
                    el.add_event_listener_with_callback(
                        kind.dom_name(),
                        touch_cb.as_ref().unchecked_ref(),
                    )
                    .ok();
                }
            }

            // Cleanup
            move || {
                for el in registry.handles() {
                    for kind in EventKind::ALL {
                        let _ = el.remove_event_listener_with_callback(
                            kind.dom_name(),
                            touch_cb.as_ref().unchecked_ref(),
                        );
                    }
                }
                let _keep_alive = &touch_cb;
            }
        });
    }

    html! {
        <div style="position:relative; width:100%; max-width:480px; height:320px; margin:12px 0;">
            <div ref={ref_a} style={region_style(SourceTag::A, 0)}>
                { SourceTag::A.label() }
                <div ref={ref_b} style={region_style(SourceTag::B, 36)}>
                    { SourceTag::B.label() }
                    <div ref={ref_c} style={region_style(SourceTag::C, 36)}>{ SourceTag::C.label() }</div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touch_events_become_fresh_records() {
        let point = TouchPoint {
            client_x: 40.5,
            radius_x: 11.5,
            ..TouchPoint::default()
        };
        let action = record_action("touchmove", Some(SourceTag::B), vec![point]);
        assert_eq!(
            action,
            Some(LogAction::Record(EventRecord {
                kind: EventKind::TouchMove,
                tag: Some(SourceTag::B),
                touch_points: vec![point],
                repeat_count: 0,
            }))
        );
    }

    #[test]
    fn other_event_types_are_not_recorded() {
        assert_eq!(record_action("touchcancel", Some(SourceTag::A), vec![]), None);
        assert_eq!(record_action("click", None, vec![]), None);
    }
}
