use std::cell::RefCell;
use std::f64::consts::PI;
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};
use yew::prelude::*;
use wheel_shared::geometry::{
    ease_out_quart, pointer_angle, polar_point, sector_fill, to_canvas_radians, Sector,
};
use wheel_shared::WheelError;

const LABEL_RADIUS_RATIO: f64 = 0.9;
const POINTER_LENGTH_RATIO: f64 = 0.8;
const LABEL_FONT: &str = "bold 16px 'Segoe UI', Roboto, system-ui, sans-serif";

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub sectors: Vec<Sector>,
    pub rotation: f64,
    pub is_spinning: bool,
    pub duration_ms: u32,
    pub on_missing_anchor: Callback<WheelError>,
}

fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, WheelError> {
    canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|context| context.dyn_into::<CanvasRenderingContext2d>().ok())
        .ok_or(WheelError::MissingAnchor("canvas 2d context"))
}

fn draw_wheel(
    context: &CanvasRenderingContext2d,
    width: f64,
    height: f64,
    sectors: &[Sector],
    rotation: f64,
) -> Result<(), WheelError> {
    let drawing = WheelError::MissingAnchor("canvas drawing surface");
    let center_x = width / 2.0;
    let center_y = height / 2.0;
    let radius = width.min(height) / 2.0 - 10.0;

    context.clear_rect(0.0, 0.0, width, height);

    for (index, sector) in sectors.iter().enumerate() {
        context.begin_path();
        context.move_to(center_x, center_y);
        context
            .arc(
                center_x,
                center_y,
                radius,
                to_canvas_radians(sector.start_angle),
                to_canvas_radians(sector.end_angle),
            )
            .map_err(|_| drawing.clone())?;
        context.close_path();
        context.set_fill_style_str(sector_fill(index));
        context.fill();
        context.set_stroke_style_str("white");
        context.set_line_width(1.0);
        context.stroke();
    }

    // Labels: black text with a white outline
    context.set_font(LABEL_FONT);
    context.set_text_align("center");
    context.set_text_baseline("middle");
    context.set_line_width(3.0);
    for sector in sectors {
        let (x, y) = polar_point(center_x, center_y, radius * LABEL_RADIUS_RATIO, sector.mid_angle());
        context.set_stroke_style_str("white");
        context
            .stroke_text(&sector.label, x, y)
            .map_err(|_| drawing.clone())?;
        context.set_fill_style_str("black");
        context
            .fill_text(&sector.label, x, y)
            .map_err(|_| drawing.clone())?;
    }

    draw_pointer(context, center_x, center_y, radius, rotation).map_err(|_| drawing)
}

fn draw_pointer(
    context: &CanvasRenderingContext2d,
    center_x: f64,
    center_y: f64,
    radius: f64,
    rotation: f64,
) -> Result<(), wasm_bindgen::JsValue> {
    let angle = pointer_angle(rotation);
    let length = radius * POINTER_LENGTH_RATIO;
    let (tip_x, tip_y) = polar_point(center_x, center_y, length, angle);
    let (left_x, left_y) = polar_point(center_x, center_y, 12.0, angle - 90.0);
    let (right_x, right_y) = polar_point(center_x, center_y, 12.0, angle + 90.0);

    context.begin_path();
    context.move_to(left_x, left_y);
    context.line_to(tip_x, tip_y);
    context.line_to(right_x, right_y);
    context.close_path();
    context.set_fill_style_str("#dc2626");
    context.fill();
    context.set_stroke_style_str("#7f1d1d");
    context.set_line_width(1.5);
    context.stroke();

    // Hub
    context.begin_path();
    context.arc(center_x, center_y, 14.0, 0.0, 2.0 * PI)?;
    context.set_fill_style_str("#7f1d1d");
    context.fill();
    Ok(())
}

// One pointer sweep from the previous rotation to the new one
struct SpinAnimation {
    context: CanvasRenderingContext2d,
    width: f64,
    height: f64,
    sectors: Vec<Sector>,
    from: f64,
    to: f64,
    started_at: f64,
    duration_ms: f64,
    displayed: Rc<RefCell<f64>>,
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

fn schedule_frame(animation: Rc<SpinAnimation>) {
    let next = animation.clone();
    let handle = request_animation_frame(move |_| {
        let elapsed = js_sys::Date::now() - next.started_at;
        let progress = if next.duration_ms > 0.0 {
            (elapsed / next.duration_ms).min(1.0)
        } else {
            1.0
        };
        let rotation = next.from + (next.to - next.from) * ease_out_quart(progress);
        *next.displayed.borrow_mut() = rotation;

        if let Err(e) = draw_wheel(&next.context, next.width, next.height, &next.sectors, rotation) {
            log::warn!("Failed to draw wheel frame: {}", e);
            return;
        }
        if progress < 1.0 {
            schedule_frame(next.clone());
        }
    });
    *animation.frame.borrow_mut() = Some(handle);
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();
    let displayed = use_mut_ref(|| props.rotation);
    let frame = use_mut_ref(|| None::<AnimationFrame>);

    {
        let canvas_ref = canvas_ref.clone();
        let displayed = displayed.clone();
        let frame = frame.clone();
        let on_missing_anchor = props.on_missing_anchor.clone();
        let duration_ms = props.duration_ms as f64;

        use_effect_with(
            (props.sectors.clone(), props.rotation),
            move |(sectors, rotation)| {
                let target = *rotation;
                let canvas = canvas_ref.cast::<HtmlCanvasElement>();
                let prepared = canvas
                    .ok_or(WheelError::MissingAnchor("canvas"))
                    .and_then(|canvas| {
                        context_2d(&canvas).map(|context| (canvas, context))
                    });

                match prepared {
                    Ok((canvas, context)) => {
                        let width = canvas.width() as f64;
                        let height = canvas.height() as f64;
                        let from = *displayed.borrow();

                        if (target - from).abs() < f64::EPSILON {
                            if let Err(e) = draw_wheel(&context, width, height, sectors, target) {
                                on_missing_anchor.emit(e);
                            }
                        } else {
                            schedule_frame(Rc::new(SpinAnimation {
                                context,
                                width,
                                height,
                                sectors: sectors.clone(),
                                from,
                                to: target,
                                started_at: js_sys::Date::now(),
                                duration_ms,
                                displayed: displayed.clone(),
                                frame: frame.clone(),
                            }));
                        }
                    }
                    Err(e) => on_missing_anchor.emit(e),
                }

                move || {
                    frame.borrow_mut().take();
                }
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(255, 165, 0, 0.5));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}
