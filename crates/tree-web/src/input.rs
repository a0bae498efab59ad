use web_sys as web;

const DOM_DELTA_PIXEL: u32 = 0;
const DOM_DELTA_LINE: u32 = 1;
const PIXELS_PER_LINE: f64 = 40.0;
const LINES_PER_PAGE: f64 = 3.0;

/// Pointer x in CSS pixels relative to the canvas' left edge.
#[inline]
pub fn pointer_css_x(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> f32 {
    let rect = canvas.get_bounding_client_rect();
    (ev.client_x() as f64 - rect.left()) as f32
}

/// Wheel travel in lines; positive means the wheel rolled away from the user.
#[inline]
pub fn wheel_lines(ev: &web::WheelEvent) -> f32 {
    let dy = ev.delta_y();
    let lines = match ev.delta_mode() {
        DOM_DELTA_PIXEL => dy / PIXELS_PER_LINE,
        DOM_DELTA_LINE => dy,
        _ => dy * LINES_PER_PAGE,
    };
    -lines as f32
}
