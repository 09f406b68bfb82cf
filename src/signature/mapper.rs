use crate::foundation::core::{DisplayRect, Point, Resolution};

/// Map a viewport position into surface drawing units.
///
/// `x = (event_x - rect.left) * (res.width / rect.width)`, likewise for `y`. An unmounted surface
/// (`rect == None`) or a degenerate rect maps everything to the origin.
pub fn map_to_surface(position: Point, rect: Option<DisplayRect>, res: Resolution) -> Point {
    let Some(rect) = rect.filter(|r| !r.is_degenerate()) else {
        return Point::ORIGIN;
    };
    let scale_x = f64::from(res.width) / rect.width;
    let scale_y = f64::from(res.height) / rect.height;
    Point::new(
        (position.x - rect.left) * scale_x,
        (position.y - rect.top) * scale_y,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/signature/mapper.rs"]
mod tests;
