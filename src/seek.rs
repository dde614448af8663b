//! Conversions between a horizontal pixel offset in a seek-bar element and
//! a time offset in the video, e.g. 342px in a 1000px wide element is 171s
//! into a 500s video.
//!
//! Widths and durations must be finite and strictly positive; anything else
//! is rejected with [`SeekError::InvalidDimension`] instead of producing
//! `inf`/`NaN`.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SeekError {
    #[error("Invalid {name}: {value} (must be finite and greater than 0)")]
    InvalidDimension { name: &'static str, value: f64 },
    #[error("Invalid {name}: {value} (must be finite)")]
    NonFiniteInput { name: &'static str, value: f64 },
    #[error("Pointer event has no element target")]
    MissingTarget,
}

/// Pointer coordinates relative to the top-left corner of an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPosition {
    pub relative_x: f64,
    pub relative_y: f64,
}

/// Bounding box of an element in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ElementBounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ElementBounds {
    pub fn of(element: &Element) -> Self {
        let rect = element.get_bounding_client_rect();
        Self {
            left: rect.left(),
            top: rect.top(),
            width: rect.width(),
            height: rect.height(),
        }
    }
}

fn check_dimension(name: &'static str, value: f64) -> Result<f64, SeekError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SeekError::InvalidDimension { name, value })
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<f64, SeekError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SeekError::NonFiniteInput { name, value })
    }
}

/// Seconds into the video at horizontal offset `x_pos` of the seek bar.
///
/// Offsets outside `[0, element_width]` are not clamped.
pub fn pixels_to_seconds(
    x_pos: f64,
    element_width: f64,
    video_duration: f64,
) -> Result<f64, SeekError> {
    let x_pos = check_finite("x position", x_pos)?;
    let element_width = check_dimension("element width", element_width)?;
    let video_duration = check_dimension("video duration", video_duration)?;
    Ok((x_pos / element_width) * video_duration)
}

/// Horizontal offset in the seek bar corresponding to `seconds`.
pub fn seconds_to_pixels(
    seconds: f64,
    element_width: f64,
    video_duration: f64,
) -> Result<f64, SeekError> {
    let seconds = check_finite("seconds", seconds)?;
    let element_width = check_dimension("element width", element_width)?;
    let video_duration = check_dimension("video duration", video_duration)?;
    Ok((seconds / video_duration) * element_width)
}

/// Clamp a time offset into `[0, video_duration]`.
pub fn clamp_seconds(seconds: f64, video_duration: f64) -> Result<f64, SeekError> {
    let seconds = check_finite("seconds", seconds)?;
    let video_duration = check_dimension("video duration", video_duration)?;
    Ok(seconds.clamp(0.0, video_duration))
}

pub fn relative_position(client_x: f64, client_y: f64, bounds: &ElementBounds) -> PointerPosition {
    PointerPosition {
        relative_x: client_x - bounds.left,
        relative_y: client_y - bounds.top,
    }
}

/// Seconds into the video under a pointer at client coordinates
/// (`client_x`, `client_y`) over an element with the given bounds.
pub fn seconds_at_pointer(
    client_x: f64,
    client_y: f64,
    bounds: &ElementBounds,
    video_duration: f64,
) -> Result<f64, SeekError> {
    let position = relative_position(client_x, client_y, bounds);
    pixels_to_seconds(position.relative_x, bounds.width, video_duration)
}

/// Seconds into the video under the pointer of a mouse event, measured
/// against the event target's bounding box. Any DOM element can act as a
/// seek bar this way.
pub fn get_amount_of_seconds_at_x_pos(
    event: &MouseEvent,
    video_duration: f64,
) -> Result<f64, SeekError> {
    let element = event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .ok_or(SeekError::MissingTarget)?;
    let bounds = ElementBounds::of(&element);
    let seconds = seconds_at_pointer(
        f64::from(event.client_x()),
        f64::from(event.client_y()),
        &bounds,
        video_duration,
    )?;
    debug!(
        "Pointer at x={} over {}px element -> {:.3}s",
        event.client_x(),
        bounds.width,
        seconds
    );
    Ok(seconds)
}
