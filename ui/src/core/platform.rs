//! Platform glue: device capability classification and viewport probes.
//!
//! Everything here degrades on non-wasm targets so the crate keeps
//! compiling (and testing) natively: classification defaults to pointer
//! hardware and geometry probes return nothing, which downstream code
//! already treats as "suppress the tooltip".

use crate::core::interaction::DeviceMode;
use crate::core::position::AnchorRect;

/// Classifies the device once per call site. Touch-only means no hover-
/// capable fine pointer is attached; the interaction strategy latches taps
/// instead of tracking hover.
pub fn classify_device() -> DeviceMode {
    #[cfg(target_arch = "wasm32")]
    {
        let hover_capable = web_sys::window()
            .and_then(|window| {
                window
                    .match_media("(hover: hover) and (pointer: fine)")
                    .ok()
                    .flatten()
            })
            .map(|query| query.matches());

        match hover_capable {
            Some(false) => DeviceMode::TouchOnly,
            // Unknown classification behaves like the common case.
            _ => DeviceMode::PointerCapable,
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        DeviceMode::PointerCapable
    }
}

/// Current window inner width, or 0.0 when unknowable (which suppresses
/// placement).
pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.inner_width().ok())
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        0.0
    }
}

/// Viewport-fixed bounding rectangle of the element with the given DOM id,
/// or `None` when the element is no longer in the document.
#[allow(unused_variables)]
pub fn element_anchor(dom_id: &str) -> Option<AnchorRect> {
    #[cfg(target_arch = "wasm32")]
    {
        let element = web_sys::window()?.document()?.get_element_by_id(dom_id)?;
        let rect = element.get_bounding_client_rect();
        Some(AnchorRect {
            top: rect.top(),
            left: rect.left(),
            width: rect.width(),
            height: rect.height(),
        })
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}
