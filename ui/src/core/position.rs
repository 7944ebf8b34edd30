//! Viewport-aware tooltip placement.
//!
//! `place` is a pure function from anchor geometry, measured tooltip size
//! and the viewport width to a clamped on-screen position. All coordinates
//! are viewport-fixed (the tooltip renders with `position: fixed`, and
//! anchors come from `getBoundingClientRect`), never container-relative.

/// Screen bounding box of the cell that triggered the tooltip.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnchorRect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl AnchorRect {
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    fn is_finite(&self) -> bool {
        self.top.is_finite() && self.left.is_finite() && self.width.is_finite() && self.height.is_finite()
    }
}

/// Post-layout measured size of the tooltip content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipSize {
    pub width: f64,
    pub height: f64,
}

/// Fixed pixel constants: gap between anchor and tooltip, and the padding
/// kept between the tooltip and the viewport edges.
#[derive(Debug, Clone, Copy)]
pub struct PlacementConstants {
    pub offset: f64,
    pub edge_padding: f64,
}

impl Default for PlacementConstants {
    fn default() -> Self {
        Self {
            offset: 8.0,
            edge_padding: 12.0,
        }
    }
}

/// A resolved placement. When `flipped` is false the tooltip's *bottom*
/// edge sits at `top` (it opens above the anchor); when true its top edge
/// does. `arrow_offset` is the signed distance from the tooltip's own
/// horizontal center back to the anchor's, so the arrow glyph can keep
/// pointing at the anchor after clamping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipPlacement {
    pub top: f64,
    pub left: f64,
    pub flipped: bool,
    pub arrow_offset: f64,
}

/// Computes a clamped placement, or `None` when the geometry is unusable
/// (non-finite values, degenerate tooltip, unknown viewport). Suppressing
/// the tooltip beats rendering it at a garbage position.
pub fn place(
    anchor: AnchorRect,
    tooltip: TooltipSize,
    viewport_width: f64,
    constants: PlacementConstants,
) -> Option<TooltipPlacement> {
    if !anchor.is_finite()
        || !tooltip.width.is_finite()
        || !tooltip.height.is_finite()
        || tooltip.width <= 0.0
        || tooltip.height <= 0.0
        || !(viewport_width > 0.0)
    {
        return None;
    }

    let space_above = anchor.top;
    let required = tooltip.height + constants.offset + constants.edge_padding;
    let flipped = space_above < required;
    let top = if flipped {
        anchor.bottom() + constants.offset
    } else {
        anchor.top - constants.offset
    };

    let ideal_center = anchor.center_x();
    let half = tooltip.width / 2.0;
    let mut center = ideal_center;
    if center - half < constants.edge_padding {
        center = constants.edge_padding + half;
    } else if center + half > viewport_width - constants.edge_padding {
        center = viewport_width - constants.edge_padding - half;
    }

    Some(TooltipPlacement {
        top,
        left: center - half,
        flipped,
        arrow_offset: ideal_center - center,
    })
}
