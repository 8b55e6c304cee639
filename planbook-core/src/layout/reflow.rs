//! Width-tier compression for narrow containers.
//!
//! Lane counts above 2 only exist when the configured cap is raised; this
//! stage squeezes them back down when the rendering container is narrow.
//! It can only reduce a box's lane count, never raise it: at the default
//! cap of 2 the narrowest tier equals the cap and every box passes through
//! unchanged.

use crate::config::LayoutConfig;
use crate::layout::geometry::{horizontal_metrics, LayoutBox};

/// Lane budget for a container of the given pixel width.
pub fn max_columns_for_width(container_width: f32) -> usize {
    if container_width < 400.0 {
        2
    } else if container_width < 600.0 {
        3
    } else if container_width < 800.0 {
        4
    } else {
        usize::MAX
    }
}

/// Compress a box to fit a container's lane budget.
///
/// When the box's lane count exceeds the budget: its width scales by
/// `allowed / total`, floored at `min_width_pct`; the column index clamps to
/// the last allowed lane; left offset and z-order are recomputed from the
/// clamped column. The width never extends past the column's right edge,
/// even when the floor would push it there.
pub fn reflow_box(layout: &LayoutBox, container_width: f32, config: &LayoutConfig) -> LayoutBox {
    let allowed = max_columns_for_width(container_width);
    if layout.total_columns <= allowed {
        return *layout;
    }

    let scaled = layout.width_pct * allowed as f32 / layout.total_columns as f32;
    let column = layout.column.min(allowed - 1);
    let (left_pct, _) = horizontal_metrics(column, allowed, config);
    let width_pct = scaled.max(config.min_width_pct).min(100.0 - left_pct);

    LayoutBox {
        top: layout.top,
        height: layout.height,
        left_pct,
        width_pct,
        column,
        total_columns: allowed,
        z_index: column as i32 + 1,
    }
}
