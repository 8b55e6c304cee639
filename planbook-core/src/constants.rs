//! Shared defaults for the layout engine.

/// Hard cap on simultaneous side-by-side lanes. Collisions beyond the cap
/// stack in the last lane instead of widening the grid.
pub const MAX_COLUMNS: usize = 2;

/// Vertical scale: rendered pixels per displayed hour.
pub const DEFAULT_HOUR_HEIGHT: f32 = 60.0;

/// First displayed hour of the day grid.
pub const DEFAULT_DAY_START_HOUR: u32 = 0;

/// One-past-last displayed hour of the day grid.
pub const DEFAULT_DAY_END_HOUR: u32 = 24;

/// Horizontal breathing room around lanes, in percent of the day column.
pub const EVENT_MARGIN_PCT: f32 = 5.0;

/// Shortest box an item may render as, in pixels.
pub const MIN_EVENT_HEIGHT_PX: f32 = 20.0;

/// Narrowest a reflowed box may get, in percent of the day column.
pub const MIN_EVENT_WIDTH_PCT: f32 = 45.0;

/// Fallback duration for items with a missing or inverted end time.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;
