//! Terminal rendering of computed layouts.
//!
//! Paints the geometry the layout engine produced: the day view maps box
//! pixels to character cells, the week view is compact line-oriented
//! output with lane markers.

use owo_colors::OwoColorize;
use planbook_core::layout::segment::{DaySegment, SegmentKind};
use planbook_core::layout::{DayLayout, PlacedItem};
use planbook_core::{ItemKind, LayoutConfig, ScheduledItem};

/// Characters across one day column.
const GRID_WIDTH: usize = 48;

/// Terminal rows per displayed hour.
const ROWS_PER_HOUR: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Ink {
    Empty,
    Plan,
    Record,
    Draft,
}

#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    ink: Ink,
}

impl Cell {
    fn blank() -> Self {
        Cell { ch: ' ', ink: Ink::Empty }
    }
}

fn ink_for(item: &ScheduledItem) -> Ink {
    if item.is_draft {
        Ink::Draft
    } else {
        match item.kind {
            ItemKind::Plan => Ink::Plan,
            ItemKind::Record => Ink::Record,
        }
    }
}

/// Draw a day layout as a time grid, one row per half hour.
pub fn render_day_grid(layout: &DayLayout, config: &LayoutConfig) -> String {
    let hours = (config.day_end_hour - config.day_start_hour) as usize;
    let mut grid = vec![vec![Cell::blank(); GRID_WIDTH]; hours * ROWS_PER_HOUR];

    for placed in &layout.items {
        paint_box(&mut grid, placed, config);
    }

    let mut lines = Vec::new();
    for (row, cells) in grid.iter().enumerate() {
        let label = if row % ROWS_PER_HOUR == 0 {
            format!("{:>2}:00", config.day_start_hour as usize + row / ROWS_PER_HOUR)
        } else {
            "     ".to_string()
        };
        lines.push(format!("{} |{}", label.dimmed(), colorize(cells)));
    }
    lines.join("\n")
}

/// Paint one layout box into the cell grid, box pixels to character cells.
fn paint_box(grid: &mut [Vec<Cell>], placed: &PlacedItem, config: &LayoutConfig) {
    let rect = &placed.rect;
    let pixels_per_row = config.hour_height / ROWS_PER_HOUR as f32;

    let top_row = (rect.top / pixels_per_row).floor().max(0.0) as usize;
    if top_row >= grid.len() {
        return;
    }
    let bottom_row = ((rect.top + rect.height) / pixels_per_row)
        .ceil()
        .max((top_row + 1) as f32) as usize;
    let bottom_row = bottom_row.min(grid.len());

    let left_col = ((rect.left_pct / 100.0) * GRID_WIDTH as f32).round() as usize;
    if left_col >= GRID_WIDTH {
        return;
    }
    let columns = (((rect.width_pct / 100.0) * GRID_WIDTH as f32).round() as usize).max(1);
    let right_col = (left_col + columns).min(GRID_WIDTH);

    let ink = ink_for(&placed.segment.item);
    for row in grid.iter_mut().take(bottom_row).skip(top_row) {
        for cell in row.iter_mut().take(right_col).skip(left_col) {
            *cell = Cell { ch: '.', ink };
        }
    }

    // Title on the first row of the box
    let label = labeled_title(&placed.segment);
    for (offset, ch) in label.chars().take(right_col - left_col).enumerate() {
        grid[top_row][left_col + offset] = Cell { ch, ink };
    }
}

/// Segment title with continuation markers for multi-day splits.
fn labeled_title(segment: &DaySegment) -> String {
    let title = segment.item.title.as_str();
    match segment.kind {
        SegmentKind::Full => title.to_string(),
        SegmentKind::Start => format!("{} >", title),
        SegmentKind::Middle => format!("< {} >", title),
        SegmentKind::End => format!("< {}", title),
    }
}

fn colorize(cells: &[Cell]) -> String {
    let mut out = String::new();
    let mut index = 0;
    while index < cells.len() {
        let ink = cells[index].ink;
        let mut run = String::new();
        while index < cells.len() && cells[index].ink == ink {
            run.push(cells[index].ch);
            index += 1;
        }
        match ink {
            Ink::Empty => out.push_str(&run),
            Ink::Plan => out.push_str(&run.blue().to_string()),
            Ink::Record => out.push_str(&run.green().to_string()),
            Ink::Draft => out.push_str(&run.dimmed().to_string()),
        }
    }
    out
}

/// One compact line per placed segment, for the week view.
pub fn render_day_lines(layout: &DayLayout) -> String {
    let mut lines = Vec::new();
    lines.push(layout.date.format("%a %b %-d").to_string().bold().to_string());

    if layout.items.is_empty() {
        lines.push(format!("   {}", "No plans".dimmed()));
    }

    for placed in &layout.items {
        let segment = &placed.segment;
        let time = format!(
            "{}-{}",
            segment.start.format("%H:%M"),
            segment.end.format("%H:%M")
        );
        let lane = format!("[{}/{}]", placed.rect.column + 1, placed.rect.total_columns);
        lines.push(format!(
            "   {} {} {}",
            time.dimmed(),
            lane.dimmed(),
            styled_title(segment)
        ));
    }

    lines.join("\n")
}

fn styled_title(segment: &DaySegment) -> String {
    let label = labeled_title(segment);
    if segment.item.is_draft {
        label.dimmed().to_string()
    } else {
        match segment.item.kind {
            ItemKind::Plan => label.blue().to_string(),
            ItemKind::Record => label.green().to_string(),
        }
    }
}
