//! Data-table composition.
//!
//! A composed table wraps a dataset in a grid one row and one column
//! larger than the data: row 0 is a header synthesised from the column
//! names, and column 0 is a blank label column reserved for row-status
//! colour tags. Table height is not requested by the caller; it is
//! derived from the row count and the table's font size after styling.

use crate::colour::{colours, Colour};
use crate::dataset::Dataset;
use crate::metrics::{single_line_height, LINE_HEIGHT_RATIO};
use crate::rect::Rect;
use crate::slide::Slide;
use crate::style::{BorderStyle, TextStyle};
use crate::units::{In, Pt, POINTS_PER_INCH};
use serde::{Deserialize, Serialize};

/// Font size a freshly created blank table starts at
pub const DENSE_FONT_SIZE: Pt = Pt(10.0);

/// Font size the titled, populated table path settles on; suited to dense
/// tabular display, and the size the per-row height constant is tuned for
pub const COMPACT_FONT_SIZE: Pt = Pt(7.0);

/// Width override for column 1, which carries the longest header labels
pub const LABEL_COLUMN_WIDTH: In = In(1.8);

/// Vertical gap between a table's title label and the table itself
pub const TITLE_BOX_HEIGHT: In = In(0.22);

// Per-row slack above the single-line text height, tuned so a compact
// (7pt) table comes out at exactly 0.219in per row. Sterbenz: the 7pt
// line height is within a factor of two of 0.219, so the subtraction is
// exact in f32 and adding the line height back reproduces 0.219 exactly.
const ROW_PADDING: f32 = 0.219 - (7.0 * LINE_HEIGHT_RATIO / POINTS_PER_INCH);

/// The estimated height of one table row at the given font size.
///
/// This is a heuristic independent of the word-wrap estimator: cell text
/// is assumed never to wrap, so a row is one line of text plus fixed
/// padding.
pub fn row_height(font_size: Pt) -> In {
    single_line_height(font_size) + In(ROW_PADDING)
}

/// One cell of a composed table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub fill: Colour,
    pub border: BorderStyle,
}

/// A placed data-table primitive: a grid of uniformly bordered cells with
/// optional per-column width overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub rect: Rect,
    pub cells: Vec<Vec<Cell>>,
    /// Width overrides by column index; `None` leaves the column to the
    /// renderer's default even distribution of the remaining width
    pub column_widths: Vec<Option<In>>,
    pub font_size: Pt,
}

impl Table {
    /// Create a blank grid at the dense default font size, every cell
    /// bordered thin black and filled white
    pub fn blank(rows: usize, columns: usize, rect: Rect) -> Table {
        let cells = (0..rows)
            .map(|_| {
                (0..columns)
                    .map(|_| Cell {
                        text: String::new(),
                        fill: colours::WHITE,
                        border: BorderStyle::thin(),
                    })
                    .collect()
            })
            .collect();
        Table {
            rect,
            cells,
            column_widths: vec![None; columns],
            font_size: DENSE_FONT_SIZE,
        }
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn columns(&self) -> usize {
        self.cells.first().map(|row| row.len()).unwrap_or(0)
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.cells.get(row).and_then(|cells| cells.get(column))
    }

    pub fn set_text<S: ToString>(&mut self, row: usize, column: usize, text: S) {
        if let Some(cell) = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
        {
            cell.text = text.to_string();
        }
    }

    /// Set the background fill of a single cell
    pub fn set_cell_fill(&mut self, row: usize, column: usize, fill: Colour) {
        if let Some(cell) = self
            .cells
            .get_mut(row)
            .and_then(|cells| cells.get_mut(column))
        {
            cell.fill = fill;
        }
    }

    /// Apply row-status colours down the blank label column, one per data
    /// row starting below the header. If there are fewer colours than
    /// data rows the remaining rows keep their default fill; surplus
    /// colours are ignored.
    pub fn set_row_colours(&mut self, colours: &[Colour]) {
        for (i, colour) in colours.iter().enumerate() {
            if i + 2 > self.rows() {
                break;
            }
            self.set_cell_fill(i + 1, 0, *colour);
        }
    }

    pub fn set_column_width(&mut self, column: usize, width: In) {
        if let Some(slot) = self.column_widths.get_mut(column) {
            *slot = Some(width);
        }
    }

    pub fn set_font_size(&mut self, font_size: Pt) {
        self.font_size = font_size;
    }
}

/// Compose a titled data table and place it on a slide, returning the
/// table's realized rectangle.
///
/// The title label sits in bold above the table's top-left corner; the
/// table itself starts [TITLE_BOX_HEIGHT] below the given `top` and a
/// small nudge right of `left`. The grid is the dataset plus a header row
/// and a blank label column, with column 1 widened for long labels, the
/// compact font size applied, and the height derived from the row count.
pub fn add_table(
    slide: &mut Slide,
    title: &str,
    dataset: &Dataset,
    row_colours: &[Colour],
    top: In,
    left: In,
    width: In,
) -> Rect {
    slide.add_text_box(
        Rect::new(left, top, In(0.5), In(0.15)),
        title,
        TextStyle::size(Pt(9.0)).bold(),
    );

    let rows = dataset.row_count() + 1;
    let columns = dataset.column_count() + 1;
    let mut table = Table::blank(
        rows,
        columns,
        Rect::new(left + In(0.05), top + TITLE_BOX_HEIGHT, width, In(0.1)),
    );

    // header row, leaving the label column blank
    for (c, name) in dataset.columns().iter().enumerate() {
        table.set_text(0, c + 1, name);
    }
    for (r, row) in dataset.rows().iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            table.set_text(r + 1, c + 1, value);
        }
    }

    table.set_column_width(1, LABEL_COLUMN_WIDTH);
    table.set_row_colours(row_colours);
    table.set_font_size(COMPACT_FONT_SIZE);
    table.rect.height = row_height(table.font_size) * rows as f32;

    slide.add_table(table)
}
