use crate::bullets::BulletStore;
use crate::canvas::CanvasSize;
use crate::colour::Colour;
use crate::dataset::Dataset;
use crate::error::DeckError;
use crate::layout::{Cursor, CHAIN_MARGIN};
use crate::metrics::estimate_bullet_height;
use crate::rect::Rect;
use crate::slide::Slide;
use crate::table::add_table;
use crate::template::SlideTemplate;
use crate::units::{In, Pt};
use std::path::PathBuf;

const CONTENT_COLUMN_FROM_RIGHT: In = In(4.98);
const TABLE_WIDTH: In = In(3.9);
const BULLETS_WIDTH: In = In(4.78);
const INFO_BOX_WIDTH: In = In(4.72);
const BODY_FONT_SIZE: Pt = Pt(8.0);

/// A tabular content slide: a colour-coded data table, commentary bullet
/// points, a divider line, Scenario and Assumptions info boxes down the
/// right-hand content column, and a full-height image on the left.
///
/// This is the canonical layout chain: every vertical offset after the
/// table derives from the previous primitive's realized bottom edge.
pub struct TabularSlide {
    title: String,
    table_title: String,
    dataset: Dataset,
    row_colours: Vec<Colour>,
    table_points: Vec<String>,
    scenario_points: Vec<String>,
    assumptions_points: Vec<String>,
    image_path: PathBuf,
}

impl TabularSlide {
    /// Create a tabular slide, loading the three bullet lists from the
    /// store up front. Keys absent from the store yield empty lists.
    #[allow(clippy::too_many_arguments)]
    pub fn new<S: ToString, P: Into<PathBuf>>(
        title: S,
        table_title: S,
        dataset: Dataset,
        row_colours: Vec<Colour>,
        store: &BulletStore,
        table_key: &str,
        scenario_key: &str,
        assumptions_key: &str,
        image_path: P,
    ) -> TabularSlide {
        TabularSlide {
            title: title.to_string(),
            table_title: table_title.to_string(),
            dataset,
            row_colours,
            table_points: store.load(table_key),
            scenario_points: store.load(scenario_key),
            assumptions_points: store.load(assumptions_key),
            image_path: image_path.into(),
        }
    }
}

impl SlideTemplate for TabularSlide {
    fn title(&self) -> &str {
        &self.title
    }

    fn compose(&self, canvas: CanvasSize) -> Result<Slide, DeckError> {
        let mut slide = Slide::new(&self.title, canvas);
        let content_left = canvas.0 - CONTENT_COLUMN_FROM_RIGHT;

        let table = add_table(
            &mut slide,
            &self.table_title,
            &self.dataset,
            &self.row_colours,
            In(1.0),
            content_left,
            TABLE_WIDTH,
        );
        let cursor = Cursor::at(table);

        let bullets_height =
            estimate_bullet_height(&self.table_points, BODY_FONT_SIZE, BULLETS_WIDTH);
        let bullets = slide.add_bullet_list(
            Rect::new(content_left, cursor.below(CHAIN_MARGIN), BULLETS_WIDTH, bullets_height),
            &self.table_points,
            BODY_FONT_SIZE,
        );
        let cursor = cursor.advance(bullets);

        let divider = slide.add_line(
            content_left + In(0.095),
            canvas.0 - In(0.22),
            cursor.below(In(0.07)),
        );
        let cursor = cursor.advance(divider);

        let scenario = slide.add_info_box(
            content_left + In(0.05),
            cursor.below(In(0.07)),
            INFO_BOX_WIDTH,
            "Scenario",
            &self.scenario_points,
            BODY_FONT_SIZE,
            In(0.0),
        );
        let cursor = cursor.advance(scenario.body);

        slide.add_info_box(
            content_left + In(0.05),
            cursor.below(In(0.1)),
            INFO_BOX_WIDTH,
            "Assumptions",
            &self.assumptions_points,
            BODY_FONT_SIZE,
            In(0.0),
        );

        slide.add_image(In(0.2), In(1.1), In(4.7), &self.image_path, Some(In(5.9)))?;

        Ok(slide)
    }
}
