use crate::bullets::BulletStore;
use crate::canvas::CanvasSize;
use crate::colour::Colour;
use crate::dataset::Dataset;
use crate::error::DeckError;
use crate::layout::Cursor;
use crate::rect::Rect;
use crate::slide::Slide;
use crate::style::TextStyle;
use crate::table::add_table;
use crate::template::SlideTemplate;
use crate::units::{In, Pt};
use std::path::PathBuf;

const SUMMARY_TABLE_WIDTH: In = In(3.0);
const SUMMARY_TABLE_LEFT: In = In(0.15);
const IMAGE_TOP: In = In(3.22);

/// One titled, colour-coded table panel of a summary slide
pub struct TablePanel {
    pub title: String,
    pub dataset: Dataset,
    pub row_colours: Vec<Colour>,
}

impl TablePanel {
    pub fn new<S: ToString>(title: S, dataset: Dataset, row_colours: Vec<Colour>) -> TablePanel {
        TablePanel {
            title: title.to_string(),
            dataset,
            row_colours,
        }
    }
}

/// A summary slide: a padded Scenario info box and free-text comments up
/// top, then one or two stacked table panels with images beside them
/// sized to span the tables' combined height.
pub struct SummarySlide {
    title: String,
    scenario_points: Vec<String>,
    comments: String,
    first_table: TablePanel,
    second_table: Option<TablePanel>,
    first_image: PathBuf,
    second_image: Option<PathBuf>,
}

impl SummarySlide {
    pub fn new<S: ToString, P: Into<PathBuf>>(
        title: S,
        store: &BulletStore,
        scenario_key: &str,
        comments: S,
        first_table: TablePanel,
        first_image: P,
    ) -> SummarySlide {
        SummarySlide {
            title: title.to_string(),
            scenario_points: store.load(scenario_key),
            comments: comments.to_string(),
            first_table,
            second_table: None,
            first_image: first_image.into(),
            second_image: None,
        }
    }

    /// Stack a second table panel beneath the first
    pub fn with_second_table(mut self, panel: TablePanel) -> SummarySlide {
        self.second_table = Some(panel);
        self
    }

    /// Split the image area into two images side by side
    pub fn with_second_image<P: Into<PathBuf>>(mut self, path: P) -> SummarySlide {
        self.second_image = Some(path.into());
        self
    }
}

impl SlideTemplate for SummarySlide {
    fn title(&self) -> &str {
        &self.title
    }

    fn compose(&self, canvas: CanvasSize) -> Result<Slide, DeckError> {
        let mut slide = Slide::new(&self.title, canvas);

        slide.add_info_box(
            In(0.2),
            In(1.0),
            In(5.0),
            "Scenario",
            &self.scenario_points,
            Pt(9.0),
            In(0.8),
        );
        slide.add_line(In(0.2), canvas.0 - In(0.2), In(2.85));

        slide.add_text_box(
            Rect::new(canvas.0 - In(4.8), In(0.95), In(4.6), In(1.7)),
            format!("Comments: {}", self.comments),
            TextStyle::size(Pt(9.0)).wrapped(),
        );

        let first = add_table(
            &mut slide,
            &self.first_table.title,
            &self.first_table.dataset,
            &self.first_table.row_colours,
            In(3.0),
            SUMMARY_TABLE_LEFT,
            SUMMARY_TABLE_WIDTH,
        );

        let second = self.second_table.as_ref().map(|panel| {
            add_table(
                &mut slide,
                &panel.title,
                &panel.dataset,
                &panel.row_colours,
                Cursor::at(first).below(In(0.2)),
                SUMMARY_TABLE_LEFT,
                SUMMARY_TABLE_WIDTH,
            )
        });

        // images sit beside the tables and span their combined height
        let image_left = first.right() + In(0.2);
        let image_area = canvas.0 - first.right() - In(0.5);
        let image_height = match second {
            Some(second) => second.bottom() - first.top + In(0.7),
            None => In(2.0),
        };

        if let Some(second_image) = &self.second_image {
            let half_width = image_area / 2.0;
            slide.add_image(
                image_left,
                IMAGE_TOP,
                half_width,
                &self.first_image,
                Some(image_height),
            )?;
            slide.add_image(
                image_left + half_width + In(0.1),
                IMAGE_TOP,
                half_width,
                second_image,
                Some(image_height),
            )?;
        } else {
            slide.add_image(
                image_left,
                IMAGE_TOP,
                image_area,
                &self.first_image,
                Some(image_height),
            )?;
        }

        Ok(slide)
    }
}
