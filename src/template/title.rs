use crate::canvas::CanvasSize;
use crate::error::DeckError;
use crate::rect::Rect;
use crate::slide::Slide;
use crate::style::TextStyle;
use crate::template::SlideTemplate;
use crate::units::{In, Pt};
use chrono::Local;
use std::path::PathBuf;

/// The opening slide of a pack: an issue date and a cover image
pub struct TitleSlide {
    title: String,
    issue_date: String,
    image_path: PathBuf,
    image_left: In,
    image_width: In,
}

impl TitleSlide {
    /// Create a title slide issued today, with the cover image at its
    /// default position
    pub fn new<S: ToString, P: Into<PathBuf>>(title: S, image_path: P) -> TitleSlide {
        TitleSlide {
            title: title.to_string(),
            issue_date: Local::now().format("%-d %B %Y").to_string(),
            image_path: image_path.into(),
            image_left: In(3.5),
            image_width: In(6.0),
        }
    }

    /// Override the issue date shown on the slide
    pub fn issued_on<S: ToString>(mut self, date: S) -> TitleSlide {
        self.issue_date = date.to_string();
        self
    }

    /// Override where the cover image sits and how wide it is; its height
    /// follows the source aspect ratio
    pub fn with_image_geometry(mut self, left: In, width: In) -> TitleSlide {
        self.image_left = left;
        self.image_width = width;
        self
    }
}

impl SlideTemplate for TitleSlide {
    fn title(&self) -> &str {
        &self.title
    }

    fn compose(&self, canvas: CanvasSize) -> Result<Slide, DeckError> {
        let mut slide = Slide::new(&self.title, canvas);

        slide.add_text_box(
            Rect::new(In(0.5), In(2.0), In(3.0), In(0.5)),
            format!("Issued On: {}", self.issue_date),
            TextStyle::size(Pt(12.0)),
        );
        slide.add_image(self.image_left, In(2.0), self.image_width, &self.image_path, None)?;

        Ok(slide)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::STANDARD;
    use crate::primitive::Primitive;

    #[test]
    fn issue_date_and_cover_image_are_placed() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("cover.png");
        image::RgbImage::new(60, 30).save(&path).expect("write png");

        let slide = TitleSlide::new("Q3 Briefing", &path)
            .issued_on("1 July 2026")
            .compose(STANDARD)
            .expect("compose title slide");

        assert!(slide.primitives.iter().any(|p| matches!(
            p,
            Primitive::TextBox { text, .. } if text == "Issued On: 1 July 2026"
        )));

        let image = slide
            .primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Image { rect, .. } => Some(*rect),
                _ => None,
            })
            .expect("cover image placed");
        assert_eq!(image.left, In(3.5));
        assert_eq!(image.width, In(6.0));
        // 2:1 source, aspect preserved against the default width
        assert_eq!(image.height, In(3.0));
    }
}
