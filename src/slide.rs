use crate::canvas::CanvasSize;
use crate::colour::{colours, Colour};
use crate::error::DeckError;
use crate::metrics::estimate_bullet_height;
use crate::primitive::Primitive;
use crate::rect::Rect;
use crate::style::TextStyle;
use crate::units::{In, Pt};
use log::warn;
use std::path::Path;

/// Height of the filled header bar of an info box
pub const INFO_BOX_HEADER_HEIGHT: In = In(0.25);

/// Slack added beneath an info-box body's estimated text height
pub const INFO_BOX_BODY_PADDING: In = In(0.05);

/// Thickness of connector lines
pub const LINE_THICKNESS: In = In(0.01);

/// The two stacked rectangles of a placed info box, returned so callers
/// can chain the next primitive off the body's bottom edge
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct InfoBox {
    pub header: Rect,
    pub body: Rect,
}

/// One slide of a briefing pack: a title plus an ordered set of placed
/// primitives on a fixed canvas.
///
/// A slide is created empty by a template, mutated during that template's
/// single composition pass, and afterwards only appended to by the
/// document's chrome pass. Placement operations return the *realized*
/// rectangle of what they placed — which for data-dependent primitives
/// (tables, info boxes) differs from anything the caller requested — and
/// chained layout must use that realized geometry for the next offset.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub title: String,
    pub canvas: CanvasSize,
    pub primitives: Vec<Primitive>,
}

impl Slide {
    /// Create an empty slide on the given canvas
    pub fn new<S: ToString>(title: S, canvas: CanvasSize) -> Slide {
        Slide {
            title: title.to_string(),
            canvas,
            primitives: Vec::new(),
        }
    }

    /// Append a primitive, returning its realized rectangle. Geometry that
    /// runs off the canvas is tolerated (rare edge content may overflow on
    /// purpose) but logged.
    fn push(&mut self, primitive: Primitive) -> Rect {
        let rect = primitive.rect();
        if !rect.contained_in(self.canvas) {
            warn!(
                "primitive on slide {:?} extends beyond the {}x{} canvas: {:?}",
                self.title, self.canvas.0, self.canvas.1, rect
            );
        }
        self.primitives.push(primitive);
        rect
    }

    /// Place a text box at an explicit rectangle.
    ///
    /// With word wrap off (the default style) the stored height is exactly
    /// the requested height regardless of content overflow; correcting for
    /// overflow is the caller's responsibility.
    pub fn add_text_box<S: ToString>(&mut self, rect: Rect, text: S, style: TextStyle) -> Rect {
        self.push(Primitive::TextBox {
            rect,
            text: text.to_string(),
            style,
            fill: None,
        })
    }

    /// Place a horizontal connector line of fixed thickness and colour.
    /// The realized rectangle has zero height.
    pub fn add_line(&mut self, start_x: In, end_x: In, y: In) -> Rect {
        self.push(Primitive::Line {
            start_x,
            end_x,
            y,
            colour: colours::BLACK,
            thickness: LINE_THICKNESS,
        })
    }

    /// Place a bulleted list at an explicit rectangle. The points are
    /// expected pre-formatted (indentation and bullet glyph applied).
    ///
    /// The realized rectangle is the *requested* one — it is not
    /// re-measured here. Callers that need an accurate height must
    /// pre-compute it with
    /// [estimate_bullet_height](crate::metrics::estimate_bullet_height).
    pub fn add_bullet_list(&mut self, rect: Rect, points: &[String], font_size: Pt) -> Rect {
        self.push(Primitive::BulletList {
            rect,
            points: points.to_vec(),
            font_size,
            fill: None,
        })
    }

    /// Place an info box: a fixed-height filled header bar with light text
    /// one point larger than the body, immediately followed by a filled
    /// bulleted body whose height is estimated from its points plus a
    /// small padding and any extra the caller asks for.
    pub fn add_info_box<S: ToString>(
        &mut self,
        left: In,
        top: In,
        width: In,
        header_text: S,
        body_points: &[String],
        font_size: Pt,
        extra_padding: In,
    ) -> InfoBox {
        let header = self.push(Primitive::TextBox {
            rect: Rect::new(left, top, width, INFO_BOX_HEADER_HEIGHT),
            text: header_text.to_string(),
            style: TextStyle::size(font_size + Pt(1.0)).coloured(colours::WHITE),
            fill: Some(colours::HEADER_SLATE),
        });

        let body_height =
            estimate_bullet_height(body_points, font_size, width) + INFO_BOX_BODY_PADDING + extra_padding;
        let body = self.push(Primitive::BulletList {
            rect: Rect::new(left, header.bottom(), width, body_height),
            points: body_points.to_vec(),
            font_size,
            fill: Some(colours::BODY_GREY),
        });

        InfoBox { header, body }
    }

    /// Place a composed data table. The table arrives fully styled with
    /// its height already derived from its row count; see
    /// [add_table](crate::table::add_table) for the usual composition
    /// path.
    pub fn add_table(&mut self, table: crate::table::Table) -> Rect {
        self.push(Primitive::Table(table))
    }

    /// Place an image. If `height` is omitted the source image's intrinsic
    /// dimensions are read and the aspect ratio is preserved against the
    /// given width; if supplied, both dimensions apply as-is and the image
    /// may distort. An unreadable image file aborts composition.
    pub fn add_image<P: AsRef<Path>>(
        &mut self,
        left: In,
        top: In,
        width: In,
        path: P,
        height: Option<In>,
    ) -> Result<Rect, DeckError> {
        let path = path.as_ref();
        let height = match height {
            Some(height) => height,
            None => {
                let (source_width, source_height) = image::image_dimensions(path)?;
                width * (source_height as f32 / source_width as f32)
            }
        };
        Ok(self.push(Primitive::Image {
            rect: Rect::new(left, top, width, height),
            path: path.to_owned(),
        }))
    }

    /// Every placed primitive whose realized rectangle runs off the
    /// canvas. Placement tolerates these, so this is a property check for
    /// templates and tests, not an error path.
    pub fn overflowing(&self) -> Vec<&Primitive> {
        self.primitives
            .iter()
            .filter(|primitive| !primitive.rect().contained_in(self.canvas))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::STANDARD;
    use crate::metrics::estimate_bullet_height;

    #[test]
    fn wrap_off_text_keeps_the_requested_height() {
        let mut slide = Slide::new("test", STANDARD);
        let requested = Rect::new(In(1.0), In(1.0), In(0.5), In(0.15));
        let realized = slide.add_text_box(
            requested,
            "far more text than a half-inch box could ever hold",
            TextStyle::size(Pt(9.0)),
        );
        assert_eq!(realized, requested);
    }

    #[test]
    fn lines_occupy_no_vertical_space() {
        let mut slide = Slide::new("test", STANDARD);
        let realized = slide.add_line(In(0.2), In(9.8), In(0.7));
        assert_eq!(realized.height, In(0.0));
        assert_eq!(realized.top, In(0.7));
        assert_eq!(realized.width, In(9.6));
    }

    #[test]
    fn info_box_body_hangs_off_the_header() {
        let points = vec!["• first point".to_string(), "• second point".to_string()];
        let mut slide = Slide::new("test", STANDARD);
        let info = slide.add_info_box(In(0.2), In(1.0), In(5.0), "Scenario", &points, Pt(9.0), In(0.0));

        assert_eq!(info.header.height, INFO_BOX_HEADER_HEIGHT);
        assert_eq!(info.body.top, info.header.bottom());
        assert_eq!(
            info.body.height,
            estimate_bullet_height(&points, Pt(9.0), In(5.0)) + INFO_BOX_BODY_PADDING
        );
        assert_eq!(slide.primitives.len(), 2);
    }

    #[test]
    fn info_box_extra_padding_extends_the_body() {
        let points = vec!["• point".to_string()];
        let mut slide = Slide::new("test", STANDARD);
        let plain = slide.add_info_box(In(0.2), In(1.0), In(5.0), "A", &points, Pt(9.0), In(0.0));
        let padded = slide.add_info_box(In(0.2), In(4.0), In(5.0), "B", &points, Pt(9.0), In(0.8));
        assert_eq!(padded.body.height, plain.body.height + In(0.8));
    }

    #[test]
    fn auto_height_preserves_the_source_aspect_ratio() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("plot.png");
        image::RgbImage::new(40, 20).save(&path).expect("write png");

        let mut slide = Slide::new("test", STANDARD);
        let rect = slide
            .add_image(In(0.5), In(1.0), In(3.0), &path, None)
            .expect("place image");
        assert_eq!(rect.height, In(1.5));

        let stretched = slide
            .add_image(In(0.5), In(3.0), In(3.0), &path, Some(In(5.0)))
            .expect("place image");
        assert_eq!(stretched.height, In(5.0));
    }

    #[test]
    fn missing_image_aborts_composition() {
        let mut slide = Slide::new("test", STANDARD);
        let result = slide.add_image(In(0.0), In(0.0), In(1.0), "does/not/exist.png", None);
        assert!(result.is_err());
        assert!(slide.primitives.is_empty());
    }

    #[test]
    fn off_canvas_geometry_is_tolerated_but_reported() {
        let mut slide = Slide::new("test", STANDARD);
        slide.add_text_box(
            Rect::new(In(9.65), In(7.3), In(3.0), In(0.2)),
            "1/5",
            TextStyle::size(Pt(7.0)),
        );
        assert_eq!(slide.primitives.len(), 1);
        assert_eq!(slide.overflowing().len(), 1);
    }
}
