use crate::colour::{colours, Colour};
use crate::units::{In, Pt};
use serde::{Deserialize, Serialize};

/// Text styling attached to a primitive at creation. Immutable once the
/// primitive is placed.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub size: Pt,
    pub bold: bool,
    pub centered: bool,
    pub word_wrap: bool,
    pub colour: Colour,
}

impl TextStyle {
    /// Plain left-aligned black text at the given size, with word wrap off
    pub fn size(size: Pt) -> TextStyle {
        TextStyle {
            size,
            bold: false,
            centered: false,
            word_wrap: false,
            colour: colours::BLACK,
        }
    }

    pub fn bold(mut self) -> TextStyle {
        self.bold = true;
        self
    }

    pub fn centered(mut self) -> TextStyle {
        self.centered = true;
        self
    }

    pub fn wrapped(mut self) -> TextStyle {
        self.word_wrap = true;
        self
    }

    pub fn coloured(mut self, colour: Colour) -> TextStyle {
        self.colour = colour;
        self
    }
}

/// A solid cell or shape border
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct BorderStyle {
    pub colour: Colour,
    pub width: In,
}

impl BorderStyle {
    /// The thin black border applied uniformly to table cells
    pub fn thin() -> BorderStyle {
        BorderStyle {
            colour: colours::BLACK,
            width: In(0.01),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_flags_accumulate() {
        let style = TextStyle::size(Pt(9.0)).bold().centered();
        assert_eq!(style.size, Pt(9.0));
        assert!(style.bold);
        assert!(style.centered);
        assert!(!style.word_wrap);
        assert_eq!(style.colour, colours::BLACK);
    }
}
