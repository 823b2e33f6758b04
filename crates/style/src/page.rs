use crate::dimension::{Margins, PageSize, POINTS_PER_INCH};
use serde::{Deserialize, Serialize};
use tripsheet_types::Rect;

/// Physical page geometry used for every page of a document.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PageLayout {
    #[serde(default)]
    pub size: PageSize,
    #[serde(default = "default_margins")]
    pub margins: Margins,
}

fn default_margins() -> Margins {
    Margins::all(0.75 * POINTS_PER_INCH)
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            size: PageSize::default(),
            margins: default_margins(),
        }
    }
}

impl PageLayout {
    pub fn new(size: PageSize, margins: Margins) -> Self {
        Self { size, margins }
    }

    /// The area inside the margins, in top-left page coordinates.
    pub fn content_rect(&self) -> Rect {
        let (width, height) = self.size.dimensions_pt();
        Rect {
            x: self.margins.left,
            y: self.margins.top,
            width: width - self.margins.horizontal(),
            height: height - self.margins.vertical(),
        }
    }
}
