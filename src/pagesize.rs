//! Page sizes for the paper and book formats content is commonly flowed onto.
//!
//! Sizes are (width, height) in points, portrait. Besides the usual North
//! American and ISO sizes this includes the JIS B-series and the Japanese
//! paperback formats, which matter for vertical-reading CJK books laid out
//! horizontally. Use [`PageOrientation`] to turn a size sideways.
//!
//! # Example
//!
//! ```
//! use page_flow::pagesize::{PageOrientation, A4, BUNKO};
//!
//! let landscape = A4.landscape();
//! assert!(landscape.0 > landscape.1);
//! assert_eq!(BUNKO, page_flow::pagesize::A6);
//! ```

use crate::units::*;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

macro_rules! mm {
    ($width:expr, $height:expr) => {
        (Pt($width * 72.0 / 25.4), Pt($height * 72.0 / 25.4))
    };
}

// north american sizes
pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const HALF_LETTER: PageSize = (Pt(5.5 * 72.0), Pt(8.5 * 72.0));
pub const LEGAL: PageSize = (Pt(8.5 * 72.0), Pt(13.0 * 72.0));

// iso
pub const A3: PageSize = mm!(297.0, 420.0);
pub const A4: PageSize = mm!(210.0, 297.0);
pub const A5: PageSize = mm!(148.0, 210.0);
pub const A6: PageSize = mm!(105.0, 148.0);
pub const B5: PageSize = mm!(176.0, 250.0);

// jis
pub const JIS_B5: PageSize = mm!(182.0, 257.0);
pub const JIS_B6: PageSize = mm!(128.0, 182.0);

/// 文庫本, the pocket paperback size
pub const BUNKO: PageSize = A6;
/// 新書判
pub const SHINSHO: PageSize = mm!(103.0, 182.0);

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}
