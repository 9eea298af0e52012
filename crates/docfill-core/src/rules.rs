//! Declarative placement table
//!
//! The placement table is the business rule of the system: it encodes
//! where each field lands, and on which page. Keeping it as data means
//! the overlay loop never changes when coordinates are retuned against a
//! new template revision.

use serde::Serialize;

/// Which form field a placement draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    FullName,
    Address,
    Date,
    Price,
}

/// Fill color in the 0-1 range used by PDF `rg`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };
}

/// One text stamp: field, zero-based page index, position, size, color.
///
/// `y_from_top` is measured down from the top edge of the owning page and
/// is resolved against that page's own height at draw time, so templates
/// with mixed page sizes place correctly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Placement {
    pub page_index: u32,
    pub field: Field,
    pub x: f64,
    pub y_from_top: f64,
    pub font_size: f64,
    pub color: Rgb,
}

const fn at(page_index: u32, field: Field, x: f64, y_from_top: f64) -> Placement {
    Placement {
        page_index,
        field,
        x,
        y_from_top,
        font_size: 11.0,
        color: Rgb::BLACK,
    }
}

/// Coordinates tuned against the current property document template.
const PLACEMENTS: &[Placement] = &[
    at(1, Field::Address, 190.0, 135.0),
    at(2, Field::Price, 70.0, 487.0),
    at(2, Field::FullName, 220.0, 603.0),
    at(2, Field::Date, 400.0, 637.0),
    at(3, Field::Address, 190.0, 137.0),
    at(3, Field::FullName, 225.0, 630.0),
    at(3, Field::Date, 410.0, 665.0),
    at(4, Field::FullName, 143.0, 443.0),
    at(4, Field::Date, 120.0, 512.0),
];

/// The full placement table.
pub fn placements() -> &'static [Placement] {
    PLACEMENTS
}

/// Placements that apply to a template with the given page count.
///
/// A placement fires iff its page exists; a 5-page template gets all of
/// them, a 2-page template only the page-index-1 entries, a 1-page
/// template none.
pub fn placements_for_page_count(page_count: usize) -> impl Iterator<Item = &'static Placement> {
    PLACEMENTS
        .iter()
        .filter(move |p| (p.page_index as usize) < page_count)
}
