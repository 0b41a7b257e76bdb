//! The fixed foundation shade catalog.
//!
//! The table is a `static` array: it is built into the binary, shared by every
//! request, and never mutated, so concurrent readers need no locking.
//! Several shades deliberately share RGB values across families; ranking
//! breaks those ties by position in this table.

use crate::types::{Rgb, ShadeEntry, Undertone};
use Undertone::{Cool, NeutralCool, NeutralWarm, Warm};

const fn shade(name: &'static str, r: u8, g: u8, b: u8, undertone: Undertone) -> ShadeEntry {
    ShadeEntry {
        name,
        rgb: Rgb::new(r, g, b),
        undertone,
    }
}

/// MAC Studio Fix Fluid / Pro Longwear reference shades.
pub static CATALOG: [ShadeEntry; 34] = [
    shade("NC15", 235, 200, 170, NeutralCool),
    shade("NC20", 220, 185, 155, NeutralCool),
    shade("NC25", 205, 170, 140, NeutralCool),
    shade("NC30", 190, 155, 125, NeutralCool),
    shade("NC35", 175, 140, 110, NeutralCool),
    shade("NC40", 160, 125, 95, NeutralCool),
    shade("NC42", 150, 115, 85, NeutralCool),
    shade("NC45", 140, 105, 75, NeutralCool),
    shade("NC50", 125, 90, 60, NeutralCool),
    shade("NW15", 240, 205, 175, NeutralWarm),
    shade("NW20", 225, 190, 160, NeutralWarm),
    shade("NW25", 210, 175, 145, NeutralWarm),
    shade("NW30", 195, 160, 130, NeutralWarm),
    shade("NW35", 180, 145, 115, NeutralWarm),
    shade("NW40", 165, 130, 100, NeutralWarm),
    shade("NW43", 155, 120, 90, NeutralWarm),
    shade("NW45", 145, 110, 80, NeutralWarm),
    shade("NW50", 130, 95, 65, NeutralWarm),
    shade("C1", 245, 210, 180, Cool),
    shade("C2", 230, 195, 165, Cool),
    shade("C3", 215, 180, 150, Cool),
    shade("C4", 200, 165, 135, Cool),
    shade("C5", 185, 150, 120, Cool),
    shade("C6", 170, 135, 105, Cool),
    shade("C7", 155, 120, 90, Cool),
    shade("C8", 140, 105, 75, Cool),
    shade("W1", 250, 215, 185, Warm),
    shade("W2", 235, 200, 170, Warm),
    shade("W3", 220, 185, 155, Warm),
    shade("W4", 205, 170, 140, Warm),
    shade("W5", 190, 155, 125, Warm),
    shade("W6", 175, 140, 110, Warm),
    shade("W7", 160, 125, 95, Warm),
    shade("W8", 145, 110, 80, Warm),
];

/// The process-wide catalog as a slice.
pub fn catalog() -> &'static [ShadeEntry] {
    &CATALOG
}

/// Look up a shade by its exact name.
pub fn find_shade(name: &str) -> Option<&'static ShadeEntry> {
    CATALOG.iter().find(|entry| entry.name == name)
}
