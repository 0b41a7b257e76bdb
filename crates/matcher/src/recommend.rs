//! Short textual advice attached to every match result.

use crate::types::Undertone;

/// Results below this confidence get the lighting advisory.
pub const LOW_CONFIDENCE_THRESHOLD: u8 = 70;

pub const LIGHTING_ADVISORY: &str =
    "Consider trying the shade in natural lighting before purchasing";

pub const JAWLINE_TIP: &str =
    "For best results, test the foundation on your jawline in natural daylight";

pub const ATTRIBUTION: &str = "This project is based on MAC Studio Fix Fluid or Pro Longwear formulations shades. https://www.maccosmetics.in/products/face/foundations";

/// Build the ordered recommendation list.
///
/// Order is fixed: lighting advisory (low confidence only), undertone
/// mismatch advisory (only when the two labels differ), jawline tip,
/// attribution.
pub fn recommendations(
    confidence: u8,
    user_undertone: Undertone,
    shade_undertone: Undertone,
) -> Vec<String> {
    let mut out = Vec::with_capacity(4);

    if confidence < LOW_CONFIDENCE_THRESHOLD {
        out.push(LIGHTING_ADVISORY.to_string());
    }

    if user_undertone != shade_undertone {
        out.push(undertone_mismatch(user_undertone, shade_undertone));
    }

    out.push(JAWLINE_TIP.to_string());
    out.push(ATTRIBUTION.to_string());
    out
}

fn undertone_mismatch(user: Undertone, shade: Undertone) -> String {
    format!(
        "Your skin appears to have {user} undertones, but we matched you with a {shade} shade. \
         You might also want to try shades from the {user} range."
    )
}
