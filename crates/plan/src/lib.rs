//! The GigLift Brand Ambassador Program business development plan.
//!
//! [`build_deck`] lays out the fixed fourteen-slide deck. All content is
//! literal; numbers such as the budget totals are written exactly as they
//! appear and are not recomputed from the line items.

pub mod palette;
mod slides;

use deck_core::Deck;
use std::path::Path;

/// Number of slides in the plan.
pub const SLIDE_COUNT: usize = 14;

/// File name of the generated deck.
pub const OUTPUT_FILE_NAME: &str = "GigLift_Brand_Ambassador_Plan.pptx";

/// File name of the optional background picture.
pub const BACKGROUND_FILE_NAME: &str = "ambassador_slide_bg.png";

pub const DECK_TITLE: &str = "GigLift Brand Ambassador Plan";

/// Build the plan deck.
///
/// `background` is tried as a full-bleed picture behind every slide. When it
/// is `None` or cannot be loaded, slides keep only their solid dark fill.
pub fn build_deck(background: Option<&Path>) -> Deck {
    let mut deck = Deck::widescreen(DECK_TITLE)
        .with_author("GigLift")
        .with_created("2026-02-01T00:00:00Z")
        .with_background_fill(palette::DARK_BG);

    if let Some(path) = background {
        if !deck.load_background(path) {
            log::info!("Background picture unavailable, using solid fill");
        }
    }

    slides::title(&mut deck);
    slides::agenda(&mut deck);
    slides::executive_summary(&mut deck);
    slides::ambassador_tiers(&mut deck);
    slides::ambassador_types(&mut deck);
    slides::referral_tracking(&mut deck);
    slides::recruitment_strategy(&mut deck);
    slides::content_playbook(&mut deck);
    slides::incentives(&mut deck);
    slides::budget(&mut deck);
    slides::roi_projection(&mut deck);
    slides::launch_timeline(&mut deck);
    slides::next_steps(&mut deck);
    slides::closing(&mut deck);

    log::debug!("Built {} slides", deck.slide_count());
    deck
}
