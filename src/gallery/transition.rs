/// Builds the two timelines that make up one section transition.

use crate::core::config;
use crate::core::types::{CardDescriptor, Geometry};
use crate::gallery::animation::Ease;
use crate::gallery::edge::resolve_edge;
use crate::gallery::timeline::{Cue, Timeline};
use crate::platform::surface::{Props, Surface, Target};
use rand::Rng;

/// Card motion and heading fade for one transition. Both must finish
/// before the transition counts as complete.
#[derive(Debug)]
pub struct TransitionPlan {
    pub cards: Timeline,
    pub heading: Timeline,
}

impl TransitionPlan {
    pub fn tick(&mut self, dt_ms: f64, surface: &mut Surface) {
        self.cards.tick(dt_ms, surface);
        self.heading.tick(dt_ms, surface);
    }

    /// Fan-in point: true once both timelines have run to the end.
    pub fn is_finished(&self) -> bool {
        self.cards.is_finished() && self.heading.is_finished()
    }
}

/// Schedule exit of `outgoing`, entry of `incoming` and the heading swap to
/// `heading_text`.
///
/// Incoming cards are snapped off-screen immediately; everything else
/// happens as the returned plan is ticked.
pub fn plan_transition<R: Rng>(
    outgoing: &[CardDescriptor],
    incoming: &[CardDescriptor],
    heading_text: &str,
    geometry: &Geometry,
    surface: &mut Surface,
    rng: &mut R,
) -> TransitionPlan {
    let (w, h) = (geometry.width, geometry.height);
    let mut cards = Timeline::new();

    for card in outgoing {
        let target = resolve_edge(card.center.x, card.center.y, w, h, rng);
        let rotation = flight_rotation(rng);
        log::debug!("card {:?} exits toward ({:.0}, {:.0})", card.element, target.x, target.y);
        cards
            .to(
                Target::Card(card.element),
                Props::position(target.x, target.y).with_rotation(rotation),
                config::CARD_EXIT_MS,
                Ease::In,
                0.0,
            )
            .then(Cue::Detach(card.element));
    }

    let enter_offset = config::CARD_EXIT_MS * config::ENTER_OVERLAP;
    for card in incoming {
        let origin = resolve_edge(card.center.x, card.center.y, w, h, rng);
        surface.apply(
            Target::Card(card.element),
            Props::position(origin.x, origin.y).with_rotation(flight_rotation(rng)),
        );
        let rest_rotation =
            rng.gen_range(-config::REST_ROTATION_DEG..config::REST_ROTATION_DEG);
        cards.to(
            Target::Card(card.element),
            Props::position(card.center.x, card.center.y).with_rotation(rest_rotation),
            config::CARD_ENTER_MS,
            Ease::Out,
            enter_offset,
        );
    }

    let mut heading = Timeline::new();
    heading
        .to(
            Target::Heading,
            Props::opacity(0.0),
            config::HEADING_FADE_MS,
            Ease::Linear,
            0.0,
        )
        .then(Cue::SetHeading(heading_text.to_string()))
        .to(
            Target::Heading,
            Props::opacity(1.0),
            config::HEADING_FADE_MS,
            Ease::Linear,
            config::HEADING_FADE_MS,
        );

    TransitionPlan { cards, heading }
}

fn flight_rotation<R: Rng>(rng: &mut R) -> f64 {
    rng.gen_range(-config::FLIGHT_ROTATION_DEG..config::FLIGHT_ROTATION_DEG)
}
