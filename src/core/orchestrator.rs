/// Central orchestrator: maps scroll progress to sections and runs section transitions.
///
/// Owns the gallery context (geometry, state, surface, random source). Only
/// transition completion and `resize` write to `GalleryState`.

use super::config::GalleryConfig;
use super::types::*;
use crate::gallery::card_layout::generate_layout;
use crate::gallery::sections::{section_for_progress, set_number};
use crate::gallery::transition::{plan_transition, TransitionPlan};
use crate::gallery::viewport::compute_geometry;
use crate::platform::surface::{Props, Surface, Target};
use rand::Rng;

/// The one transition allowed to be running.
#[derive(Debug)]
struct InFlight {
    target_section: usize,
    incoming: Vec<CardDescriptor>,
    plan: TransitionPlan,
}

pub struct Orchestrator<R: Rng> {
    config: GalleryConfig,
    geometry: Geometry,
    state: GalleryState,
    surface: Surface,
    rng: R,
    in_flight: Option<InFlight>,
}

impl<R: Rng> Orchestrator<R> {
    /// Build the gallery for a `width` x `height` viewport, pre-populated with section 0.
    pub fn new(config: GalleryConfig, width: f64, height: f64, rng: R) -> Self {
        let surface = Surface::new(config.heading(0));
        let mut orch = Self {
            geometry: compute_geometry(width, height),
            config,
            state: GalleryState::default(),
            surface,
            rng,
            in_flight: None,
        };
        orch.populate(0);
        log::info!(
            "gallery ready: {}x{} viewport, ring {:.0}..{:.0}, {} cards",
            width,
            height,
            orch.geometry.range_min,
            orch.geometry.range_max,
            orch.state.active_cards.len()
        );
        orch
    }

    pub fn state(&self) -> &GalleryState {
        &self.state
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating
    }

    /// Section the running transition is heading to, if any.
    pub fn pending_section(&self) -> Option<usize> {
        self.in_flight.as_ref().map(|f| f.target_section)
    }

    /// Feed a scroll progress value. Returns true if a transition started.
    ///
    /// Updates that arrive while a transition is running are dropped, not queued.
    pub fn on_progress(&mut self, progress: f64) -> bool {
        let section = section_for_progress(progress);
        if section == self.state.current_section {
            return false;
        }
        if self.state.is_animating {
            log::debug!(
                "progress {:.3} -> section {} dropped: transition in flight",
                progress,
                section
            );
            return false;
        }
        self.start_transition(section);
        true
    }

    fn start_transition(&mut self, section: usize) {
        self.state.is_animating = true;
        log::info!(
            "transition: section {} -> {}",
            self.state.current_section,
            section
        );

        let incoming = generate_layout(
            set_number(section),
            self.config.cards_per_section,
            &self.geometry,
            &self.config.asset_root,
            &mut self.surface,
            &mut self.rng,
        );
        let plan = plan_transition(
            &self.state.active_cards,
            &incoming,
            self.config.heading(section),
            &self.geometry,
            &mut self.surface,
            &mut self.rng,
        );

        self.in_flight = Some(InFlight {
            target_section: section,
            incoming,
            plan,
        });
    }

    /// Advance running animations by `dt_ms`. Returns true if a transition completed.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        let finished = match self.in_flight.as_mut() {
            Some(flight) => {
                flight.plan.tick(dt_ms, &mut self.surface);
                flight.plan.is_finished()
            }
            None => false,
        };
        if !finished {
            return false;
        }

        if let Some(flight) = self.in_flight.take() {
            self.state.active_cards = flight.incoming;
            self.state.current_section = flight.target_section;
            self.state.is_animating = false;
            log::info!("transition complete: section {}", flight.target_section);
        }
        true
    }

    /// Rebuild for a new viewport size.
    ///
    /// A running transition is cancelled: every card is dropped, the heading
    /// returns to the current section, and the current section is laid out
    /// again for the new geometry.
    pub fn resize(&mut self, width: f64, height: f64) {
        if width <= 0.0 || height <= 0.0 {
            log::debug!("ignoring resize to {}x{}", width, height);
            return;
        }

        if let Some(flight) = self.in_flight.take() {
            log::info!(
                "resize cancelled transition to section {}",
                flight.target_section
            );
        }

        let removed = self.surface.clear_cards();
        self.state.active_cards.clear();
        self.state.is_animating = false;

        let heading = self.config.heading(self.state.current_section).to_string();
        self.surface.set_heading_text(&heading);
        self.surface.apply(Target::Heading, Props::opacity(1.0));

        self.geometry = compute_geometry(width, height);
        self.populate(self.state.current_section);
        log::info!(
            "resized to {}x{}: replaced {} cards with {}",
            width,
            height,
            removed,
            self.state.active_cards.len()
        );
    }

    fn populate(&mut self, section: usize) {
        self.state.active_cards = generate_layout(
            set_number(section),
            self.config.cards_per_section,
            &self.geometry,
            &self.config.asset_root,
            &mut self.surface,
            &mut self.rng,
        );
        self.state.current_section = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::path::PathBuf;

    fn orchestrator() -> Orchestrator<StdRng> {
        Orchestrator::new(
            GalleryConfig::default(),
            1280.0,
            720.0,
            StdRng::seed_from_u64(9),
        )
    }

    fn run_to_completion(orch: &mut Orchestrator<StdRng>) {
        let mut elapsed = 0.0;
        while orch.is_animating() {
            orch.tick(16.0);
            elapsed += 16.0;
            assert!(elapsed < 10_000.0, "transition never completed");
        }
    }

    #[test]
    fn test_initial_state_is_populated_section_zero() {
        let orch = orchestrator();
        assert_eq!(orch.state().current_section, 0);
        assert!(!orch.is_animating());
        assert_eq!(orch.state().active_cards.len(), 15);
        assert_eq!(orch.surface().len(), 15);
        assert_eq!(orch.surface().heading().text, "Wild Places");
        assert_eq!(
            orch.state().active_cards[0].image_path,
            PathBuf::from("assets/set1/img1.jpg")
        );
    }

    #[test]
    fn test_same_quartile_is_a_no_op() {
        let mut orch = orchestrator();
        assert!(!orch.on_progress(0.0));
        assert!(!orch.on_progress(0.1));
        assert!(!orch.on_progress(0.2));
        assert!(!orch.on_progress(0.24));
        assert!(!orch.is_animating());
        assert_eq!(orch.surface().len(), 15);
    }

    #[test]
    fn test_crossing_threshold_fires_one_transition() {
        let mut orch = orchestrator();
        orch.on_progress(0.24);
        assert!(orch.on_progress(0.26));
        assert!(orch.is_animating());
        assert_eq!(orch.pending_section(), Some(1));
        // Further updates in the same quartile while busy do nothing.
        assert!(!orch.on_progress(0.27));
        // Outgoing plus incoming cards coexist mid-flight.
        assert_eq!(orch.surface().len(), 30);

        run_to_completion(&mut orch);

        let state = orch.state();
        assert_eq!(state.current_section, 1);
        assert_eq!(orch.surface().heading().text, "Quiet Cities");
        assert_eq!(state.active_cards.len(), 15);
        assert_eq!(orch.surface().len(), 15);
        let paths: Vec<PathBuf> = state
            .active_cards
            .iter()
            .map(|c| c.image_path.clone())
            .collect();
        let expected: Vec<PathBuf> = (1..=15)
            .map(|i| PathBuf::from(format!("assets/set2/img{}.jpg", i)))
            .collect();
        assert_eq!(paths, expected);
    }

    #[test]
    fn test_lock_held_until_both_timelines_finish() {
        let mut orch = orchestrator();
        orch.on_progress(0.3);
        // Heading fade is done by 800ms; cards need 1500ms.
        orch.tick(900.0);
        assert!(orch.is_animating());
        assert_eq!(orch.surface().heading().text, "Quiet Cities");
        orch.tick(700.0);
        assert!(!orch.is_animating());
        assert_eq!(orch.state().current_section, 1);
    }

    #[test]
    fn test_progress_dropped_while_busy() {
        let mut orch = orchestrator();
        orch.on_progress(0.3);
        assert!(!orch.on_progress(0.8));
        assert_eq!(orch.pending_section(), Some(1));
        run_to_completion(&mut orch);
        assert_eq!(orch.state().current_section, 1);
        // The skipped section is reachable by the next update.
        assert!(orch.on_progress(0.8));
        assert_eq!(orch.pending_section(), Some(3));
    }

    #[test]
    fn test_rapid_jump_skips_intermediate_sections() {
        let mut orch = orchestrator();
        orch.on_progress(0.1);
        assert!(orch.on_progress(0.9));
        assert_eq!(orch.pending_section(), Some(3));
        run_to_completion(&mut orch);
        assert_eq!(orch.state().current_section, 3);
        assert!(orch
            .state()
            .active_cards
            .iter()
            .all(|c| c.image_path.starts_with("assets/set4")));
        assert_eq!(orch.surface().len(), 15);
    }

    #[test]
    fn test_scrolling_back_returns_to_first_section() {
        let mut orch = orchestrator();
        orch.on_progress(0.6);
        run_to_completion(&mut orch);
        assert!(orch.on_progress(0.0));
        run_to_completion(&mut orch);
        assert_eq!(orch.state().current_section, 0);
        assert_eq!(orch.surface().heading().text, "Wild Places");
    }

    #[test]
    fn test_full_progress_maps_to_last_section() {
        let mut orch = orchestrator();
        assert!(orch.on_progress(1.0));
        assert_eq!(orch.pending_section(), Some(3));
    }

    #[test]
    fn test_resize_in_steady_state_regenerates_cards() {
        let mut orch = orchestrator();
        let before: Vec<ElementId> = orch.state().active_cards.iter().map(|c| c.element).collect();

        orch.resize(800.0, 600.0);

        let geometry = *orch.geometry();
        assert_eq!(geometry.center_x, 400.0);
        assert_eq!(orch.surface().len(), 15);
        assert!(before.iter().all(|id| !orch.surface().contains(*id)));
        for card in &orch.state().active_cards {
            let dist = (card.center - geometry.center()).length();
            assert!(dist >= geometry.range_min - 1e-9 && dist <= geometry.range_max + 1e-9);
        }
        assert_eq!(orch.state().current_section, 0);
    }

    #[test]
    fn test_resize_mid_transition_cancels_and_resets() {
        let mut orch = orchestrator();
        orch.on_progress(0.5);
        orch.tick(300.0);
        assert!(orch.is_animating());

        orch.resize(1024.0, 768.0);

        assert!(!orch.is_animating());
        assert_eq!(orch.pending_section(), None);
        assert_eq!(orch.state().current_section, 0);
        assert_eq!(orch.surface().len(), 15);
        assert_eq!(orch.surface().heading().text, "Wild Places");
        assert_eq!(orch.surface().heading().opacity, 1.0);

        // Ticking after the reset must not touch the fresh cards.
        let poses: Vec<_> = orch
            .state()
            .active_cards
            .iter()
            .map(|c| orch.surface().pose(Target::Card(c.element)))
            .collect();
        assert!(!orch.tick(2000.0));
        let after: Vec<_> = orch
            .state()
            .active_cards
            .iter()
            .map(|c| orch.surface().pose(Target::Card(c.element)))
            .collect();
        assert_eq!(poses, after);

        // The section the scroll position maps to can be reached again.
        assert!(orch.on_progress(0.5));
    }

    #[test]
    fn test_zero_sized_resize_is_ignored() {
        let mut orch = orchestrator();
        let before = *orch.geometry();
        orch.resize(0.0, 600.0);
        assert_eq!(*orch.geometry(), before);
        assert_eq!(orch.surface().len(), 15);
    }
}
