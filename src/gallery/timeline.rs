/// Property tweens scheduled on a shared timeline.
///
/// Each step starts at an offset from the timeline origin and interpolates
/// the listed properties of one target. Start values are captured when the
/// step first becomes active, so a step placed after an instantaneous
/// assignment interpolates from the assigned values. A step may carry a
/// completion cue that mutates the surface once it finishes.

use crate::core::types::ElementId;
use crate::gallery::animation::{lerp, Animation, Ease};
use crate::platform::surface::{Pose, Props, Surface, Target};

/// Surface mutation fired when a step completes.
#[derive(Debug, Clone, PartialEq)]
pub enum Cue {
    Detach(ElementId),
    SetHeading(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepState {
    Pending,
    Running,
    Done,
}

#[derive(Debug)]
struct Step {
    target: Target,
    offset: f64,
    duration: f64,
    to: Props,
    anim: Animation,
    from: Option<Pose>,
    cue: Option<Cue>,
    state: StepState,
}

impl Step {
    fn interpolated(&self, from: Pose, t: f64) -> Props {
        Props {
            x: self.to.x.map(|x| lerp(from.x, x, t)),
            y: self.to.y.map(|y| lerp(from.y, y, t)),
            rotation: self.to.rotation.map(|r| lerp(from.rotation, r, t)),
            opacity: self.to.opacity.map(|o| lerp(from.opacity, o, t)),
        }
    }
}

#[derive(Debug, Default)]
pub struct Timeline {
    steps: Vec<Step>,
    elapsed: f64,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a tween of `target` toward `to`, starting `offset_ms` after the origin.
    pub fn to(
        &mut self,
        target: Target,
        to: Props,
        duration_ms: f64,
        ease: Ease,
        offset_ms: f64,
    ) -> &mut Self {
        self.steps.push(Step {
            target,
            offset: offset_ms.max(0.0),
            duration: duration_ms.max(0.0),
            to,
            anim: Animation::new(ease),
            from: None,
            cue: None,
            state: StepState::Pending,
        });
        self
    }

    /// Attach `cue` to the completion of the most recently scheduled step.
    pub fn then(&mut self, cue: Cue) -> &mut Self {
        if let Some(step) = self.steps.last_mut() {
            step.cue = Some(cue);
        }
        self
    }

    /// Time from the origin until the last step ends.
    pub fn duration_ms(&self) -> f64 {
        self.steps
            .iter()
            .map(|s| s.offset + s.duration)
            .fold(0.0, f64::max)
    }

    pub fn is_finished(&self) -> bool {
        self.steps.iter().all(|s| s.state == StepState::Done)
    }

    /// Advance the shared clock by `dt_ms` and write interpolated values to `surface`.
    ///
    /// Steps are evaluated in scheduling order, so a step that completes in
    /// this tick is applied before any later step that starts in it.
    pub fn tick(&mut self, dt_ms: f64, surface: &mut Surface) {
        self.elapsed += dt_ms.max(0.0);
        let elapsed = self.elapsed;

        for step in &mut self.steps {
            let advance = match step.state {
                StepState::Done => continue,
                StepState::Pending => {
                    if elapsed < step.offset {
                        continue;
                    }
                    match surface.pose(step.target) {
                        Some(pose) => step.from = Some(pose),
                        None => {
                            step.state = StepState::Done;
                            continue;
                        }
                    }
                    step.anim.start(step.duration);
                    step.state = StepState::Running;
                    elapsed - step.offset
                }
                StepState::Running => dt_ms.max(0.0),
            };

            let finished = step.anim.update(advance).is_some();
            let from = match step.from {
                Some(from) => from,
                None => continue,
            };
            let props = step.interpolated(from, step.anim.progress());
            if !surface.apply(step.target, props) {
                step.state = StepState::Done;
                continue;
            }

            if finished {
                step.state = StepState::Done;
                if let Some(cue) = step.cue.take() {
                    fire(cue, surface);
                }
            }
        }
    }
}

fn fire(cue: Cue, surface: &mut Surface) {
    match cue {
        Cue::Detach(id) => {
            surface.destroy(id);
        }
        Cue::SetHeading(text) => surface.set_heading_text(&text),
    }
}
