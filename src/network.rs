//! The spring network: live springs, their adjacency index, and the per-step update.

mod adjacency;
mod shared;

pub use adjacency::AdjacencyIndex;
pub use shared::SharedSpringNetwork;

use glam::{Vec2, Vec3};
use log::{debug, error};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    config::NetworkConfig,
    core::{body::BodySet, spring::SpringConstraint, types::SpringSettings},
    debug::{DebugLine, SpringStrain, StepObserver},
    dynamics::forces::compute_spring_force,
    error::NetworkError,
    interaction::{segment_hit, CursorSource},
    utils::{allocator::BodyId, logging::ScopedTimer},
};

/// What one step did to the network.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepReport {
    pub elapsed: f32,
    pub springs_evaluated: usize,
    /// Springs removed for exceeding the snap length, in network order.
    pub snapped: Vec<SpringConstraint>,
    /// Springs removed by the sever input (and not also snapped), in network order.
    pub severed: Vec<SpringConstraint>,
}

impl StepReport {
    pub fn removed_count(&self) -> usize {
        self.snapped.len() + self.severed.len()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct SpringOutcome {
    force: Option<Vec3>,
    snapped: bool,
    severed: bool,
}

impl SpringOutcome {
    fn is_dead(&self) -> bool {
        self.snapped || self.severed
    }
}

/// Graph of breakable springs between externally owned bodies.
///
/// Single-threaded by construction: all mutation goes through `&mut self`.
/// Wrap it in a [`SharedSpringNetwork`] to drive it from several threads.
pub struct SpringNetwork {
    springs: Vec<SpringConstraint>,
    adjacency: AdjacencyIndex,
    config: NetworkConfig,
    observer: Option<Box<dyn StepObserver>>,
}

impl Default for SpringNetwork {
    fn default() -> Self {
        Self::new()
    }
}

impl SpringNetwork {
    pub fn new() -> Self {
        Self::with_config(NetworkConfig::default())
    }

    pub fn with_config(config: NetworkConfig) -> Self {
        Self {
            springs: Vec::new(),
            adjacency: AdjacencyIndex::new(),
            config,
            observer: None,
        }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: NetworkConfig) {
        self.config = config;
    }

    pub fn settings(&self) -> SpringSettings {
        self.config.settings
    }

    /// Takes effect on the next step.
    pub fn set_settings(&mut self, settings: SpringSettings) {
        self.config.settings = settings;
    }

    pub fn snap_length(&self) -> f32 {
        self.config.snap_length
    }

    pub fn set_snap_length(&mut self, snap_length: f32) {
        self.config.snap_length = snap_length;
    }

    pub fn interact_radius(&self) -> f32 {
        self.config.interact_radius
    }

    pub fn set_interact_radius(&mut self, radius: f32) {
        self.config.interact_radius = radius;
    }

    pub fn set_observer<O>(&mut self, observer: O)
    where
        O: StepObserver + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn observer_name(&self) -> Option<&str> {
        self.observer.as_ref().map(|observer| observer.name())
    }

    /// Adds `spring` to the live set. Parallel springs between the same pair
    /// are kept and tracked independently.
    pub fn add_spring(&mut self, spring: SpringConstraint) {
        self.springs.push(spring);
        self.adjacency.link(spring.a(), spring.b());
    }

    /// Removes the first live spring equal to `spring` and returns it.
    pub fn remove_spring(
        &mut self,
        spring: &SpringConstraint,
    ) -> Result<SpringConstraint, NetworkError> {
        let index = self
            .springs
            .iter()
            .position(|live| live == spring)
            .ok_or(NetworkError::SpringNotFound {
                a: spring.a(),
                b: spring.b(),
            })?;
        self.adjacency.unlink(spring.a(), spring.b())?;
        Ok(self.springs.remove(index))
    }

    /// Removes every spring touching `body` (e.g. when the host destroys it)
    /// and drops its adjacency entry.
    pub fn remove_springs_of(&mut self, body: BodyId) -> Vec<SpringConstraint> {
        let mut removed = Vec::new();
        let adjacency = &mut self.adjacency;
        self.springs.retain(|spring| {
            if !spring.involves(body) {
                return true;
            }
            Self::unlink_or_report(adjacency, spring);
            removed.push(*spring);
            false
        });
        self.adjacency.forget_if_isolated(body);
        removed
    }

    pub fn springs(&self) -> &[SpringConstraint] {
        &self.springs
    }

    pub fn len(&self) -> usize {
        self.springs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.springs.is_empty()
    }

    pub fn clear(&mut self) {
        self.springs.clear();
        self.adjacency.clear();
    }

    pub fn adjacency(&self) -> &AdjacencyIndex {
        &self.adjacency
    }

    pub fn neighbors(&self, body: BodyId) -> &[BodyId] {
        self.adjacency.neighbors(body)
    }

    pub fn degree(&self, body: BodyId) -> usize {
        self.adjacency.degree(body)
    }

    /// False (not an error) when `a` has never been part of a spring.
    pub fn spring_exists_between(&self, a: BodyId, b: BodyId) -> bool {
        self.adjacency.connected(a, b)
    }

    /// A body directly connected to both `a` and `b`, preferring `a`'s
    /// neighbour order.
    pub fn mutual_connection(&self, a: BodyId, b: BodyId) -> Option<BodyId> {
        self.adjacency.mutual_neighbor(a, b)
    }

    /// Runs one fixed tick: snaps over-stretched springs, applies spring
    /// forces to the rest, severs springs under an active cursor, then removes
    /// everything marked dead.
    ///
    /// `elapsed_seconds` is recorded in the report; forces are not scaled by it.
    pub fn step<B, C>(&mut self, elapsed_seconds: f32, bodies: &mut B, input: &C) -> StepReport
    where
        B: BodySet + ?Sized,
        C: CursorSource + ?Sized,
    {
        let _timer = ScopedTimer::new("network::step");
        let cursor = input.sever_active().then(|| input.cursor_world());

        let outcomes: Vec<SpringOutcome> = {
            let _timer = ScopedTimer::new("network::evaluate");
            let bodies: &B = bodies;
            self.springs
                .iter()
                .map(|spring| Self::evaluate(spring, bodies, &self.config, cursor))
                .collect()
        };

        self.apply_outcomes(elapsed_seconds, bodies, &outcomes)
    }

    /// Same as [`SpringNetwork::step`], with constraint evaluation spread over
    /// the rayon pool. Forces and removals are still applied in network order,
    /// so the result matches the sequential step exactly.
    #[cfg(feature = "parallel")]
    pub fn step_parallel<B, C>(
        &mut self,
        elapsed_seconds: f32,
        bodies: &mut B,
        input: &C,
    ) -> StepReport
    where
        B: BodySet + Sync + ?Sized,
        C: CursorSource + ?Sized,
    {
        let _timer = ScopedTimer::new("network::step_parallel");
        let cursor = input.sever_active().then(|| input.cursor_world());

        let outcomes: Vec<SpringOutcome> = {
            let _timer = ScopedTimer::new("network::evaluate_parallel");
            let bodies: &B = bodies;
            let config = &self.config;
            self.springs
                .par_iter()
                .map(|spring| Self::evaluate(spring, bodies, config, cursor))
                .collect()
        };

        self.apply_outcomes(elapsed_seconds, bodies, &outcomes)
    }

    fn evaluate<B>(
        spring: &SpringConstraint,
        bodies: &B,
        config: &NetworkConfig,
        cursor: Option<Vec2>,
    ) -> SpringOutcome
    where
        B: BodySet + ?Sized,
    {
        let state_a = bodies.state(spring.a());
        let state_b = bodies.state(spring.b());

        let (Some(a), Some(b)) = (state_a, state_b) else {
            // Dangling handle: warn through the force model and leave the spring alone.
            let force = compute_spring_force(
                state_a.as_ref(),
                state_b.as_ref(),
                spring.rest_length(),
                &config.settings,
            );
            return SpringOutcome {
                force: Some(force),
                ..SpringOutcome::default()
            };
        };

        let snapped = a.position.distance(b.position) > config.snap_length;
        let force = (!snapped).then(|| {
            compute_spring_force(Some(&a), Some(&b), spring.rest_length(), &config.settings)
        });
        let severed = cursor.is_some_and(|cursor| {
            segment_hit(a.position, b.position, cursor, config.interact_radius)
        });

        SpringOutcome {
            force,
            snapped,
            severed,
        }
    }

    fn apply_outcomes<B>(
        &mut self,
        elapsed_seconds: f32,
        bodies: &mut B,
        outcomes: &[SpringOutcome],
    ) -> StepReport
    where
        B: BodySet + ?Sized,
    {
        debug_assert_eq!(outcomes.len(), self.springs.len());

        let mut report = StepReport {
            elapsed: elapsed_seconds,
            springs_evaluated: outcomes.len(),
            ..StepReport::default()
        };

        for (spring, outcome) in self.springs.iter().zip(outcomes) {
            if let Some(force) = outcome.force {
                bodies.add_force(spring.a(), -force);
                bodies.add_force(spring.b(), force);
            }

            if outcome.snapped {
                debug!("spring {} - {} snapped", spring.a(), spring.b());
                report.snapped.push(*spring);
            } else if outcome.severed {
                debug!("spring {} - {} severed", spring.a(), spring.b());
                report.severed.push(*spring);
            }
        }

        // Removal is deferred until every spring has been evaluated.
        if report.removed_count() > 0 {
            let adjacency = &mut self.adjacency;
            let mut outcome = outcomes.iter();
            self.springs.retain(|spring| {
                let dead = outcome.next().is_some_and(SpringOutcome::is_dead);
                if dead {
                    Self::unlink_or_report(adjacency, spring);
                }
                !dead
            });
        }

        self.notify(&report, &*bodies);
        report
    }

    fn unlink_or_report(adjacency: &mut AdjacencyIndex, spring: &SpringConstraint) {
        let unlinked = adjacency.unlink(spring.a(), spring.b());
        debug_assert!(unlinked.is_ok(), "adjacency out of sync: {unlinked:?}");
        if let Err(err) = unlinked {
            error!("removing spring {} - {}: {err}", spring.a(), spring.b());
        }
    }

    fn notify<B>(&mut self, report: &StepReport, bodies: &B)
    where
        B: BodySet + ?Sized,
    {
        if self.observer.is_none() {
            return;
        }
        let strains = self.strains(bodies);
        if let Some(observer) = self.observer.as_mut() {
            observer.on_step(report, &strains);
        }
    }

    /// Current strain of every live spring whose endpoints both resolve.
    pub fn strains<B>(&self, bodies: &B) -> Vec<SpringStrain>
    where
        B: BodySet + ?Sized,
    {
        self.springs
            .iter()
            .filter_map(|spring| {
                let from = bodies.position(spring.a())?;
                let to = bodies.position(spring.b())?;
                Some(SpringStrain::measure(*spring, from, to))
            })
            .collect()
    }

    /// Coloured lines for drawing the network, green at rest to red when strained.
    pub fn debug_lines<B>(&self, bodies: &B) -> Vec<DebugLine>
    where
        B: BodySet + ?Sized,
    {
        self.strains(bodies).iter().map(SpringStrain::line).collect()
    }
}
