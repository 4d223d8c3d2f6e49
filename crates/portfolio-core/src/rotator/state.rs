//! Testimonial rotation state machine.
//!
//! Time-free: phase boundaries are crossed by calling [`TestimonialRotator::advance`]
//! with the [`PhaseTicket`] handed out when the phase began. The autoplay
//! driver owns the clock; tests can step the machine directly.
//!
//! ```text
//!            rotate_one / reset_all          advance(exit)             advance(enter)
//!   Idle ─────────────────────────▶ Exiting ─────────────▶ Entering ─────────────▶ Idle
//!                                      │
//!                                      └── no unused testimonial ──▶ Idle (aborted)
//! ```

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{PortfolioError, PortfolioResult};
use crate::viewport::Breakpoints;

/// Animation tag for a single displayed slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotPhase {
    /// Fully visible, no transition running
    #[default]
    Settled,
    /// Old testimonial fading out
    Exiting,
    /// New testimonial fading in
    Entering,
}

impl SlotPhase {
    /// CSS modifier class for the rendering surface.
    pub fn class(&self) -> &'static str {
        match self {
            SlotPhase::Settled => "",
            SlotPhase::Exiting => "exiting",
            SlotPhase::Entering => "entering",
        }
    }
}

/// What a slot currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotView {
    /// Index into the testimonial pool
    pub pool_index: usize,
    pub phase: SlotPhase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Exit,
    Enter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Target {
    Slot(usize),
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Transition {
    Idle,
    Running { target: Target, stage: Stage },
}

/// Proof that a phase is in flight; redeemed with [`TestimonialRotator::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTicket {
    epoch: u64,
    stage: Stage,
}

impl PhaseTicket {
    /// True for the fade-out phase, false for the fade-in phase.
    pub fn is_exit(&self) -> bool {
        self.stage == Stage::Exit
    }
}

/// Result of asking for a rotation or reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationStart {
    /// Exit phase started; advance the ticket once it has elapsed
    Started(PhaseTicket),
    /// Another transition is in flight; the request is dropped
    Busy,
    /// Every testimonial is already on screen
    Saturated,
}

/// Result of crossing a phase boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Content swapped, enter phase started
    Entering(PhaseTicket),
    /// Transition finished; rotations are accepted again
    Settled,
    /// No unused testimonial was left to swap in; transition dropped
    Aborted,
    /// Ticket belongs to a transition that no longer exists
    Stale,
}

/// Rotating subset of a fixed testimonial pool.
///
/// Holds indices, not records: the pool itself is owned by the site content
/// and never changes. At every settled instant the selection holds
/// `items_per_view()` distinct indices in `0..pool_size`.
#[derive(Debug)]
pub struct TestimonialRotator<R = StdRng> {
    pool_size: usize,
    /// Capacity requested by the viewport, before clamping to the pool
    capacity: usize,
    selection: Vec<usize>,
    last_changed: Option<usize>,
    transition: Transition,
    /// Bumped when a transition starts or the selection is reinitialised;
    /// invalidates outstanding tickets
    epoch: u64,
    rng: R,
}

impl TestimonialRotator<StdRng> {
    /// Rotator seeded from the operating system.
    pub fn from_os_rng(pool_size: usize, capacity: usize) -> Self {
        Self::new(pool_size, capacity, StdRng::from_os_rng())
    }

    /// Deterministic rotator for reproducible runs.
    pub fn seeded(pool_size: usize, capacity: usize, seed: u64) -> Self {
        Self::new(pool_size, capacity, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> TestimonialRotator<R> {
    /// Create a rotator showing `capacity` random distinct testimonials.
    ///
    /// A capacity larger than the pool is clamped to the pool size.
    pub fn new(pool_size: usize, capacity: usize, rng: R) -> Self {
        let mut rotator = Self {
            pool_size,
            capacity,
            selection: Vec::new(),
            last_changed: None,
            transition: Transition::Idle,
            epoch: 0,
            rng,
        };
        rotator.initialize();
        rotator
    }

    /// Create a rotator with a known starting selection.
    ///
    /// The capacity is the selection length. Fails if an index repeats or
    /// falls outside the pool.
    pub fn with_selection(pool_size: usize, selection: Vec<usize>, rng: R) -> PortfolioResult<Self> {
        for (pos, &index) in selection.iter().enumerate() {
            if index >= pool_size {
                return Err(PortfolioError::InvalidSelection(format!(
                    "index {} out of range for pool of {}",
                    index, pool_size
                )));
            }
            if selection[..pos].contains(&index) {
                return Err(PortfolioError::InvalidSelection(format!(
                    "index {} selected twice",
                    index
                )));
            }
        }

        Ok(Self {
            pool_size,
            capacity: selection.len(),
            selection,
            last_changed: None,
            transition: Transition::Idle,
            epoch: 0,
            rng,
        })
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Capacity derived from the viewport, unclamped.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots actually shown.
    pub fn items_per_view(&self) -> usize {
        self.selection.len()
    }

    /// Pool indices currently assigned to each slot.
    pub fn selection(&self) -> &[usize] {
        &self.selection
    }

    /// Slot changed by the most recent single-slot rotation.
    pub fn last_changed(&self) -> Option<usize> {
        self.last_changed
    }

    pub fn is_animating(&self) -> bool {
        self.transition != Transition::Idle
    }

    /// Whether every pool entry is already on screen.
    pub fn is_saturated(&self) -> bool {
        self.selection.len() >= self.pool_size
    }

    /// Per-slot content and animation tag.
    pub fn slots(&self) -> Vec<SlotView> {
        self.selection
            .iter()
            .enumerate()
            .map(|(pos, &pool_index)| SlotView {
                pool_index,
                phase: self.phase_of(pos),
            })
            .collect()
    }

    fn phase_of(&self, pos: usize) -> SlotPhase {
        match self.transition {
            Transition::Idle => SlotPhase::Settled,
            Transition::Running { target, stage } => {
                let affected = match target {
                    Target::All => true,
                    Target::Slot(slot) => slot == pos,
                };
                match (affected, stage) {
                    (false, _) => SlotPhase::Settled,
                    (true, Stage::Exit) => SlotPhase::Exiting,
                    (true, Stage::Enter) => SlotPhase::Entering,
                }
            }
        }
    }

    /// Redraw the whole selection and drop any transition in flight.
    fn initialize(&mut self) {
        let shown = self.capacity.min(self.pool_size);
        self.selection = self.draw_distinct(shown);
        self.last_changed = None;
        self.transition = Transition::Idle;
        self.epoch += 1;
    }

    fn draw_distinct(&mut self, amount: usize) -> Vec<usize> {
        if amount == 0 {
            return Vec::new();
        }
        rand::seq::index::sample(&mut self.rng, self.pool_size, amount).into_vec()
    }

    /// Change the viewport-derived capacity.
    ///
    /// Returns true if the capacity changed, in which case the selection is
    /// redrawn and outstanding tickets go stale.
    pub fn set_capacity(&mut self, capacity: usize) -> bool {
        if capacity == self.capacity {
            return false;
        }
        tracing::debug!(from = self.capacity, to = capacity, "Testimonial capacity changed");
        self.capacity = capacity;
        self.initialize();
        true
    }

    /// Recompute capacity for a new viewport width.
    pub fn on_viewport_change(&mut self, width: f64, breakpoints: &Breakpoints) -> bool {
        self.set_capacity(breakpoints.items_per_view(width))
    }

    /// Start replacing one randomly chosen slot.
    pub fn rotate_one(&mut self) -> RotationStart {
        if self.is_animating() {
            return RotationStart::Busy;
        }
        // An empty selection has no slot to pick
        if self.is_saturated() || self.selection.is_empty() {
            return RotationStart::Saturated;
        }
        let position = self.choose_position();
        self.begin_rotation_at(position)
    }

    /// Pick a slot, stepping past the one changed last time when there is
    /// more than one slot.
    fn choose_position(&mut self) -> usize {
        let slots = self.selection.len();
        let position = self.rng.random_range(0..slots);
        if slots > 1 && self.last_changed == Some(position) {
            (position + 1) % slots
        } else {
            position
        }
    }

    pub(crate) fn begin_rotation_at(&mut self, position: usize) -> RotationStart {
        if self.is_animating() {
            return RotationStart::Busy;
        }
        if self.is_saturated() {
            return RotationStart::Saturated;
        }

        self.last_changed = Some(position);
        self.epoch += 1;
        self.transition = Transition::Running {
            target: Target::Slot(position),
            stage: Stage::Exit,
        };
        tracing::debug!(position, "Testimonial slot exiting");
        RotationStart::Started(self.ticket(Stage::Exit))
    }

    /// Start replacing every slot at once.
    pub fn reset_all(&mut self) -> RotationStart {
        if self.is_animating() {
            return RotationStart::Busy;
        }

        self.epoch += 1;
        self.transition = Transition::Running {
            target: Target::All,
            stage: Stage::Exit,
        };
        tracing::debug!(slots = self.selection.len(), "All testimonial slots exiting");
        RotationStart::Started(self.ticket(Stage::Exit))
    }

    fn ticket(&self, stage: Stage) -> PhaseTicket {
        PhaseTicket {
            epoch: self.epoch,
            stage,
        }
    }

    /// Cross the phase boundary the ticket was issued for.
    pub fn advance(&mut self, ticket: PhaseTicket) -> Advance {
        let Transition::Running { target, stage } = self.transition else {
            return Advance::Stale;
        };
        if ticket.epoch != self.epoch || ticket.stage != stage {
            return Advance::Stale;
        }

        match stage {
            Stage::Exit => {
                match target {
                    Target::Slot(position) => match self.pick_unused() {
                        Some(index) => {
                            tracing::debug!(position, index, "Testimonial slot swapped");
                            self.selection[position] = index;
                        }
                        None => {
                            self.transition = Transition::Idle;
                            return Advance::Aborted;
                        }
                    },
                    Target::All => {
                        let shown = self.selection.len();
                        self.selection = self.draw_distinct(shown);
                        self.last_changed = None;
                    }
                }
                self.transition = Transition::Running {
                    target,
                    stage: Stage::Enter,
                };
                Advance::Entering(self.ticket(Stage::Enter))
            }
            Stage::Enter => {
                self.transition = Transition::Idle;
                Advance::Settled
            }
        }
    }

    /// Uniform pick from the pool indices not currently shown.
    fn pick_unused(&mut self) -> Option<usize> {
        let unused: Vec<usize> = (0..self.pool_size)
            .filter(|index| !self.selection.contains(index))
            .collect();
        if unused.is_empty() {
            return None;
        }
        Some(unused[self.rng.random_range(0..unused.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_with(pool: usize, selection: Vec<usize>) -> TestimonialRotator {
        TestimonialRotator::with_selection(pool, selection, StdRng::seed_from_u64(7)).unwrap()
    }

    fn assert_distinct(rotator: &TestimonialRotator) {
        let sel = rotator.selection();
        for (i, a) in sel.iter().enumerate() {
            assert!(*a < rotator.pool_size());
            assert!(!sel[i + 1..].contains(a), "duplicate index {} in {:?}", a, sel);
        }
    }

    #[test]
    fn initialize_draws_distinct_indices() {
        for seed in 0..50 {
            let rotator = TestimonialRotator::seeded(5, 3, seed);
            assert_eq!(rotator.items_per_view(), 3);
            assert_distinct(&rotator);
        }
    }

    #[test]
    fn capacity_clamped_to_pool() {
        let rotator = TestimonialRotator::seeded(2, 3, 1);
        assert_eq!(rotator.capacity(), 3);
        assert_eq!(rotator.items_per_view(), 2);
        assert_distinct(&rotator);
    }

    #[test]
    fn with_selection_rejects_duplicates_and_out_of_range() {
        let rng = StdRng::seed_from_u64(0);
        assert!(TestimonialRotator::with_selection(5, vec![0, 0], rng.clone()).is_err());
        assert!(TestimonialRotator::with_selection(5, vec![0, 5], rng).is_err());
    }

    #[test]
    fn rotating_middle_slot_swaps_in_unused_testimonial() {
        let mut rotator = seeded_with(5, vec![0, 1, 2]);

        let RotationStart::Started(exit) = rotator.begin_rotation_at(1) else {
            panic!("rotation should start");
        };
        assert!(exit.is_exit());
        assert_eq!(rotator.slots()[1].phase, SlotPhase::Exiting);
        assert_eq!(rotator.slots()[0].phase, SlotPhase::Settled);
        // Content changes only at the phase boundary
        assert_eq!(rotator.selection(), &[0, 1, 2]);

        let Advance::Entering(enter) = rotator.advance(exit) else {
            panic!("exit should lead to enter");
        };
        let sel = rotator.selection().to_vec();
        assert_eq!(sel[0], 0);
        assert_eq!(sel[2], 2);
        assert!(sel[1] == 3 || sel[1] == 4, "got {:?}", sel);
        assert_eq!(rotator.slots()[1].phase, SlotPhase::Entering);

        assert_eq!(rotator.advance(enter), Advance::Settled);
        assert!(!rotator.is_animating());
        assert!(rotator.slots().iter().all(|s| s.phase == SlotPhase::Settled));
    }

    #[test]
    fn rotation_blocked_while_animating() {
        let mut rotator = seeded_with(5, vec![0, 1]);
        assert!(matches!(rotator.rotate_one(), RotationStart::Started(_)));
        assert_eq!(rotator.rotate_one(), RotationStart::Busy);
        assert_eq!(rotator.reset_all(), RotationStart::Busy);
    }

    #[test]
    fn full_pool_is_saturated() {
        let mut rotator = TestimonialRotator::seeded(3, 3, 11);
        for _ in 0..100 {
            assert_eq!(rotator.rotate_one(), RotationStart::Saturated);
        }
        assert!(!rotator.is_animating());
    }

    #[test]
    fn anti_repeat_steps_past_last_slot() {
        let mut rotator = seeded_with(10, vec![0, 1, 2]);
        let mut previous: Option<usize> = None;
        for _ in 0..200 {
            let RotationStart::Started(exit) = rotator.rotate_one() else {
                panic!("pool has spare testimonials");
            };
            let changed = rotator.last_changed();
            assert_ne!(changed, previous);
            previous = changed;

            let Advance::Entering(enter) = rotator.advance(exit) else {
                panic!("swap should succeed");
            };
            rotator.advance(enter);
        }
    }

    #[test]
    fn single_slot_may_repeat() {
        // The step-past rule only applies with more than one slot
        let mut rotator = seeded_with(4, vec![2]);
        for _ in 0..20 {
            let RotationStart::Started(exit) = rotator.rotate_one() else {
                panic!("pool has spare testimonials");
            };
            assert_eq!(rotator.last_changed(), Some(0));
            let Advance::Entering(enter) = rotator.advance(exit) else {
                panic!("swap should succeed");
            };
            rotator.advance(enter);
        }
    }

    #[test]
    fn reset_all_marks_every_slot() {
        let mut rotator = seeded_with(5, vec![0, 1, 2]);
        let RotationStart::Started(exit) = rotator.reset_all() else {
            panic!("reset should start");
        };
        assert!(rotator.slots().iter().all(|s| s.phase == SlotPhase::Exiting));

        let Advance::Entering(enter) = rotator.advance(exit) else {
            panic!("reset exit should lead to enter");
        };
        assert!(rotator.slots().iter().all(|s| s.phase == SlotPhase::Entering));
        assert_eq!(rotator.items_per_view(), 3);
        assert_distinct(&rotator);

        assert_eq!(rotator.advance(enter), Advance::Settled);
    }

    #[test]
    fn reset_works_when_saturated() {
        let mut rotator = TestimonialRotator::seeded(3, 3, 5);
        let RotationStart::Started(exit) = rotator.reset_all() else {
            panic!("reset should start");
        };
        let Advance::Entering(enter) = rotator.advance(exit) else {
            panic!("reset exit should lead to enter");
        };
        rotator.advance(enter);
        let mut sel = rotator.selection().to_vec();
        sel.sort_unstable();
        assert_eq!(sel, vec![0, 1, 2]);
    }

    #[test]
    fn viewport_change_reinitializes_and_stales_tickets() {
        let mut rotator = TestimonialRotator::seeded(5, 3, 3);
        let bp = Breakpoints::default();
        assert!(!rotator.on_viewport_change(1200.0, &bp));

        let RotationStart::Started(exit) = rotator.rotate_one() else {
            panic!("rotation should start");
        };
        assert!(rotator.on_viewport_change(500.0, &bp));
        assert_eq!(rotator.items_per_view(), 1);
        assert!(rotator.selection()[0] < 5);
        assert!(!rotator.is_animating());

        assert_eq!(rotator.advance(exit), Advance::Stale);
        assert_eq!(rotator.items_per_view(), 1);
    }

    #[test]
    fn ticket_for_wrong_stage_is_stale() {
        let mut rotator = seeded_with(5, vec![0, 1]);
        let RotationStart::Started(exit) = rotator.rotate_one() else {
            panic!("rotation should start");
        };
        let Advance::Entering(_) = rotator.advance(exit) else {
            panic!("swap should succeed");
        };
        // Redeeming the exit ticket twice must not swap again
        let before = rotator.selection().to_vec();
        assert_eq!(rotator.advance(exit), Advance::Stale);
        assert_eq!(rotator.selection(), before.as_slice());
    }

    #[test]
    fn ticket_from_finished_cycle_is_stale_in_next_cycle() {
        let mut rotator = seeded_with(10, vec![0, 1, 9]);
        let RotationStart::Started(old_exit) = rotator.rotate_one() else {
            panic!("first rotation should start");
        };
        let Advance::Entering(old_enter) = rotator.advance(old_exit) else {
            panic!("first swap should succeed");
        };
        assert_eq!(rotator.advance(old_enter), Advance::Settled);

        let RotationStart::Started(exit) = rotator.rotate_one() else {
            panic!("second rotation should start");
        };
        let before = rotator.selection().to_vec();
        assert_eq!(rotator.advance(old_exit), Advance::Stale);
        assert_eq!(rotator.selection(), before.as_slice());
        assert!(rotator.slots().iter().any(|slot| slot.phase == SlotPhase::Exiting));

        let Advance::Entering(enter) = rotator.advance(exit) else {
            panic!("current ticket should still swap");
        };
        assert_eq!(rotator.advance(old_enter), Advance::Stale);
        assert_eq!(rotator.advance(enter), Advance::Settled);
    }

    #[test]
    fn reset_ticket_is_stale_after_the_reset_finishes() {
        let mut rotator = seeded_with(6, vec![0, 1]);
        let RotationStart::Started(reset_exit) = rotator.reset_all() else {
            panic!("reset should start");
        };
        let Advance::Entering(reset_enter) = rotator.advance(reset_exit) else {
            panic!("reset swap should succeed");
        };
        rotator.advance(reset_enter);

        let RotationStart::Started(_) = rotator.reset_all() else {
            panic!("second reset should start");
        };
        assert_eq!(rotator.advance(reset_exit), Advance::Stale);
        assert!(rotator.slots().iter().all(|slot| slot.phase == SlotPhase::Exiting));
    }

    #[test]
    fn empty_pool_shows_nothing() {
        let mut rotator = TestimonialRotator::seeded(0, 3, 9);
        assert_eq!(rotator.items_per_view(), 0);
        assert_eq!(rotator.rotate_one(), RotationStart::Saturated);
        assert!(rotator.slots().is_empty());
    }
}
