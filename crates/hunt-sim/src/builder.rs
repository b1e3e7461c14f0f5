//! Fluent builder for constructing a [`Hunt`].

use rand::RngCore;

use hunt_belief::BeliefState;
use hunt_core::{Board, DetectionModel, HuntConfig, SimRng};
use hunt_policy::SearchPolicy;
use hunt_target::TargetProcess;

use crate::{Hunt, SimResult};

/// Fluent builder for [`Hunt<P, R>`].
///
/// # Required inputs
///
/// - [`HuntConfig`]: dimension, moving flag, seed, start cell, budget
/// - `P: SearchPolicy`: the policy under test
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                                          |
/// |-------------------|--------------------------------------------------|
/// | `.board(b)`       | `Board::random` drawn from the run's RNG         |
/// | `.detection(m)`   | `DetectionModel::default()`                      |
/// | `.rng(r)`         | `SimRng::new(config.seed)`                       |
///
/// # Example
///
/// ```rust,ignore
/// let mut hunt = HuntBuilder::new(config, PolicySpec::plain(PolicyId::Rule1).build())
///     .board(saved_board)
///     .build()?;
/// let report = hunt.run(&mut NoopObserver)?;
/// ```
pub struct HuntBuilder<P: SearchPolicy, R: RngCore = SimRng> {
    config:    HuntConfig,
    policy:    P,
    board:     Option<Board>,
    detection: DetectionModel,
    rng:       R,
}

impl<P: SearchPolicy> HuntBuilder<P, SimRng> {
    /// Create a builder seeded from `config.seed`.
    pub fn new(config: HuntConfig, policy: P) -> Self {
        let rng = SimRng::new(config.seed);
        Self {
            config,
            policy,
            board:     None,
            detection: DetectionModel::default(),
            rng,
        }
    }
}

impl<P: SearchPolicy, R: RngCore> HuntBuilder<P, R> {
    /// Replay a known board instead of drawing one.  Its dimension must match
    /// `config.dim`.
    pub fn board(mut self, board: Board) -> Self {
        self.board = Some(board);
        self
    }

    pub fn detection(mut self, detection: DetectionModel) -> Self {
        self.detection = detection;
        self
    }

    /// Swap in a different random source (tests use a mock RNG here).
    pub fn rng<R2: RngCore>(self, rng: R2) -> HuntBuilder<P, R2> {
        HuntBuilder {
            config:    self.config,
            policy:    self.policy,
            board:     self.board,
            detection: self.detection,
            rng,
        }
    }

    /// Validate inputs, place the target, and return a ready-to-run [`Hunt`].
    pub fn build(mut self) -> SimResult<Hunt<P, R>> {
        let grid = self.config.validate()?;

        let board = match self.board {
            Some(b) => {
                b.expect_dim(self.config.dim)?;
                b
            }
            None => Board::random(grid, &mut self.rng)?,
        };

        let target = TargetProcess::new(grid, board.target, self.config.moving_target)?;

        Ok(Hunt {
            at:        self.config.start,
            config:    self.config,
            belief:    BeliefState::new(grid),
            board,
            detection: self.detection,
            target,
            policy:    self.policy,
            rng:       self.rng,
            actions:   0,
            searches:  0,
            moves:     0,
            pending:   0,
            found:     None,
        })
    }
}
