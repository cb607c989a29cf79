use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{CoordinateMapper, DataPoint, DomainBounds, Viewport, canonicalize_points};
use crate::error::{ChartError, ChartResult};
use crate::extensions::GuessObserver;
use crate::guess::{GuessGrid, GuessPoint, GuessPolicy, GuessState, IncompleteRange};
use crate::interaction::{HoverState, InteractionMode, InteractionState, RevealProgress};
use crate::render::Renderer;

use super::GuessChartConfig;

/// Lifecycle of one guess session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessPhase {
    /// At least one slot is still undefined.
    Drawing,
    /// Every slot is defined; the answer can be revealed.
    Complete,
    /// The answer is shown and the guess is locked.
    Revealed,
}

/// Payload handed to the host when the answer is revealed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reveal {
    pub answer: Vec<DataPoint>,
    pub other_data: IndexMap<String, Vec<DataPoint>>,
    pub guess: Vec<GuessPoint>,
}

/// Guess-the-line widget: reference data, the user's guess and the
/// interaction state needed to draw both.
pub struct GuessChart<R: Renderer> {
    pub(super) renderer: R,
    pub(super) config: GuessChartConfig,
    pub(super) reference: Vec<DataPoint>,
    pub(super) mapper: CoordinateMapper,
    pub(super) state: GuessState,
    pub(super) interaction: InteractionState,
    pub(super) phase: GuessPhase,
    pub(super) observers: Vec<Box<dyn GuessObserver>>,
}

impl<R: Renderer> GuessChart<R> {
    /// Builds a widget over `reference`.
    ///
    /// The reference goes through [`canonicalize_points`] first. Bounds come
    /// from its extent with the config overrides applied on top.
    pub fn new(
        renderer: R,
        reference: Vec<DataPoint>,
        config: GuessChartConfig,
    ) -> ChartResult<Self> {
        config.validate()?;
        let reference = canonicalize_points(reference);
        if reference.is_empty() {
            return Err(ChartError::InvalidData(
                "reference sequence must contain at least one finite point".to_owned(),
            ));
        }

        let bounds = config.bounds.resolve(DomainBounds::extent(&reference)?)?;
        let mapper = CoordinateMapper::new(config.plot, bounds)?;
        let grid = match config.grid {
            Some(grid) => grid,
            None => GuessGrid::exact_for(&reference)?,
        };
        let mut policy = GuessPolicy::new(grid).with_trigger(config.completion_trigger);
        policy.y_step = config.y_step;
        let state = GuessState::new(&reference, bounds, policy)?;

        debug!(
            reference_len = reference.len(),
            plot_width = config.plot.width,
            plot_height = config.plot.height,
            overlay_series = config.other_data.len(),
            "guess chart initialized"
        );

        Ok(Self {
            renderer,
            interaction: InteractionState::with_reveal_config(config.reveal_animation),
            config,
            reference,
            mapper,
            state,
            phase: GuessPhase::Drawing,
            observers: Vec::new(),
        })
    }

    /// Builds a frame from the current state and hands it to the renderer.
    pub fn render(&mut self) -> ChartResult<()> {
        let frame = self.build_render_frame()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    #[must_use]
    pub fn config(&self) -> &GuessChartConfig {
        &self.config
    }

    /// Canonical reference sequence (the answer).
    #[must_use]
    pub fn reference(&self) -> &[DataPoint] {
        &self.reference
    }

    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        self.mapper
    }

    #[must_use]
    pub fn bounds(&self) -> DomainBounds {
        self.mapper.bounds()
    }

    #[must_use]
    pub fn plot(&self) -> Viewport {
        self.mapper.plot()
    }

    #[must_use]
    pub fn guess_state(&self) -> &GuessState {
        &self.state
    }

    #[must_use]
    pub fn points(&self) -> &[GuessPoint] {
        self.state.points()
    }

    #[must_use]
    pub fn defined(&self) -> Vec<GuessPoint> {
        self.state.defined()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    #[must_use]
    pub fn incomplete_range(&self) -> Option<IncompleteRange> {
        self.state.incomplete_range()
    }

    #[must_use]
    pub fn phase(&self) -> GuessPhase {
        self.phase
    }

    #[must_use]
    pub fn interaction_mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    #[must_use]
    pub fn hover(&self) -> HoverState {
        self.interaction.hover()
    }

    #[must_use]
    pub fn hint_visible(&self) -> bool {
        self.interaction.hint_visible()
    }

    /// Reveal animation progress; zero on both parts until revealed.
    #[must_use]
    pub fn reveal_progress(&self) -> RevealProgress {
        if self.phase == GuessPhase::Revealed {
            self.interaction.reveal_progress()
        } else {
            RevealProgress::default()
        }
    }

    #[must_use]
    pub fn is_reveal_animating(&self) -> bool {
        self.interaction.reveal_state().active
    }

    pub(super) fn reveal_payload(&self) -> Reveal {
        Reveal {
            answer: self.reference.clone(),
            other_data: self.config.other_data.clone(),
            guess: self.state.defined(),
        }
    }
}
