use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Drawing,
}

/// Which circle set a hovered point belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HoverSeries {
    Guess,
    Answer,
}

/// Point under the pointer, in domain coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HoverTarget {
    pub series: HoverSeries,
    pub index: usize,
    pub x: f64,
    pub y: f64,
}

/// Public hover state exposed to host applications.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct HoverState {
    pub visible: bool,
    pub x: f64,
    pub y: f64,
    pub target: Option<HoverTarget>,
}

/// Durations of the cosmetic reveal animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealAnimationConfig {
    /// Time for the answer line to draw from left to right.
    pub line_duration_seconds: f64,
    /// Time for answer circles to grow to full radius.
    pub circle_duration_seconds: f64,
}

impl Default for RevealAnimationConfig {
    fn default() -> Self {
        Self {
            line_duration_seconds: 2.0,
            circle_duration_seconds: 3.0,
        }
    }
}

/// Normalized reveal progress, each component in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RevealProgress {
    pub line: f64,
    pub circles: f64,
}

impl RevealProgress {
    pub const DONE: Self = Self {
        line: 1.0,
        circles: 1.0,
    };

    #[must_use]
    pub fn is_finished(self) -> bool {
        self.line >= 1.0 && self.circles >= 1.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RevealAnimationState {
    pub active: bool,
    pub elapsed_seconds: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    mode: InteractionMode,
    cursor_x: f64,
    cursor_y: f64,
    hover: HoverState,
    hint_visible: bool,
    reveal_config: RevealAnimationConfig,
    reveal: RevealAnimationState,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            mode: InteractionMode::Idle,
            cursor_x: 0.0,
            cursor_y: 0.0,
            hover: HoverState::default(),
            hint_visible: true,
            reveal_config: RevealAnimationConfig::default(),
            reveal: RevealAnimationState::default(),
        }
    }
}

impl InteractionState {
    #[must_use]
    pub fn with_reveal_config(reveal_config: RevealAnimationConfig) -> Self {
        Self {
            reveal_config,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn mode(self) -> InteractionMode {
        self.mode
    }

    #[must_use]
    pub fn cursor(self) -> (f64, f64) {
        (self.cursor_x, self.cursor_y)
    }

    #[must_use]
    pub fn hover(self) -> HoverState {
        self.hover
    }

    /// Whether the "draw your line" prompt is still shown.
    #[must_use]
    pub fn hint_visible(self) -> bool {
        self.hint_visible
    }

    #[must_use]
    pub fn reveal_config(self) -> RevealAnimationConfig {
        self.reveal_config
    }

    #[must_use]
    pub fn reveal_state(self) -> RevealAnimationState {
        self.reveal
    }

    pub fn on_drag_start(&mut self) {
        self.mode = InteractionMode::Drawing;
    }

    /// Drawing hides the hint and any hover label.
    pub fn on_drag_move(&mut self, x: f64, y: f64) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.hint_visible = false;
        self.hover = HoverState::default();
    }

    pub fn on_drag_end(&mut self) {
        self.mode = InteractionMode::Idle;
    }

    pub fn on_pointer_move(&mut self, x: f64, y: f64, target: Option<HoverTarget>) {
        self.cursor_x = x;
        self.cursor_y = y;
        self.hover = HoverState {
            visible: true,
            x,
            y,
            target,
        };
    }

    pub fn on_pointer_leave(&mut self) {
        self.hover = HoverState::default();
    }

    pub fn start_reveal(&mut self) {
        self.reveal = RevealAnimationState {
            active: true,
            elapsed_seconds: 0.0,
        };
    }

    /// Advances the reveal clock and returns the new progress.
    ///
    /// Returns `None` when no reveal animation is running. The animation
    /// deactivates itself once both parts finish.
    pub fn step_reveal(&mut self, delta_seconds: f64) -> Option<RevealProgress> {
        if !self.reveal.active {
            return None;
        }

        if delta_seconds.is_finite() && delta_seconds > 0.0 {
            self.reveal.elapsed_seconds += delta_seconds;
        }
        let progress = self.reveal_progress();
        if progress.is_finished() {
            self.reveal.active = false;
        }
        Some(progress)
    }

    #[must_use]
    pub fn reveal_progress(self) -> RevealProgress {
        let fraction = |duration: f64| {
            if !duration.is_finite() || duration <= 0.0 {
                1.0
            } else {
                (self.reveal.elapsed_seconds / duration).clamp(0.0, 1.0)
            }
        };
        RevealProgress {
            line: fraction(self.reveal_config.line_duration_seconds),
            circles: fraction(self.reveal_config.circle_duration_seconds),
        }
    }

    pub fn reset(&mut self) {
        *self = Self::with_reveal_config(self.reveal_config);
    }
}
