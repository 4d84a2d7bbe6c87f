//! State machine definition

use heapless::Vec;

/// Device operating states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OperatingState {
    /// Initial state before the first transition; never re-entered
    #[default]
    Unknown,
    /// Booting, initializing, or any status the display has no mode for
    System,
    /// Standby
    Idle,
    /// Waiting for the user to speak
    Listening,
    /// Playing back speech
    Speaking,
}

impl OperatingState {
    /// Every state, in declaration order
    pub const ALL: [OperatingState; 5] = [
        OperatingState::Unknown,
        OperatingState::System,
        OperatingState::Idle,
        OperatingState::Listening,
        OperatingState::Speaking,
    ];

    /// Upper-case name used in logs and reported to the host
    pub const fn name(self) -> &'static str {
        match self {
            OperatingState::Unknown => "UNKNOWN",
            OperatingState::System => "SYSTEM",
            OperatingState::Idle => "IDLE",
            OperatingState::Listening => "LISTENING",
            OperatingState::Speaking => "SPEAKING",
        }
    }

    /// Catalog name of the animation shown in this state
    pub const fn animation_name(self) -> Option<&'static str> {
        match self {
            OperatingState::Unknown => None,
            OperatingState::System => Some("startup/circular"),
            OperatingState::Idle => Some("particle"),
            OperatingState::Listening => Some("line"),
            OperatingState::Speaking => Some("lotus"),
        }
    }
}

/// Transition errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransitionError {
    /// Target is the current state, or a state that cannot be entered
    InvalidTransition,
}

/// Check whether `from -> to` is allowed
///
/// Self-transitions are rejected and `Unknown` can never be entered.
/// Everything else is allowed.
pub fn validate_transition(from: OperatingState, to: OperatingState) -> bool {
    from != to && to != OperatingState::Unknown
}

/// Something that can play a catalog animation by name
///
/// The state machine holds one of these without owning the player behind it.
pub trait AnimationSink {
    /// Play the named animation; `false` if it could not be started
    fn play_animation(&self, name: &str) -> bool;
}

impl<T: AnimationSink + ?Sized> AnimationSink for &T {
    fn play_animation(&self, name: &str) -> bool {
        (**self).play_animation(name)
    }
}

/// Operating-state machine
#[derive(Debug)]
pub struct StateMachine<S> {
    current: OperatingState,
    sink: Option<S>,
}

impl<S> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> StateMachine<S> {
    /// Create a machine in [`OperatingState::Unknown`] with no sink
    pub fn new() -> Self {
        info!("State machine initialized in UNKNOWN");
        Self {
            current: OperatingState::Unknown,
            sink: None,
        }
    }

    pub fn current(&self) -> OperatingState {
        self.current
    }

    pub fn current_state_name(&self) -> &'static str {
        self.current.name()
    }

    /// Check if `target` can be entered from the current state
    pub fn can_transition_to(&self, target: OperatingState) -> bool {
        validate_transition(self.current, target)
    }

    /// States that can be entered from the current state
    pub fn possible_transitions(&self) -> Vec<OperatingState, 5> {
        OperatingState::ALL
            .into_iter()
            .filter(|&s| self.can_transition_to(s))
            .collect()
    }

    pub fn has_sink(&self) -> bool {
        self.sink.is_some()
    }
}

impl<S: AnimationSink> StateMachine<S> {
    /// Wire the animation sink that transitions play through
    pub fn set_sink(&mut self, sink: S) {
        self.sink = Some(sink);
        info!("Animation sink set");
    }

    /// Move to `target` and play its animation
    ///
    /// The state change commits even without a sink or if the animation
    /// fails to start.
    pub fn transition_to(&mut self, target: OperatingState) -> Result<(), TransitionError> {
        info!(
            "Attempting transition from {} to {}",
            self.current.name(),
            target.name()
        );

        if target == self.current {
            warn!("Cannot transition to current state: {}", target.name());
            return Err(TransitionError::InvalidTransition);
        }
        if !validate_transition(self.current, target) {
            error!(
                "Invalid transition from {} to {}",
                self.current.name(),
                target.name()
            );
            return Err(TransitionError::InvalidTransition);
        }

        let previous = self.current;
        self.current = target;
        info!(
            "State transition successful: {} -> {}",
            previous.name(),
            target.name()
        );

        self.play_state_animation(target);
        Ok(())
    }

    /// Attempt to return to [`OperatingState::System`]
    ///
    /// Already being in `System` makes this a rejected self-transition.
    pub fn reset(&mut self) -> Result<(), TransitionError> {
        info!("Resetting state machine to SYSTEM");
        self.transition_to(OperatingState::System)
    }

    fn play_state_animation(&self, state: OperatingState) {
        let Some(sink) = self.sink.as_ref() else {
            warn!("No animation sink, skipping animation for {}", state.name());
            return;
        };
        let Some(name) = state.animation_name() else {
            return;
        };
        if !sink.play_animation(name) {
            warn!("Animation {} for {} did not start", name, state.name());
        }
    }
}
