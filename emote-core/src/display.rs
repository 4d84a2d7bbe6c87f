//! Display facade
//!
//! Owns the state machine, wires it to the player and catalog, and turns
//! the host application's display calls into state transitions.

use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::animation::FrameStore;
use crate::config::StatusTokens;
use crate::player::Player;
use crate::state::{target_for_status, AnimationSink, OperatingState, StateMachine};
use crate::traits::{BitmapPanel, PeriodicTimer};

/// Plays catalog animations on a player it does not own
pub struct PlayerLink<'a, M: RawMutex, P: BitmapPanel, T: PeriodicTimer> {
    player: &'a Player<M, P, T>,
    catalog: &'a FrameStore,
}

impl<M: RawMutex, P: BitmapPanel, T: PeriodicTimer> Clone for PlayerLink<'_, M, P, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<M: RawMutex, P: BitmapPanel, T: PeriodicTimer> Copy for PlayerLink<'_, M, P, T> {}

impl<'a, M: RawMutex, P: BitmapPanel, T: PeriodicTimer> PlayerLink<'a, M, P, T> {
    pub fn new(player: &'a Player<M, P, T>, catalog: &'a FrameStore) -> Self {
        Self { player, catalog }
    }
}

impl<M: RawMutex, P: BitmapPanel, T: PeriodicTimer> AnimationSink for PlayerLink<'_, M, P, T> {
    fn play_animation(&self, name: &str) -> bool {
        info!("Playing animation: {}", name);

        let animation = self.catalog.get(name);
        if !animation.is_valid() {
            warn!("Animation not found: {}", name);
            return false;
        }

        match self.player.play(animation) {
            Ok(()) => {
                info!("Successfully started animation: {}", name);
                true
            }
            Err(e) => {
                error!("Animation {} not started: {}", name, e);
                false
            }
        }
    }
}

/// Animated status display
///
/// The player and catalog are borrowed: the player is shared with the timer
/// context and the catalog is built once at startup, so both usually live in
/// statics.
pub struct EmojiDisplay<'a, M: RawMutex, P: BitmapPanel, T: PeriodicTimer> {
    link: PlayerLink<'a, M, P, T>,
    machine: StateMachine<PlayerLink<'a, M, P, T>>,
    status: StatusTokens,
}

impl<'a, M: RawMutex, P: BitmapPanel, T: PeriodicTimer> EmojiDisplay<'a, M, P, T> {
    /// Wire the state machine to the player and show the startup animation
    pub fn new(
        player: &'a Player<M, P, T>,
        catalog: &'a FrameStore,
        status: StatusTokens,
    ) -> Self {
        let link = PlayerLink::new(player, catalog);
        let mut machine = StateMachine::new();
        machine.set_sink(link);
        if machine.transition_to(OperatingState::System).is_err() {
            error!("Could not enter SYSTEM state");
        }

        info!("Emoji display initialized with {} animations", catalog.len());
        Self {
            link,
            machine,
            status,
        }
    }

    /// Apply a host status string
    pub fn set_status(&mut self, status: &str) {
        info!("Set status: {}", status);
        match target_for_status(status, &self.status) {
            Some(target) => {
                // Rejections are logged by the state machine
                let _ = self.machine.transition_to(target);
            }
            None => debug!("Status {} ignored", status),
        }
    }

    /// Entering power save blanks the panel
    pub fn set_power_save_mode(&self, on: bool) {
        if on {
            if let Err(e) = self.link.player.clear_screen() {
                warn!("Power save clear failed: {}", e);
            }
        }
        info!("Power save mode: {}", on);
    }

    /// Play a catalog animation directly, bypassing the state machine
    ///
    /// Unknown names return `false` and leave the current animation playing.
    pub fn play_animation(&self, name: &str) -> bool {
        self.link.play_animation(name)
    }

    pub fn current_state(&self) -> OperatingState {
        self.machine.current()
    }

    pub fn current_state_name(&self) -> &'static str {
        self.machine.current_state_name()
    }

    /// Emotions are not supported on this panel
    pub fn set_emotion(&self, emotion: &str) {
        info!("Set emotion: {}, not supported", emotion);
    }

    /// Chat text is not shown on this panel
    pub fn set_chat_message(&self, role: &str, content: &str) {
        info!("Set chat message: {}, {}, not supported", role, content);
    }

    /// Notifications are not shown on this panel
    pub fn show_notification(&self, notification: &str, duration_ms: u32) {
        info!(
            "Show notification: {}, {}ms, not supported",
            notification, duration_ms
        );
    }

    /// Monochrome panel, themes have no effect
    pub fn set_theme(&self, theme: &str) {
        info!("Theme set to: {} (no effect on monochrome panel)", theme);
    }

    pub fn player(&self) -> &'a Player<M, P, T> {
        self.link.player
    }

    pub fn state_machine(&self) -> &StateMachine<PlayerLink<'a, M, P, T>> {
        &self.machine
    }

    pub fn state_machine_mut(&mut self) -> &mut StateMachine<PlayerLink<'a, M, P, T>> {
        &mut self.machine
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animation;
    use crate::testing::*;

    fn catalog() -> FrameStore {
        FrameStore::with_state_animations(&state_assets()).unwrap()
    }

    #[test]
    fn test_starts_in_system_playing_startup() {
        let (player, timer) = player();
        let store = catalog();
        let display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        assert_eq!(display.current_state(), OperatingState::System);
        assert_eq!(display.current_state_name(), "SYSTEM");
        assert!(player.is_playing());
        assert!(player.uses_custom_duration());
        assert_eq!(timer.borrow().interval_us, Some(33_333));
    }

    #[test]
    fn test_status_drives_state() {
        let (player, _timer) = player();
        let store = catalog();
        let mut display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        display.set_status("listening");
        assert_eq!(display.current_state_name(), "LISTENING");
        display.set_status("speaking");
        assert_eq!(display.current_state_name(), "SPEAKING");
        display.set_status("standby");
        assert_eq!(display.current_state_name(), "IDLE");
        display.set_status("initializing");
        assert_eq!(display.current_state_name(), "SYSTEM");
    }

    #[test]
    fn test_connecting_is_ignored() {
        let (player, timer) = player();
        let store = catalog();
        let mut display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        display.set_status("listening");
        let starts = timer.borrow().starts;
        display.set_status("connecting");
        assert_eq!(display.current_state_name(), "LISTENING");
        assert_eq!(timer.borrow().starts, starts);
    }

    #[test]
    fn test_repeated_status_does_not_restart() {
        let (player, timer) = player();
        let store = catalog();
        let mut display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        display.set_status("standby");
        player.tick(0);
        player.tick(200);
        display.set_status("standby");

        assert_eq!(timer.borrow().starts, 2);
        assert_eq!(player.current_frame(), 1);
    }

    #[test]
    fn test_play_unknown_animation() {
        let (player, timer) = player();
        let store = catalog();
        let display = EmojiDisplay::new(&player, &store, StatusTokens::default());
        player.tick(0);

        assert!(!display.play_animation("nonexistent"));
        assert!(player.is_playing());
        assert_eq!(timer.borrow().starts, 1);
        assert_eq!(display.current_state(), OperatingState::System);
    }

    #[test]
    fn test_play_animation_by_name() {
        let (player, timer) = player();
        let store = catalog();
        let display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        assert!(display.play_animation("lotus"));
        assert_eq!(timer.borrow().starts, 2);
        // Direct playback does not change the operating state
        assert_eq!(display.current_state(), OperatingState::System);
    }

    #[test]
    fn test_power_save_clears_screen() {
        let (player, _timer) = player();
        let store = catalog();
        let display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        display.set_power_save_mode(false);
        assert!(player.with_panel(|p| p.draws.is_empty()));

        display.set_power_save_mode(true);
        let draw = player.with_panel(|p| p.draws[0]);
        assert!(draw.all_zero);
        assert_eq!(draw.len, 1024);
    }

    #[test]
    fn test_unsupported_surfaces_are_noops() {
        let (player, timer) = player();
        let store = catalog();
        let display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        display.set_emotion("happy");
        display.set_chat_message("assistant", "hello");
        display.show_notification("update available", 3000);
        display.set_theme("dark");

        assert_eq!(display.current_state(), OperatingState::System);
        assert_eq!(timer.borrow().starts, 1);
        assert!(player.with_panel(|p| p.draws.is_empty()));
    }

    #[test]
    fn test_uninitialized_player_still_tracks_state() {
        let player: TestPlayer = Player::new(
            RecordingPanel::default(),
            &mut NoTimers,
            crate::config::PlayerConfig::default(),
        );
        let store = catalog();
        let mut display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        assert_eq!(display.current_state(), OperatingState::System);
        assert!(!display.play_animation("particle"));
        display.set_status("speaking");
        assert_eq!(display.current_state_name(), "SPEAKING");
        display.set_power_save_mode(true);
        assert!(player.with_panel(|p| p.draws.is_empty()));
    }

    #[test]
    fn test_missing_binding_keeps_state() {
        let (player, timer) = player();
        let mut store = FrameStore::new();
        store.register("particle", Animation::invalid()).unwrap();
        let mut display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        assert_eq!(display.current_state(), OperatingState::System);
        display.set_status("standby");
        assert_eq!(display.current_state(), OperatingState::Idle);
        assert_eq!(timer.borrow().starts, 0);
    }

    #[test]
    fn test_reset_through_state_machine() {
        let (player, _timer) = player();
        let store = catalog();
        let mut display = EmojiDisplay::new(&player, &store, StatusTokens::default());

        assert!(display.state_machine_mut().reset().is_err());
        display.set_status("speaking");
        assert!(display.state_machine_mut().reset().is_ok());
        assert_eq!(display.state_machine().current(), OperatingState::System);
        assert!(core::ptr::eq(display.player(), &player));
    }
}
