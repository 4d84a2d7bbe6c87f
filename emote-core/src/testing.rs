//! Test doubles shared by the unit tests

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::NoopRawMutex;

use crate::animation::{Animation, Frame, StateAssets};
use crate::config::PlayerConfig;
use crate::player::Player;
use crate::traits::{BitmapPanel, PanelError, PeriodicTimer, TimerError, TimerFactory};

/// Bitmaps whose first byte is their index
pub static BITMAPS: [[u8; 32]; 32] = {
    let mut bitmaps = [[0u8; 32]; 32];
    let mut i = 0;
    while i < 32 {
        bitmaps[i][0] = i as u8;
        i += 1;
    }
    bitmaps
};

/// `BITMAPS` as slices, for asset tables
pub static BITMAP_REFS: [&[u8]; 32] = {
    let mut refs = [BITMAPS[0].as_slice(); 32];
    let mut i = 0;
    while i < 32 {
        refs[i] = BITMAPS[i].as_slice();
        i += 1;
    }
    refs
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawCall {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    pub first_byte: u8,
    pub len: usize,
    pub all_zero: bool,
}

#[derive(Debug, Default)]
pub struct RecordingPanel {
    pub draws: Vec<DrawCall>,
    pub fail: bool,
}

impl RecordingPanel {
    /// Index of every frame drawn, in order
    pub fn frames_drawn(&self) -> Vec<u8> {
        self.draws.iter().map(|d| d.first_byte).collect()
    }
}

impl BitmapPanel for RecordingPanel {
    fn draw_bitmap(
        &mut self,
        x0: i32,
        y0: i32,
        x1: i32,
        y1: i32,
        data: &[u8],
    ) -> Result<(), PanelError> {
        if self.fail {
            return Err(PanelError::Communication);
        }
        self.draws.push(DrawCall {
            x0,
            y0,
            x1,
            y1,
            first_byte: data.first().copied().unwrap_or(0),
            len: data.len(),
            all_zero: data.iter().all(|&b| b == 0),
        });
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct TimerLog {
    pub interval_us: Option<u64>,
    pub starts: u32,
    pub stops: u32,
    pub destroyed: bool,
    pub fail_start: bool,
}

pub struct MockTimer {
    log: Rc<RefCell<TimerLog>>,
}

impl PeriodicTimer for MockTimer {
    fn start_periodic(&mut self, interval_us: u64) -> Result<(), TimerError> {
        let mut log = self.log.borrow_mut();
        if log.fail_start {
            return Err(TimerError::StartFailed);
        }
        log.interval_us = Some(interval_us);
        log.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        let mut log = self.log.borrow_mut();
        log.interval_us = None;
        log.stops += 1;
    }

    fn destroy(&mut self) {
        self.stop();
        self.log.borrow_mut().destroyed = true;
    }
}

pub struct MockTimers {
    pub log: Rc<RefCell<TimerLog>>,
}

impl TimerFactory for MockTimers {
    type Timer = MockTimer;

    fn create_periodic(&mut self) -> Result<MockTimer, TimerError> {
        Ok(MockTimer {
            log: self.log.clone(),
        })
    }
}

/// Factory that always fails
pub struct NoTimers;

impl TimerFactory for NoTimers {
    type Timer = MockTimer;

    fn create_periodic(&mut self) -> Result<MockTimer, TimerError> {
        Err(TimerError::CreateFailed)
    }
}

/// Timer that does nothing; `Send`, for cross-thread tests
pub struct NullTimer;

impl PeriodicTimer for NullTimer {
    fn start_periodic(&mut self, _interval_us: u64) -> Result<(), TimerError> {
        Ok(())
    }

    fn stop(&mut self) {}
}

pub struct NullTimers;

impl TimerFactory for NullTimers {
    type Timer = NullTimer;

    fn create_periodic(&mut self) -> Result<NullTimer, TimerError> {
        Ok(NullTimer)
    }
}

pub type TestPlayer = Player<NoopRawMutex, RecordingPanel, MockTimer>;

pub fn player() -> (TestPlayer, Rc<RefCell<TimerLog>>) {
    let log = Rc::new(RefCell::new(TimerLog::default()));
    let mut timers = MockTimers { log: log.clone() };
    let player = Player::new(RecordingPanel::default(), &mut timers, PlayerConfig::default());
    (player, log)
}

/// `count` 16x16 frames, frame `i` drawn from `BITMAPS[i % 32]`
pub fn frames(count: usize, duration_ms: u32) -> Vec<Frame> {
    (0..count)
        .map(|i| {
            Frame::new(&BITMAPS[i % 32], 16, 16)
                .with_duration(duration_ms)
        })
        .collect()
}

pub fn animation(count: usize, repeat: bool, fps: u32, duration_ms: u32) -> Animation {
    Animation::new(frames(count, duration_ms), repeat, fps).unwrap()
}

/// 16x16 state assets; frame `i` of each animation is `BITMAPS[i]`
pub fn state_assets() -> StateAssets<'static> {
    StateAssets {
        width: 16,
        height: 16,
        startup: BITMAP_REFS[..23].try_into().unwrap(),
        idle: BITMAP_REFS[..26].try_into().unwrap(),
        listening: BITMAP_REFS[..26].try_into().unwrap(),
        speaking: BITMAP_REFS[..27].try_into().unwrap(),
    }
}
