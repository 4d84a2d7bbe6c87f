//! Ticker-driven timer task

use embassy_futures::select::{select, Either};
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

use super::signal::TimerCommand;
use crate::player::Player;
use crate::traits::{BitmapPanel, PeriodicTimer};

/// Service a [`super::SignalTimer`] for `player`
///
/// Idles until the first `Start`, then ticks the player at the requested
/// period. A new `Start` rearms the ticker, `Stop` idles again and `Destroy`
/// returns. Spawn it from a board-specific `#[embassy_executor::task]`.
pub async fn run_player_timer<M, N, P, T>(
    player: &Player<M, P, T>,
    commands: &Signal<N, TimerCommand>,
) where
    M: RawMutex,
    N: RawMutex,
    P: BitmapPanel,
    T: PeriodicTimer,
{
    info!("Animation timer task started");

    let mut command = commands.wait().await;
    loop {
        match command {
            TimerCommand::Start { interval_us } => {
                debug!("Animation timer armed: {}us", interval_us);
                let mut ticker = Ticker::every(Duration::from_micros(interval_us));
                command = loop {
                    match select(ticker.next(), commands.wait()).await {
                        Either::First(()) => player.tick(Instant::now().as_millis()),
                        Either::Second(next) => break next,
                    }
                };
            }
            TimerCommand::Stop => {
                debug!("Animation timer stopped");
                command = commands.wait().await;
            }
            TimerCommand::Destroy => {
                info!("Animation timer task finished");
                return;
            }
        }
    }
}
