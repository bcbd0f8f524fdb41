//! Async loop delivering typewriter ticks on the Tokio clock.

use tokio::sync::mpsc;

use super::engine::{TypewriterDisplay, TypewriterEngine};
use super::scheduler::TimerSlot;

/// Input events for a running typewriter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypewriterCommand {
    /// Replace the phrase list, e.g. after a language switch.
    Restart(Vec<String>),
    /// Stop animating and return from [`drive`].
    Stop,
}

enum Event {
    Tick,
    Command(Option<TypewriterCommand>),
}

/// Runs `engine` until [`TypewriterCommand::Stop`] arrives or every sender
/// is dropped.
///
/// Commands are the only way to change the phrase list; a restart replaces
/// the sleeping tick, so the previous run never fires again.
pub async fn drive<D: TypewriterDisplay>(
    engine: &mut TypewriterEngine<TimerSlot, D>,
    commands: &mut mpsc::Receiver<TypewriterCommand>,
) {
    loop {
        let event = match engine.scheduler().pending() {
            Some(tick) => tokio::select! {
                () = tokio::time::sleep(tick.delay) => Event::Tick,
                command = commands.recv() => Event::Command(command),
            },
            None => Event::Command(commands.recv().await),
        };

        match event {
            Event::Tick => {
                if let Some(fired) = engine.scheduler_mut().take() {
                    engine.on_timer(fired.token);
                }
            }
            Event::Command(Some(TypewriterCommand::Restart(phrases))) => engine.restart(phrases),
            Event::Command(Some(TypewriterCommand::Stop) | None) => {
                engine.stop();
                tracing::debug!(
                    cycles = engine.cycles_completed(),
                    "typewriter stopped"
                );
                break;
            }
        }
    }
}
