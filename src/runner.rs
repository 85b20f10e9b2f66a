use crate::{
    chip8::ChipSet,
    definitions::cpu,
    devices::{DisplayCommands, KeyboardCommands},
    opcode::Operation,
    resources::Rom,
    ProcessError,
};

/// The session states a host can drive the machine through.
///
/// The allowed transitions are `Start -> Play`, `Play <-> Pause`,
/// `Play -> Play` through a machine reset and `any -> Quit`. The
/// interpreter core itself knows nothing about these, they only gate
/// whether [`Runner::frame`] does any work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// Created, no cycle has run yet.
    Start,
    /// Cycles run every frame.
    Play,
    /// The machine state is frozen until resumed.
    Pause,
    /// The session ended, every further frame is a no-op.
    Quit,
}

/// Drives a [`ChipSet`] at the host display rate.
///
/// The host calls [`frame`](Runner::frame) at 60Hz. One frame refreshes
/// the keypad from the input collaborator, runs a batch of cycles that
/// approximates the nominal machine clock, counts both timers down once
/// and hands the framebuffer to the display collaborator if anything was
/// drawn.
pub struct Runner<D, K>
where
    D: DisplayCommands,
    K: KeyboardCommands,
{
    chip: ChipSet,
    display: D,
    keyboard: K,
    state: GameState,
}

impl<D, K> Runner<D, K>
where
    D: DisplayCommands,
    K: KeyboardCommands,
{
    /// Will create a runner with a freshly loaded machine.
    pub fn new(rom: Rom, display: D, keyboard: K) -> Self {
        Self {
            chip: ChipSet::new(rom),
            display,
            keyboard,
            state: GameState::Start,
        }
    }

    /// The current session state.
    pub fn get_state(&self) -> GameState {
        self.state
    }

    /// Shared access to the machine, for timer and framebuffer reads.
    pub fn chip(&self) -> &ChipSet {
        &self.chip
    }

    /// Will start or resume execution.
    pub fn play(&mut self) {
        if matches!(self.state, GameState::Start | GameState::Pause) {
            self.state = GameState::Play;
        }
    }

    /// Will freeze execution until [`play`](Runner::play).
    pub fn pause(&mut self) {
        if self.state == GameState::Play {
            self.state = GameState::Pause;
        }
    }

    /// Will put the machine back at the program start and keep playing.
    /// The resident program and font stay in memory.
    pub fn reset(&mut self) {
        if self.state == GameState::Quit {
            return;
        }
        self.chip.reset();
        self.state = GameState::Play;
    }

    /// Will end the session for good.
    pub fn quit(&mut self) {
        self.state = GameState::Quit;
    }

    /// Will run a single 60Hz host frame.
    ///
    /// A fatal machine fault is handed back to the host; the session is
    /// moved to [`GameState::Quit`] as the state is not worth trusting
    /// anymore.
    pub fn frame(&mut self) -> Result<(), ProcessError> {
        if self.state != GameState::Play {
            return Ok(());
        }

        self.chip.set_keys(self.keyboard.get_keyboard());

        let mut redraw = false;
        for _ in 0..cpu::CYCLES_PER_FRAME {
            match self.chip.next() {
                Ok(Operation::Draw) => redraw = true,
                // the machine is waiting on a key press, re-running it
                // within this frame can not observe new input
                Ok(Operation::Wait) => break,
                Ok(Operation::None) => {}
                Err(err) => {
                    self.state = GameState::Quit;
                    return Err(err);
                }
            }
        }

        self.chip.tick_timers();

        if redraw {
            self.display.display(self.chip.get_display());
        }

        Ok(())
    }
}
