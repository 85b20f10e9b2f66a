use std::convert::TryFrom;

use rand::{rngs::StdRng, RngCore, SeedableRng};

use crate::{
    definitions::{cpu, display, memory},
    devices::Keypad,
    opcode::{self, Instruction, Opcode, Operation, ProgramCounterStep},
    resources::Rom,
    timer::Timer,
    ProcessError,
};

/// The ChipSet struct represents the current state of the system, it
/// contains all the structures needed for emulating an instant on the
/// Chip8 CPU.
pub struct ChipSet {
    /// name of the loaded rom
    pub(super) name: String,
    /// the last fetched instruction word, two bytes long and stored
    /// big-endian in memory
    pub(super) opcode: Opcode,
    /// - `0x000-0x050` - Used for the built in `4x5` pixel font set (`0-F`)
    /// - `0x200-0xFFF` - Program ROM and work RAM
    pub(super) memory: Vec<u8>,
    /// `8-bit` data registers named `V0` to `VF`. The `VF` register doubles
    /// as a flag for some instructions; thus, it should be avoided. In an
    /// addition operation, `VF` is the carry flag, while in subtraction, it
    /// is the "no borrow" flag. In the draw instruction `VF` is set upon
    /// pixel collision.
    pub(super) registers: [u8; cpu::register::SIZE],
    /// The index for the register, this is a special register entry
    /// called index `I`
    pub(super) index_register: usize,
    /// The program counter is a CPU register in the computer processor
    /// which has the address of the next instruction to be executed from
    /// memory.
    pub(super) program_counter: usize,
    /// The stack is only used to store return addresses when subroutines
    /// are called. It is backed by a growing std::vec::Vec, so unlike the
    /// original hardware there is no enforced nesting limit.
    pub(super) stack: Vec<usize>,
    /// Delay timer: This timer is intended to be used for timing the
    /// events of games. Its value can be set and read.
    /// Counts down at 60 hertz, until it reaches 0.
    pub(super) delay_timer: Timer,
    /// Sound timer: This timer is used for sound effects. When its value
    /// is nonzero, a beeping sound is made.
    /// Counts down at 60 hertz, until it reaches 0.
    pub(super) sound_timer: Timer,
    /// The graphics of the Chip 8 are black and white and the screen has a
    /// total of `2048` pixels `(64 x 32)`, stored row-major so that a
    /// pixel lives at `y * 64 + x`.
    pub(super) display: Vec<bool>,
    /// The 16 key hex keypad, written by the input collaborator between
    /// cycle batches.
    pub(super) keypad: Keypad,
    /// This stores the random number generator, used by the chipset.
    /// It is stored into the chipset, so as to enable simple swapping
    /// for a seeded one in tests.
    pub(super) rng: Box<dyn RngCore + Send>,
}

impl ChipSet {
    /// will create a new chipset object
    pub fn new(rom: Rom) -> Self {
        // initialize all the memory with 0
        let mut ram = vec![0; memory::SIZE];

        // load the font
        ram[display::fontset::LOCATION..][..display::fontset::FONTSET.len()]
            .copy_from_slice(&display::fontset::FONTSET);

        // write the rom data into memory, Rom::new already checked the size
        ram[cpu::PROGRAM_COUNTER..][..rom.get_data().len()].copy_from_slice(rom.get_data());

        log::info!(
            "loaded rom '{}' ({} bytes)",
            rom.get_name(),
            rom.get_data().len()
        );

        Self {
            name: rom.get_name().to_string(),
            opcode: 0,
            memory: ram,
            registers: [0; cpu::register::SIZE],
            index_register: 0,
            program_counter: cpu::PROGRAM_COUNTER,
            stack: Vec::with_capacity(cpu::stack::CAPACITY),
            delay_timer: Timer::new(0),
            sound_timer: Timer::new(0),
            display: vec![false; display::RESOLUTION],
            keypad: Keypad::new(),
            rng: Box::new(StdRng::from_entropy()),
        }
    }

    /// Will zero every piece of live state while keeping the resident
    /// program and font image in memory, then reseed the random generator.
    pub fn reset(&mut self) {
        self.opcode = 0;
        self.registers = [0; cpu::register::SIZE];
        self.index_register = 0;
        self.program_counter = cpu::PROGRAM_COUNTER;
        self.stack.clear();
        self.delay_timer = Timer::new(0);
        self.sound_timer = Timer::new(0);
        for pixel in self.display.iter_mut() {
            *pixel = false;
        }
        self.keypad.reset();
        self.rng = Box::new(StdRng::from_entropy());

        log::info!("machine '{}' was reset", self.name);
    }

    /// will get the next opcode from memory and move the program counter
    /// past it
    ///
    /// Both bytes are read before the counter moves, and the counter
    /// always moves by exactly two.
    pub(super) fn set_opcode(&mut self) -> Result<(), ProcessError> {
        // will build the opcode given from the pointer
        self.opcode = opcode::build_opcode(&self.memory, self.program_counter)?;
        self.program_counter += memory::opcodes::SIZE;
        Ok(())
    }

    /// will advance the program by a single fetch-decode-execute cycle
    ///
    /// An instruction word that decodes to none of the defined operations
    /// is logged and completes the cycle as a no-op, so malformed roms
    /// keep running. Fatal faults (a fetch past the end of the address
    /// space, a return with an empty stack) are handed back to the driver,
    /// which has to halt the machine.
    pub fn next(&mut self) -> Result<Operation, ProcessError> {
        // get next opcode
        self.set_opcode()?;

        match Instruction::try_from(self.opcode) {
            // run the opcode
            Ok(instruction) => self.execute(instruction),
            Err(err) => {
                log::warn!("{} It is treated as a no-op.", err);
                Ok(Operation::None)
            }
        }
    }

    /// will move the program counter by the given step
    ///
    /// A jump target is taken as is; a target outside the address space
    /// surfaces as a fetch fault on the next cycle.
    pub(super) fn step(&mut self, step: ProgramCounterStep) {
        match step {
            ProgramCounterStep::Next => {}
            ProgramCounterStep::Skip => self.program_counter += memory::opcodes::SIZE,
            ProgramCounterStep::Repeat => self.program_counter -= memory::opcodes::SIZE,
            ProgramCounterStep::Jump(pointer) => self.program_counter = pointer,
        }
    }

    /// Will push the given return address onto the stack. The stack grows
    /// on demand, so pushing can not fail.
    pub(super) fn push_stack(&mut self, pointer: usize) {
        self.stack.push(pointer);
    }

    /// Will pop the latest return address from the stack. An empty stack
    /// means a malformed program, the machine has to halt.
    pub(super) fn pop_stack(&mut self) -> Result<usize, ProcessError> {
        self.stack.pop().ok_or(ProcessError::StackUnderflow)
    }

    /// Will write keyboard data into the internal keypad representation.
    pub fn set_keys(&mut self, keys: &[bool]) {
        self.keypad.set_keys(keys);
    }

    /// Will set the value of the given key
    pub fn set_key(&mut self, key: usize, to: bool) {
        self.keypad.set_key(key, to)
    }

    /// Will toggle the given key
    pub fn toggle_key(&mut self, key: usize) {
        self.keypad.toggle_key(key)
    }

    /// Will get the current state of the keypad
    pub fn get_keypad(&self) -> &[bool] {
        self.keypad.get_keys()
    }

    /// Will return an immutable view of the framebuffer, row-major
    pub fn get_display(&self) -> &[bool] {
        &self.display
    }

    /// will return the delay timer
    pub fn get_delay_timer(&self) -> u8 {
        self.delay_timer.get_value()
    }

    /// will return the sound timer
    pub fn get_sound_timer(&self) -> u8 {
        self.sound_timer.get_value()
    }

    /// The host shall produce an audible signal while this holds.
    pub fn sound_active(&self) -> bool {
        self.sound_timer.is_active()
    }

    /// The hook for the external 60Hz clock collaborator, counts both
    /// timers down by a single step.
    pub fn tick_timers(&mut self) {
        self.delay_timer.tick();
        self.sound_timer.tick();
    }

    /// Will return the name of the loaded rom.
    pub fn get_name(&self) -> &str {
        &self.name
    }
}
