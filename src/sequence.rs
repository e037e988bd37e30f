//! Instruction sequences
//!
//! A [`Sequence`] is an ordered script of phase switches and payload
//! transmissions sent to the controller as one logical unit: the power-on
//! initialization, a frame update, a contrast change.
//!
//! Phase steps stay in effect for every following transmit until the next
//! phase step. The builder methods only insert a phase step when the phase
//! actually changes.
//!
//! ## Example
//!
//! ```
//! use ssd1322::command::SET_CONTRAST_CURRENT;
//! use ssd1322::sequence::{Payload, Sequence, Step};
//!
//! let sequence = Sequence::new()
//!     .command(SET_CONTRAST_CURRENT)
//!     .data_byte(0x80);
//!
//! assert_eq!(
//!     sequence.steps(),
//!     &[
//!         Step::EnterCommand,
//!         Step::Transmit(Payload::Byte(SET_CONTRAST_CURRENT)),
//!         Step::EnterData,
//!         Step::Transmit(Payload::Byte(0x80)),
//!     ]
//! );
//! ```

use alloc::vec::Vec;

use crate::interface::{DisplayInterface, Phase};

/// Bytes carried by a transmit step
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Payload {
    /// A single byte
    Byte(u8),
    /// A block of bytes, up to a whole frame
    Block(Vec<u8>),
}

impl Payload {
    /// View the payload as a byte slice
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Byte(byte) => core::slice::from_ref(byte),
            Self::Block(bytes) => bytes,
        }
    }
}

/// One step of an instruction sequence
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Switch the bus to command phase
    EnterCommand,
    /// Switch the bus to data phase
    EnterData,
    /// Send a payload in the current phase
    Transmit(Payload),
}

/// Ordered list of steps played through a [`DisplayInterface`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct Sequence {
    steps: Vec<Step>,
    phase: Option<Phase>,
}

impl Sequence {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a raw step
    pub fn step(mut self, step: Step) -> Self {
        match step {
            Step::EnterCommand => self.phase = Some(Phase::Command),
            Step::EnterData => self.phase = Some(Phase::Data),
            Step::Transmit(_) => {}
        }
        self.steps.push(step);
        self
    }

    /// Append a command byte, entering command phase if needed
    pub fn command(self, command: u8) -> Self {
        self.enter(Phase::Command)
            .step(Step::Transmit(Payload::Byte(command)))
    }

    /// Append a command followed by its parameters
    pub fn command_with(self, command: u8, params: &[u8]) -> Self {
        self.command(command).data(params)
    }

    /// Append a single parameter byte, entering data phase if needed
    pub fn data_byte(self, byte: u8) -> Self {
        self.enter(Phase::Data)
            .step(Step::Transmit(Payload::Byte(byte)))
    }

    /// Append parameter bytes, one transmit per byte
    pub fn data(self, bytes: &[u8]) -> Self {
        bytes
            .iter()
            .fold(self, |sequence, &byte| sequence.data_byte(byte))
    }

    /// Append a block of bytes as a single transmit in data phase
    pub fn frame(self, bytes: Vec<u8>) -> Self {
        self.enter(Phase::Data)
            .step(Step::Transmit(Payload::Block(bytes)))
    }

    fn enter(self, phase: Phase) -> Self {
        if self.phase == Some(phase) {
            return self;
        }
        match phase {
            Phase::Command => self.step(Step::EnterCommand),
            Phase::Data => self.step(Step::EnterData),
        }
    }

    /// Steps in transmission order
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of transmit steps
    pub fn transmit_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| matches!(step, Step::Transmit(_)))
            .count()
    }

    /// Play the sequence through an interface
    ///
    /// Steps run strictly in order. The first interface error aborts the
    /// remaining steps and is returned; nothing is retried or rolled back.
    ///
    /// # Errors
    ///
    /// Returns the interface error that stopped the sequence.
    pub fn run<I: DisplayInterface>(&self, interface: &mut I) -> Result<(), I::Error> {
        log::trace!(
            "sending {} steps ({} transmits)",
            self.steps.len(),
            self.transmit_count()
        );
        for step in &self.steps {
            match step {
                Step::EnterCommand => interface.set_phase(Phase::Command)?,
                Step::EnterData => interface.set_phase(Phase::Data)?,
                Step::Transmit(payload) => interface.write(payload.as_bytes())?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use embedded_hal::delay::DelayNs;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Phase(Phase),
        Write(Vec<u8>),
    }

    #[derive(Debug, Default)]
    struct MockInterface {
        calls: Vec<Call>,
        fail_after: Option<usize>,
    }

    #[derive(Debug, PartialEq)]
    struct WriteFailed;

    impl DisplayInterface for MockInterface {
        type Error = WriteFailed;

        fn set_phase(&mut self, phase: Phase) -> Result<(), Self::Error> {
            self.calls.push(Call::Phase(phase));
            Ok(())
        }

        fn write(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
            if self.fail_after == Some(self.calls.len()) {
                return Err(WriteFailed);
            }
            self.calls.push(Call::Write(bytes.to_vec()));
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[test]
    fn test_phase_only_emitted_on_change() {
        let sequence = Sequence::new()
            .command(0x15)
            .data(&[28, 91])
            .command(0x75)
            .data(&[0, 63]);

        assert_eq!(
            sequence.steps(),
            &[
                Step::EnterCommand,
                Step::Transmit(Payload::Byte(0x15)),
                Step::EnterData,
                Step::Transmit(Payload::Byte(28)),
                Step::Transmit(Payload::Byte(91)),
                Step::EnterCommand,
                Step::Transmit(Payload::Byte(0x75)),
                Step::EnterData,
                Step::Transmit(Payload::Byte(0)),
                Step::Transmit(Payload::Byte(63)),
            ]
        );
    }

    #[test]
    fn test_consecutive_commands_share_phase() {
        let sequence = Sequence::new().command(0xB9).command(0x00);
        assert_eq!(sequence.steps().len(), 3);
        assert_eq!(sequence.transmit_count(), 2);
    }

    #[test]
    fn test_frame_is_sent_in_one_write() {
        let mut interface = MockInterface::default();
        let frame = vec![0x11u8; 4096];
        Sequence::new()
            .command(0x5C)
            .frame(frame.clone())
            .run(&mut interface)
            .unwrap();

        assert_eq!(
            interface.calls,
            vec![
                Call::Phase(Phase::Command),
                Call::Write(vec![0x5C]),
                Call::Phase(Phase::Data),
                Call::Write(frame),
            ]
        );
    }

    #[test]
    fn test_explicit_phase_steps_are_kept() {
        let sequence = Sequence::new()
            .step(Step::EnterData)
            .step(Step::Transmit(Payload::Byte(1)))
            .data_byte(2);
        assert_eq!(
            sequence.steps(),
            &[
                Step::EnterData,
                Step::Transmit(Payload::Byte(1)),
                Step::Transmit(Payload::Byte(2)),
            ]
        );
    }

    #[test]
    fn test_error_aborts_remaining_steps() {
        let mut interface = MockInterface {
            calls: Vec::new(),
            fail_after: Some(2),
        };
        let result = Sequence::new()
            .command(0xAE)
            .command(0xAF)
            .command(0xA6)
            .run(&mut interface);

        assert_eq!(result, Err(WriteFailed));
        assert_eq!(
            interface.calls,
            vec![Call::Phase(Phase::Command), Call::Write(vec![0xAE])]
        );
    }

    #[test]
    fn test_payload_as_bytes() {
        assert_eq!(Payload::Byte(7).as_bytes(), &[7]);
        assert_eq!(Payload::Block(vec![1, 2, 3]).as_bytes(), &[1, 2, 3]);
    }
}
