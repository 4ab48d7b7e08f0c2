//! Scripted in-memory device for protocol tests.

use std::collections::VecDeque;
use std::time::Duration;

use crate::proto::CommandDescriptor;
use crate::transport::{Transport, TransportError, PAYLOAD_OFFSET};

/// A mock device: responses are queued up front, written frames and timeout
/// changes are recorded for assertions afterwards.
pub struct MockDevice {
    /// Scripted response frames, consumed front to back. An empty queue
    /// makes `read_frame` report a timeout.
    pub frames: VecDeque<Vec<u8>>,
    /// Every frame passed to `write`, in order.
    pub written: Vec<Vec<u8>>,
    /// Every `set_read_timeout` call, in order.
    pub timeouts: Vec<Option<Duration>>,
    /// When set, `build_frame` returns a buffer of this length instead of
    /// the descriptor's frame size (for bookkeeping-guard tests).
    pub build_len_override: Option<usize>,
    /// When set, `write` fails after this many successful writes.
    pub fail_write_after: Option<usize>,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            frames: VecDeque::new(),
            written: Vec::new(),
            timeouts: Vec::new(),
            build_len_override: None,
            fail_write_after: None,
        }
    }

    /// Queue a response frame for `rsp` with `payload` at the payload
    /// offset and the rest zeroed.
    pub fn push_frame(&mut self, rsp: &CommandDescriptor, payload: &[u8]) {
        let mut frame = vec![0u8; 1 + rsp.frame_len.byte_len()];
        frame[1] = rsp.opcode;
        frame[PAYLOAD_OFFSET..PAYLOAD_OFFSET + payload.len()].copy_from_slice(payload);
        self.frames.push_back(frame);
    }

    /// Queue a status-only response frame for `rsp`.
    pub fn push_status(&mut self, rsp: &CommandDescriptor, status: u8) {
        self.push_frame(rsp, &[status]);
    }

    /// Opcode byte of each written frame, in order.
    pub fn opcodes_written(&self) -> Vec<u8> {
        self.written.iter().map(|tx| tx[1]).collect()
    }
}

impl Transport for MockDevice {
    fn build_frame(&self, cmd: &CommandDescriptor) -> Result<Vec<u8>, TransportError> {
        let len = self
            .build_len_override
            .unwrap_or(1 + cmd.frame_len.byte_len());
        let mut frame = vec![0u8; len];
        if len > 1 {
            frame[1] = cmd.opcode;
        }
        Ok(frame)
    }

    fn write(&mut self, frame: &[u8]) -> Result<(), TransportError> {
        if let Some(limit) = self.fail_write_after {
            if self.written.len() >= limit {
                return Err(TransportError::Io(std::io::Error::new(
                    std::io::ErrorKind::BrokenPipe,
                    "mock write failure",
                )));
            }
        }
        self.written.push(frame.to_vec());
        Ok(())
    }

    fn read_frame(&mut self, _rsp: &CommandDescriptor) -> Result<Vec<u8>, TransportError> {
        self.frames.pop_front().ok_or(TransportError::Timeout)
    }

    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> Result<(), TransportError> {
        self.timeouts.push(timeout);
        Ok(())
    }
}
