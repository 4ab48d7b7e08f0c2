//! Chunked transfer of payloads larger than one frame.
//!
//! The device moves public keys, signatures, key blobs, and messages to
//! sign across a channel whose frames carry at most
//! [`CHUNK_SIZE`](crate::proto::CHUNK_SIZE) payload bytes. This module implements both directions:
//!
//! * outbound: split a buffer into zero-padded chunks, each acknowledged by
//!   a status response before the next is sent;
//! * inbound: reassemble a buffer of known total length from a sequence of
//!   response frames, the last of which yields only the remainder.
//!
//! The total number of bytes moved must equal the declared logical length
//! exactly; any discrepancy is a fatal [`Error::LengthMismatch`].

use crate::error::Error;
use crate::proto::CommandDescriptor;
use crate::transport::{dump, Transport, PAYLOAD_OFFSET, STATUS_OK};

/// Frame count and final-frame yield for a payload of `total` bytes split
/// into frames of `nominal` payload bytes each.
///
/// Derived rather than hardcoded so the loop bounds stay correct if payload
/// sizes ever change: `frames = ceil(total / nominal)` and the tail is
/// whatever the full frames leave over.
pub fn chunk_geometry(total: usize, nominal: usize) -> (usize, usize) {
    let frames = (total + nominal - 1) / nominal;
    let tail = total - frames.saturating_sub(1) * nominal;
    (frames, tail)
}

/// Send `data` to the device as a sequence of `cmd` frames, reading one
/// `rsp` acknowledgement per chunk and requiring a success status on each.
///
/// The final chunk's unused tail is left zero-padded, but the cursor only
/// advances by the bytes actually taken from `data`.
pub fn send_chunked<T: Transport + ?Sized>(
    transport: &mut T,
    cmd: &CommandDescriptor,
    rsp: &CommandDescriptor,
    data: &[u8],
) -> Result<(), Error> {
    drive_chunks(data, cmd.name, |content| {
        send_chunk(transport, cmd, rsp, content)
    })
}

/// Read `total` bytes from the device as a sequence of `rsp` frames.
///
/// Each full frame yields its entire payload region; the final frame yields
/// only the remainder. These response frames carry no status byte.
pub fn read_chunked<T: Transport + ?Sized>(
    transport: &mut T,
    rsp: &CommandDescriptor,
    total: usize,
) -> Result<Vec<u8>, Error> {
    let mut out = vec![0u8; total];
    if total == 0 {
        return Ok(out);
    }

    let nominal = rsp.frame_len.payload_len();
    let (frames, tail) = chunk_geometry(total, nominal);

    for i in 0..frames {
        let rx = transport
            .read_frame(rsp)
            .map_err(|e| Error::transport(rsp.name, e))?;
        dump(rsp.name, &rx);

        let want = if i + 1 == frames { tail } else { nominal };
        let payload = rx
            .get(PAYLOAD_OFFSET..PAYLOAD_OFFSET + want)
            .ok_or(Error::LengthMismatch {
                name: rsp.name,
                expected: want,
                actual: rx.len().saturating_sub(PAYLOAD_OFFSET),
            })?;
        out[i * nominal..i * nominal + want].copy_from_slice(payload);
    }

    Ok(out)
}

/// Run the outbound cursor loop, advancing by whatever each call to `send`
/// reports as transmitted. A zero-byte step or a cursor past the end of
/// `data` means the chunk-size bookkeeping is broken and aborts the
/// transfer.
fn drive_chunks(
    data: &[u8],
    name: &'static str,
    mut send: impl FnMut(&[u8]) -> Result<usize, Error>,
) -> Result<(), Error> {
    let mut offset = 0;
    while offset < data.len() {
        let sent = send(&data[offset..])?;
        if sent == 0 || offset + sent > data.len() {
            return Err(Error::LengthMismatch {
                name,
                expected: data.len(),
                actual: offset + sent,
            });
        }
        offset += sent;
    }
    Ok(())
}

/// Send one chunk of `content` and wait for its acknowledgement. Returns
/// the number of bytes consumed from `content`.
fn send_chunk<T: Transport + ?Sized>(
    transport: &mut T,
    cmd: &CommandDescriptor,
    rsp: &CommandDescriptor,
    content: &[u8],
) -> Result<usize, Error> {
    let mut tx = transport
        .build_frame(cmd)
        .map_err(|e| Error::transport(cmd.name, e))?;

    // The frame's payload region is already zeroed, so a short final chunk
    // is implicitly zero-padded.
    let capacity = tx.len().saturating_sub(PAYLOAD_OFFSET);
    let copied = capacity.min(content.len());
    if copied > 0 {
        tx[PAYLOAD_OFFSET..PAYLOAD_OFFSET + copied].copy_from_slice(&content[..copied]);
    }

    dump(cmd.name, &tx);
    transport
        .write(&tx)
        .map_err(|e| Error::transport(cmd.name, e))?;

    let rx = transport
        .read_frame(rsp)
        .map_err(|e| Error::transport(cmd.name, e))?;
    dump(rsp.name, &rx);

    if rx.get(PAYLOAD_OFFSET).copied() != Some(STATUS_OK) {
        return Err(Error::CommandFailed { name: cmd.name });
    }

    Ok(copied)
}
