//! Binary framing for [`SessionState`].
//!
//! The format is a small self-describing binary scheme local to this crate;
//! it makes no attempt at cross-implementation compatibility. Layout, all
//! integers little-endian:
//!
//! ```text
//! magic           4 bytes   b"CLC1"
//! loaded_queries  u32 count, then for each: u32 len, `len` UTF-8 bytes
//! queries_so_far  same shape as loaded_queries
//! lines_to_skip   u32
//! lines_so_far    u32
//! seed tag        u8        0 = absent, 1 = present
//! seed value      i64       present only if tag == 1
//! ```
//!
//! Any truncation, length that overruns the remaining bytes, unknown seed
//! tag, or bad magic is rejected as [`StateError::CorruptState`].

use std::collections::VecDeque;

use crate::error::StateError;
use crate::state::SessionState;

const MAGIC: &[u8; 4] = b"CLC1";

/// Encode a state into its on-disk byte representation.
pub fn encode(state: &SessionState) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    write_queue(&mut out, &state.loaded_queries);
    write_queue(&mut out, &state.queries_so_far);
    out.extend_from_slice(&state.lines_to_skip.to_le_bytes());
    out.extend_from_slice(&state.lines_so_far.to_le_bytes());
    match state.last_random_number {
        None => out.push(0),
        Some(x) => {
            out.push(1);
            out.extend_from_slice(&x.to_le_bytes());
        }
    }
    out
}

/// Decode bytes previously produced by [`encode`]. Any malformed input is
/// reported as [`StateError::CorruptState`] rather than partially parsed.
pub fn decode(bytes: &[u8]) -> Result<SessionState, StateError> {
    let mut cursor = Cursor::new(bytes);
    let magic = cursor.take(4)?;
    if magic != MAGIC {
        return Err(StateError::CorruptState("bad magic".to_string()));
    }
    let loaded_queries = read_queue(&mut cursor)?;
    let queries_so_far = read_queue(&mut cursor)?;
    let lines_to_skip = cursor.take_u32()?;
    let lines_so_far = cursor.take_u32()?;
    let tag = cursor.take_u8()?;
    let last_random_number = match tag {
        0 => None,
        1 => Some(cursor.take_i64()?),
        _ => return Err(StateError::CorruptState(format!("unknown seed tag {tag}"))),
    };
    if !cursor.is_at_end() {
        return Err(StateError::CorruptState("trailing bytes".to_string()));
    }
    Ok(SessionState {
        loaded_queries,
        queries_so_far,
        lines_to_skip,
        lines_so_far,
        last_random_number,
    })
}

fn write_queue(out: &mut Vec<u8>, queue: &VecDeque<String>) {
    out.extend_from_slice(&(queue.len() as u32).to_le_bytes());
    for line in queue {
        let bytes = line.as_bytes();
        out.extend_from_slice(&(bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(bytes);
    }
}

fn read_queue(cursor: &mut Cursor) -> Result<VecDeque<String>, StateError> {
    let count = cursor.take_u32()?;
    let mut queue = VecDeque::with_capacity(count as usize);
    for _ in 0..count {
        let len = cursor.take_u32()? as usize;
        let bytes = cursor.take(len)?;
        let line = String::from_utf8(bytes.to_vec())
            .map_err(|e| StateError::CorruptState(format!("invalid UTF-8: {e}")))?;
        queue.push_back(line);
    }
    Ok(queue)
}

/// A bounds-checked cursor over a byte slice, used only by this module.
struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn is_at_end(&self) -> bool {
        self.pos == self.bytes.len()
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], StateError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| StateError::CorruptState("truncated".to_string()))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    fn take_u8(&mut self) -> Result<u8, StateError> {
        Ok(self.take(1)?[0])
    }

    fn take_u32(&mut self) -> Result<u32, StateError> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes(bytes.try_into().unwrap()))
    }

    fn take_i64(&mut self) -> Result<i64, StateError> {
        let bytes = self.take(8)?;
        Ok(i64::from_le_bytes(bytes.try_into().unwrap()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SessionState {
        let mut state = SessionState::default();
        state.loaded_queries.push_back("add".to_string());
        state.loaded_queries.push_back("2".to_string());
        state.queries_so_far.push_back("add".to_string());
        state.lines_to_skip = 3;
        state.lines_so_far = 1;
        state.last_random_number = Some(-42);
        state
    }

    #[test]
    fn round_trips_a_populated_state() {
        let state = sample();
        let decoded = decode(&encode(&state)).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn round_trips_the_default_state() {
        let state = SessionState::default();
        let decoded = decode(&encode(&state)).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn round_trips_absent_seed() {
        let mut state = SessionState::default();
        state.last_random_number = None;
        let decoded = decode(&encode(&state)).unwrap();
        assert_eq!(decoded.last_random_number, None);
    }

    #[test]
    fn rejects_bad_magic() {
        let bytes = vec![0, 1, 2, 3];
        assert!(matches!(decode(&bytes), Err(StateError::CorruptState(_))));
    }

    #[test]
    fn rejects_truncated_input() {
        let mut bytes = encode(&sample());
        bytes.truncate(bytes.len() - 1);
        assert!(matches!(decode(&bytes), Err(StateError::CorruptState(_))));
    }

    #[test]
    fn rejects_trailing_bytes() {
        let mut bytes = encode(&sample());
        bytes.push(0xff);
        assert!(matches!(decode(&bytes), Err(StateError::CorruptState(_))));
    }

    #[test]
    fn rejects_unknown_seed_tag() {
        let mut bytes = encode(&SessionState::default());
        let tag_pos = bytes.len() - 1;
        bytes[tag_pos] = 7;
        assert!(matches!(decode(&bytes), Err(StateError::CorruptState(_))));
    }
}
