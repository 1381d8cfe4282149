//! # Ticket Codec
//!
//! Fixed binary layout of a forms-authentication ticket. Integers are
//! little-endian; text fields are UTF-16LE behind a one-byte length prefix.
//!
//! ```text
//! offset  size  field
//! 0       1     format marker (1)
//! 1       1     version
//! 2       8     issue date, ticks (u64)
//! 10      1     spacer (254)
//! 11      8     expiration, ticks (i64)
//! 19      1     is persistent (0 | 1)
//! 20      1     name byte length L1
//! 21      L1    name
//! ..      1     user data byte length L2
//! ..      L2    user data
//! ..      1     cookie path byte length L3
//! ..      L3    cookie path
//! ..      1     footer (255)
//! ```
//!
//! ## Field Limit
//!
//! A length byte caps each text field at 255 encoded bytes, which is 127
//! UTF-16 code units. Longer fields are rejected with `FieldTooLong`; they
//! are never truncated.

use super::errors::TicketError;
use super::tick::{checked_to_ticks, from_ticks};
use super::ticket::Ticket;

/// First byte of every serialized ticket.
pub const FORMAT_MARKER: u8 = 1;

/// Byte between the issue date and the expiration.
pub const SPACER: u8 = 254;

/// Last byte of every serialized ticket.
pub const FOOTER: u8 = 255;

/// Largest encoded size of one text field.
pub const MAX_FIELD_BYTES: usize = u8::MAX as usize;

/// Largest number of UTF-16 code units in one text field.
pub const MAX_FIELD_CHARS: usize = MAX_FIELD_BYTES / 2;

/// Size of a ticket whose three text fields are empty.
pub const MIN_SERIALIZED_LEN: usize = 24;

/// Bytes produced by [`serialize`].
///
/// Only the codec creates these, so holding one means the bytes follow the
/// ticket layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SerializedTicket(Vec<u8>);

impl SerializedTicket {
    /// Accept raw bytes after checking they decode as a ticket.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTicket` if `bytes` is not ticket-shaped.
    pub fn try_from_bytes(bytes: Vec<u8>) -> Result<Self, TicketError> {
        deserialize(&bytes)?;
        Ok(Self(bytes))
    }

    /// Borrow the encoded bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the encoded bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    /// Encoded length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; a serialized ticket has at least its fixed fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decode back into a ticket.
    ///
    /// # Errors
    ///
    /// Returns `MalformedTicket` on layout violations.
    pub fn decode(&self) -> Result<Ticket, TicketError> {
        deserialize(&self.0)
    }
}

impl AsRef<[u8]> for SerializedTicket {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Check every text field fits its length prefix.
///
/// # Errors
///
/// Returns `FieldTooLong` for the first field over the limit.
pub fn validate_fields(ticket: &Ticket) -> Result<(), TicketError> {
    for (field, value) in text_fields(ticket) {
        encoded_len(field, value)?;
    }
    Ok(())
}

/// Serialize a ticket.
///
/// # Errors
///
/// - `FieldTooLong` if a text field exceeds [`MAX_FIELD_BYTES`]
/// - `InvalidInput` if the issue date precedes tick zero, or either
///   timestamp overflows a signed 64-bit tick count
pub fn serialize(ticket: &Ticket) -> Result<SerializedTicket, TicketError> {
    let mut encoded = Vec::with_capacity(3);
    let mut text_len = 0;
    for (field, value) in text_fields(ticket) {
        let units: Vec<u16> = value.encode_utf16().collect();
        let len = encoded_len(field, value)?;
        text_len += len;
        encoded.push((len, units));
    }

    let issue_ticks = checked_to_ticks(ticket.issue_date())
        .and_then(|ticks| u64::try_from(ticks).ok())
        .ok_or_else(|| {
            TicketError::InvalidInput(format!(
                "issue date {} outside the tick range",
                ticket.issue_date()
            ))
        })?;
    let expire_ticks = checked_to_ticks(ticket.expiration()).ok_or_else(|| {
        TicketError::InvalidInput(format!(
            "expiration {} outside the tick range",
            ticket.expiration()
        ))
    })?;

    let mut buf = Vec::with_capacity(MIN_SERIALIZED_LEN + text_len);
    buf.push(FORMAT_MARKER);
    buf.push(ticket.version());
    buf.extend_from_slice(&issue_ticks.to_le_bytes());
    buf.push(SPACER);
    buf.extend_from_slice(&expire_ticks.to_le_bytes());
    buf.push(u8::from(ticket.is_persistent()));
    for (len, units) in encoded {
        // encoded_len guarantees len <= 255
        buf.push(len as u8);
        for unit in units {
            buf.extend_from_slice(&unit.to_le_bytes());
        }
    }
    buf.push(FOOTER);

    Ok(SerializedTicket(buf))
}

/// Deserialize a ticket.
///
/// The whole input must be consumed; trailing bytes are an error.
///
/// # Errors
///
/// Returns `MalformedTicket` on a marker mismatch, truncation, trailing
/// bytes, an invalid persistence flag, or undecodable text.
pub fn deserialize(bytes: &[u8]) -> Result<Ticket, TicketError> {
    let mut reader = Reader::new(bytes);

    reader.expect_marker(FORMAT_MARKER, "format marker")?;
    let version = reader.read_u8("version")?;
    let issue_ticks = reader.read_u64("issue date")?;
    reader.expect_marker(SPACER, "spacer")?;
    let expire_ticks = reader.read_i64("expiration")?;
    let is_persistent = match reader.read_u8("persistence flag")? {
        0 => false,
        1 => true,
        other => {
            return Err(TicketError::MalformedTicket(format!(
                "persistence flag must be 0 or 1, got {other}"
            )))
        }
    };
    let name = reader.read_string("name")?;
    let user_data = reader.read_string("user data")?;
    let cookie_path = reader.read_string("cookie path")?;
    reader.expect_marker(FOOTER, "footer")?;

    if reader.remaining() != 0 {
        return Err(TicketError::MalformedTicket(format!(
            "{} trailing bytes after footer",
            reader.remaining()
        )));
    }

    // Serialize never writes issue ticks above i64::MAX.
    let issue_ticks = i64::try_from(issue_ticks).map_err(|_| {
        TicketError::MalformedTicket(format!("issue date ticks {issue_ticks} out of range"))
    })?;

    Ok(Ticket::builder(name, from_ticks(expire_ticks))
        .version(version)
        .issue_date(from_ticks(issue_ticks))
        .persistent(is_persistent)
        .user_data(user_data)
        .cookie_path(cookie_path)
        .build())
}

fn text_fields(ticket: &Ticket) -> [(&'static str, &str); 3] {
    [
        ("name", ticket.name()),
        ("userData", ticket.user_data()),
        ("cookiePath", ticket.cookie_path()),
    ]
}

fn encoded_len(field: &'static str, value: &str) -> Result<usize, TicketError> {
    let bytes = value.encode_utf16().count() * 2;
    if bytes > MAX_FIELD_BYTES {
        return Err(TicketError::FieldTooLong {
            field,
            bytes,
            max: MAX_FIELD_BYTES,
        });
    }
    Ok(bytes)
}

/// Cursor over serialized ticket bytes.
struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    fn take(&mut self, len: usize, what: &str) -> Result<&'a [u8], TicketError> {
        if self.remaining() < len {
            return Err(TicketError::MalformedTicket(format!(
                "truncated at offset {} reading {what}",
                self.pos
            )));
        }
        let buf: &'a [u8] = self.buf;
        let slice = &buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(slice)
    }

    fn read_u8(&mut self, what: &str) -> Result<u8, TicketError> {
        Ok(self.take(1, what)?[0])
    }

    fn read_array<const N: usize>(&mut self, what: &str) -> Result<[u8; N], TicketError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.take(N, what)?);
        Ok(out)
    }

    fn read_u64(&mut self, what: &str) -> Result<u64, TicketError> {
        Ok(u64::from_le_bytes(self.read_array(what)?))
    }

    fn read_i64(&mut self, what: &str) -> Result<i64, TicketError> {
        Ok(i64::from_le_bytes(self.read_array(what)?))
    }

    fn expect_marker(&mut self, expected: u8, what: &str) -> Result<(), TicketError> {
        let offset = self.pos;
        let actual = self.read_u8(what)?;
        if actual != expected {
            return Err(TicketError::MalformedTicket(format!(
                "{what} at offset {offset} is {actual}, expected {expected}"
            )));
        }
        Ok(())
    }

    fn read_string(&mut self, what: &str) -> Result<String, TicketError> {
        let len = usize::from(self.read_u8(what)?);
        if len % 2 != 0 {
            return Err(TicketError::MalformedTicket(format!(
                "{what} length {len} is not a whole number of UTF-16 units"
            )));
        }
        let units: Vec<u16> = self
            .take(len, what)?
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units)
            .map_err(|_| TicketError::MalformedTicket(format!("{what} is not valid UTF-16")))
    }
}
