//! Growable cursor-tracked byte buffer.

use wirebuf_encoding::Encoding;

use crate::error::BufferError;
use crate::fixed::{ByteOrder, Fixed};
use crate::store::Store;

/// Default physical capacity for [`ByteBuffer::new`], in bytes.
pub const DEFAULT_CAPACITY: usize = 4096;

/// Construction options for [`ByteBuffer::with_options`].
///
/// At most one of `capacity` and `data` may be supplied; both at once is
/// a conflict and fails construction.
#[derive(Debug, Clone, Default)]
pub struct BufferOptions {
    /// Initial physical capacity. Must be non-zero when supplied.
    pub capacity: Option<usize>,
    /// Initial content; its full length becomes the live region.
    pub data: Option<Vec<u8>>,
    /// Default text encoding. `utf8` when omitted.
    pub encoding: Option<Encoding>,
}

/// A growable byte buffer with independent read and write cursors.
///
/// The buffer manages a logical region of `len()` live bytes inside a
/// physical allocation that grows on demand and never shrinks. Relative
/// operations move their cursor; `_at` variants take an explicit offset
/// instead. Reads at an explicit offset never move the read cursor, while
/// writes at an explicit offset still push the write cursor forward to
/// the end of the furthest write so far (never backward).
///
/// Writes past the current length extend it, zero-filling any gap.
/// Inserts splice new bytes into the middle, shifting the tail rightward.
///
/// # Example
///
/// ```
/// use wirebuf_buffer::{ByteBuffer, ByteOrder};
///
/// let mut buf = ByteBuffer::new();
/// buf.write_num(0xCAFEu16, ByteOrder::Big);
/// buf.write_string_nt("hello").unwrap();
///
/// assert_eq!(buf.read_num::<u16>(ByteOrder::Big).unwrap(), 0xCAFE);
/// assert_eq!(buf.read_string_nt(), "hello");
/// assert_eq!(buf.remaining(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ByteBuffer {
    store: Store,
    read_offset: usize,
    write_offset: usize,
    encoding: Encoding,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBuffer {
    /// Creates an empty buffer with the default capacity and `utf8` as
    /// the default text encoding.
    pub fn new() -> Self {
        ByteBuffer {
            store: Store::with_capacity(DEFAULT_CAPACITY),
            read_offset: 0,
            write_offset: 0,
            encoding: Encoding::Utf8,
        }
    }

    /// Creates an empty buffer with the given initial capacity.
    ///
    /// Fails with [`BufferError::InvalidCapacity`] when `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, BufferError> {
        if capacity == 0 {
            return Err(BufferError::InvalidCapacity);
        }
        Ok(ByteBuffer {
            store: Store::with_capacity(capacity),
            read_offset: 0,
            write_offset: 0,
            encoding: Encoding::Utf8,
        })
    }

    /// Wraps existing bytes; their full length becomes the live region.
    /// Both cursors start at zero.
    pub fn from_vec(data: Vec<u8>) -> Self {
        ByteBuffer {
            store: Store::from_vec(data),
            read_offset: 0,
            write_offset: 0,
            encoding: Encoding::Utf8,
        }
    }

    /// Copies existing bytes into a new buffer; see [`from_vec`](Self::from_vec).
    pub fn from_slice(data: &[u8]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// Builds a buffer from [`BufferOptions`].
    pub fn with_options(options: BufferOptions) -> Result<Self, BufferError> {
        let mut buf = match (options.capacity, options.data) {
            (Some(_), Some(_)) => return Err(BufferError::ConflictingOptions),
            (Some(capacity), None) => Self::with_capacity(capacity)?,
            (None, Some(data)) => Self::from_vec(data),
            (None, None) => Self::new(),
        };
        if let Some(encoding) = options.encoding {
            buf.encoding = encoding;
        }
        Ok(buf)
    }

    // ========================================================================
    // Length, capacity, cursors
    // ========================================================================

    /// Number of live bytes.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when the buffer holds no live bytes.
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Physical capacity, slack included.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// The default text encoding.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// Current read cursor position.
    pub fn read_offset(&self) -> usize {
        self.read_offset
    }

    /// Moves the read cursor. Fails past the logical length.
    pub fn set_read_offset(&mut self, offset: usize) -> Result<(), BufferError> {
        if offset > self.store.len() {
            return Err(BufferError::OffsetOutOfBounds {
                offset,
                len: self.store.len(),
            });
        }
        self.read_offset = offset;
        Ok(())
    }

    /// Current write cursor position.
    pub fn write_offset(&self) -> usize {
        self.write_offset
    }

    /// Moves the write cursor. Fails past the logical length.
    pub fn set_write_offset(&mut self, offset: usize) -> Result<(), BufferError> {
        if offset > self.store.len() {
            return Err(BufferError::OffsetOutOfBounds {
                offset,
                len: self.store.len(),
            });
        }
        self.write_offset = offset;
        Ok(())
    }

    /// Bytes left between the read cursor and the end of live data.
    pub fn remaining(&self) -> usize {
        self.store.len() - self.read_offset
    }

    /// Full reset: drops live data and zeroes both cursors. The physical
    /// allocation is kept.
    pub fn clear(&mut self) {
        self.store.reset();
        self.read_offset = 0;
        self.write_offset = 0;
    }

    // ========================================================================
    // Views
    // ========================================================================

    /// The live bytes `[0, len)`.
    pub fn as_slice(&self) -> &[u8] {
        self.store.live()
    }

    /// The full physical region including unmanaged slack. Escape hatch
    /// for zero-copy interop; everything past [`len`](Self::len) is not
    /// live data.
    pub fn raw_slice(&self) -> &[u8] {
        self.store.raw()
    }

    /// Copies the live bytes into a fresh `Vec`.
    pub fn to_vec(&self) -> Vec<u8> {
        self.store.live().to_vec()
    }

    /// Consumes the buffer, returning the live bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.store.into_vec()
    }

    /// Renders the live region as text under the default encoding.
    pub fn to_text(&self) -> String {
        self.encoding.decode(self.store.live())
    }

    /// Renders the live region as text under an explicit encoding.
    pub fn to_text_as(&self, encoding: Encoding) -> String {
        encoding.decode(self.store.live())
    }

    // ========================================================================
    // Fixed-width numerics
    // ========================================================================

    /// Reads a fixed-width value at the read cursor and advances it.
    pub fn read_num<T: Fixed>(&mut self, order: ByteOrder) -> Result<T, BufferError> {
        let value = self.read_num_at(self.read_offset, order)?;
        self.read_offset += T::WIDTH;
        Ok(value)
    }

    /// Reads a fixed-width value at an explicit offset. The read cursor
    /// does not move.
    pub fn read_num_at<T: Fixed>(&self, offset: usize, order: ByteOrder) -> Result<T, BufferError> {
        let len = self.store.len();
        let end = offset
            .checked_add(T::WIDTH)
            .filter(|&end| end <= len)
            .ok_or(BufferError::ReadOutOfBounds {
                offset,
                requested: T::WIDTH,
                len,
            })?;
        Ok(T::decode(order, &self.store.live()[offset..end]))
    }

    /// Writes a fixed-width value at the write cursor and advances it.
    /// Grows the buffer as needed.
    pub fn write_num<T: Fixed>(&mut self, value: T, order: ByteOrder) {
        self.write_num_at(value, self.write_offset, order);
    }

    /// Writes a fixed-width value at an explicit offset, growing the
    /// buffer (and zero-filling any gap) when the write lands past the
    /// current length. The write cursor only ever moves forward, to the
    /// end of the furthest write so far.
    pub fn write_num_at<T: Fixed>(&mut self, value: T, offset: usize, order: ByteOrder) {
        let mut scratch = [0u8; 8];
        value.encode(order, &mut scratch);
        self.put(offset, &scratch[..T::WIDTH]);
    }

    /// Splices a fixed-width value into the buffer at `offset`, shifting
    /// everything from `offset` onward rightward. The logical length
    /// always grows by the value's width and the write cursor advances by
    /// the same amount.
    ///
    /// Fails when `offset` lies past the logical length.
    pub fn insert_num<T: Fixed>(
        &mut self,
        value: T,
        offset: usize,
        order: ByteOrder,
    ) -> Result<(), BufferError> {
        let mut scratch = [0u8; 8];
        value.encode(order, &mut scratch);
        self.splice(offset, &scratch[..T::WIDTH])
    }

    /// Reads one byte at the read cursor.
    pub fn read_u8(&mut self) -> Result<u8, BufferError> {
        self.read_num(ByteOrder::Big)
    }

    /// Reads one byte at an explicit offset without moving the cursor.
    pub fn read_u8_at(&self, offset: usize) -> Result<u8, BufferError> {
        self.read_num_at(offset, ByteOrder::Big)
    }

    /// Writes one byte at the write cursor.
    pub fn write_u8(&mut self, value: u8) {
        self.write_num(value, ByteOrder::Big)
    }

    // ========================================================================
    // Byte runs
    // ========================================================================

    /// Reads up to `max` bytes from the read cursor, advancing it by the
    /// bytes actually consumed. Never reads past the end of live data.
    pub fn read_bytes(&mut self, max: usize) -> Vec<u8> {
        let n = max.min(self.remaining());
        let start = self.read_offset;
        let out = self.store.live()[start..start + n].to_vec();
        self.read_offset = start + n;
        out
    }

    /// Reads everything between the read cursor and the end of live data.
    pub fn read_remaining(&mut self) -> Vec<u8> {
        self.read_bytes(self.remaining())
    }

    /// Reads bytes up to (but not including) the next zero byte, and
    /// consumes the terminator. When no zero byte exists before the end
    /// of live data, the end acts as the terminator and the cursor stops
    /// at the logical length.
    pub fn read_bytes_nt(&mut self) -> Vec<u8> {
        let live = self.store.live();
        let start = self.read_offset;
        let nul = live[start..]
            .iter()
            .position(|&b| b == 0)
            .map_or(live.len(), |pos| start + pos);
        let out = live[start..nul].to_vec();
        self.read_offset = (nul + 1).min(live.len());
        out
    }

    /// Appends bytes at the write cursor, growing the buffer as needed.
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.put(self.write_offset, data);
    }

    /// Writes bytes at an explicit offset; cursor semantics as in
    /// [`write_num_at`](Self::write_num_at).
    pub fn write_bytes_at(&mut self, data: &[u8], offset: usize) {
        self.put(offset, data);
    }

    /// Appends bytes followed by a zero terminator at the write cursor.
    pub fn write_bytes_nt(&mut self, data: &[u8]) {
        self.write_bytes_nt_at(data, self.write_offset);
    }

    /// Writes bytes followed by a zero terminator at an explicit offset.
    pub fn write_bytes_nt_at(&mut self, data: &[u8], offset: usize) {
        self.put(offset, data);
        self.put(offset + data.len(), &[0]);
    }

    /// Splices bytes into the buffer at `offset`; see
    /// [`insert_num`](Self::insert_num) for the contract.
    pub fn insert_bytes(&mut self, data: &[u8], offset: usize) -> Result<(), BufferError> {
        self.splice(offset, data)
    }

    /// Splices bytes plus a zero terminator into the buffer at `offset`.
    pub fn insert_bytes_nt(&mut self, data: &[u8], offset: usize) -> Result<(), BufferError> {
        let mut payload = Vec::with_capacity(data.len() + 1);
        payload.extend_from_slice(data);
        payload.push(0);
        self.splice(offset, &payload)
    }

    // ========================================================================
    // Strings
    // ========================================================================

    /// Reads up to `max` bytes and decodes them under the default
    /// encoding. Clamped to the remaining live data.
    pub fn read_string(&mut self, max: usize) -> String {
        self.read_string_as(max, self.encoding)
    }

    /// Reads up to `max` bytes and decodes them under an explicit encoding.
    pub fn read_string_as(&mut self, max: usize, encoding: Encoding) -> String {
        let bytes = self.read_bytes(max);
        encoding.decode(&bytes)
    }

    /// Decodes all remaining bytes under the default encoding.
    pub fn read_string_all(&mut self) -> String {
        self.read_string_all_as(self.encoding)
    }

    /// Decodes all remaining bytes under an explicit encoding.
    pub fn read_string_all_as(&mut self, encoding: Encoding) -> String {
        let bytes = self.read_remaining();
        encoding.decode(&bytes)
    }

    /// Reads a null-terminated string under the default encoding; see
    /// [`read_bytes_nt`](Self::read_bytes_nt) for terminator handling.
    pub fn read_string_nt(&mut self) -> String {
        self.read_string_nt_as(self.encoding)
    }

    /// Reads a null-terminated string under an explicit encoding.
    pub fn read_string_nt_as(&mut self, encoding: Encoding) -> String {
        let bytes = self.read_bytes_nt();
        encoding.decode(&bytes)
    }

    /// Encodes text under the default encoding and appends it at the
    /// write cursor. Returns the encoded byte length. Fails before any
    /// byte moves when the text cannot be represented.
    pub fn write_string(&mut self, text: &str) -> Result<usize, BufferError> {
        self.write_string_as(text, self.encoding)
    }

    /// Encodes text under an explicit encoding and appends it.
    pub fn write_string_as(&mut self, text: &str, encoding: Encoding) -> Result<usize, BufferError> {
        self.write_string_at_as(text, self.write_offset, encoding)
    }

    /// Encodes text under the default encoding and writes it at an
    /// explicit offset.
    pub fn write_string_at(&mut self, text: &str, offset: usize) -> Result<usize, BufferError> {
        self.write_string_at_as(text, offset, self.encoding)
    }

    /// Encodes text under an explicit encoding and writes it at an
    /// explicit offset. Returns the encoded byte length.
    pub fn write_string_at_as(
        &mut self,
        text: &str,
        offset: usize,
        encoding: Encoding,
    ) -> Result<usize, BufferError> {
        let bytes = encoding.encode(text)?;
        self.put(offset, &bytes);
        Ok(bytes.len())
    }

    /// Appends a null-terminated string under the default encoding.
    /// Returns the encoded byte length, terminator excluded.
    pub fn write_string_nt(&mut self, text: &str) -> Result<usize, BufferError> {
        self.write_string_nt_as(text, self.encoding)
    }

    /// Appends a null-terminated string under an explicit encoding.
    pub fn write_string_nt_as(
        &mut self,
        text: &str,
        encoding: Encoding,
    ) -> Result<usize, BufferError> {
        let bytes = encoding.encode(text)?;
        self.write_bytes_nt(&bytes);
        Ok(bytes.len())
    }

    /// Splices an encoded string into the buffer at `offset` under the
    /// default encoding. Returns the encoded byte length.
    pub fn insert_string(&mut self, text: &str, offset: usize) -> Result<usize, BufferError> {
        self.insert_string_as(text, offset, self.encoding)
    }

    /// Splices an encoded string into the buffer at `offset` under an
    /// explicit encoding.
    pub fn insert_string_as(
        &mut self,
        text: &str,
        offset: usize,
        encoding: Encoding,
    ) -> Result<usize, BufferError> {
        let bytes = encoding.encode(text)?;
        self.splice(offset, &bytes)?;
        Ok(bytes.len())
    }

    /// Splices a null-terminated string into the buffer at `offset`
    /// under the default encoding. Returns the encoded byte length,
    /// terminator excluded.
    pub fn insert_string_nt(&mut self, text: &str, offset: usize) -> Result<usize, BufferError> {
        self.insert_string_nt_as(text, offset, self.encoding)
    }

    /// Splices a null-terminated string into the buffer at `offset`
    /// under an explicit encoding.
    pub fn insert_string_nt_as(
        &mut self,
        text: &str,
        offset: usize,
        encoding: Encoding,
    ) -> Result<usize, BufferError> {
        let bytes = encoding.encode(text)?;
        self.insert_bytes_nt(&bytes, offset)?;
        Ok(bytes.len())
    }

    // ========================================================================
    // Write/insert chokepoints
    // ========================================================================

    /// Overwrite-or-extend write: grows the store for `offset +
    /// bytes.len()`, raises the logical length when the write reaches
    /// past it, and pushes the write cursor forward (never backward).
    fn put(&mut self, offset: usize, bytes: &[u8]) {
        self.store.put(offset, bytes);
        self.write_offset = self.write_offset.max(offset + bytes.len());
    }

    /// Insertion chokepoint: validates the offset, opens a gap, fills it,
    /// and advances the write cursor by the inserted width unconditionally.
    fn splice(&mut self, offset: usize, bytes: &[u8]) -> Result<(), BufferError> {
        if offset > self.store.len() {
            return Err(BufferError::OffsetOutOfBounds {
                offset,
                len: self.store.len(),
            });
        }
        self.store.open_gap(offset, bytes.len());
        self.store.put(offset, bytes);
        self.write_offset += bytes.len();
        Ok(())
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}
