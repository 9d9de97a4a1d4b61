//! Fixed-width numeric encode/decode.

/// Byte order for multi-byte numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    Big,
    /// Least significant byte first.
    Little,
}

mod sealed {
    pub trait Sealed {}
}

/// A numeric type with a fixed binary layout.
///
/// Implemented for the ten wire shapes: `u8`/`i8`, `u16`/`i16`,
/// `u32`/`i32`, `u64`/`i64`, `f32`, `f64`. The trait is sealed; the set
/// of shapes is not extensible from outside.
pub trait Fixed: sealed::Sealed + Copy {
    /// Encoded width in bytes.
    const WIDTH: usize;

    /// Encodes `self` into the first [`WIDTH`](Self::WIDTH) bytes of `out`.
    fn encode(self, order: ByteOrder, out: &mut [u8]);

    /// Decodes a value from the first [`WIDTH`](Self::WIDTH) bytes of `raw`.
    fn decode(order: ByteOrder, raw: &[u8]) -> Self;
}

macro_rules! impl_fixed {
    ($($ty:ty => $width:expr),* $(,)?) => {$(
        impl sealed::Sealed for $ty {}

        impl Fixed for $ty {
            const WIDTH: usize = $width;

            fn encode(self, order: ByteOrder, out: &mut [u8]) {
                let bytes = match order {
                    ByteOrder::Big => self.to_be_bytes(),
                    ByteOrder::Little => self.to_le_bytes(),
                };
                out[..$width].copy_from_slice(&bytes);
            }

            fn decode(order: ByteOrder, raw: &[u8]) -> Self {
                let mut bytes = [0u8; $width];
                bytes.copy_from_slice(&raw[..$width]);
                match order {
                    ByteOrder::Big => <$ty>::from_be_bytes(bytes),
                    ByteOrder::Little => <$ty>::from_le_bytes(bytes),
                }
            }
        }
    )*};
}

impl_fixed! {
    u8 => 1,
    i8 => 1,
    u16 => 2,
    i16 => 2,
    u32 => 4,
    i32 => 4,
    u64 => 8,
    i64 => 8,
    f32 => 4,
    f64 => 8,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: Fixed + PartialEq + std::fmt::Debug>(value: T) {
        let mut raw = [0u8; 8];
        for order in [ByteOrder::Big, ByteOrder::Little] {
            value.encode(order, &mut raw);
            assert_eq!(T::decode(order, &raw), value, "{order:?}");
        }
    }

    #[test]
    fn test_round_trip_boundary_values() {
        round_trip(0u8);
        round_trip(u8::MAX);
        round_trip(i8::MIN);
        round_trip(u16::MAX);
        round_trip(i16::MIN);
        round_trip(u32::MAX);
        round_trip(i32::MIN);
        round_trip(u64::MAX);
        round_trip(i64::MIN);
        round_trip(f32::MIN_POSITIVE);
        round_trip(f64::MAX);
    }

    #[test]
    fn test_big_endian_layout() {
        let mut raw = [0u8; 8];
        0xCAFEu16.encode(ByteOrder::Big, &mut raw);
        assert_eq!(&raw[..2], &[0xCA, 0xFE]);

        0x01020304u32.encode(ByteOrder::Big, &mut raw);
        assert_eq!(&raw[..4], &[0x01, 0x02, 0x03, 0x04]);
    }

    #[test]
    fn test_little_endian_layout() {
        let mut raw = [0u8; 8];
        0xCAFEu16.encode(ByteOrder::Little, &mut raw);
        assert_eq!(&raw[..2], &[0xFE, 0xCA]);

        0x0102030405060708u64.encode(ByteOrder::Little, &mut raw);
        assert_eq!(raw, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_float_layout_is_ieee() {
        let mut raw = [0u8; 8];
        1.0f32.encode(ByteOrder::Big, &mut raw);
        assert_eq!(&raw[..4], &[0x3F, 0x80, 0x00, 0x00]);
    }

    #[test]
    fn test_width_constants() {
        assert_eq!(<u8 as Fixed>::WIDTH, 1);
        assert_eq!(<i16 as Fixed>::WIDTH, 2);
        assert_eq!(<f32 as Fixed>::WIDTH, 4);
        assert_eq!(<u64 as Fixed>::WIDTH, 8);
        assert_eq!(<f64 as Fixed>::WIDTH, 8);
    }
}
