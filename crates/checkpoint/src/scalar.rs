//! Scalar primitives
//!
//! Every numeric scalar stores its fixed-width machine-native
//! representation (`to_ne_bytes`) and loads the same width back. No
//! byte-order or width normalization: a checkpoint is only readable on a
//! binary-compatible build, by design.

use crate::{CheckpointContext, Load, Store};
use meshpoint_channel::{ByteSink, ByteSource};
use meshpoint_core::Result;

macro_rules! impl_scalar {
    ($($ty:ty),* $(,)?) => {$(
        impl Store for $ty {
            fn store(&self, sink: &mut dyn ByteSink, _ctx: &CheckpointContext<'_>) -> Result<()> {
                sink.write_bytes(&self.to_ne_bytes())
            }
        }

        impl Load for $ty {
            fn load(&mut self, source: &mut dyn ByteSource, _ctx: &CheckpointContext<'_>) -> Result<()> {
                let mut buf = [0u8; std::mem::size_of::<$ty>()];
                source.read_bytes(&mut buf)?;
                *self = <$ty>::from_ne_bytes(buf);
                Ok(())
            }
        }
    )*};
}

impl_scalar!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl Store for bool {
    fn store(&self, sink: &mut dyn ByteSink, _ctx: &CheckpointContext<'_>) -> Result<()> {
        sink.write_bytes(&[*self as u8])
    }
}

impl Load for bool {
    fn load(&mut self, source: &mut dyn ByteSource, _ctx: &CheckpointContext<'_>) -> Result<()> {
        let mut buf = [0u8; 1];
        source.read_bytes(&mut buf)?;
        *self = buf[0] != 0;
        Ok(())
    }
}
