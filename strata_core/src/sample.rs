// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tagged sample storage.
//!
//! [`SampleBuf`] is an immutable, cheaply-cloneable row of scalars of one of
//! the supported [`DataType`]s. The reconciler never reads sample values —
//! it only computes element offsets and counts — so the buffer is opaque to
//! everything except the renderer, which uploads [`SampleBuf::as_bytes`]
//! sub-ranges to the GPU.

use core::fmt;

use alloc::sync::Arc;
use alloc::vec::Vec;

macro_rules! scalar_types {
    ($(($variant:ident, $ty:ty, $name:literal)),+ $(,)?) => {
        /// The element type of a sample buffer.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
        pub enum DataType {
            $(
                #[doc = concat!("`", $name, "` elements.")]
                $variant,
            )+
        }

        impl DataType {
            /// Returns the element size in bytes.
            #[inline]
            #[must_use]
            pub const fn size(self) -> usize {
                match self {
                    $(Self::$variant => core::mem::size_of::<$ty>(),)+
                }
            }

            /// Returns the short lowercase type name (e.g. `"f32"`).
            #[inline]
            #[must_use]
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        /// An immutable row of scalar samples for one segment.
        ///
        /// Cloning is cheap (the storage is shared), which lets the retrieval
        /// layer hand out snapshots without copying sample data.
        #[derive(Clone)]
        pub enum SampleBuf {
            $(
                #[doc = concat!("A row of `", $name, "` samples.")]
                $variant(Arc<[$ty]>),
            )+
        }

        impl SampleBuf {
            /// Returns the number of stored elements.
            #[must_use]
            pub fn len(&self) -> usize {
                match self {
                    $(Self::$variant(b) => b.len(),)+
                }
            }

            /// Returns `true` if the buffer holds no elements.
            #[must_use]
            pub fn is_empty(&self) -> bool {
                self.len() == 0
            }

            /// Returns the element type tag.
            #[must_use]
            pub const fn data_type(&self) -> DataType {
                match self {
                    $(Self::$variant(_) => DataType::$variant,)+
                }
            }

            /// Returns the raw bytes of the stored samples, in memory order.
            ///
            /// This is what a renderer slices when translating a draw
            /// operation's `(offset, count)` into a GPU buffer sub-range.
            #[must_use]
            pub fn as_bytes(&self) -> &[u8] {
                match self {
                    $(Self::$variant(b) => bytemuck::cast_slice::<$ty, u8>(b),)+
                }
            }
        }

        impl fmt::Debug for SampleBuf {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "SampleBuf({} × {})", self.data_type().name(), self.len())
            }
        }

        $(
            impl From<Vec<$ty>> for SampleBuf {
                fn from(samples: Vec<$ty>) -> Self {
                    Self::$variant(samples.into())
                }
            }
        )+
    };
}

scalar_types!(
    (F32, f32, "f32"),
    (F64, f64, "f64"),
    (I8, i8, "i8"),
    (I16, i16, "i16"),
    (I32, i32, "i32"),
    (I64, i64, "i64"),
    (U8, u8, "u8"),
    (U16, u16, "u16"),
    (U32, u32, "u32"),
    (U64, u64, "u64"),
);
