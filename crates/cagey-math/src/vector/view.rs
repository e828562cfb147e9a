//! Named-field views of 2, 3 and 4-element vectors.
//!
//! `v.x`, `v.y`, `v.z` and `v.w` (and the color aliases `r`, `g`, `b`, `a`) reach the same storage
//! as `v[0]` through `v[3]`. 2-element vectors additionally expose `w` and `h` as a width/height
//! pair.

use std::ops::{Deref, DerefMut};

use crate::{Scalar, Vector};

macro_rules! views {
    ($($n:literal => $xyz:ident { $($f:ident),+ } => $rgb:ident { $($c:ident),+ };)+) => {
        $(
            #[repr(C)]
            pub struct $xyz<T> {
                $( pub $f: T, )+
                _priv: (), // prevent external construction
            }

            #[repr(C)]
            pub struct $rgb<T> {
                $( pub $c: T, )+
                _priv: (), // prevent external construction
            }

            impl<T: Scalar> Deref for Vector<T, $n> {
                type Target = $xyz<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // SAFETY: `Vector<T, N>` is a transparent `[T; N]`, and the view is a `repr(C)`
                    // struct of `N` fields of type `T` followed by a ZST.
                    unsafe { &*(self as *const Self).cast::<$xyz<T>>() }
                }
            }

            impl<T: Scalar> DerefMut for Vector<T, $n> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: see `deref`.
                    unsafe { &mut *(self as *mut Self).cast::<$xyz<T>>() }
                }
            }

            impl<T> Deref for $xyz<T> {
                type Target = $rgb<T>;

                #[inline]
                fn deref(&self) -> &Self::Target {
                    // SAFETY: both views have identical layouts.
                    unsafe { &*(self as *const Self).cast::<$rgb<T>>() }
                }
            }

            impl<T> DerefMut for $xyz<T> {
                #[inline]
                fn deref_mut(&mut self) -> &mut Self::Target {
                    // SAFETY: both views have identical layouts.
                    unsafe { &mut *(self as *mut Self).cast::<$rgb<T>>() }
                }
            }
        )+
    };
}

views! {
    2 => XY { x, y } => RG { r, g };
    3 => XYZ { x, y, z } => RGB { r, g, b };
    4 => XYZW { x, y, z, w } => RGBA { r, g, b, a };
}

#[repr(C)]
pub struct WH<T> {
    pub w: T,
    pub h: T,
    _priv: (), // prevent external construction
}

impl<T> Deref for RG<T> {
    type Target = WH<T>;

    #[inline]
    fn deref(&self) -> &Self::Target {
        // SAFETY: both views have identical layouts.
        unsafe { &*(self as *const Self).cast::<WH<T>>() }
    }
}

impl<T> DerefMut for RG<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: both views have identical layouts.
        unsafe { &mut *(self as *mut Self).cast::<WH<T>>() }
    }
}
