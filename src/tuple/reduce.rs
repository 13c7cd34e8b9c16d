//! Horizontal reductions.
//!
//! Full reductions fold the registers vertically first and reduce one
//! register at the end when every register is full. Tuples with padding lanes
//! in the last register reduce over the live lanes only, so a zero padding
//! lane can never win `hmin`/`hmax`.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;
use crate::compute::{Resolve, Resolved};
use crate::lane::{Base, InBase};

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Simd<T, N, W> {
    #[inline]
    fn fold_registers(&self, combine: fn(W::Reg, W::Reg) -> W::Reg) -> W::Reg {
        let regs = self.regs();
        regs[1..].iter().fold(regs[0], |acc, &r| combine(acc, r))
    }

    #[inline]
    fn fold_lanes(&self, combine: fn(T, T) -> T) -> T {
        let lanes = self.to_array();
        lanes[1..].iter().fold(lanes[0], |acc, &v| combine(acc, v))
    }

    /// Sum of all lanes.
    #[inline]
    pub fn hadd(&self) -> InBase<T> {
        let sum = if Self::fills_registers() {
            W::reduce_add(self.fold_registers(W::add))
        } else {
            self.fold_lanes(T::lane_add)
        };
        InBase::new(sum)
    }

    /// Largest lane.
    #[inline]
    pub fn hmax(&self) -> InBase<T> {
        let max = if Self::fills_registers() {
            W::reduce_max(self.fold_registers(W::max))
        } else {
            self.fold_lanes(T::lane_max)
        };
        InBase::new(max)
    }

    /// Smallest lane.
    #[inline]
    pub fn hmin(&self) -> InBase<T> {
        let min = if Self::fills_registers() {
            W::reduce_min(self.fold_registers(W::min))
        } else {
            self.fold_lanes(T::lane_min)
        };
        InBase::new(min)
    }

    #[inline]
    pub fn hadd_base(&self) -> Base<T, W> {
        Base::new(self.hadd().value())
    }

    #[inline]
    pub fn hmax_base(&self) -> Base<T, W> {
        Base::new(self.hmax().value())
    }

    #[inline]
    pub fn hmin_base(&self) -> Base<T, W> {
        Base::new(self.hmin().value())
    }

    /// Largest lane and the lowest index holding it.
    pub fn hmax_index(&self) -> (InBase<T>, usize) {
        self.select_index(|candidate, best| candidate > best)
    }

    /// Smallest lane and the lowest index holding it.
    pub fn hmin_index(&self) -> (InBase<T>, usize) {
        self.select_index(|candidate, best| candidate < best)
    }

    // Strict comparison keeps the first occurrence on ties.
    fn select_index(&self, replaces: impl Fn(T, T) -> bool) -> (InBase<T>, usize) {
        let lanes = self.to_array();
        let mut best = 0;
        for (i, &v) in lanes.iter().enumerate().skip(1) {
            if replaces(v, lanes[best]) {
                best = i;
            }
        }
        (InBase::new(lanes[best]), best)
    }

    /// Element-wise sum of the `N / M` consecutive groups of `M` lanes.
    #[inline]
    pub(crate) fn fold_groups<const M: usize, W2: Pack<T, M>>(&self) -> Simd<T, M, W2> {
        const { assert!(M > 0 && N % M == 0, "group size must divide the tuple arity") };
        let mut acc = *self;
        for group in 1..N / M {
            let shifted = self.permute(std::array::from_fn(|i| (group * M + i) % N));
            acc = acc.zip_regs(shifted, W::add);
        }
        acc.resize()
    }

    /// Sum within each of the `G` consecutive groups of `N / G` lanes.
    #[inline]
    pub(crate) fn sum_groups<const G: usize, W2: Pack<T, G>>(&self) -> Simd<T, G, W2> {
        const { assert!(G > 0 && N % G == 0, "group count must divide the tuple arity") };
        let size = N / G;
        // Lane `g` of column `j` is element `j` of group `g`.
        let column = |j: usize| self.permute(std::array::from_fn(|i| (i * size + j) % N));
        let mut acc = column(0);
        for j in 1..size {
            acc = acc.zip_regs(column(j), W::add);
        }
        acc.resize()
    }
}

// (arity, group size, group count, element-wise fold, in-group sum)
macro_rules! group_reductions {
    ($(($n:literal, $m:literal, $g:literal, $add:ident, $hadd:ident)),* $(,)?) => {$(
        impl<T: SimdElement, W: Pack<T, $n> + Resolve<T, $m> + Resolve<T, $g>> Simd<T, $n, W> {
            #[doc = concat!("Element-wise sum of the ", stringify!($g), " groups of ",
                stringify!($m), " lanes.")]
            #[inline]
            pub fn $add(&self) -> Simd<T, $m, Resolved<T, $m, W>> {
                self.fold_groups()
            }

            #[doc = concat!("Sum within each group of ", stringify!($m), " lanes.")]
            #[inline]
            pub fn $hadd(&self) -> Simd<T, $g, Resolved<T, $g, W>> {
                self.sum_groups()
            }
        }
    )*};
}

group_reductions!(
    (4, 2, 2, add2, hadd2),
    (6, 2, 3, add2, hadd2),
    (6, 3, 2, add3, hadd3),
    (8, 2, 4, add2, hadd2),
    (8, 4, 2, add4, hadd4),
    (9, 3, 3, add3, hadd3),
    (12, 3, 4, add3, hadd3),
    (12, 4, 3, add4, hadd4),
    (16, 4, 4, add4, hadd4),
);

// Arities with only the element-wise fold (no matching in-group sum).
macro_rules! fold_only {
    ($(($n:literal, $m:literal, $add:ident)),* $(,)?) => {$(
        impl<T: SimdElement, W: Pack<T, $n> + Resolve<T, $m>> Simd<T, $n, W> {
            #[doc = concat!("Element-wise sum of the groups of ", stringify!($m), " lanes.")]
            #[inline]
            pub fn $add(&self) -> Simd<T, $m, Resolved<T, $m, W>> {
                self.fold_groups()
            }
        }
    )*};
}

fold_only!((12, 2, add2), (12, 6, add6), (16, 2, add2), (16, 8, add8));

macro_rules! sum_only {
    ($(($n:literal, $g:literal, $hadd:ident)),* $(,)?) => {$(
        impl<T: SimdElement, W: Pack<T, $n> + Resolve<T, $g>> Simd<T, $n, W> {
            #[doc = concat!("Sum within each of the ", stringify!($g), " groups.")]
            #[inline]
            pub fn $hadd(&self) -> Simd<T, $g, Resolved<T, $g, W>> {
                self.sum_groups()
            }
        }
    )*};
}

sum_only!((12, 6, hadd2), (16, 8, hadd2));
