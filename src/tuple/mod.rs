//! Fixed-arity tuples.
//!
//! [`Simd<T, N, W>`] holds `N` lanes of `T` in the registers of width `W`.
//! The arity aliases (`Simd2` … `Simd16`) take a *requested* width and
//! resolve it through [`Resolve`](crate::compute::Resolve), which is how callers normally name these
//! types:
//!
//! ```
//! use simd_tuples::prelude::*;
//!
//! let a = Simd3::<f32>::new(1.0, 2.0, 3.0);
//! let b = Simd3::<f32>::new(4.0, 5.0, 6.0);
//! assert_eq!(a + b, Simd3::<f32>::new(5.0, 7.0, 9.0));
//! assert_eq!(a.dot3(&b), 32.0);
//! ```
//!
//! The operation vocabulary is split by concern:
//! - `ops.rs`: operators against tuples, `Base`, `InBase`, `T` and sub-tuples
//! - `math.rs`: min/max/abs, fused multiply-add, roots and transcendentals
//! - `reduce.rs`: horizontal and grouped reductions
//! - `mask.rs`: comparison masks, blends and `blend_swap`
//! - `shuffle.rs`: runtime shuffles and lane insertion
//! - `group.rs`: sub-tuple access and per-vector geometry of composite arities
//! - `simdN.rs`: arity specific constructors, shuffles and geometry

mod group;
mod mask;
mod math;
mod ops;
mod reduce;
mod shuffle;
mod simd12;
mod simd16;
mod simd2;
mod simd3;
mod simd4;
mod simd6;
mod simd8;
mod simd9;

pub use mask::Mask;
pub use shuffle::Shuffle;

use std::fmt;

use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::{Pack, RegisterArray};
use crate::compute::simd_abstraction::{MAX_LANES, SimdEngine};
use crate::compute::{B64, Resolved};
use crate::error::{Result, TupleError};
use crate::lane::{Base, InBase};

/// `N` lanes of `T` held in registers of width `W`.
///
/// `W` is an implementation width (a [`Pack`] for `(T, N)`). Use the arity
/// aliases to go through width resolution instead of naming `W` directly.
pub struct Simd<T: SimdElement, const N: usize, W: Pack<T, N>> {
    regs: W::Regs,
}

pub type Simd2<T, W = B64> = Simd<T, 2, Resolved<T, 2, W>>;
pub type Simd3<T, W = B64> = Simd<T, 3, Resolved<T, 3, W>>;
pub type Simd4<T, W = B64> = Simd<T, 4, Resolved<T, 4, W>>;
pub type Simd6<T, W = B64> = Simd<T, 6, Resolved<T, 6, W>>;
pub type Simd8<T, W = B64> = Simd<T, 8, Resolved<T, 8, W>>;
pub type Simd9<T, W = B64> = Simd<T, 9, Resolved<T, 9, W>>;
pub type Simd12<T, W = B64> = Simd<T, 12, Resolved<T, 12, W>>;
pub type Simd16<T, W = B64> = Simd<T, 16, Resolved<T, 16, W>>;

/// `Base` at the width a tuple of `N` lanes resolves to.
pub type BaseOf<T, const N: usize, W = B64> = Base<T, Resolved<T, N, W>>;

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Clone for Simd<T, N, W> {
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Copy for Simd<T, N, W> {}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Simd<T, N, W> {
    /// Number of lanes.
    pub const ARITY: usize = N;

    const REG_LANES: usize = <W as SimdEngine<T>>::LANES;

    // ===== Register plumbing =====

    #[inline(always)]
    pub(crate) fn build(f: impl FnMut(usize) -> W::Reg) -> Self {
        Self {
            regs: <W::Regs as RegisterArray<W::Reg>>::from_fn(f),
        }
    }

    #[inline(always)]
    pub(crate) fn regs(&self) -> &[W::Reg] {
        self.regs.as_slice()
    }

    #[inline(always)]
    pub(crate) fn map_regs(self, f: impl Fn(W::Reg) -> W::Reg) -> Self {
        let src = self.regs;
        Self::build(|k| f(src.as_slice()[k]))
    }

    #[inline(always)]
    pub(crate) fn zip_regs(self, other: Self, f: impl Fn(W::Reg, W::Reg) -> W::Reg) -> Self {
        let (a, b) = (self.regs, other.regs);
        Self::build(|k| f(a.as_slice()[k], b.as_slice()[k]))
    }

    #[inline(always)]
    pub(crate) fn zip3_regs(
        self,
        b: Self,
        c: Self,
        f: impl Fn(W::Reg, W::Reg, W::Reg) -> W::Reg,
    ) -> Self {
        let (ra, rb, rc) = (self.regs, b.regs, c.regs);
        Self::build(|k| f(ra.as_slice()[k], rb.as_slice()[k], rc.as_slice()[k]))
    }

    /// `true` when the last register has no padding lanes.
    #[inline(always)]
    pub(crate) const fn fills_registers() -> bool {
        N % Self::REG_LANES == 0
    }

    // ===== Construction =====

    #[inline]
    pub fn splat(value: T) -> Self {
        let reg = W::splat(value);
        Self::build(|_| reg)
    }

    #[inline]
    pub fn zero() -> Self {
        let reg = W::zero();
        Self::build(|_| reg)
    }

    /// Every lane set to the broadcast value, without re-splatting.
    #[inline]
    pub fn from_base(base: Base<T, W>) -> Self {
        let reg = base.reg();
        Self::build(|_| reg)
    }

    #[inline]
    pub fn from_in_base(value: InBase<T>) -> Self {
        Self::splat(value.value())
    }

    /// Builds a tuple from its lanes. Padding lanes of the last register are
    /// zero.
    #[inline]
    pub fn from_array(values: [T; N]) -> Self {
        let lanes = Self::REG_LANES;
        Self::build(|k| {
            let start = k * lanes;
            if start + lanes <= N {
                W::load(&values[start..start + lanes])
            } else {
                let mut staged = [T::ZERO; MAX_LANES];
                staged[..N - start].copy_from_slice(&values[start..]);
                W::load(&staged[..lanes])
            }
        })
    }

    /// Builds a tuple from the first `N` elements of `values`.
    pub fn try_from_slice(values: &[T]) -> Result<Self> {
        let lanes: [T; N] = values
            .get(..N)
            .and_then(|head| head.try_into().ok())
            .ok_or(TupleError::LaneOutOfRange {
                index: values.len(),
                arity: N,
            })?;
        Ok(Self::from_array(lanes))
    }

    #[inline]
    pub fn to_array(&self) -> [T; N] {
        let lanes = Self::REG_LANES;
        let mut out = [T::ZERO; N];
        for (k, &reg) in self.regs().iter().enumerate() {
            let start = k * lanes;
            if start + lanes <= N {
                W::store(reg, &mut out[start..start + lanes]);
            } else {
                let mut staged = [T::ZERO; MAX_LANES];
                W::store(reg, &mut staged[..lanes]);
                out[start..].copy_from_slice(&staged[..N - start]);
            }
        }
        out
    }

    /// The same lanes held at another implementation width.
    #[inline]
    pub fn convert<W2: Pack<T, N>>(self) -> Simd<T, N, W2> {
        Simd::from_array(self.to_array())
    }

    // ===== Lane access =====

    #[inline(always)]
    pub(crate) fn lane(&self, index: usize) -> T {
        W::extract(self.regs()[index / Self::REG_LANES], index % Self::REG_LANES)
    }

    #[inline(always)]
    pub(crate) fn set_lane(&mut self, index: usize, value: T) {
        let k = index / Self::REG_LANES;
        let regs = self.regs.as_mut_slice();
        regs[k] = W::insert(regs[k], index % Self::REG_LANES, value);
    }

    /// Lane `I`, checked at compile time.
    #[inline(always)]
    pub fn get_value<const I: usize>(&self) -> InBase<T> {
        const { assert!(I < N, "lane index out of range") };
        InBase::new(self.lane(I))
    }

    /// Sets lane `I`, checked at compile time.
    #[inline(always)]
    pub fn set_value<const I: usize>(&mut self, value: T) {
        const { assert!(I < N, "lane index out of range") };
        self.set_lane(I, value);
    }

    /// Lane `index` chosen at runtime. Slower than [`Simd::get_value`]; use it
    /// only when the lane is data dependent.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn get_value_dyn(&self, index: usize) -> InBase<T> {
        assert!(index < N, "lane index {index} out of range for {N} lanes");
        InBase::new(self.lane(index))
    }

    /// Runtime-indexed counterpart of [`Simd::set_value`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn set_value_dyn(&mut self, index: usize, value: T) {
        assert!(index < N, "lane index {index} out of range for {N} lanes");
        self.set_lane(index, value);
    }

    pub fn try_get_value(&self, index: usize) -> Result<InBase<T>> {
        if index < N {
            Ok(InBase::new(self.lane(index)))
        } else {
            Err(TupleError::LaneOutOfRange { index, arity: N })
        }
    }

    pub fn try_set_value(&mut self, index: usize, value: T) -> Result<()> {
        if index < N {
            self.set_lane(index, value);
            Ok(())
        } else {
            Err(TupleError::LaneOutOfRange { index, arity: N })
        }
    }

    /// Repeats an `M`-lane tuple across all `N` lanes.
    #[inline]
    pub(crate) fn repeat<const M: usize, W2: Pack<T, M>>(value: Simd<T, M, W2>) -> Self {
        const { assert!(N % M == 0, "sub-tuple arity must divide the tuple arity") };
        value.resize::<N, W>().permute(std::array::from_fn(|i| i % M))
    }

    /// The first `min(N, M)` lanes as an `M`-lane tuple of width `W2`, any
    /// further lanes zero. Copies whole registers only.
    #[inline]
    pub(crate) fn resize<const M: usize, W2: Pack<T, M>>(&self) -> Simd<T, M, W2> {
        let lanes = Self::REG_LANES;
        let mut staged = [T::ZERO; MAX_LANES];
        for (k, &reg) in self.regs().iter().enumerate().take(M.min(N).div_ceil(lanes)) {
            W::store(reg, &mut staged[k * lanes..]);
        }
        if N < M {
            staged[N..].fill(T::ZERO);
        }
        Simd::from_array(std::array::from_fn(|i| staged[i]))
    }

    /// Lanes reordered so that lane `i` comes from lane `indices[i]`.
    ///
    /// An output register whose lanes all come from one source register is a
    /// single engine permute (or nothing, when the lanes stay put). Only
    /// registers gathering from several sources go through the lanes.
    #[inline]
    pub(crate) fn permute(&self, indices: [usize; N]) -> Self {
        let lanes = Self::REG_LANES;
        let src = self.regs;
        let mut spilled: Option<[T; N]> = None;
        Self::build(|k| {
            let start = k * lanes;
            let live = &indices[start..N.min(start + lanes)];
            let source = live[0] / lanes;
            if !live.iter().all(|&i| i / lanes == source) {
                let values = *spilled.get_or_insert_with(|| self.to_array());
                let mut staged = [T::ZERO; MAX_LANES];
                for (slot, &i) in staged.iter_mut().zip(live) {
                    *slot = values[i];
                }
                return W::load(&staged[..lanes]);
            }
            let reg = src.as_slice()[source];
            if source == k && live.iter().enumerate().all(|(slot, &i)| i == start + slot) {
                return reg;
            }
            // Padding slots keep their own position.
            let local: [usize; MAX_LANES] =
                std::array::from_fn(|slot| live.get(slot).map_or(slot % lanes, |&i| i % lanes));
            W::permute(reg, &local)
        })
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Default for Simd<T, N, W> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> fmt::Debug for Simd<T, N, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Simd{N}{:?}", self.to_array())
    }
}

/// Value equality over the `N` live lanes, across implementation widths.
impl<T, const N: usize, W, W2> PartialEq<Simd<T, N, W2>> for Simd<T, N, W>
where
    T: SimdElement,
    W: Pack<T, N>,
    W2: Pack<T, N>,
{
    #[inline]
    fn eq(&self, other: &Simd<T, N, W2>) -> bool {
        self.to_array() == other.to_array()
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> From<[T; N]> for Simd<T, N, W> {
    #[inline]
    fn from(values: [T; N]) -> Self {
        Self::from_array(values)
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> From<Simd<T, N, W>> for [T; N] {
    #[inline]
    fn from(value: Simd<T, N, W>) -> Self {
        value.to_array()
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> From<Base<T, W>> for Simd<T, N, W> {
    #[inline]
    fn from(value: Base<T, W>) -> Self {
        Self::from_base(value)
    }
}
