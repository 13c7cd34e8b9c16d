//! Runtime shuffles, lane insertion and the group permutations the arity
//! files build their compile-time shuffles on.

use super::Simd;
use crate::compute::element::SimdElement;
use crate::compute::simd_abstraction::pack::Pack;
use crate::error::{Result, TupleError};

/// A validated lane selection for `N`-lane tuples: lane `i` of the result is
/// lane `indices[i]` of the input. Indices may repeat.
///
/// Build it once and apply it to as many tuples as needed; it does not depend
/// on the element type or width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shuffle<const N: usize> {
    indices: [usize; N],
}

impl<const N: usize> Shuffle<N> {
    pub fn new(indices: [usize; N]) -> Result<Self> {
        if let Some((position, &index)) = indices.iter().enumerate().find(|(_, i)| **i >= N) {
            return Err(TupleError::ShuffleOutOfRange {
                position,
                index,
                arity: N,
            });
        }
        Ok(Self { indices })
    }

    pub fn identity() -> Self {
        Self {
            indices: std::array::from_fn(|i| i),
        }
    }

    pub fn reverse() -> Self {
        Self {
            indices: std::array::from_fn(|i| N - 1 - i),
        }
    }

    /// The shuffle equivalent to applying `self` and then `next`.
    pub fn then(&self, next: &Self) -> Self {
        Self {
            indices: next.indices.map(|i| self.indices[i]),
        }
    }

    pub fn indices(&self) -> &[usize; N] {
        &self.indices
    }
}

impl<const N: usize> Default for Shuffle<N> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<const N: usize> TryFrom<[usize; N]> for Shuffle<N> {
    type Error = TupleError;

    fn try_from(indices: [usize; N]) -> Result<Self> {
        Self::new(indices)
    }
}

impl<T: SimdElement, const N: usize, W: Pack<T, N>> Simd<T, N, W> {
    /// Applies a runtime shuffle.
    #[inline]
    pub fn shuffle_var(&self, shuffle: &Shuffle<N>) -> Self {
        self.permute(shuffle.indices)
    }

    /// `self` with lane `TO` replaced by lane `FROM` of `other`.
    #[inline]
    pub fn insert<const FROM: usize, const TO: usize>(&self, other: &Self) -> Self {
        const { assert!(FROM < N && TO < N, "lane index out of range") };
        let mut out = *self;
        out.set_lane(TO, other.lane(FROM));
        out
    }

    /// The same `G`-lane selection applied inside every consecutive group of
    /// `G` lanes.
    pub(crate) fn shuffle_within<const G: usize>(&self, selection: [usize; G]) -> Self {
        const { assert!(G > 0 && N % G == 0, "group size must divide the tuple arity") };
        self.permute(std::array::from_fn(|i| i - i % G + selection[i % G]))
    }

    /// Reorders the `G` consecutive groups of `N / G` lanes as whole units.
    pub(crate) fn shuffle_groups<const G: usize>(&self, selection: [usize; G]) -> Self {
        const { assert!(G > 0 && N % G == 0, "group count must divide the tuple arity") };
        let size = N / G;
        self.permute(std::array::from_fn(|i| selection[i / size] * size + i % size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;

    #[test]
    fn out_of_range_indices_are_rejected() {
        assert_eq!(
            Shuffle::new([0, 4, 1, 2]),
            Err(TupleError::ShuffleOutOfRange {
                position: 1,
                index: 4,
                arity: 4
            })
        );
        assert!(Shuffle::<3>::try_from([2, 2, 0]).is_ok());
    }

    #[test]
    fn runtime_shuffle_matches_static() {
        let a = Simd4::<f32>::new(1.0, 2.0, 3.0, 4.0);
        let rev = Shuffle::<4>::reverse();
        assert_eq!(a.shuffle_var(&rev), Simd4::<f32>::new(4.0, 3.0, 2.0, 1.0));
        assert_eq!(a.shuffle_var(&rev), a.shuffle::<3, 2, 1, 0>());
        assert_eq!(a.shuffle_var(&Shuffle::identity()), a);
    }

    #[test]
    fn composition_applies_left_to_right() {
        let a = Simd6::<i32>::from_array([10, 11, 12, 13, 14, 15]);
        let first = Shuffle::new([1, 2, 3, 4, 5, 0]).unwrap();
        let second = Shuffle::new([5, 5, 0, 1, 2, 3]).unwrap();
        let composed = first.then(&second);
        assert_eq!(
            a.shuffle_var(&composed),
            a.shuffle_var(&first).shuffle_var(&second)
        );
        assert_eq!(Shuffle::<6>::reverse().then(&Shuffle::reverse()), Shuffle::identity());
    }

    #[test]
    fn insert_copies_one_lane() {
        let a = Simd3::<f64>::new(1.0, 2.0, 3.0);
        let b = Simd3::<f64>::new(7.0, 8.0, 9.0);
        assert_eq!(a.insert::<2, 0>(&b), Simd3::<f64>::new(9.0, 2.0, 3.0));
    }

    /// Runtime shuffles at every width agree with indexing the lanes, for
    /// selections that stay inside one register and ones that cross.
    fn check_shuffles<const N: usize, W: Pack<f64, N>>() {
        let a = Simd::<f64, N, W>::from_array(std::array::from_fn(|i| i as f64 * 1.5 - 4.0));
        let lanes = a.to_array();
        let selections: [[usize; N]; 5] = [
            std::array::from_fn(|i| i),
            std::array::from_fn(|i| N - 1 - i),
            std::array::from_fn(|i| (i + 1) % N),
            std::array::from_fn(|i| (i * 5 + 2) % N),
            std::array::from_fn(|i| i - i % 2),
        ];
        for indices in selections {
            let shuffle = Shuffle::new(indices).unwrap();
            assert_eq!(a.shuffle_var(&shuffle).to_array(), indices.map(|i| lanes[i]), "{indices:?}");
        }
    }

    #[test]
    fn shuffles_agree_across_register_layouts() {
        check_shuffles::<3, Resolved<f64, 3, Scalar>>();
        check_shuffles::<4, Resolved<f64, 4, B16>>();
        check_shuffles::<6, Resolved<f64, 6, B32>>();
        check_shuffles::<9, Resolved<f64, 9, B16>>();
        check_shuffles::<9, Resolved<f64, 9, B64>>();
        check_shuffles::<12, Resolved<f64, 12, B32>>();
        check_shuffles::<16, Resolved<f64, 16, B64>>();
    }

    #[test]
    fn in_register_group_shuffles_match_lanes() {
        let a = Simd8::<f32, B16>::from_array(std::array::from_fn(|i| i as f32));
        assert_eq!(a.shuffle4::<3, 0, 0, 2>().to_array(), [3.0, 0.0, 0.0, 2.0, 7.0, 4.0, 4.0, 6.0]);
        let b = Simd16::<i32>::from_array(std::array::from_fn(|i| i as i32));
        let swapped = b.shuffle_groups4::<3, 2, 1, 0>().to_array();
        assert_eq!(&swapped[..4], &[12, 13, 14, 15]);
        assert_eq!(&swapped[12..], &[0, 1, 2, 3]);
    }

    #[test]
    fn group_permutations() {
        let a = Simd6::<u32>::from_array([0, 1, 2, 3, 4, 5]);
        assert_eq!(a.shuffle_within([2, 1, 0]).to_array(), [2, 1, 0, 5, 4, 3]);
        assert_eq!(a.shuffle_groups([1, 0]).to_array(), [3, 4, 5, 0, 1, 2]);
        assert_eq!(a.shuffle_groups([2, 2, 0]).to_array(), [4, 5, 4, 5, 0, 1]);
    }
}
