mod avl;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Insert the value into the data structure
    Insert(T),
    /// Remove the value from the data structure
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Insert(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}

/// Installs a logger so `RUST_LOG=trace` shows rotations while debugging a failure.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Checks that `xs` is strictly increasing.
pub fn strictly_increasing<T: Ord>(xs: &[T]) -> bool {
    xs.windows(2).all(|w| w[0] < w[1])
}

/// Sorts a traversal so it can be compared with another one as a multiset.
pub fn sorted<T: Ord>(mut xs: Vec<T>) -> Vec<T> {
    xs.sort();
    xs
}
