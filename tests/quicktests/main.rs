use quickcheck::{Arbitrary, Gen};

mod linked;

/// The mutations a quicktest can apply to a tree from the outside.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Add the item to the tree
    Add(T),
    /// Remove one copy of the item from the tree
    Remove(T),
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Op::Add(T::arbitrary(g))
        } else {
            Op::Remove(T::arbitrary(g))
        }
    }
}
