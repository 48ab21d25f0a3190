use num_traits::{One, PrimInt};

/// Trait implemented by flag enums declared with [`define_flag_bits!`].
///
/// The enum discriminant (`#[repr(u8)]`) is the bit index inside `Storage`.
pub trait FlagBit {
    type Storage: PrimInt;

    fn bit_index(&self) -> u8;

    fn mask(&self) -> Self::Storage {
        // NOTE: `bit_index()` must be < number of bits in `Storage`.
        Self::Storage::one() << (self.bit_index() as usize)
    }
}

/// Plain bitset over a primitive integer.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FlagSet<T: PrimInt> {
    pub bits: T,
}

impl<T: PrimInt> FlagSet<T> {
    pub fn new(bits: T) -> Self {
        Self { bits }
    }

    pub fn insert<U: FlagBit<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits | flag.mask();
    }

    pub fn remove<U: FlagBit<Storage = T>>(&mut self, flag: U) {
        self.bits = self.bits & !flag.mask();
    }

    pub fn set<U: FlagBit<Storage = T>>(&mut self, flag: U, on: bool) {
        if on {
            self.insert(flag);
        } else {
            self.remove(flag);
        }
    }

    pub fn contains<U: FlagBit<Storage = T>>(&self, flag: U) -> bool {
        (self.bits & flag.mask()) != T::zero()
    }

    pub fn contains_any<U: FlagBit<Storage = T> + Copy>(&self, flags: &[U]) -> bool {
        let combined = flags.iter().fold(T::zero(), |acc, f| acc | f.mask());
        (self.bits & combined) != T::zero()
    }

    pub fn is_empty(&self) -> bool {
        self.bits == T::zero()
    }

    pub fn clear(&mut self) {
        self.bits = T::zero();
    }
}

/// Declare a flag enum and implement [`FlagBit`] for it.
///
/// ```rust
/// nv_shared::define_flag_bits!(Status, u8, {
///     Grounded,
///     Gliding,
/// });
/// ```
#[macro_export]
macro_rules! define_flag_bits {
    ($name:ident, $storage:ty, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::bitmask_flags::FlagBit for $name {
            type Storage = $storage;

            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    define_flag_bits!(Probe, u16, { A, B, C });

    #[test]
    fn insert_remove_and_contains() {
        let mut set = FlagSet::<u16>::default();
        assert!(set.is_empty());

        set.insert(Probe::B);
        assert!(set.contains(Probe::B));
        assert!(!set.contains(Probe::A));
        assert_eq!(set.bits, 0b010);

        set.set(Probe::C, true);
        set.remove(Probe::B);
        assert_eq!(set.bits, 0b100);

        set.clear();
        assert!(set.is_empty());
    }

    #[test]
    fn contains_any_is_false_for_empty_query() {
        let mut set = FlagSet::<u16>::default();
        set.insert(Probe::A);

        assert!(set.contains_any(&[Probe::C, Probe::A]));
        assert!(!set.contains_any(&[Probe::B, Probe::C]));
        assert!(!set.contains_any::<Probe>(&[]));
    }
}
