use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// Types that have (or deliberately lack) a nil sentinel.
///
/// Only `Option::None` and null raw pointers are nil. Every other implementor
/// answers `false`: a value that cannot be absent is never nil, so
/// `is_nil(0)` is a failure rather than a compile error or a crash.
///
/// Implement it for your own types to use them with the nil checks; a type
/// with no absent state just returns `false`:
///
/// ```
/// use specs::Nilable;
///
/// #[derive(Debug)]
/// struct Point(i32, i32);
///
/// impl Nilable for Point {
///     fn is_nil(&self) -> bool {
///         false
///     }
/// }
///
/// assert!(!Point(0, 0).is_nil());
/// ```
pub trait Nilable {
    fn is_nil(&self) -> bool;
}

impl<T> Nilable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: Nilable + ?Sized> Nilable for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nilable + ?Sized> Nilable for &mut T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nilable for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    str,
    String,
);

impl<T: ?Sized> Nilable for Box<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nilable for Rc<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nilable for Arc<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T: ?Sized> Nilable for NonNull<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nilable for Vec<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nilable for [T] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nilable for [T; N] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, E> Nilable for Result<T, E> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<B: ToOwned + ?Sized> Nilable for Cow<'_, B> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nilable for VecDeque<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V, H> Nilable for HashMap<K, V, H> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, H> Nilable for HashSet<T, H> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V> Nilable for BTreeMap<K, V> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nilable for BTreeSet<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

macro_rules! never_nil_tuple {
    ($($name:ident),+) => {
        impl<$($name),+> Nilable for ($($name,)+) {
            fn is_nil(&self) -> bool {
                false
            }
        }
    };
}

never_nil_tuple!(A);
never_nil_tuple!(A, B);
never_nil_tuple!(A, B, C);
never_nil_tuple!(A, B, C, D);
never_nil_tuple!(A, B, C, D, E);
never_nil_tuple!(A, B, C, D, E, F);
