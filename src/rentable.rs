use std::ops::{Deref, DerefMut};

/// A slot whose value is sometimes moved out, rebuilt, and moved back in.
///
/// The slot is full whenever it is observable. If `f` panics inside
/// [`update`](Rentable::update) the slot stays empty and every later access panics.
#[derive(Clone, Debug)]
pub(crate) struct Rentable<T>(Option<T>);

#[cold]
fn rented() -> ! { panic!("value is rented") }

impl<T> Rentable<T> {
    #[inline(always)]
    pub(crate) fn new(value: T) -> Self { Rentable(Some(value)) }

    /// Moves the value out, passes it through `f` and stores the result.
    #[inline]
    pub(crate) fn update<F: FnOnce(T) -> T>(&mut self, f: F) {
        let val = self.0.take().unwrap_or_else(|| rented());
        self.0 = Some(f(val));
    }

    #[inline]
    pub(crate) fn into_inner(self) -> T { self.0.unwrap_or_else(|| rented()) }
}

impl<T> Deref for Rentable<T> {
    type Target = T;

    fn deref(&self) -> &T { self.0.as_ref().unwrap_or_else(|| rented()) }
}

impl<T> DerefMut for Rentable<T> {
    fn deref_mut(&mut self) -> &mut T { self.0.as_mut().unwrap_or_else(|| rented()) }
}
