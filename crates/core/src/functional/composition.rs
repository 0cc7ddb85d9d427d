//! Composition helpers for typed Rust closures

/// A value threaded through a chain of transformations
#[derive(Debug, Clone)]
pub struct Pipe<T>(pub T);

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Transform the carried value
    pub fn pipe<F, U>(self, f: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe(f(self.0))
    }

    /// Transform the carried value, stopping the chain at the first error
    pub fn try_pipe<F, U, E>(self, f: F) -> Result<Pipe<U>, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        f(self.0).map(Pipe)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

/// Predicate and argument-order operators
pub mod operators {
    /// `f` with its two arguments swapped
    pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
    where
        F: Fn(A, B) -> C,
    {
        move |b, a| f(a, b)
    }

    /// Negation of `predicate`
    pub fn complement<T, P>(predicate: P) -> impl Fn(&T) -> bool
    where
        T: ?Sized,
        P: Fn(&T) -> bool,
    {
        move |x: &T| !predicate(x)
    }

    /// Both predicates hold; `q` only runs when `p` passes
    pub fn both<T, P, Q>(p: P, q: Q) -> impl Fn(&T) -> bool
    where
        T: ?Sized,
        P: Fn(&T) -> bool,
        Q: Fn(&T) -> bool,
    {
        move |x: &T| p(x) && q(x)
    }
}
