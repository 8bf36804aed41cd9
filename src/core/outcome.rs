//! Combinators for chaining fallible stages and recovering with fallbacks.
//!
//! A stage is any function returning `Result`. `chain` sequences two stages
//! with short-circuiting: the first error wins and passes through unchanged.
//! `recover` is the total conversion back to a plain value. The free
//! functions compose stages without an intermediate `Result` in hand.

/// Extension trait for chaining and recovering `Result` values.
pub trait ResultChain<T, E> {
    /// Feed the success value into the next fallible stage.
    ///
    /// On `Err`, `next` is never invoked and the error passes through
    /// unchanged.
    fn chain<U, F>(self, next: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>;

    /// Collapse into a plain value by handling the error case.
    ///
    /// Total: every input produces a `T`.
    fn recover<F>(self, handler: F) -> T
    where
        F: FnOnce(E) -> T;

    /// Observe the success value without consuming it.
    fn tap<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(&T);

    /// Observe the error without consuming it.
    fn tap_err<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(&E);
}

impl<T, E> ResultChain<T, E> for Result<T, E> {
    fn chain<U, F>(self, next: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        self.and_then(next)
    }

    fn recover<F>(self, handler: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        self.unwrap_or_else(handler)
    }

    fn tap<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(&T),
    {
        if let Ok(ref value) = self {
            f(value);
        }
        self
    }

    fn tap_err<F>(self, f: F) -> Result<T, E>
    where
        F: FnOnce(&E),
    {
        if let Err(ref error) = self {
            f(error);
        }
        self
    }
}

/// Kleisli composition of two fallible stages, applied left to right.
pub fn compose_fallible<A, B, C, E, F, G>(first: F, second: G) -> impl Fn(A) -> Result<C, E>
where
    F: Fn(A) -> Result<B, E>,
    G: Fn(B) -> Result<C, E>,
{
    move |input| first(input).and_then(&second)
}

/// Lift a pure function into a stage that never fails.
pub fn lift<T, U, E, F>(f: F) -> impl Fn(T) -> Result<U, E>
where
    F: Fn(T) -> U,
{
    move |input| Ok(f(input))
}

/// Collect a vector of results into a result of vector; the first error wins.
pub fn sequence<T, E>(results: Vec<Result<T, E>>) -> Result<Vec<T>, E> {
    results.into_iter().collect()
}

/// Map a fallible stage across values; the first error wins.
pub fn traverse<T, U, E, F>(values: Vec<T>, f: F) -> Result<Vec<U>, E>
where
    F: Fn(T) -> Result<U, E>,
{
    values.into_iter().map(f).collect()
}
