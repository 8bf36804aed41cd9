//! Composable unary transforms.
//!
//! A [`Transform`] maps a value to another value of the same type. Transforms
//! are pure values: composing two allocates a new transform and leaves both
//! constituents reusable. Composition reads left to right throughout:
//! `f.then(&g)` applies `f` first, and `f >> g` is sugar for the same thing.
//!
//! ```rust,ignore
//! let soften = blur(5.0)?;
//! let tint = color_overlay(Rgba::RED.with_alpha(0.2))?;
//! let styled = soften >> tint;
//! let result = styled.apply(image);
//! ```

use rayon::prelude::*;
use std::fmt;
use std::ops::Shr;
use std::sync::Arc;

/// A unary transform over values of type `T`.
///
/// Cloning is cheap (the underlying function is shared); applying consumes
/// the input and produces the output. The name travels along through
/// composition for logging and progress reporting.
pub struct Transform<T> {
    name: String,
    run: Arc<dyn Fn(T) -> T + Send + Sync>,
}

impl<T> Clone for Transform<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            run: Arc::clone(&self.run),
        }
    }
}

impl<T> fmt::Debug for Transform<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl<T: 'static> Transform<T> {
    /// Wrap a function as an anonymous transform.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self::named("transform", f)
    }

    /// Wrap a function as a named transform.
    pub fn named<F>(name: impl Into<String>, f: F) -> Self
    where
        F: Fn(T) -> T + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            run: Arc::new(f),
        }
    }

    /// The transform that returns its input untouched.
    pub fn identity() -> Self {
        Self::named("identity", |value| value)
    }

    /// Get the transform name for logging and progress reporting.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply this transform to one input.
    pub fn apply(&self, input: T) -> T {
        (self.run)(input)
    }

    /// Sequential composition: apply `self` first, then `next`.
    ///
    /// For every input `x`, `f.then(&g).apply(x)` equals
    /// `g.apply(f.apply(x))`.
    pub fn then(&self, next: &Transform<T>) -> Transform<T> {
        let first = self.clone();
        let second = next.clone();
        Transform::named(format!("{} >> {}", first.name, second.name), move |input| {
            second.apply(first.apply(input))
        })
    }
}

impl<T: Send + 'static> Transform<T> {
    /// Apply to many independent inputs in parallel, preserving input order.
    ///
    /// Transforms carry no shared mutable state, so per-input application is
    /// embarrassingly parallel.
    pub fn apply_batch(&self, inputs: Vec<T>) -> Vec<T> {
        inputs
            .into_par_iter()
            .map(|input| self.apply(input))
            .collect()
    }
}

/// Free-function spelling of [`Transform::then`]: apply `first`, then
/// `second`.
pub fn compose<T: 'static>(first: &Transform<T>, second: &Transform<T>) -> Transform<T> {
    first.then(second)
}

/// Fold any number of transforms into one, applied in iteration order.
///
/// An empty iterator yields the identity transform.
pub fn pipeline<T, I>(transforms: I) -> Transform<T>
where
    T: 'static,
    I: IntoIterator<Item = Transform<T>>,
{
    transforms
        .into_iter()
        .fold(Transform::identity(), |built, next| built.then(&next))
}

/// `f >> g` applies `f` first, then `g`: the operator spelling of
/// [`Transform::then`].
impl<T: 'static> Shr for Transform<T> {
    type Output = Transform<T>;

    fn shr(self, next: Transform<T>) -> Transform<T> {
        self.then(&next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn double() -> Transform<i64> {
        Transform::named("double", |x: i64| x * 2)
    }

    fn increment() -> Transform<i64> {
        Transform::named("increment", |x: i64| x + 1)
    }

    #[test]
    fn apply_runs_the_wrapped_function() {
        assert_eq!(double().apply(21), 42);
    }

    #[test]
    fn then_applies_left_to_right() {
        // (3 * 2) + 1, not (3 + 1) * 2
        assert_eq!(double().then(&increment()).apply(3), 7);
        assert_eq!(increment().then(&double()).apply(3), 8);
    }

    #[test]
    fn constituents_stay_usable_after_composition() {
        let d = double();
        let i = increment();
        let composed = d.then(&i);

        assert_eq!(composed.apply(10), 21);
        assert_eq!(d.apply(10), 20);
        assert_eq!(i.apply(10), 11);
    }

    #[test]
    fn identity_is_a_unit() {
        let f = double();
        assert_eq!(Transform::identity().then(&f).apply(9), f.apply(9));
        assert_eq!(f.then(&Transform::identity()).apply(9), f.apply(9));
    }

    #[test]
    fn operator_sugar_matches_then() {
        let via_method = double().then(&increment());
        let via_operator = double() >> increment();
        for input in [-3, 0, 5, 1000] {
            assert_eq!(via_operator.apply(input), via_method.apply(input));
        }
    }

    #[test]
    fn pipeline_folds_in_iteration_order() {
        let composed = pipeline(vec![double(), increment(), double()]);
        // ((3 * 2) + 1) * 2
        assert_eq!(composed.apply(3), 14);
    }

    #[test]
    fn empty_pipeline_is_identity() {
        let composed: Transform<i64> = pipeline(Vec::new());
        assert_eq!(composed.apply(17), 17);
        assert_eq!(composed.name(), "identity");
    }

    #[test]
    fn composition_names_travel_along() {
        let composed = double().then(&increment());
        assert_eq!(composed.name(), "double >> increment");
    }

    #[test]
    fn apply_batch_matches_sequential_application() {
        let composed = double().then(&increment());
        let inputs: Vec<i64> = (0..100).collect();

        let sequential: Vec<i64> = inputs.iter().map(|&x| composed.apply(x)).collect();
        let parallel = composed.apply_batch(inputs);

        assert_eq!(parallel, sequential);
    }
}
