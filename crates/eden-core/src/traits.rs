//! Core abstraction traits.

/// A uniform source of random indices.
///
/// This is the only source of nondeterminism in the growth model. A run
/// threads one instance through every stochastic operation (seeding,
/// frontier choice, neighbour choice) and never re-seeds it, so a fixed
/// seed reproduces the whole trajectory.
///
/// Several consumers may draw from the same instance within one step;
/// each draw consumes the stream in call order.
pub trait UniformSource {
    /// Draw an index uniformly from `[0, n)`.
    ///
    /// Callers must pass `n >= 1`. Implementations may panic on `n == 0`.
    fn uniform_index(&mut self, n: usize) -> usize;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn uniform_index(&mut self, n: usize) -> usize {
        (**self).uniform_index(n)
    }
}
