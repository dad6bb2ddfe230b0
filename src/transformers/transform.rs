//! Transform trait.

/// Consumes a corpus state and returns the next one.
pub trait Transform<In, Out> {
    fn transform_own(&self, input: In) -> Out;
}
