/// Trait for curves whose parameter direction can be reversed.
pub trait Invertible: Clone {
    /// Reverse the parameter direction in place, so that `t` maps to `1 - t`.
    fn invert(&mut self);

    fn inverse(&self) -> Self {
        let mut inv = self.clone();
        inv.invert();
        inv
    }
}
