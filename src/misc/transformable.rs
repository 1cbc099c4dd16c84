/// A trait for curves that can be mapped through a transform of type `T`,
/// such as a homogeneous matrix or a rotor.
pub trait Transformable<T>: Clone {
    fn transform(&mut self, transform: T);

    /// Returns a transformed copy, leaving `self` untouched.
    fn transformed(&self, transform: T) -> Self {
        let mut clone = self.clone();
        clone.transform(transform);
        clone
    }
}
