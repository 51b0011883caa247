//! Concrete shape variants.

mod cone;
mod cube;
mod cylinder;
mod prism;
mod sphere;

pub use cone::Cone;
pub use cube::Cube;
pub use cylinder::Cylinder;
pub use prism::RectangularPrism;
pub use sphere::Sphere;
