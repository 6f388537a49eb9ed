//! Collision detection and response: obstacle dispatch, velocity response, relaxation.

pub mod contact;
pub mod resolver;
pub mod response;

pub use contact::{Contact, ContactTest, Obstacle};
pub use resolver::{CollisionResolver, ResolutionReport};
pub use response::{exchange_normal_velocities, reflect_velocity};
