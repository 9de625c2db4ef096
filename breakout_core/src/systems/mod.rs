pub mod collision;
pub mod fruit;
pub mod input;
pub mod lives;
pub mod movement;
pub mod power;

pub use collision::*;
pub use fruit::*;
pub use input::*;
pub use lives::*;
pub use movement::*;
pub use power::*;
