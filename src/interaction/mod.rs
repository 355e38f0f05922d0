pub mod engine;
pub mod trajectory;

pub use engine::{PositionUpdate, ScrollEngine, ScrollPhase, ScrollPhysics};
pub use trajectory::{EaseTrajectory, FlingTrajectory, TrajectoryStep, ease_in_out_cubic};
