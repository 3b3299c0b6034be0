pub mod config;
pub mod errors;
pub mod motion;
pub mod orientation;
pub mod path;
pub mod progress;
pub mod rig;
pub mod timing;

pub use config::{CurveMode, TuningConfig};
pub use errors::{Result, RigError};
pub use orientation::OrientationTargets;
pub use path::PathCurve;
pub use progress::ProgressSmoother;
pub use rig::{FlightFrame, FlightRig, FlightState, FrameInput};
pub use timing::FrameClock;
