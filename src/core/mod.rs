pub mod clock;
pub mod node;
pub mod scheduler;
pub mod theme;
pub mod types;

pub use clock::{Clock, ManualClock, SystemClock};
pub use node::{NodeState, VisualNode};
pub use scheduler::{FrameScheduler, FrameTask, TaskHandle};
pub use theme::{ColorRole, InterfaceColors};
pub use types::{Length, Point, Viewport};
