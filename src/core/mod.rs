pub mod clock;
pub mod containment;
pub mod logic;
pub mod renderer;
pub mod resolver;
pub mod status;

pub use clock::Clock;
pub use containment::is_within;
pub use logic::{Core, Evaluation};
pub use renderer::{render_day, render_week};
pub use resolver::resolve;
pub use status::current_status;
