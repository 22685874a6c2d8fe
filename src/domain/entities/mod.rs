//! Domain Entities
//!
//! - `Step` - One command in a local or remote sequence
//! - `Task` - A named pair of ordered step sequences
//! - `Server` - A deployment target owning tasks by name
//! - `ServerSet` - Every known server, in declared order

mod server;
mod step;
mod task;

pub use server::{Server, ServerSet};
pub use step::{Direction, Step};
pub use task::Task;
