pub mod hh;
pub mod salary;
pub mod superjob;

pub use hh::{HhClient, HhQuery};
pub use superjob::{SjClient, SjQuery};
