mod map;
mod report;
mod search;

pub use self::{map::*, report::*, search::*};
