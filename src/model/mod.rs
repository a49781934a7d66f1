mod match_item;
mod site;

pub use match_item::*;
pub use site::*;
