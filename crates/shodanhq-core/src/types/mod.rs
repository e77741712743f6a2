mod banner;
mod host;
mod location;
mod search;

pub use banner::*;
pub use host::*;
pub use location::*;
pub use search::*;
