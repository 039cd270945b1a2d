//! View synchronization between the resident snapshot and the presentation
//! layer.

mod snapshot;
mod synchronizer;

pub use snapshot::BoardSnapshot;
pub use synchronizer::ViewSynchronizer;
