pub mod allocator;
pub mod export;
pub mod obligations;
pub mod pool;
pub mod session;
pub mod settlement;
pub mod store;
pub mod summary;

pub use allocator::{Allocation, Attribution, Funding};
pub use export::{MemberExport, TripExport};
pub use obligations::ObligationGraph;
pub use pool::AdvancePool;
pub use session::{DEFAULT_TRIP, Session};
pub use store::Trip;
pub use summary::{MemberSummaryView, Status};
