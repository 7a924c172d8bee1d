//! Request execution: status phrases, response observation, per-worker
//! sessions, work partitioning, and run coordination.
mod coordinator;
mod lifecycle;
mod partition;
mod session;
mod status;
mod worker;


pub use coordinator::execute_run;
pub use lifecycle::{
    ChunkCapture, DiscardSink, DrainSink, MAX_BODY_CHUNKS, MAX_HEADER_CHUNKS, ResponseMode,
    ResponseObserver, ResponseSink,
};
pub use partition::{WorkAssignment, assign_work, partition_calls};
pub use session::{HttpSession, ReqwestSession, ReqwestSessionFactory, SessionFactory};
pub use status::{UNKNOWN_STATUS_PHRASE, status_phrase};
pub use worker::{WorkerReport, WorkerSettings, run_worker};
