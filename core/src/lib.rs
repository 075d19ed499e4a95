pub mod batch;
pub mod cli;
pub mod error;
pub mod metrics;
pub mod models;
pub mod registry;
pub mod storage;
pub mod training;

pub use batch::{default_packages, run_batch, BatchReport, OutputFormat, Package};
pub use error::{PackageError, StorageError};
pub use models::InfoMessage;
pub use registry::{read_package, ActivityKind};
pub use storage::{load_packages, save_packages};
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
