//! Shared worker-pool construction.

use std::sync::Arc;

use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::ScenarioResult;

/// Build the worker pool a scenario (or several scenarios) runs on.
///
/// `num_threads: None` uses all logical cores.  The scenario never creates
/// threads itself; it only submits work to this pool and waits on the
/// resulting barriers, so one process-wide pool shared by `Arc` is the
/// expected setup.
pub fn build_pool(num_threads: Option<usize>) -> ScenarioResult<Arc<ThreadPool>> {
    let mut builder = ThreadPoolBuilder::new();
    if let Some(n) = num_threads {
        builder = builder.num_threads(n);
    }
    Ok(Arc::new(builder.build()?))
}
