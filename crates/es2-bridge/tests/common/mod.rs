#![allow(dead_code)]

use es2_bridge::{Es2Executor, GlCall, SoftGl, SoftGlSource};

pub fn executor() -> Es2Executor<SoftGlSource> {
    Es2Executor::new(SoftGlSource::new())
}

pub fn executor_with(context: SoftGl) -> Es2Executor<SoftGlSource> {
    Es2Executor::new(SoftGlSource::with(context))
}

/// Drain the host call log, panicking if no context was created yet.
pub fn take_calls(exec: &mut Es2Executor<SoftGlSource>) -> Vec<GlCall> {
    exec.host_context()
        .expect("no host context created")
        .take_calls()
}
