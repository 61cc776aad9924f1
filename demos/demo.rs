//! End-to-end demo: four tasks across four workers with mixed outcomes.
//!
//! Run with:
//! ```text
//! RUST_LOG=info cargo run --example demo --features logging
//! ```

use std::sync::Arc;

use taskpool::{LogWriter, Scheduler, SinkRef, TaskError, TaskOptions, WorkFn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let scheduler = Scheduler::new(40, 4)?;
    let sink: SinkRef = Arc::new(LogWriter::new());

    let ok = || async { Ok::<(), TaskError>(()) };

    scheduler.register(
        WorkFn::arc(ok),
        TaskOptions::new()
            .retries(4)
            .name("number1")
            .sink(sink.clone()),
    )?;
    scheduler.register(WorkFn::arc(ok), TaskOptions::new().retries(2).name("number2"))?;
    scheduler.register(WorkFn::arc(ok), TaskOptions::new().sink(sink.clone()))?;
    scheduler.register(
        WorkFn::arc(|| async { Err(TaskError::fail("error")) }),
        TaskOptions::new()
            .retries(4)
            .name("number4")
            .sink(sink.clone()),
    )?;

    scheduler.run();
    scheduler.stop().await;

    println!("{}", scheduler.summary());
    Ok(())
}
