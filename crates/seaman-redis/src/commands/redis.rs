//! Redis commands run through the catalog dispatcher

use seaman_redis_core::{
    CommandRequest, CommandStatus, Confirm, Dispatcher, OutputSink, ProcessExecutor,
};
use tracing::debug;

use crate::error::Result;
use crate::executor::SystemExecutor;
use crate::terminal::{TerminalConfirm, TerminalOutput};

/// Handle a Redis command against the local containers
pub fn handle_redis_command(request: &CommandRequest) -> Result<CommandStatus> {
    run_with(
        SystemExecutor,
        request,
        &mut TerminalConfirm,
        &mut TerminalOutput::default(),
    )
}

fn run_with<E: ProcessExecutor>(
    executor: E,
    request: &CommandRequest,
    confirm: &mut dyn Confirm,
    out: &mut dyn OutputSink,
) -> Result<CommandStatus> {
    debug!(
        "Dispatching {} on {}",
        request.spec().qualified_name,
        request.target_mode()
    );
    let status = Dispatcher::new(executor).run(request, confirm, out)?;
    Ok(status)
}
