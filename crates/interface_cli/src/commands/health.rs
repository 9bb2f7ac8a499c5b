//! Adapter health report

use std::io::Write;

use core_kernel::{AdapterHealth, HealthCheckable};

use super::Outcome;
use crate::error::CliError;
use crate::output::CommandContext;

/// Runs every health check and prints one line per adapter
///
/// Fails if any adapter is unhealthy; degraded adapters are reported but do
/// not fail the command.
pub async fn report<W: Write>(
    adapters: &[&dyn HealthCheckable],
    ctx: &mut CommandContext<W>,
) -> Result<Outcome, CliError> {
    let mut outcome = Outcome::Success;

    for adapter in adapters {
        let result = adapter.health_check().await;
        let mut line = format!(
            "{}: {} ({} ms)",
            result.adapter_id, result.status, result.latency_ms
        );
        if let Some(message) = &result.message {
            line.push_str(&format!(" - {}", message));
        }
        ctx.writeln(&line)?;

        if result.status == AdapterHealth::Unhealthy {
            outcome = Outcome::Failure;
        }
    }

    Ok(outcome)
}
