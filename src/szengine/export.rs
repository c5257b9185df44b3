//! # Export-report streams.
//!
//! ```text
//! first poll ─► entry trace ─► notify (once) ─► yield fragment* ─► end ─► exit trace
//!                                                  │
//!                                   ctx cancelled ─┘ (stop early)
//! ```
//!
//! The stream owns a clone of the façade's [`Envelope`] and its fragments, so
//! it outlives the call that created it. No task is spawned: dropping the
//! stream early drops the exit-trace guard, which writes the exit record with
//! `outcome = "abandoned"`.

use async_stream::stream;
use tokio_util::sync::CancellationToken;

use crate::envelope::{Envelope, Operation};
use crate::error::{SzError, SzResult};
use crate::events::Details;
use crate::traits::StringFragments;

/// Builds the lazy fragment stream of an export-iterator operation.
pub(super) fn fragments(
    envelope: &Envelope,
    ctx: &CancellationToken,
    op: Operation,
    args: Details,
    items: Vec<String>,
) -> StringFragments {
    let envelope = envelope.clone();
    let ctx = ctx.clone();

    Box::pin(stream! {
        let mut exit = envelope.trace_entry(&op, &args);

        if let Some(code) = op.event {
            if !ctx.is_cancelled() {
                envelope.notify(code, None, args);
            }
        }

        let mut yielded: usize = 0;
        for item in items {
            if ctx.is_cancelled() {
                break;
            }
            yielded += 1;
            yield Ok::<String, SzError>(item);
        }

        if let Some(exit) = exit.as_mut() {
            let done: SzResult<usize> = Ok(yielded);
            exit.record(&done);
        }
    })
}
