//! Global state management for mcxplot.
//!
//! The context only carries configuration. Plot calls read it and never write
//! per-call data into it.

use std::sync::{OnceLock, PoisonError, RwLock};

use crate::error::{McxPlotError, Result};
use crate::options::Options;

/// Global context singleton.
static CONTEXT: OnceLock<RwLock<Context>> = OnceLock::new();

/// The global context containing all mcxplot state.
#[derive(Debug, Default)]
pub struct Context {
    /// Whether mcxplot has been initialized.
    pub initialized: bool,

    /// Global options.
    pub options: Options,
}

fn context() -> &'static RwLock<Context> {
    CONTEXT.get_or_init(|| RwLock::new(Context::default()))
}

/// Initializes the global context with the given options.
///
/// Can be called again after [`shutdown_context`].
pub fn init_context(options: Options) -> Result<()> {
    let mut ctx = context().write().unwrap_or_else(PoisonError::into_inner);
    if ctx.initialized {
        return Err(McxPlotError::AlreadyInitialized);
    }
    ctx.initialized = true;
    ctx.options = options;
    Ok(())
}

/// Returns whether the context has been initialized.
pub fn is_initialized() -> bool {
    CONTEXT
        .get()
        .and_then(|lock| lock.read().ok())
        .is_some_and(|ctx| ctx.initialized)
}

/// Access the global context for reading.
///
/// Returns [`McxPlotError::NotInitialized`] if mcxplot has not been initialized.
pub fn with_context<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&Context) -> R,
{
    let ctx = context().read().unwrap_or_else(PoisonError::into_inner);
    if !ctx.initialized {
        return Err(McxPlotError::NotInitialized);
    }
    Ok(f(&ctx))
}

/// Access the global context for writing.
///
/// Returns [`McxPlotError::NotInitialized`] if mcxplot has not been initialized.
pub fn with_context_mut<F, R>(f: F) -> Result<R>
where
    F: FnOnce(&mut Context) -> R,
{
    let mut ctx = context().write().unwrap_or_else(PoisonError::into_inner);
    if !ctx.initialized {
        return Err(McxPlotError::NotInitialized);
    }
    Ok(f(&mut ctx))
}

/// Returns a copy of the current options, or the defaults when mcxplot has
/// not been initialized.
pub fn current_options() -> Options {
    with_context(|ctx| ctx.options.clone()).unwrap_or_default()
}

/// Shuts down the global context and resets the options.
pub fn shutdown_context() {
    let mut ctx = context().write().unwrap_or_else(PoisonError::into_inner);
    *ctx = Context::default();
}
