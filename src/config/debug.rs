//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so builds
//! stay quiet. Every flag is further gated by `cfg(debug_assertions)` at the
//! call site.

pub struct DebugFlags {
    /// Emit the full request URL and elapsed time of every backtest request.
    pub print_requests: bool,
    /// Emit render cache hit/miss diagnostics while drawing the panels.
    pub print_render_cache: bool,
    /// Emit shutdown app messages.
    pub print_shutdown: bool,
}

pub const DEBUG_FLAGS: DebugFlags = DebugFlags {
    print_requests: true,
    print_render_cache: false,
    print_shutdown: false,
};
