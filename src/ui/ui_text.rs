//! Every user-facing string in one place.

pub struct UiText {
    pub app_title: &'static str,
    pub ticker_label: &'static str,
    pub start_label: &'static str,
    pub end_label: &'static str,
    pub run_button: &'static str,
    pub run_button_busy: &'static str,
    pub reset_button: &'static str,
    pub error_prefix: &'static str,
    pub no_data_placeholder: &'static str,
    pub price_heading_icon: &'static str,
    pub equity_heading_icon: &'static str,
    pub summary_heading_icon: &'static str,
    pub plot_x_axis: &'static str,
    pub price_y_axis: &'static str,
    pub equity_y_axis: &'static str,
    pub status_idle: &'static str,
    pub status_loading: &'static str,
    pub status_succeeded: &'static str,
    pub status_failed: &'static str,
    pub status_stale_suffix: &'static str,
}

pub const UI_TEXT: UiText = UiText {
    app_title: "🚀 Algo Trading Dashboard",
    ticker_label: "Ticker",
    start_label: "Start Date",
    end_label: "End Date",
    run_button: "▶ Run Backtest",
    run_button_busy: "⏳ Running...",
    reset_button: "🔄 Reset",
    error_prefix: "⚠ Error:",
    no_data_placeholder: "📊 No data yet. Run a backtest!",
    price_heading_icon: "📈",
    equity_heading_icon: "💰",
    summary_heading_icon: "📊",
    plot_x_axis: "Date",
    price_y_axis: "Price",
    equity_y_axis: "Equity",
    status_idle: "Idle",
    status_loading: "Running backtest...",
    status_succeeded: "Backtest complete",
    status_failed: "Backtest failed",
    status_stale_suffix: "(showing previous result)",
};
