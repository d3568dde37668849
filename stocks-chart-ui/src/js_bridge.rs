//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js bar chart lives in `assets/js/bar-chart.js`, is embedded at
//! compile time, and is evaluated as a global (no ES modules) once D3 has
//! loaded. This module serializes chart data and calls that global.

static BAR_CHART_JS: &str = include_str!("../assets/js/bar-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Stocks JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Quote a string as a JS string literal. JSON string syntax is valid JS.
fn js_string(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// The script is stored on `window` and evaluated at global scope via
/// indirect eval once D3 is ready, so its function declarations become
/// globals rather than being scoped to the polling callback.
pub fn init_charts() {
    let store_js = format!(
        "if (!window.__stocksChartsReady) window.__stocksChartScripts = {};",
        js_string(BAR_CHART_JS)
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__stocksChartsReady || window.__stocksChartsPending) return;
            window.__stocksChartsPending = true;
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined') {
                    clearInterval(waitForD3);
                    (0, eval)(window.__stocksChartScripts);
                    delete window.__stocksChartScripts;
                    if (typeof renderBarChart !== 'undefined') window.renderBarChart = renderBarChart;
                    if (typeof clearBarChart !== 'undefined') window.clearBarChart = clearBarChart;
                    window.__stocksChartsReady = true;
                    console.log('Stock charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Render a bar chart of category counts into `container_id`.
///
/// Polls until D3.js, the chart script and the container element all exist.
/// A newer render for the same container cancels an older pending one.
pub fn render_bar_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    call_js(&format!(
        r#"
        (function() {{
            window.__stocksPolls = window.__stocksPolls || {{}};
            clearInterval(window.__stocksPolls[{id}]);
            window.__stocksPolls[{id}] = setInterval(function() {{
                if (window.__stocksChartsReady &&
                    typeof window.renderBarChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(window.__stocksPolls[{id}]);
                    delete window.__stocksPolls[{id}];
                    try {{
                        window.renderBarChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[Stocks] renderBarChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy/clean up a chart in the given container.
///
/// Cancels any pending render first, then clears the container through the
/// chart script, or directly if the script has not loaded yet.
pub fn destroy_chart(container_id: &str) {
    call_js(&destroy_chart_js(container_id));
}

fn destroy_chart_js(container_id: &str) -> String {
    let id = js_string(container_id);
    format!(
        "if (window.__stocksPolls) {{ clearInterval(window.__stocksPolls[{id}]); delete window.__stocksPolls[{id}]; }} \
         if (typeof window.clearBarChart === 'function') {{ window.clearBarChart({id}); }} \
         else {{ var el = document.getElementById({id}); if (el) el.innerHTML = ''; }}",
    )
}
