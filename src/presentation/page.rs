// Static dashboard page
pub const DASHBOARD_HTML: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>DAQ Charger Cart Dashboard</title>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <style>
        body { font-family: system-ui, -apple-system, sans-serif; margin: 0; padding: 1rem; }
        h1 { text-align: center; }
        #timer { text-align: center; color: #64748b; font-size: 0.875rem; }
        #timer .stale { color: #b91c1c; }
        .row { display: flex; gap: 2%; align-items: stretch; }
        .chart { width: 70%; height: 420px; }
        .gauge { width: 28%; height: 420px; }
    </style>
</head>
<body>
    <h1>DAQ Charger Cart Dashboard</h1>
    <div id="timer">waiting for data&hellip;</div>

    <div class="row">
        <div id="temperature-graph" class="chart"></div>
        <div id="temperature-gauge" class="gauge"></div>
    </div>
    <div class="row">
        <div id="rssi-graph" class="chart"></div>
        <div id="rssi-gauge" class="gauge"></div>
    </div>
    <div class="row">
        <div id="humidity-graph" class="chart"></div>
        <div id="humidity-gauge" class="gauge"></div>
    </div>

    <script>
        const timer = document.getElementById("timer");

        function renderTimer(view) {
            const when = view.frame_time ? new Date(view.frame_time).toLocaleString() : "never";
            let html = `refresh #${view.cycle} &middot; data from ${when}`;
            if (view.status) {
                html += ` &middot; <span class="stale">${view.status}</span>`;
            }
            timer.innerHTML = html;
        }

        const events = new EventSource("/events");
        events.addEventListener("frame", (msg) => {
            const view = JSON.parse(msg.data);
            for (const region of view.regions) {
                Plotly.react(region.id, region.figure.data, region.figure.layout, { responsive: true });
            }
            renderTimer(view);
        });
    </script>
</body>
</html>
"##;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::visual_builder::placeholder_frame;
    use crate::infrastructure::plotly_mapper::frame_to_regions;

    #[test]
    fn test_page_has_a_placeholder_per_region() {
        for region in frame_to_regions(&placeholder_frame()) {
            assert!(
                DASHBOARD_HTML.contains(&format!("id=\"{}\"", region.id)),
                "missing placeholder for {}",
                region.id
            );
        }
        assert!(DASHBOARD_HTML.contains("id=\"timer\""));
    }
}
