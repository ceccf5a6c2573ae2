use super::cards::escape_html;
use super::Dashboard;

/// Standalone dashboard document: sidebar date list plus the main view, with
/// the stylesheet inlined so the file opens without a server.
pub fn render_page(dash: &Dashboard, generated_at: &str) -> String {
    format!(r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Intelboard</title>
    <style>
        :root {{
            --bg-primary: #0a0a0a;
            --bg-secondary: #111111;
            --bg-card: rgba(20, 20, 20, 0.8);
            --border-primary: rgba(255, 255, 255, 0.1);
            --text-primary: #ffffff;
            --text-secondary: #a1a1aa;
            --text-muted: #71717a;
            --accent-cyan: #00d4ff;
            --critical: #ff0844;
            --high: #ff8c42;
        }}

        * {{ margin: 0; padding: 0; box-sizing: border-box; }}

        body {{
            background: var(--bg-primary);
            color: var(--text-primary);
            font-family: 'Inter', sans-serif;
            line-height: 1.6;
            display: flex;
            min-height: 100vh;
        }}

        @keyframes fadeIn {{
            from {{ opacity: 0; transform: translateY(12px); }}
            to {{ opacity: 1; transform: translateY(0); }}
        }}

        .hidden {{ display: none !important; }}

        .sidebar {{
            width: 260px;
            background: var(--bg-secondary);
            border-right: 1px solid var(--border-primary);
            padding: 1.5rem 1rem;
        }}
        .sidebar h2 {{ font-size: 1rem; color: var(--text-secondary); margin-bottom: 1rem; }}
        .date-btn {{
            display: block;
            width: 100%;
            text-align: left;
            background: transparent;
            color: var(--text-primary);
            border: 1px solid transparent;
            border-radius: 0.5rem;
            padding: 0.6rem 0.8rem;
            margin-bottom: 0.4rem;
            cursor: pointer;
        }}
        .date-btn.active {{ border-color: var(--accent-cyan); background: rgba(0, 212, 255, 0.08); }}
        .list-notice {{ color: var(--text-muted); padding: 10px; }}
        .list-notice.error {{ color: var(--critical); }}

        .main {{ flex: 1; padding: 2rem; }}
        .empty-state {{ text-align: center; color: var(--text-secondary); margin-top: 20vh; }}
        .icon-large {{ font-size: 3rem; margin-bottom: 1rem; }}
        .report-title {{ font-size: 2rem; margin-bottom: 2rem; }}
        .section-title {{ font-size: 1.4rem; margin: 2rem 0 1rem; }}
        .subtitle {{ color: var(--text-secondary); }}

        .attacks-grid {{
            display: grid;
            grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));
            gap: 1.25rem;
        }}
        .attack-card, .lesson-panel {{
            background: var(--bg-card);
            border: 1px solid var(--border-primary);
            border-radius: 1rem;
            padding: 1.25rem;
            opacity: 0;
            animation: fadeIn 0.5s ease forwards;
        }}
        .attack-card.critical {{ border-left: 4px solid var(--critical); }}
        .attack-card.high {{ border-left: 4px solid var(--high); }}
        .card-header {{ display: flex; justify-content: space-between; margin-bottom: 0.5rem; }}
        .rank-badge {{ font-family: 'JetBrains Mono', monospace; color: var(--accent-cyan); }}
        .card-source {{ color: var(--text-muted); font-size: 0.85rem; }}
        .card-title a {{ color: inherit; }}
        .card-summary {{ color: var(--text-secondary); margin-top: 0.5rem; }}

        .lesson-panel {{ margin-bottom: 1.5rem; }}
        .lesson-rank {{ color: var(--accent-cyan); font-size: 0.85rem; text-transform: uppercase; }}
        .lesson-content {{ display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; margin-top: 1rem; }}
        .lesson-block {{ margin-bottom: 1rem; }}
        .lesson-block ul {{ padding-left: 1.2rem; color: var(--text-secondary); }}

        .footer {{ color: var(--text-muted); font-size: 0.8rem; margin-top: 3rem; }}
    </style>
</head>
<body>
    <aside class="sidebar">
        <h2>Reports</h2>
        {}
    </aside>
    <main class="main">
        {}
        <p class="footer">Generated {}</p>
    </main>
</body>
</html>"#,
        dash.sidebar_html(),
        dash.main_html(),
        escape_html(generated_at)
    )
}
