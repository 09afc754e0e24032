use crate::mode::InputMode;
use crate::templates::{escape_html, gauge};
use crate::verdict::{format_score, verdict, Certification};
use crate::view::{SubmissionState, ViewState};

pub fn render(view: &ViewState) -> String {
    let auto_refresh = if view.is_loading() {
        r#"<meta http-equiv="refresh" content="2">"#
    } else {
        ""
    };

    let alert = match view.error() {
        Some(message) => format!(
            r#"<div class="alert" role="alert">
                <span>{}</span>
                <form method="post" action="/dismiss"><button class="alert-close" type="submit" aria-label="Dismiss">&times;</button></form>
            </div>"#,
            escape_html(message)
        ),
        None => String::new(),
    };

    let body = if view.is_loading() {
        r#"<div class="loading-notice" role="status">
                <div class="spinner"></div>
                <span>Measuring rigor. This page refreshes automatically.</span>
            </div>"#
            .to_string()
    } else {
        render_input(view)
    };

    let result = match view.submission {
        SubmissionState::Result { score } => render_result(score),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    {auto_refresh}
    <title>Rigor Checker</title>
    <style>
        *, *::before, *::after {{ margin: 0; padding: 0; box-sizing: border-box; }}

        :root {{
            --bg: #ffffff;
            --bg-secondary: #f7f8fa;
            --border: #d8dce3;
            --border-light: #e8ebf0;
            --text-primary: #111827;
            --text-secondary: #4b5563;
            --text-tertiary: #9ca3af;
            --green: #16a34a;
            --green-bg: #f0fdf4;
            --red: #dc2626;
            --red-bg: #fef2f2;
            --red-border: #fecaca;
            --link: #2563eb;
        }}

        body {{
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', 'Inter', system-ui, sans-serif;
            background: var(--bg); color: var(--text-primary); min-height: 100vh;
            -webkit-font-smoothing: antialiased;
        }}

        .page {{ max-width: 640px; margin: 0 auto; padding: 75px 1.25rem 4rem; text-align: center; }}
        h1 {{ font-size: 2.25rem; font-weight: 600; margin-bottom: 0.5rem; }}
        h2 {{ font-size: 1.125rem; font-weight: 500; color: var(--text-secondary); margin-bottom: 2rem; }}

        .card {{ border: 1px solid var(--border); border-radius: 8px; padding: 1.5rem; margin-bottom: 1rem; }}
        .card p {{ margin-bottom: 1rem; color: var(--text-secondary); }}

        .modes {{ display: inline-flex; border: 1px solid var(--border); border-radius: 6px; overflow: hidden; }}
        .modes button {{
            padding: 0.625rem 1.25rem; font-size: 1rem; background: var(--bg); color: var(--text-primary);
            border: none; border-right: 1px solid var(--border); cursor: pointer;
        }}
        .modes button:last-child {{ border-right: none; }}
        .modes button.active {{ background: var(--link); color: #fff; }}

        .input {{ margin-top: 1.4em; }}
        .dropzone {{
            display: block; padding: 2rem 1rem; border: 1px dashed var(--border); border-radius: 6px;
            background: var(--bg-secondary); color: var(--text-secondary); margin-bottom: 0.75rem;
        }}
        input[type=text], textarea {{
            width: 100%; padding: 0.625rem; font-size: 1rem; border: 1px solid var(--border);
            border-radius: 6px; margin-bottom: 0.75rem; font-family: inherit;
        }}
        textarea {{ min-height: 5rem; resize: vertical; }}
        .submit {{
            width: 100%; padding: 0.625rem; font-size: 1rem; color: #fff; background: var(--link);
            border: none; border-radius: 6px; cursor: pointer;
        }}
        .hint {{ font-size: 0.8125rem; color: var(--text-tertiary); }}

        .alert {{
            display: flex; justify-content: space-between; align-items: center; gap: 1rem;
            padding: 0.75rem 1rem; margin-top: 1rem; border: 1px solid var(--red-border);
            border-radius: 6px; background: var(--red-bg); color: var(--red); text-align: left;
        }}
        .alert-close {{ background: none; border: none; font-size: 1.25rem; color: var(--red); cursor: pointer; }}

        .loading-notice {{
            display: flex; align-items: center; justify-content: center; gap: 0.625rem; padding: 1.5rem;
            color: var(--text-secondary);
        }}
        .spinner {{
            width: 16px; height: 16px; border: 2px solid var(--border); border-top-color: var(--link);
            border-radius: 50%; animation: spin 0.8s linear infinite; flex-shrink: 0;
        }}
        @keyframes spin {{ to {{ transform: rotate(360deg); }} }}

        .score {{ font-size: 3rem; font-weight: 600; }}
        .verdict {{ font-size: 1.125rem; color: var(--text-secondary); margin-top: 0.5rem; }}
        .certification {{
            display: inline-block; margin-top: 1rem; padding: 0.25rem 0.75rem; border-radius: 9999px;
            font-size: 0.8125rem; font-weight: 500;
        }}
        .certification.rigorous {{ background: var(--green-bg); color: var(--green); }}
        .certification.flimsy {{ background: var(--red-bg); color: var(--red); }}
    </style>
</head>
<body>
    <div class="page">
        <h1>Rigor Checker 🧐</h1>
        <h2>Determine objectively how rigorous a mathematical proof is!</h2>

        <div class="card">
            <p>Upload a picture / PDF, provide a URL, or type out the proof (LaTeX accepted).</p>
            {modes}
            {alert}
            <div class="input">
                {body}
            </div>
        </div>

        {result}
    </div>
</body>
</html>"#,
        auto_refresh = auto_refresh,
        modes = render_modes(view.mode),
        alert = alert,
        body = body,
        result = result,
    )
}

fn render_modes(active: InputMode) -> String {
    let buttons: String = InputMode::ALL
        .iter()
        .map(|mode| {
            let class = if *mode == active { " class=\"active\"" } else { "" };
            format!(
                r#"<button type="submit" name="mode" value="{}"{}>{}</button>"#,
                mode.as_str(),
                class,
                mode.label()
            )
        })
        .collect();
    format!(
        r#"<form class="modes" method="post" action="/mode">{}</form>"#,
        buttons
    )
}

fn render_input(view: &ViewState) -> String {
    match view.mode {
        InputMode::Image => image_input(),
        InputMode::Pdf => pdf_input(),
        InputMode::Url => url_input(),
        InputMode::Text => text_input(&view.draft),
    }
}

fn image_input() -> String {
    file_input(
        InputMode::Image,
        "Drag a photo to this area, or click to capture / browse for a photo.",
    )
}

fn pdf_input() -> String {
    file_input(
        InputMode::Pdf,
        "Drag a PDF to this area, or click to browse for a PDF.",
    )
}

fn file_input(mode: InputMode, prompt: &str) -> String {
    format!(
        r#"<form method="post" action="/submit/{mode}" enctype="multipart/form-data">
                <label class="dropzone">
                    <span>{prompt}</span><br>
                    <input type="file" name="file" accept="{accept}" required>
                </label>
                <button class="submit" type="submit">Submit</button>
            </form>"#,
        mode = mode.as_str(),
        prompt = prompt,
        accept = mode.accept().unwrap_or_default(),
    )
}

fn url_input() -> String {
    r#"<form method="post" action="/submit/url">
                <input type="text" name="url" placeholder="https://www.example.com/proof.pdf">
                <button class="submit" type="submit">Submit</button>
            </form>
            <p class="hint">Note: the linked file must be a PDF or image.</p>"#
        .to_string()
}

fn text_input(draft: &str) -> String {
    format!(
        r#"<form method="post" action="/submit/text">
                <textarea name="text" placeholder="Assume that √2 is rational...">{}</textarea>
                <button class="submit" type="submit">Submit</button>
            </form>"#,
        escape_html(draft)
    )
}

fn render_result(score: f64) -> String {
    let certification = match Certification::for_score(score) {
        Some(c) => {
            let class = match c {
                Certification::Rigorous => "rigorous",
                Certification::Flimsy => "flimsy",
            };
            format!(
                r#"<div class="certification {}">{}</div>"#,
                class,
                c.label()
            )
        }
        None => String::new(),
    };

    format!(
        r#"<div class="card result">
            {gauge}
            <div class="score">{score}</div>
            <div class="verdict">{verdict}</div>
            {certification}
        </div>"#,
        gauge = gauge::render(score),
        score = format_score(score),
        verdict = escape_html(verdict(score)),
        certification = certification,
    )
}
