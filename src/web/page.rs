//! HTML for the capture, result and error pages.
//!
//! Pages are plain server-rendered HTML.  Photos and audio are embedded as
//! `data:` URLs so nothing from a request has to outlive it on disk.

use base64::Engine;

use crate::pipeline::AdvisoryReport;

const TITLE: &str = "🌾 AI Krishi Assistant - Moisture & Cyclone Predictor";

const STYLE: &str = "\
body { font-family: sans-serif; max-width: 720px; margin: 0 auto; padding: 1rem; }
img { width: 100%; border-radius: 6px; }
figure { margin: 1rem 0; }
figcaption { color: #555; font-size: 0.9rem; }
.advice { white-space: pre-line; background: #f3f8ee; padding: 0.75rem; border-radius: 6px; }
.error { color: #a00; }
button { font-size: 1.1rem; padding: 0.5rem 1rem; }";

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

/// Two-step capture form posting to `/advise`.
pub fn capture_page() -> String {
    layout(
        "<form method=\"post\" action=\"/advise\" enctype=\"multipart/form-data\">
<h2>Step 1: खेत की मिट्टी (Nostoc) की फोटो खींचें</h2>
<label>कृपया Nostoc वाली मिट्टी की फोटो लें<br>
<input type=\"file\" name=\"soil\" accept=\"image/*\" capture=\"environment\" required></label>
<h2>Step 2: आकाश की फोटो खींचें</h2>
<label>कृपया आकाश की फोटो लें<br>
<input type=\"file\" name=\"sky\" accept=\"image/*\" capture=\"environment\" required></label>
<p><button type=\"submit\">सलाह प्राप्त करें</button></p>
</form>",
    )
}

/// Both photos, both labels, the advisory and an inline audio player.
pub fn result_page(report: &AdvisoryReport, soil: &[u8], sky: &[u8]) -> String {
    let body = format!(
        "<figure><img src=\"{soil_src}\" alt=\"soil\"><figcaption>Nostoc Image (Soil Condition)</figcaption></figure>
<figure><img src=\"{sky_src}\" alt=\"sky\"><figcaption>Sky Image (Cloud Condition)</figcaption></figure>
<p>📊 Moisture Level: <strong>{moisture}</strong></p>
<p>☁️ Cloud Type: <strong>{cloud}</strong></p>
<p>🧑‍🌾 <strong>किसान सलाह:</strong></p>
<p class=\"advice\">{advice}</p>
<audio controls src=\"{audio_src}\"></audio>
<p><a href=\"/\">नई जाँच करें</a></p>",
        soil_src = image_data_url(soil),
        sky_src = image_data_url(sky),
        moisture = escape_html(report.moisture.label()),
        cloud = escape_html(report.cloud.label()),
        advice = escape_html(&report.advice),
        audio_src = report.audio_data_url(),
    );
    layout(&body)
}

/// A failed run: the message and a way back to the form.
pub fn error_page(message: &str) -> String {
    layout(&format!(
        "<p class=\"error\">{}</p>\n<p><a href=\"/\">फिर से प्रयास करें</a></p>",
        escape_html(message)
    ))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn layout(body: &str) -> String {
    format!(
        "<!DOCTYPE html>
<html lang=\"hi\">
<head>
<meta charset=\"utf-8\">
<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
<title>{TITLE}</title>
<style>
{STYLE}
</style>
</head>
<body>
<h1>{TITLE}</h1>
{body}
</body>
</html>
"
    )
}

/// Embed an uploaded photo, labelled with the MIME type sniffed from its
/// leading bytes.
pub fn image_data_url(bytes: &[u8]) -> String {
    let mime = image::guess_format(bytes)
        .map(|f| f.to_mime_type())
        .unwrap_or("application/octet-stream");
    format!(
        "data:{mime};base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
