use crate::verdict::Certification;

const CHAR_WIDTH: u32 = 7;
const PADDING: u32 = 12;

fn colors(certification: Certification) -> (&'static str, &'static str, &'static str) {
    // (text, fill, border)
    match certification {
        Certification::Rigorous => ("#155724", "#d4edda", "#c3e6cb"),
        Certification::Flimsy => ("#721c24", "#f8d7da", "#f5c6cb"),
    }
}

/// Two-segment pill: a neutral "Rigor" tag followed by the certification on
/// the matching alert colour.
pub fn render(certification: Certification) -> String {
    let (text, fill, border) = colors(certification);
    let tag = "Rigor";
    let value = certification.label();

    let tag_width = tag.len() as u32 * CHAR_WIDTH + PADDING;
    let value_width = value.len() as u32 * CHAR_WIDTH + PADDING;
    let width = tag_width + value_width;

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="22" viewBox="0 0 {width} 22" role="img" aria-label="{tag}: {value}">
  <title>{tag}: {value}</title>
  <rect x="0.5" y="0.5" width="{outer}" height="21" rx="4" fill="{fill}" stroke="{border}"/>
  <path d="M4.5 0.5 H{tag_width} V21.5 H4.5 A4 4 0 0 1 0.5 17.5 V4.5 A4 4 0 0 1 4.5 0.5 Z" fill="#e9ecef" stroke="{border}"/>
  <g font-family="-apple-system,Segoe UI,Helvetica,Arial,sans-serif" font-size="12" text-anchor="middle" dominant-baseline="central">
    <text x="{tag_mid}" y="11" fill="#495057">{tag}</text>
    <text x="{value_mid}" y="11" fill="{text}" font-weight="600">{value}</text>
  </g>
</svg>"##,
        outer = width - 1,
        tag_mid = tag_width / 2,
        value_mid = tag_width + value_width / 2,
    )
}
