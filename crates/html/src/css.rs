use slidedeck_style::{Arrangement, Theme};
use slidedeck_types::SlideSize;

const BASE_RULES: &str = r#"
@page { size: var(--slide-width) var(--slide-height); margin: 0; }
* { -webkit-print-color-adjust: exact !important; print-color-adjust: exact !important; }
body { background-color: #333; margin: 0; padding: 20px; font-family: var(--body-font); }
.slide-container { width: var(--slide-width); height: var(--slide-height); margin: 20px auto; overflow: hidden; box-shadow: 0 0 20px rgba(0,0,0,0.5); background-color: var(--background-color); }
.slide-content { display: flex; flex-direction: column; width: 100%; height: 100%; box-sizing: border-box; position: relative; padding: 0 20px; background-color: var(--background-color); background-size: cover; background-position: center; background-repeat: no-repeat; }
.slide-number { position: absolute; bottom: 0; right: 20px; font-size: 16px; color: var(--text-color); opacity: 0.7; }
h1 { font-size: 2.5em; margin: 20px 0; text-align: center; color: var(--heading1-color); font-family: var(--heading-font); }
h2 { font-size: 2em; padding: 15px 0; text-align: center; color: var(--heading2-color); font-family: var(--heading-font); }
h3 { font-size: 1.7em; text-align: center; color: var(--heading3-color); font-family: var(--heading-font); }
.content { display: flex; flex-direction: column; flex: 1; max-height: var(--slide-height); overflow: hidden; margin: 0 15px 30px 15px; }
.auto-sizing { display: flex; flex-direction: column; transform-origin: top left; flex: 1; }
.chunk { display: flex; flex: 1; max-width: 100%; max-height: 100%; }
.chunk-paragraph { flex: 1; flex-direction: column; text-align: justify; line-height: 1.5; font-size: 28px; hyphens: auto; color: var(--text-color); font-family: var(--body-font); }
.slide-content.centered { justify-content: center; align-items: center; text-align: center; }
.slide-content.centered h1, .slide-content.centered h2, .slide-content.centered h3 { width: 100%; }
.slide-content.centered .content { justify-content: center; align-items: center; }
nav.outline { color: #eee; font-family: var(--body-font); margin: 0 auto; width: var(--slide-width); }
nav.outline a { color: inherit; }
@media print {
  body { background-color: var(--background-color); }
  .slide-container { page-break-after: always; box-shadow: none; margin: 0; }
  nav.outline { display: none; }
}
"#;

fn rule(selector: &str, arrangement: Arrangement) -> String {
    let body: String = arrangement
        .declarations()
        .into_iter()
        .map(|(prop, value)| format!(" {}: {};", prop, value))
        .collect();
    format!("{} {{{} }}\n", selector, body)
}

/// The full document stylesheet for a theme and slide size.
pub fn stylesheet(theme: &Theme, size: SlideSize) -> String {
    let mut css = String::from(":root {\n");
    css.push_str(&format!("  --slide-width: {}px;\n", size.width));
    css.push_str(&format!("  --slide-height: {}px;\n", size.height));
    for (name, value) in theme.css_variables() {
        css.push_str(&format!("  {}: {};\n", name, value));
    }
    css.push('}');
    css.push_str(BASE_RULES);
    css.push_str(&rule(".chunk-vertical", Arrangement::stacked()));
    css.push_str(&rule(".chunk-horizontal", Arrangement::distributed()));
    css
}
