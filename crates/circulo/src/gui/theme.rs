use gtk::gdk;
use gtk::prelude::*;
use gtk4 as gtk;
use palette::Srgba;

pub struct ThemeColors {
    /// Used for buttons that do not set a colour.
    pub accent: Srgba<f64>,
}

impl ThemeColors {
    pub fn from_context(context: &gtk::StyleContext) -> Self {
        let accent = context
            .lookup_color("theme_selected_bg_color")
            .map(|c| Srgba::new(c.red() as f64, c.green() as f64, c.blue() as f64, 1.0))
            .unwrap_or(Srgba::new(0.24, 0.55, 0.91, 1.0));
        Self { accent }
    }
}

pub fn load_css() {
    let provider = gtk::CssProvider::new();
    let css_data = "
.circulo-window, .circulo-drawing-area {
    background: none;
    background-color: transparent;
}
";
    provider.load_from_data(css_data);

    if let Some(display) = gdk::Display::default() {
        gtk::style_context_add_provider_for_display(
            &display,
            &provider,
            gtk::STYLE_PROVIDER_PRIORITY_APPLICATION,
        );
    }
}
