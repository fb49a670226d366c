// Wed Feb 11 2026 - Alex

use colored::*;

pub struct Banner {
    title: String,
    subtitle: Option<String>,
    version: Option<String>,
    width: usize,
}

impl Banner {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            subtitle: None,
            version: None,
            width: 60,
        }
    }

    pub fn with_subtitle(mut self, subtitle: &str) -> Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("+{}+", "=".repeat(self.width - 2)));
        lines.push(self.centered(&self.title));
        if let Some(subtitle) = &self.subtitle {
            lines.push(self.centered(subtitle));
        }
        if let Some(version) = &self.version {
            lines.push(self.centered(&format!("v{}", version)));
        }
        lines.push(format!("+{}+", "=".repeat(self.width - 2)));
        lines.join("\n")
    }

    pub fn print(&self) {
        println!("{}", self.render().cyan().bold());
        println!();
    }

    pub fn print_default() {
        Banner::new("WIKI ROUTE FINDER")
            .with_subtitle("bidirectional link-graph search")
            .with_version(env!("CARGO_PKG_VERSION"))
            .print();
    }

    fn centered(&self, text: &str) -> String {
        let inner = self.width - 2;
        let text: String = text.chars().take(inner).collect();
        let pad = inner - text.chars().count();
        let left = pad / 2;
        format!("|{}{}{}|", " ".repeat(left), text, " ".repeat(pad - left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_shape() {
        let banner = Banner::new("TEST").with_subtitle("sub").with_width(20);
        let rendered = banner.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.chars().count() == 20));
        assert!(lines[1].contains("TEST"));
        assert!(lines[2].contains("sub"));
    }
}
