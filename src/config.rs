// Mon Feb 9 2026 - Alex

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    pub site_base: String,
    pub max_depth: u32,
    pub max_nodes: usize,
    pub request_delay_ms: u64,
    pub enable_progress_bars: bool,
    pub enable_verbose_output: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            site_base: "https://en.wikipedia.org".to_string(),
            max_depth: 5,
            max_nodes: 10_000,
            request_delay_ms: 0,
            enable_progress_bars: true,
            enable_verbose_output: false,
        }
    }
}

impl SearchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_base(mut self, site_base: String) -> Self {
        self.site_base = site_base;
        self
    }

    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = max_nodes;
        self
    }

    pub fn with_request_delay_ms(mut self, delay: u64) -> Self {
        self.request_delay_ms = delay;
        self
    }

    pub fn with_progress_bars(mut self, enabled: bool) -> Self {
        self.enable_progress_bars = enabled;
        self
    }

    pub fn with_verbose_output(mut self, enabled: bool) -> Self {
        self.enable_verbose_output = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let config = SearchConfig::new()
            .with_max_depth(3)
            .with_max_nodes(500)
            .with_progress_bars(false);
        assert_eq!(config.max_depth, 3);
        assert_eq!(config.max_nodes, 500);
        assert!(!config.enable_progress_bars);
        assert_eq!(config.site_base, "https://en.wikipedia.org");
    }
}
