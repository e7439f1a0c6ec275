use pct_launcher::config::{LauncherConfig, RawLauncherConfig};

/// Builder for `LauncherConfig` to simplify test setup.
pub struct LauncherConfigBuilder {
    config: RawLauncherConfig,
}

impl LauncherConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RawLauncherConfig::default(),
        }
    }

    pub fn app_name(mut self, name: &str) -> Self {
        self.config.app_name = name.to_string();
        self
    }

    pub fn interpreter(mut self, program: &str) -> Self {
        self.config.interpreter = program.to_string();
        self
    }

    pub fn companion(mut self, file: &str) -> Self {
        self.config.companion = file.to_string();
        self
    }

    pub fn pause_on_error(mut self, val: bool) -> Self {
        self.config.pause_on_error = val;
        self
    }

    pub fn raw(self) -> RawLauncherConfig {
        self.config
    }

    pub fn build(self) -> LauncherConfig {
        LauncherConfig::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for LauncherConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
