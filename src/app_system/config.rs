/// Settings fixed at process start.
#[derive(Debug, Clone)]
pub struct SystemConfig {
    /// Capacity of the inventory service's request channel.
    pub buffer_size: usize,
    /// Log filter used when `RUST_LOG` is unset.
    pub default_log_level: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            buffer_size: 32,
            // the menu owns stdout; keep stderr quiet unless asked
            default_log_level: "warn".to_string(),
        }
    }
}
