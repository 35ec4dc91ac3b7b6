// Viewer settings; memory only, reset on reload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerSettings {
    /// Log every recorded touch event to the browser console.
    pub console_logging: bool,
}
impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            console_logging: true,
        }
    }
}
