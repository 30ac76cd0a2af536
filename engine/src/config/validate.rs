/// Checked by `ConfigManager` on every load and before every save, so an
/// invalid file is never cached and never written.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
