pub trait LocalePort: Send + Sync {
    /// Preferred locale of the environment, e.g. `ko-KR`.
    fn preferred_locale(&self) -> Option<String>;
}
