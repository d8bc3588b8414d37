#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Show,
    Hide,
    Toggle,
    ConfigReload,
}
