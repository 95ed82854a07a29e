use shared_types::{AppDefinition, AppKind};

pub fn core_apps() -> Vec<AppDefinition> {
    AppKind::ALL.into_iter().map(AppKind::definition).collect()
}
