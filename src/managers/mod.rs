// SkyCast state managers
// Managers own the stateful parts of the app: the persistent search-history
// lists and the UI-facing view-model over them.

pub mod history_repository;
pub mod history_view_model;
