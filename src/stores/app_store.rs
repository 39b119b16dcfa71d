// ============================================================================
// APP STORE - Estado global compartido (use_reducer, sin singletons)
// ============================================================================
// Contenedor único de escritura: las vistas solo leen y despachan acciones
// a través del contexto. El reducer es puro.
// ============================================================================

use std::rc::Rc;

use yew::Reducible;

use crate::models::{Doctor, UserProfile};

/// Ciclo de vida explícito de un fetch. Distingue "lista vacía" de
/// "todavía no cargada".
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    NotStarted,
    Loading,
    Loaded(T),
    Failed,
}

impl<T> FetchState<T> {
    /// true mientras no haya llegado ningún resultado
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::NotStarted | FetchState::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            FetchState::Loaded(value) => Some(value),
            _ => None,
        }
    }
}

/// Estado global - Compatible con use_reducer
#[derive(Debug, Clone, PartialEq)]
pub struct AppStore {
    pub doctors: FetchState<Vec<Doctor>>,
    pub token: Option<String>,
    pub user_data: UserProfile,
}

impl AppStore {
    /// Estado inicial: token restaurado del storage, perfil en blanco
    pub fn with_token(token: Option<String>) -> Self {
        Self {
            doctors: FetchState::NotStarted,
            token,
            user_data: UserProfile::default(),
        }
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::with_token(None)
    }
}

pub enum AppAction {
    DoctorsLoading,
    DoctorsLoaded(Vec<Doctor>),
    DoctorsFailed,
    SetToken(Option<String>),
    SetUserData(UserProfile),
    ResetUserData,
}

impl Reducible for AppStore {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: AppAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AppAction::DoctorsLoading => {
                // Un refetch manual no descarta la lista ya cargada
                if !matches!(next.doctors, FetchState::Loaded(_)) {
                    next.doctors = FetchState::Loading;
                }
            }
            AppAction::DoctorsLoaded(doctors) => {
                next.doctors = FetchState::Loaded(doctors);
            }
            AppAction::DoctorsFailed => {
                // Fallo: la lista previa queda intacta
                if !matches!(next.doctors, FetchState::Loaded(_)) {
                    next.doctors = FetchState::Failed;
                }
            }
            AppAction::SetToken(token) => {
                next.token = token;
            }
            AppAction::SetUserData(user_data) => {
                next.user_data = user_data;
            }
            AppAction::ResetUserData => {
                next.user_data = UserProfile::default();
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doctor(id: &str, speciality: &str) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            speciality: speciality.to_string(),
            image: String::new(),
            fees: None,
        }
    }

    fn apply(store: AppStore, action: AppAction) -> AppStore {
        (*Rc::new(store).reduce(action)).clone()
    }

    #[test]
    fn initial_fetch_moves_to_loading() {
        let store = apply(AppStore::default(), AppAction::DoctorsLoading);
        assert_eq!(store.doctors, FetchState::Loading);
        assert!(store.doctors.is_loading());
    }

    #[test]
    fn loaded_list_replaces_state_wholesale() {
        let doctors = vec![doctor("d1", "Dermatologist"), doctor("d2", "Neurologist")];
        let store = apply(AppStore::default(), AppAction::DoctorsLoaded(doctors.clone()));
        assert_eq!(store.doctors, FetchState::Loaded(doctors));
        assert!(!store.doctors.is_loading());
    }

    #[test]
    fn empty_loaded_list_is_not_loading() {
        let store = apply(AppStore::default(), AppAction::DoctorsLoaded(vec![]));
        assert_eq!(store.doctors, FetchState::Loaded(vec![]));
        assert!(!store.doctors.is_loading());
    }

    #[test]
    fn failure_before_first_load_moves_to_failed() {
        let store = apply(AppStore::default(), AppAction::DoctorsLoading);
        let store = apply(store, AppAction::DoctorsFailed);
        assert_eq!(store.doctors, FetchState::Failed);
    }

    #[test]
    fn refetch_failure_keeps_previous_list() {
        let doctors = vec![doctor("d1", "Dermatologist")];
        let store = apply(AppStore::default(), AppAction::DoctorsLoaded(doctors.clone()));
        let store = apply(store, AppAction::DoctorsLoading);
        let store = apply(store, AppAction::DoctorsFailed);
        assert_eq!(store.doctors, FetchState::Loaded(doctors));
    }

    #[test]
    fn set_token_only_touches_token() {
        let store = apply(
            AppStore::default(),
            AppAction::SetToken(Some("abc".to_string())),
        );
        assert_eq!(store.token.as_deref(), Some("abc"));
        assert_eq!(store.doctors, FetchState::NotStarted);
        assert_eq!(store.user_data, UserProfile::default());
    }

    #[test]
    fn reset_user_data_restores_blank_record() {
        let profile = UserProfile {
            name: "Jane".to_string(),
            ..UserProfile::default()
        };
        let store = apply(AppStore::default(), AppAction::SetUserData(profile.clone()));
        assert_eq!(store.user_data, profile);

        let store = apply(store, AppAction::ResetUserData);
        assert_eq!(store.user_data, UserProfile::default());
    }
}
