// ============================================================================
// USE APP STATE HOOK - Estado global + operaciones de fetch
// ============================================================================
// Hook nativo de Yew con use_reducer. Lo crea una sola vez el
// AppContextProvider; las vistas consumen el handle via use_context.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use yew::prelude::*;

use crate::config::{CONFIG, CURRENCY_SYMBOL};
use crate::models::UserProfile;
use crate::services::api_client::ApiClient;
use crate::services::toast;
use crate::stores::{AppAction, AppStore};
use crate::utils::sequence::RequestSequence;
use crate::utils::storage;

const MISSING_BACKEND_URL_MESSAGE: &str = "Backend URL is missing. Please check the .env file.";

/// Sincronización del storage persistido ante un cambio de token
#[derive(Debug, PartialEq)]
enum StorageSync {
    Write(String),
    Remove,
}

/// Qué hacer con el perfil tras un cambio de token
#[derive(Debug, PartialEq)]
enum ProfileFollowUp {
    Fetch(String),
    Reset,
}

/// Plan puro de un cambio de token: token presente escribe el storage y
/// dispara el fetch de perfil; ausente remueve la clave y resetea el perfil
/// sin tocar la red.
fn plan_token_change(token: &Option<String>) -> (StorageSync, ProfileFollowUp) {
    match token {
        Some(value) => (
            StorageSync::Write(value.clone()),
            ProfileFollowUp::Fetch(value.clone()),
        ),
        None => (StorageSync::Remove, ProfileFollowUp::Reset),
    }
}

/// Handle compartido via ContextProvider: estado de solo lectura para las
/// vistas, mutaciones solo a través de los callbacks expuestos.
#[derive(Clone, PartialEq)]
pub struct UseAppContextHandle {
    pub store: UseReducerHandle<AppStore>,
    /// Recargar la lista de médicos bajo demanda
    pub fetch_doctors: Callback<()>,
    /// Recargar el perfil; no-op si no hay token
    pub load_user_profile: Callback<()>,
    /// Actualizar el token: sincroniza el storage y dispara el fetch de
    /// perfil (token presente) o el reseteo al registro en blanco (ausente)
    pub set_token: Callback<Option<String>>,
    pub set_user_data: Callback<UserProfile>,
    pub currency_symbol: &'static str,
    pub backend_url: Option<&'static str>,
}

#[hook]
pub fn use_app_state() -> UseAppContextHandle {
    // Token restaurado del storage persistido; perfil en blanco hasta el fetch
    let store = use_reducer(|| AppStore::with_token(storage::get_item(storage::TOKEN_KEY)));

    // Secuencias por fetch lógico: solo se aplica la última petición emitida
    let doctors_seq = use_mut_ref(RequestSequence::new);
    let profile_seq = use_mut_ref(RequestSequence::new);

    let fetch_doctors = {
        let store = store.clone();
        let doctors_seq = doctors_seq.clone();
        Callback::from(move |_| {
            let Some(backend_url) = CONFIG.backend_url.as_deref() else {
                log::error!("❌ BACKEND_URL no está definida, fetch de médicos omitido");
                toast::toast_error(MISSING_BACKEND_URL_MESSAGE);
                return;
            };

            let store = store.clone();
            let seq_ref = doctors_seq.clone();
            let seq = seq_ref.borrow().begin();
            let client = ApiClient::new(backend_url);

            store.dispatch(AppAction::DoctorsLoading);

            wasm_bindgen_futures::spawn_local(async move {
                let result = client.get_doctor_list().await;

                if !seq_ref.borrow().is_current(seq) {
                    log::warn!("⚠️ Respuesta de médicos obsoleta (seq {}), descartada", seq);
                    return;
                }

                match result {
                    Ok(response) if response.success => {
                        log::info!("✅ Lista de médicos recibida: {} entradas", response.doctors.len());
                        store.dispatch(AppAction::DoctorsLoaded(response.doctors));
                    }
                    Ok(response) => {
                        let message = response
                            .message
                            .unwrap_or_else(|| "Unknown server error".to_string());
                        log::error!("❌ El backend rechazó la lista de médicos: {}", message);
                        toast::toast_error(&message);
                        store.dispatch(AppAction::DoctorsFailed);
                    }
                    Err(err) => {
                        log::error!("❌ Error cargando la lista de médicos: {}", err);
                        toast::toast_error(&err.to_string());
                        store.dispatch(AppAction::DoctorsFailed);
                    }
                }
            });
        })
    };

    let load_user_profile = {
        let store = store.clone();
        let profile_seq = profile_seq.clone();
        Callback::from(move |_| {
            // Sin token no hay perfil que cargar
            let Some(token) = (*store).token.clone() else {
                return;
            };
            fetch_profile(store.clone(), profile_seq.clone(), token);
        })
    };

    let set_token = {
        let store = store.clone();
        let profile_seq = profile_seq.clone();
        Callback::from(move |token: Option<String>| {
            // Invariante: token y storage persistido siempre sincronizados
            let (sync, follow_up) = plan_token_change(&token);
            let sync_result = match &sync {
                StorageSync::Write(value) => storage::set_item(storage::TOKEN_KEY, value),
                StorageSync::Remove => storage::remove_item(storage::TOKEN_KEY),
            };
            if let Err(err) = sync_result {
                log::error!("❌ {}", err);
            }

            store.dispatch(AppAction::SetToken(token));

            match follow_up {
                ProfileFollowUp::Fetch(value) => {
                    fetch_profile(store.clone(), profile_seq.clone(), value)
                }
                ProfileFollowUp::Reset => {
                    // Logout: descartar cualquier fetch de perfil en vuelo
                    // y volver al registro en blanco, sin tocar la red
                    profile_seq.borrow().invalidate();
                    store.dispatch(AppAction::ResetUserData);
                }
            }
        })
    };

    let set_user_data = {
        let store = store.clone();
        Callback::from(move |user_data: UserProfile| {
            store.dispatch(AppAction::SetUserData(user_data));
        })
    };

    // Carga inicial: exactamente un fetch de médicos, salvo error de
    // configuración (notificado una vez, sin fetch). Si había token
    // persistido, también se carga el perfil.
    {
        let fetch_doctors = fetch_doctors.clone();
        let load_user_profile = load_user_profile.clone();
        let has_token = (*store).token.is_some();
        use_effect_with((), move |_| {
            if CONFIG.backend_url.is_none() {
                log::error!("❌ ERROR: BACKEND_URL no está definida. Revisa tu archivo .env");
                toast::toast_error(MISSING_BACKEND_URL_MESSAGE);
            } else {
                fetch_doctors.emit(());
                if has_token {
                    load_user_profile.emit(());
                }
            }
            || ()
        });
    }

    UseAppContextHandle {
        store,
        fetch_doctors,
        load_user_profile,
        set_token,
        set_user_data,
        currency_symbol: CURRENCY_SYMBOL,
        backend_url: CONFIG.backend_url.as_deref(),
    }
}

/// Fetch de perfil autenticado, protegido por secuencia: cambios rápidos de
/// token pueden dejar respuestas en vuelo que ya no deben aplicarse.
fn fetch_profile(
    store: UseReducerHandle<AppStore>,
    seq_ref: Rc<RefCell<RequestSequence>>,
    token: String,
) {
    let Some(backend_url) = CONFIG.backend_url.as_deref() else {
        log::error!("❌ BACKEND_URL no está definida, fetch de perfil omitido");
        toast::toast_error(MISSING_BACKEND_URL_MESSAGE);
        return;
    };

    let seq = seq_ref.borrow().begin();
    let client = ApiClient::new(backend_url);

    wasm_bindgen_futures::spawn_local(async move {
        let result = client.get_user_profile(&token).await;

        if !seq_ref.borrow().is_current(seq) {
            log::warn!("⚠️ Respuesta de perfil obsoleta (seq {}), descartada", seq);
            return;
        }

        match result {
            Ok(response) if response.success => match response.user_data {
                Some(user_data) => {
                    log::info!("✅ Perfil de usuario recibido: {}", user_data.name);
                    store.dispatch(AppAction::SetUserData(user_data));
                }
                None => {
                    log::error!("❌ Respuesta de perfil sin userData, estado sin cambios");
                }
            },
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Unknown server error".to_string());
                log::error!("❌ El backend rechazó el perfil: {}", message);
                toast::toast_error(&message);
            }
            Err(err) => {
                log::error!("❌ Error cargando el perfil: {}", err);
                toast::toast_error(&err.to_string());
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn present_token_writes_storage_and_fetches_profile() {
        let token = Some("abc123".to_string());
        let (sync, follow_up) = plan_token_change(&token);
        assert_eq!(sync, StorageSync::Write("abc123".to_string()));
        assert_eq!(follow_up, ProfileFollowUp::Fetch("abc123".to_string()));
    }

    #[test]
    fn absent_token_removes_storage_and_resets_profile() {
        let (sync, follow_up) = plan_token_change(&None);
        assert_eq!(sync, StorageSync::Remove);
        // Reset: nunca un fetch, el logout no toca la red
        assert_eq!(follow_up, ProfileFollowUp::Reset);
    }

    #[test]
    fn empty_string_token_is_treated_as_present() {
        // El token es opaco: su contenido no se inspecciona
        let (sync, follow_up) = plan_token_change(&Some(String::new()));
        assert_eq!(sync, StorageSync::Write(String::new()));
        assert_eq!(follow_up, ProfileFollowUp::Fetch(String::new()));
    }
}
