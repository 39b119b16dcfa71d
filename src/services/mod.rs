pub mod api_client;
pub mod toast;

pub use api_client::{ApiClient, ApiError, DoctorListResponse, UserProfileResponse};
