pub mod app;
pub mod appointment;
pub mod doctor_card;
pub mod doctors;
pub mod header;
pub mod top_doctors;

pub use app::App;
pub use appointment::Appointment;
pub use doctor_card::DoctorCard;
pub use doctors::Doctors;
pub use header::Header;
pub use top_doctors::TopDoctors;
