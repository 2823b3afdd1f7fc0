#![forbid(unsafe_code)]

pub mod app_services;
pub mod draw;
pub mod error;
pub mod progress_service;
pub mod session_flow;
pub mod tutor_service;

pub use britpass_core::Clock;

pub use app_services::AppServices;
pub use draw::draw_questions;
pub use error::{AppServicesError, ProgressServiceError, SessionFlowError, TutorError};
pub use progress_service::ProgressService;
pub use session_flow::{AdvanceResult, SessionFlowService};
pub use tutor_service::{TutorConfig, TutorService};
