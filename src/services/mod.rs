//! Simulated back-office services
//!
//! Nothing here talks to a real system: bookings and dispatches succeed
//! after a fixed delay, and the medicine catalog is compiled in.

pub mod consultation;
pub mod medicine;
pub mod transport;

pub use consultation::{ConsultationConfirmation, ConsultationDesk, ConsultationRequest, FormField};
pub use medicine::{Availability, MedicineCatalog, MedicineRecord};
pub use transport::{TransportConfirmation, TransportDispatcher, TransportRequest};
