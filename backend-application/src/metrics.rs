use std::sync::atomic::{AtomicU64, Ordering};

use backend_domain::EventError;

#[derive(Debug, Default)]
pub struct Metrics {
    events_created: AtomicU64,
    rsvps: AtomicU64,
    attendance_marked: AtomicU64,
    rejected_invalid_date: AtomicU64,
    rejected_not_found: AtomicU64,
    rejected_duplicate_rsvp: AtomicU64,
    rejected_attendance: AtomicU64,
    storage_errors: AtomicU64,
}

impl Metrics {
    pub fn record_event_created(&self) {
        self.events_created.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rsvp(&self) {
        self.rsvps.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_attendance(&self) {
        self.attendance_marked.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_rejection(&self, err: &EventError) {
        let counter = match err {
            EventError::InvalidDateFormat(_) => &self.rejected_invalid_date,
            EventError::EventNotFound(_) => &self.rejected_not_found,
            EventError::DuplicateRsvp { .. } => &self.rejected_duplicate_rsvp,
            EventError::AttendanceRejected { .. } => &self.rejected_attendance,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_storage_error(&self) {
        self.storage_errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn render_prometheus(&self) -> String {
        let created = self.events_created.load(Ordering::Relaxed);
        let rsvps = self.rsvps.load(Ordering::Relaxed);
        let attendance = self.attendance_marked.load(Ordering::Relaxed);
        let invalid_date = self.rejected_invalid_date.load(Ordering::Relaxed);
        let not_found = self.rejected_not_found.load(Ordering::Relaxed);
        let duplicate = self.rejected_duplicate_rsvp.load(Ordering::Relaxed);
        let rejected_attendance = self.rejected_attendance.load(Ordering::Relaxed);
        let storage_errors = self.storage_errors.load(Ordering::Relaxed);

        format!(
            "# TYPE eventdesk_events_created_total counter\n\
eventdesk_events_created_total {}\n\
# TYPE eventdesk_rsvps_total counter\n\
eventdesk_rsvps_total {}\n\
# TYPE eventdesk_attendance_marked_total counter\n\
eventdesk_attendance_marked_total {}\n\
# TYPE eventdesk_rejections_total counter\n\
eventdesk_rejections_total{{reason=\"invalid_date\"}} {}\n\
eventdesk_rejections_total{{reason=\"event_not_found\"}} {}\n\
eventdesk_rejections_total{{reason=\"duplicate_rsvp\"}} {}\n\
eventdesk_rejections_total{{reason=\"attendance_rejected\"}} {}\n\
# TYPE eventdesk_storage_errors_total counter\n\
eventdesk_storage_errors_total {}\n",
            created,
            rsvps,
            attendance,
            invalid_date,
            not_found,
            duplicate,
            rejected_attendance,
            storage_errors
        )
    }
}
