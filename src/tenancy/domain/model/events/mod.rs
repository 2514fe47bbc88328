pub mod record_change_audited_event;
