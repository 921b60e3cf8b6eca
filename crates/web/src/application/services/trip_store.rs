//! Last planned trip, persisted on this device
//!
//! Three fixed keys hold the form, the itinerary text and the save time.
//! A new save overwrites them; nothing expires.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tripmate_domain::{common::parse_datetime_or, ItineraryContent, StoredTrip, TripFormData};
use tripmate_shared::extract_itinerary_text;

use crate::ports::outbound::{storage_keys, PlatformPort};

#[derive(Clone)]
pub struct TripStore {
    platform: Arc<dyn PlatformPort>,
}

impl TripStore {
    pub fn new(platform: Arc<dyn PlatformPort>) -> Self {
        Self { platform }
    }

    /// Persist a webhook response together with the form that produced it
    pub fn save(&self, form: &TripFormData, raw_response: &str, now: DateTime<Utc>) {
        match serde_json::to_string(form) {
            Ok(json) => self.platform.storage_save(storage_keys::TRIP_FORM_DATA, &json),
            Err(e) => tracing::error!(error = %e, "Failed to serialize trip form"),
        }
        self.platform.storage_save(
            storage_keys::TRIP_RESPONSE,
            &extract_itinerary_text(raw_response),
        );
        self.platform
            .storage_save(storage_keys::TRIP_TIMESTAMP, &now.to_rfc3339());
    }

    /// The saved trip, or `None` when no response is stored.
    ///
    /// A corrupt form or timestamp falls back to defaults rather than
    /// hiding the itinerary.
    pub fn load(&self) -> Option<StoredTrip> {
        let raw = self.platform.storage_load(storage_keys::TRIP_RESPONSE)?;

        let form = self
            .platform
            .storage_load(storage_keys::TRIP_FORM_DATA)
            .and_then(|json| {
                serde_json::from_str(&json)
                    .map_err(|e| tracing::warn!(error = %e, "Stored trip form is corrupt"))
                    .ok()
            })
            .unwrap_or_default();
        let saved_at = self
            .platform
            .storage_load(storage_keys::TRIP_TIMESTAMP)
            .map(|ts| parse_datetime_or(&ts, self.platform.now()))
            .unwrap_or_else(|| self.platform.now());

        Some(StoredTrip {
            form,
            response: ItineraryContent::from_stored(&raw),
            saved_at,
        })
    }

    /// Remove every key of the stored trip
    pub fn clear(&self) {
        for key in storage_keys::TRIP_KEYS {
            self.platform.storage_remove(key);
        }
    }
}
