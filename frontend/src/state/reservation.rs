use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PartySize {
    Two,
    Four,
    Six,
    EightPlus,
}

impl PartySize {
    pub const ALL: [PartySize; 4] = [PartySize::Two, PartySize::Four, PartySize::Six, PartySize::EightPlus];

    pub fn label(self) -> &'static str {
        match self {
            PartySize::Two => "2 Guests",
            PartySize::Four => "4 Guests",
            PartySize::Six => "6 Guests",
            PartySize::EightPlus => "8+ Guests",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            PartySize::Two => "2",
            PartySize::Four => "4",
            PartySize::Six => "6",
            PartySize::EightPlus => "8+",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.value() == value)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ReservationError {
    #[error("Please tell us your name.")]
    MissingName,
    #[error("Please enter a valid email address.")]
    InvalidEmail,
    #[error("Please pick a date.")]
    MissingDate,
    #[error("Please pick a valid date.")]
    InvalidDate,
    #[error("Please pick a date from today onwards.")]
    DateInPast,
    #[error("Please choose a party size.")]
    MissingPartySize,
}

/// Raw contents of the reservation form, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ReservationDraft {
    pub name: String,
    pub email: String,
    /// `YYYY-MM-DD`, the format produced by `<input type="date">`.
    pub date: String,
    pub party_size: Option<PartySize>,
}

/// A draft that passed validation.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub date: NaiveDate,
    pub party_size: PartySize,
}

impl ReservationDraft {
    pub fn validate(&self, today: NaiveDate) -> Result<ReservationRequest, ReservationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ReservationError::MissingName);
        }
        let email = self.email.trim();
        if !looks_like_email(email) {
            return Err(ReservationError::InvalidEmail);
        }
        let raw_date = self.date.trim();
        if raw_date.is_empty() {
            return Err(ReservationError::MissingDate);
        }
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d")
            .map_err(|_| ReservationError::InvalidDate)?;
        if date < today {
            return Err(ReservationError::DateInPast);
        }
        let party_size = self.party_size.ok_or(ReservationError::MissingPartySize)?;
        Ok(ReservationRequest {
            name: name.to_string(),
            email: email.to_string(),
            date,
            party_size,
        })
    }
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    }
}

/// Local sink for validated reservations. Nothing leaves the browser.
pub fn record_request(request: &ReservationRequest) {
    match serde_json::to_string(request) {
        Ok(json) => log::info!("reservation request (not transmitted): {}", json),
        Err(e) => log::error!("failed to serialize reservation request: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn filled() -> ReservationDraft {
        ReservationDraft {
            name: " Sofia Rossi ".to_string(),
            email: "sofia@example.it".to_string(),
            date: "2025-06-14".to_string(),
            party_size: Some(PartySize::Four),
        }
    }

    #[test]
    fn complete_draft_validates_and_trims() {
        let request = filled().validate(today()).unwrap();
        assert_eq!(request.name, "Sofia Rossi");
        assert_eq!(request.date, NaiveDate::from_ymd_opt(2025, 6, 14).unwrap());
        assert_eq!(request.party_size, PartySize::Four);
    }

    #[test]
    fn each_missing_field_is_reported() {
        let mut draft = filled();
        draft.name = "   ".to_string();
        assert_eq!(draft.validate(today()), Err(ReservationError::MissingName));

        let mut draft = filled();
        draft.date.clear();
        assert_eq!(draft.validate(today()), Err(ReservationError::MissingDate));

        let mut draft = filled();
        draft.party_size = None;
        assert_eq!(draft.validate(today()), Err(ReservationError::MissingPartySize));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        for bad in ["", "sofia", "@example.it", "sofia@", "sofia@example", "sofia@example.", "a@b@c.it"] {
            let mut draft = filled();
            draft.email = bad.to_string();
            assert_eq!(draft.validate(today()), Err(ReservationError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn dates_before_today_are_rejected_but_today_is_fine() {
        let mut draft = filled();
        draft.date = "2025-05-31".to_string();
        assert_eq!(draft.validate(today()), Err(ReservationError::DateInPast));
        draft.date = "2025-06-01".to_string();
        assert!(draft.validate(today()).is_ok());
        draft.date = "14/06/2025".to_string();
        assert_eq!(draft.validate(today()), Err(ReservationError::InvalidDate));
    }

    #[test]
    fn party_sizes_parse_from_select_values() {
        for size in PartySize::ALL {
            assert_eq!(PartySize::from_value(size.value()), Some(size));
        }
        assert_eq!(PartySize::from_value(""), None);
    }
}
