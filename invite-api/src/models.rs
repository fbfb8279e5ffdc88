use serde::Deserialize;

/// An invitee, as listed on the homepage.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct Friend {
    pub id: String,
    /// Display name used to personalize the invitation
    pub name: String,
}

/// Ceremony metadata shared by every invitation.
#[derive(Debug, PartialEq, Eq, Clone, Deserialize)]
pub struct GraduationInfo {
    pub graduate_name: String,
    pub major: String,
    /// Ceremony date as the backend formats it, e.g. "19/08/2025"
    pub date: String,
    /// Ceremony time as the backend formats it, e.g. "14:00"
    pub time: String,
    /// Venue name
    pub location: String,
    /// Full street address of the venue
    pub address: String,
}

impl GraduationInfo {
    /// Graduate name as printed on the card.
    pub fn headline_name(&self) -> String {
        self.graduate_name.to_uppercase()
    }

    /// Major as printed on the card.
    pub fn headline_major(&self) -> String {
        self.major.to_uppercase()
    }

    /// "{time} - {date}"
    pub fn schedule(&self) -> String {
        format!("{} - {}", self.time, self.date)
    }
}

/// Everything the ceremony page needs: the invitee and the ceremony itself.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct CeremonyDetails {
    pub friend: Friend,
    pub info: GraduationInfo,
}
