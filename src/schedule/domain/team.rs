//! Team member aggregate and trade classification.

use super::{MemberId, ParseTradeError, ScheduleDomainError};
use serde::{Deserialize, Serialize};

/// Trade a team member works in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trade {
    /// Formwork and framing.
    Carpentry,
    /// Pours and finishing.
    Concrete,
    /// Wiring and fixtures.
    Electrical,
    /// Pipework and drainage.
    Plumbing,
    /// Heating, ventilation, and air conditioning.
    Hvac,
    /// Unclassified site labour.
    General,
}

impl Trade {
    /// Returns the canonical record representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Carpentry => "carpentry",
            Self::Concrete => "concrete",
            Self::Electrical => "electrical",
            Self::Plumbing => "plumbing",
            Self::Hvac => "hvac",
            Self::General => "general",
        }
    }
}

impl TryFrom<&str> for Trade {
    type Error = ParseTradeError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "carpentry" => Ok(Self::Carpentry),
            "concrete" => Ok(Self::Concrete),
            "electrical" => Ok(Self::Electrical),
            "plumbing" => Ok(Self::Plumbing),
            "hvac" => Ok(Self::Hvac),
            "general" => Ok(Self::General),
            _ => Err(ParseTradeError(value.to_owned())),
        }
    }
}

/// Parameter object for constructing a team member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMemberParams {
    /// Member identifier.
    pub id: MemberId,
    /// Display name of the member.
    pub name: String,
    /// Trade classification.
    pub trade: Trade,
    /// Contact email, if provided.
    pub email: Option<String>,
    /// Contact phone number, if provided.
    pub phone: Option<String>,
    /// Whether the member is currently on the project.
    pub active: bool,
}

/// A member of the project crew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    id: MemberId,
    name: String,
    trade: Trade,
    email: Option<String>,
    phone: Option<String>,
    active: bool,
}

impl TeamMember {
    /// Creates a validated team member. Contact details are validated at
    /// the data boundary with the `form` rules before construction.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleDomainError::BlankMemberName`] if the name is
    /// empty after trimming.
    pub fn new(params: TeamMemberParams) -> Result<Self, ScheduleDomainError> {
        if params.name.trim().is_empty() {
            return Err(ScheduleDomainError::BlankMemberName);
        }

        Ok(Self {
            id: params.id,
            name: params.name,
            trade: params.trade,
            email: params.email,
            phone: params.phone,
            active: params.active,
        })
    }

    /// Returns the member identifier.
    #[must_use]
    pub const fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the trade classification.
    #[must_use]
    pub const fn trade(&self) -> Trade {
        self.trade
    }

    /// Returns the contact email, if any.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Returns the contact phone number, if any.
    #[must_use]
    pub fn phone(&self) -> Option<&str> {
        self.phone.as_deref()
    }

    /// Returns `true` while the member is on the project.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }
}
