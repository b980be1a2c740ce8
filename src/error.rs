use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

#[derive(Clone, Copy, Debug, Eq, FromPrimitive, PartialEq)]
#[repr(u32)]
pub enum TwitterError {
    /// The tweet account already holds data or lamports
    SlotAlreadyInitialized,

    /// The declared author did not sign the transaction
    MissingAuthorSignature,

    /// Topic is longer than [`crate::state::MAX_TOPIC_CHARS`] characters
    TopicTooLong,

    /// Account data is not a valid tweet record
    MalformedRecord,
}

impl TwitterError {
    /// Maps a `ProgramError::Custom` code back to the error kind.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::from_u32(code)
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::SlotAlreadyInitialized => "The tweet account has already been initialized.",
            Self::MissingAuthorSignature => "The author must sign the transaction.",
            Self::TopicTooLong => "The provided topic should be 50 characters long maximum.",
            Self::MalformedRecord => "The account data is not a valid tweet.",
        }
    }
}

impl From<TwitterError> for pinocchio::program_error::ProgramError {
    fn from(e: TwitterError) -> Self {
        pinocchio::program_error::ProgramError::Custom(e as u32)
    }
}

impl From<TwitterError> for &'static str {
    fn from(e: TwitterError) -> Self {
        e.message()
    }
}
